//! Command-line arguments.

use std::ffi::OsString;
use std::path::PathBuf;

use ascii_grid::RowCountPolicy;
use clap::{Parser, ValueEnum};
use grid_common::DEFAULT_VARIABLE_NAME;

use crate::convert::ConvertOptions;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "asc2netcdf")]
#[command(about = "Convert an ESRI ASCII grid (.asc) to a netCDF file")]
pub struct Args {
    /// Path to the input ASCII grid file
    pub input_file: PathBuf,

    /// Path to the output netCDF file
    pub output_file: PathBuf,

    /// Name of the variable in the netCDF file
    #[arg(long = "variable_name", visible_alias = "var", default_value = DEFAULT_VARIABLE_NAME)]
    pub variable_name: String,

    /// Accept a data row count that differs from the header's nrows
    #[arg(long, env = "ASC2NETCDF_LENIENT_ROWS")]
    pub lenient_rows: bool,

    /// Global title attribute
    #[arg(long)]
    pub title: Option<String>,

    /// Units of the data variable
    #[arg(long)]
    pub units: Option<String>,

    /// Long name of the data variable
    #[arg(long)]
    pub long_name: Option<String>,

    /// Deflate level for the data variable (1-9)
    #[arg(long, env = "ASC2NETCDF_DEFLATE", value_parser = clap::value_parser!(i32).range(1..=9))]
    pub deflate: Option<i32>,

    /// Parse and validate the input, print a JSON summary, write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Log level
    #[arg(long, default_value = "info", env = "ASC2NETCDF_LOG_LEVEL")]
    pub log_level: String,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "ASC2NETCDF_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl Args {
    /// Parse arguments, accepting the single-dash `-var` flag.
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_legacy_flags(args))
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            variable_name: self.variable_name.clone(),
            row_policy: if self.lenient_rows {
                RowCountPolicy::Lenient
            } else {
                RowCountPolicy::Strict
            },
            title: self.title.clone(),
            units: self.units.clone(),
            long_name: self.long_name.clone(),
            deflate_level: self.deflate,
        }
    }
}

/// Rewrite `-var` (and `-var=NAME`) to `--var`, which clap understands.
///
/// Everything after a bare `--` is passed through unchanged.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.to_str() {
                Some("-var") => OsString::from("--var"),
                Some(s) if s.starts_with("-var=") => OsString::from(format!("-{}", s)),
                _ => arg,
            }
        })
        .collect()
}
