//! asc2netcdf command-line entry point.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use asc2netcdf::{convert, prepare, Args, ConvertError, LogFormat};

fn main() {
    let args = match Args::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    init_tracing(&args.log_level, args.log_format);

    if let Err(e) = run(&args) {
        eprintln!("asc2netcdf: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn run(args: &Args) -> Result<()> {
    netcdf_writer::silence_hdf5_errors();
    let options = args.convert_options();

    if args.dry_run {
        let (_, summary) = prepare(&args.input_file, &options).map_err(with_stage)?;
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", json);
        info!("Dry run completed, no output written");
        return Ok(());
    }

    convert(&args.input_file, &args.output_file, &options).map_err(with_stage)?;
    Ok(())
}

/// Keeps the source chain so `{:#}` prints every cause after the stage.
fn with_stage(e: ConvertError) -> anyhow::Error {
    let stage = e.stage();
    anyhow::Error::new(e).context(format!("{} stage", stage))
}
