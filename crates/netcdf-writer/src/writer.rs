//! Writing a [`LabeledArray`] to a CF netCDF-4 file.

use std::path::Path;

use grid_common::{LabeledArray, LATITUDE, LONGITUDE};
use tracing::{debug, info};

use crate::error::NetCdfResult;
use crate::native::silence_hdf5_errors;

/// CF conventions version written to the `Conventions` global attribute.
pub const CF_CONVENTIONS: &str = "CF-1.8";

/// Optional metadata and storage settings for the output file.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Global `title`
    pub title: Option<String>,
    /// Global `source`, usually the input file name
    pub source: Option<String>,
    /// Global `history` line
    pub history: Option<String>,
    /// Data variable `units`
    pub units: Option<String>,
    /// Data variable `long_name`
    pub long_name: Option<String>,
    /// Original no-data sentinel, recorded as a global attribute
    pub nodata_value: Option<f64>,
    /// Deflate level (1-9) for the data variable; `None` stores it uncompressed
    pub deflate_level: Option<i32>,
}

/// Write `array` to `path`.
///
/// The file is built under a temporary name in the destination directory
/// and renamed into place once libnetcdf has closed it. On error the
/// temporary file is removed and `path` is left untouched.
pub fn write_labeled_array<P: AsRef<Path>>(
    path: P,
    array: &LabeledArray,
    options: &WriteOptions,
) -> NetCdfResult<()> {
    silence_hdf5_errors();

    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".asc2netcdf-").suffix(".nc.tmp");
    // Same mode as a plainly created file; the umask still applies.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let temp = builder.tempfile_in(dir)?.into_temp_path();
    debug!(temp = %temp.display(), "Writing NetCDF to temp file");

    write_netcdf(&temp, array, options)?;

    temp.persist(path).map_err(|e| e.error)?;

    let (rows, cols) = array.shape();
    info!(
        path = %path.display(),
        variable = array.name(),
        rows = rows,
        cols = cols,
        missing = array.missing_count(),
        "Wrote NetCDF file"
    );
    Ok(())
}

fn write_netcdf(path: &Path, array: &LabeledArray, options: &WriteOptions) -> NetCdfResult<()> {
    let axes = array.axes();
    let (rows, cols) = array.shape();

    let mut nc = netcdf::create(path)?;

    nc.add_dimension(LATITUDE, rows)?;
    nc.add_dimension(LONGITUDE, cols)?;

    {
        let mut lat = nc.add_variable::<f64>(LATITUDE, &[LATITUDE])?;
        lat.put_attribute("standard_name", "latitude")?;
        lat.put_attribute("long_name", "latitude")?;
        lat.put_attribute("units", "degrees_north")?;
        lat.put_attribute("axis", "Y")?;
        lat.put_values(&axes.latitude, ..)?;
    }
    {
        let mut lon = nc.add_variable::<f64>(LONGITUDE, &[LONGITUDE])?;
        lon.put_attribute("standard_name", "longitude")?;
        lon.put_attribute("long_name", "longitude")?;
        lon.put_attribute("units", "degrees_east")?;
        lon.put_attribute("axis", "X")?;
        lon.put_values(&axes.longitude, ..)?;
    }
    {
        let mut var = nc.add_variable::<f64>(array.name(), &array.dims())?;
        if let Some(level) = options.deflate_level {
            var.set_compression(level, true)?;
        }
        var.set_fill_value(f64::NAN)?;
        if let Some(units) = &options.units {
            var.put_attribute("units", units.as_str())?;
        }
        if let Some(long_name) = &options.long_name {
            var.put_attribute("long_name", long_name.as_str())?;
        }
        var.put_values(array.values(), ..)?;
    }

    nc.add_attribute("Conventions", CF_CONVENTIONS)?;
    if let Some(title) = &options.title {
        nc.add_attribute("title", title.as_str())?;
    }
    if let Some(source) = &options.source {
        nc.add_attribute("source", source.as_str())?;
    }
    if let Some(history) = &options.history {
        nc.add_attribute("history", history.as_str())?;
    }
    if let Some(nodata) = options.nodata_value {
        nc.add_attribute("nodata_value", nodata)?;
    }
    if let Some(bbox) = axes.bbox() {
        nc.add_attribute("geospatial_lat_min", bbox.min_y)?;
        nc.add_attribute("geospatial_lat_max", bbox.max_y)?;
        nc.add_attribute("geospatial_lon_min", bbox.min_x)?;
        nc.add_attribute("geospatial_lon_max", bbox.max_x)?;
    }

    // Dropping the handle closes the file and flushes it to disk.
    drop(nc);
    Ok(())
}
