//! Reading files produced by [`write_labeled_array`](crate::write_labeled_array).

use std::path::Path;

use grid_common::{CoordinateAxes, LabeledArray, LATITUDE, LONGITUDE};

use crate::error::{NetCdfError, NetCdfResult};
use crate::native::{get_f64_attr, get_global_str_attr, get_str_attr, silence_hdf5_errors};

/// A non-coordinate variable in a netCDF file.
#[derive(Debug, Clone, PartialEq)]
pub struct DataVariableInfo {
    pub name: String,
    pub dims: Vec<String>,
    pub fill_value: Option<f64>,
    pub units: Option<String>,
}

/// Structure of a netCDF file: dimensions, data variables and the
/// global attributes this crate writes.
#[derive(Debug, Clone, PartialEq)]
pub struct NetCdfSummary {
    pub dimensions: Vec<(String, usize)>,
    pub data_variables: Vec<DataVariableInfo>,
    pub conventions: Option<String>,
    pub source: Option<String>,
    pub title: Option<String>,
}

/// Describe the dimensions and data variables of the file at `path`.
///
/// Coordinate variables (variables named after their only dimension) are
/// not listed as data variables.
pub fn inspect<P: AsRef<Path>>(path: P) -> NetCdfResult<NetCdfSummary> {
    silence_hdf5_errors();
    let nc = netcdf::open(path.as_ref())?;

    let dimensions = nc
        .dimensions()
        .map(|dim| (dim.name().to_string(), dim.len()))
        .collect();

    let data_variables = nc
        .variables()
        .filter(|var| !is_coordinate_variable(var))
        .map(|var| DataVariableInfo {
            name: var.name().to_string(),
            dims: dimension_names(&var),
            fill_value: get_f64_attr(&var, "_FillValue"),
            units: get_str_attr(&var, "units"),
        })
        .collect();

    Ok(NetCdfSummary {
        dimensions,
        data_variables,
        conventions: get_global_str_attr(&nc, "Conventions"),
        source: get_global_str_attr(&nc, "source"),
        title: get_global_str_attr(&nc, "title"),
    })
}

/// Read the data variable `name` and its latitude/longitude coordinates.
pub fn read_labeled_array<P: AsRef<Path>>(path: P, name: &str) -> NetCdfResult<LabeledArray> {
    silence_hdf5_errors();
    let nc = netcdf::open(path.as_ref())?;

    let var = nc
        .variable(name)
        .ok_or_else(|| NetCdfError::MissingData(format!("{} variable", name)))?;

    let dims = dimension_names(&var);
    if dims != [LATITUDE, LONGITUDE] {
        return Err(NetCdfError::InvalidFormat(format!(
            "{} has dimensions {:?}, expected [{}, {}]",
            name, dims, LATITUDE, LONGITUDE
        )));
    }

    let latitude: Vec<f64> = nc
        .variable(LATITUDE)
        .ok_or_else(|| NetCdfError::MissingData(format!("{} variable", LATITUDE)))?
        .get_values(..)?;
    let longitude: Vec<f64> = nc
        .variable(LONGITUDE)
        .ok_or_else(|| NetCdfError::MissingData(format!("{} variable", LONGITUDE)))?
        .get_values(..)?;
    let values: Vec<f64> = var.get_values(..)?;

    let axes = CoordinateAxes {
        latitude,
        longitude,
    };
    LabeledArray::new(name, axes, values).map_err(|e| NetCdfError::InvalidFormat(e.to_string()))
}

fn dimension_names(var: &netcdf::Variable) -> Vec<String> {
    var.dimensions().iter().map(|d| d.name().to_string()).collect()
}

fn is_coordinate_variable(var: &netcdf::Variable) -> bool {
    let dims = var.dimensions();
    dims.len() == 1 && dims[0].name() == var.name()
}
