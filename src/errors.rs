//! Custom error types for spatial querying

use std::fmt;

/// Spatial-query-specific error types
#[derive(Debug)]
pub enum SpatialError {
    /// A required key is missing from a coordinate system structured form
    MissingField(&'static str),
    /// A key is present but has the wrong JSON shape
    InvalidField(&'static str),
    /// An axis entry lacks a name
    AxisMissingName,
    /// An axis entry lacks a type
    AxisMissingType,
    /// A non-exempt axis lacks a unit
    MissingUnit(String),
    /// The requested coordinate system has no spatial axes
    NoSpatialAxes,
    /// A coordinate vector does not match the expected axis count
    DimensionMismatch { expected: usize, actual: usize },
    /// A points table has no column for a requested axis
    MissingColumn(String),
    /// A raster or polygon table has no axis with the requested name
    MissingAxis(String),
    /// A polygon row carries no usable geometry
    EmptyGeometry(usize),
    /// JSON encoding/decoding error
    JsonError(serde_json::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SpatialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpatialError::MissingField(key) => write!(f, "`coordinate_system` MUST have {}", key),
            SpatialError::InvalidField(key) => write!(f, "Invalid value for key: {}", key),
            SpatialError::AxisMissingName => write!(f, "Each axis MUST have a name"),
            SpatialError::AxisMissingType => write!(f, "Each axis MUST have a type"),
            SpatialError::MissingUnit(name) => {
                write!(f, "Axis '{}' is not of an exempt type and MUST have a unit", name)
            }
            SpatialError::NoSpatialAxes => {
                write!(f, "No spatial axes in the requested coordinate system")
            }
            SpatialError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {} values, got {}", expected, actual)
            }
            SpatialError::MissingColumn(name) => write!(f, "Column not found: {}", name),
            SpatialError::MissingAxis(name) => write!(f, "Element has no axis named: {}", name),
            SpatialError::EmptyGeometry(row) => write!(f, "Polygon at row {} has no vertices", row),
            SpatialError::JsonError(e) => write!(f, "JSON error: {}", e),
            SpatialError::GenericError(msg) => write!(f, "Spatial query error: {}", msg),
        }
    }
}

impl std::error::Error for SpatialError {}

impl From<serde_json::Error> for SpatialError {
    fn from(error: serde_json::Error) -> Self {
        SpatialError::JsonError(error)
    }
}

/// Result type for spatial operations
pub type SpatialResult<T> = Result<T, SpatialError>;

impl From<String> for SpatialError {
    fn from(msg: String) -> Self {
        SpatialError::GenericError(msg)
    }
}
