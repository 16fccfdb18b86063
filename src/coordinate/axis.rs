//! Axis declarations for coordinate systems

use std::collections::HashSet;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Serialize, Serializer};

use crate::errors::{SpatialError, SpatialResult};

lazy_static! {
    /// Axis types that may be declared without a physical unit
    static ref UNIT_EXEMPT_TYPES: HashSet<&'static str> = {
        let mut types = HashSet::new();
        types.insert("channel");
        types.insert("array");
        types
    };
}

/// Semantic category of an axis
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AxisType {
    /// Physical/spatial dimension, eligible for bounding-box filtering
    Space,
    /// Temporal dimension
    Time,
    /// Channel dimension (e.g. stain, wavelength)
    Channel,
    /// Plain array dimension with no physical meaning
    Array,
    /// Any other declared category
    Other(String),
}

impl AxisType {
    /// Parse an axis type from its declared string form
    pub fn from_str(value: &str) -> AxisType {
        match value {
            "space" => AxisType::Space,
            "time" => AxisType::Time,
            "channel" => AxisType::Channel,
            "array" => AxisType::Array,
            other => AxisType::Other(other.to_string()),
        }
    }

    /// Get the declared string form of this axis type
    pub fn as_str(&self) -> &str {
        match self {
            AxisType::Space => "space",
            AxisType::Time => "time",
            AxisType::Channel => "channel",
            AxisType::Array => "array",
            AxisType::Other(name) => name,
        }
    }

    /// Whether axes of this type may omit a unit
    pub fn is_unit_exempt(&self) -> bool {
        UNIT_EXEMPT_TYPES.contains(self.as_str())
    }
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for AxisType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A named, typed dimension of a coordinate system
///
/// Axes are immutable values. An axis whose type is not unit-exempt
/// (anything other than "channel" or "array") must carry a unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Axis {
    /// Axis name, unique within one coordinate system (e.g. "x", "y", "c")
    pub name: String,
    /// Semantic category of the axis
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    /// Physical unit, required unless the type is unit-exempt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Axis {
    /// Create a new axis, validating the unit requirement
    ///
    /// # Arguments
    /// * `name` - Axis name
    /// * `axis_type` - Semantic category
    /// * `unit` - Physical unit, mandatory for non-exempt types
    ///
    /// # Returns
    /// A validated Axis or an error if a required unit is missing
    pub fn new(name: &str, axis_type: AxisType, unit: Option<&str>) -> SpatialResult<Self> {
        if unit.is_none() && !axis_type.is_unit_exempt() {
            return Err(SpatialError::MissingUnit(name.to_string()));
        }
        Ok(Axis {
            name: name.to_string(),
            axis_type,
            unit: unit.map(|u| u.to_string()),
        })
    }

    /// Whether this axis is a spatial dimension
    pub fn is_spatial(&self) -> bool {
        self.axis_type == AxisType::Space
    }
}
