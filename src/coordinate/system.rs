//! Coordinate system model
//!
//! A coordinate system is a named, ordered set of axis declarations with
//! a canonical JSON structured form. The declared axis order is the only
//! ordering ever consulted when interpreting corner-coordinate vectors;
//! there is no ambient global axis-order table.

use serde::Serialize;
use serde_json::Value;

use super::axis::{Axis, AxisType};
use crate::errors::{SpatialError, SpatialResult};

/// A named, ordered set of axis declarations
///
/// Constructed once, immutable thereafter. Equality and hashing are
/// structural, so two systems compare equal exactly when their canonical
/// serialized forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CoordinateSystem {
    name: Option<String>,
    axes: Vec<Axis>,
}

impl CoordinateSystem {
    /// Create a coordinate system from an explicit axis list
    pub fn new(name: Option<&str>, axes: Vec<Axis>) -> Self {
        CoordinateSystem {
            name: name.map(|n| n.to_string()),
            axes,
        }
    }

    /// Parse a coordinate system from its JSON structured form
    ///
    /// The form must carry a `name` string and a non-empty `axes` array;
    /// each axis entry must carry `name` and `type`, and a `unit` unless
    /// the type is unit-exempt. Fails without partially constructing.
    ///
    /// # Arguments
    /// * `value` - The structured form to parse
    ///
    /// # Returns
    /// A fully validated CoordinateSystem or a schema error
    pub fn from_value(value: &Value) -> SpatialResult<Self> {
        let object = value
            .as_object()
            .ok_or(SpatialError::InvalidField("coordinate_system"))?;

        let name = object
            .get("name")
            .ok_or(SpatialError::MissingField("a name"))?
            .as_str()
            .ok_or(SpatialError::InvalidField("name"))?;

        let axis_entries = object
            .get("axes")
            .ok_or(SpatialError::MissingField("axes"))?
            .as_array()
            .ok_or(SpatialError::InvalidField("axes"))?;
        if axis_entries.is_empty() {
            return Err(SpatialError::MissingField("axes"));
        }

        let mut axes = Vec::with_capacity(axis_entries.len());
        for entry in axis_entries {
            axes.push(Self::parse_axis(entry)?);
        }

        Ok(CoordinateSystem::new(Some(name), axes))
    }

    /// Parse and validate a single axis entry of the structured form
    fn parse_axis(entry: &Value) -> SpatialResult<Axis> {
        let object = entry.as_object().ok_or(SpatialError::InvalidField("axes"))?;

        let axis_name = object
            .get("name")
            .and_then(Value::as_str)
            .ok_or(SpatialError::AxisMissingName)?;
        let axis_type = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or(SpatialError::AxisMissingType)?;
        let unit = match object.get("unit") {
            Some(value) => Some(value.as_str().ok_or(SpatialError::InvalidField("unit"))?),
            None => None,
        };

        Axis::new(axis_name, AxisType::from_str(axis_type), unit)
    }

    /// Serialize to the canonical JSON structured form
    ///
    /// Round-trips with `from_value` for any form the parser accepts;
    /// the optional `unit` key is omitted where absent.
    pub fn to_value(&self) -> SpatialResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parse a coordinate system from a JSON string
    pub fn from_json(data: &str) -> SpatialResult<Self> {
        let value: Value = serde_json::from_str(data)?;
        Self::from_value(&value)
    }

    /// Encode this coordinate system as a JSON string
    pub fn to_json(&self) -> SpatialResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Get the coordinate system name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the ordered axis declarations
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Axis names in declaration order
    pub fn axes_names(&self) -> Vec<&str> {
        self.axes.iter().map(|axis| axis.name.as_str()).collect()
    }

    /// Axis type strings in declaration order
    pub fn axes_types(&self) -> Vec<&str> {
        self.axes.iter().map(|axis| axis.axis_type.as_str()).collect()
    }

    /// Names of the spatial axes, in declaration order
    ///
    /// This ordering is authoritative for interpreting the corner
    /// coordinates of a bounding-box request.
    pub fn spatial_axes(&self) -> Vec<&str> {
        self.axes
            .iter()
            .filter(|axis| axis.is_spatial())
            .map(|axis| axis.name.as_str())
            .collect()
    }

    /// Positions of the spatial axes within the declared axis order
    pub fn spatial_axis_indices(&self) -> Vec<usize> {
        self.axes
            .iter()
            .enumerate()
            .filter(|(_, axis)| axis.is_spatial())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of declared axes
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Whether the coordinate system declares no axes
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}
