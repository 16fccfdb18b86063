//! Validated spatial query requests

use crate::coordinate::CoordinateSystem;
use crate::errors::{SpatialError, SpatialResult};

/// A query with an axis-aligned bounding box
///
/// The corner coordinates are positionally aligned with the coordinate
/// system's spatial-axis ordering. Validation happens here, once, at
/// construction; the query functions assume a validated request and do
/// not re-validate.
///
/// `min_coordinate[i] <= max_coordinate[i]` is the caller's
/// responsibility and is not enforced: an inverted box selects nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBoxRequest {
    coordinate_system: CoordinateSystem,
    min_coordinate: Vec<f64>,
    max_coordinate: Vec<f64>,
}

impl BoundingBoxRequest {
    /// Create a validated bounding-box request
    ///
    /// # Arguments
    /// * `coordinate_system` - The system the corner coordinates are expressed in
    /// * `min_coordinate` - Lower corner, one value per spatial axis
    /// * `max_coordinate` - Upper corner, one value per spatial axis
    ///
    /// # Returns
    /// The request, or an error if the coordinate system has no spatial
    /// axes or a corner's length does not match the spatial-axis count
    pub fn new(
        coordinate_system: CoordinateSystem,
        min_coordinate: Vec<f64>,
        max_coordinate: Vec<f64>,
    ) -> SpatialResult<Self> {
        let spatial_axis_count = coordinate_system.spatial_axes().len();
        if spatial_axis_count == 0 {
            return Err(SpatialError::NoSpatialAxes);
        }
        if min_coordinate.len() != spatial_axis_count {
            return Err(SpatialError::DimensionMismatch {
                expected: spatial_axis_count,
                actual: min_coordinate.len(),
            });
        }
        if max_coordinate.len() != spatial_axis_count {
            return Err(SpatialError::DimensionMismatch {
                expected: spatial_axis_count,
                actual: max_coordinate.len(),
            });
        }
        Ok(BoundingBoxRequest {
            coordinate_system,
            min_coordinate,
            max_coordinate,
        })
    }

    /// The coordinate system the corners are expressed in
    pub fn coordinate_system(&self) -> &CoordinateSystem {
        &self.coordinate_system
    }

    /// Lower corner of the bounding box
    pub fn min_coordinate(&self) -> &[f64] {
        &self.min_coordinate
    }

    /// Upper corner of the bounding box
    pub fn max_coordinate(&self) -> &[f64] {
        &self.max_coordinate
    }

    /// Names of the spatial axes the corners align with
    pub fn spatial_axes(&self) -> Vec<&str> {
        self.coordinate_system.spatial_axes()
    }
}
