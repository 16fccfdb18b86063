//! Spatial data elements
//!
//! This module provides the supported element kinds (points, images,
//! labels, polygons) as a closed, tagged set, plus the named per-kind
//! maps a dataset query operates on.

use std::collections::BTreeMap;

mod points;
mod polygons;
mod raster;

// Public exports
pub use points::PointsTable;
pub use polygons::{Polygon, PolygonBounds, PolygonTable};
pub use raster::Raster;

use crate::errors::SpatialResult;
use crate::query::{
    bounding_box_query_image, bounding_box_query_points, bounding_box_query_polygons,
    BoundingBoxRequest,
};

/// A spatial data element of one of the supported kinds
///
/// Every kind implements the same spatial-queryable capability: a
/// bounding-box query returning a same-kind result, or `None` when the
/// query retains nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A columnar point set
    Points(PointsTable),
    /// A raster image
    Image(Raster),
    /// A raster of labels, queried exactly like an image
    Labels(Raster),
    /// A polygon set
    Polygons(PolygonTable),
}

impl Element {
    /// Filter this element to a bounding box
    ///
    /// Returns `None` when the result is empty (for rasters: any cropped
    /// dimension has zero length). Structural failures propagate as
    /// errors rather than being skipped.
    pub fn bounding_box_query(
        &self,
        request: &BoundingBoxRequest,
    ) -> SpatialResult<Option<Element>> {
        match self {
            Element::Points(points) => {
                let result = bounding_box_query_points(points, request)?;
                Ok((!result.is_empty()).then(|| Element::Points(result)))
            }
            Element::Image(raster) => {
                let result = bounding_box_query_image(raster, request)?;
                Ok((!result.has_empty_dimension()).then(|| Element::Image(result)))
            }
            Element::Labels(raster) => {
                let result = bounding_box_query_image(raster, request)?;
                Ok((!result.has_empty_dimension()).then(|| Element::Labels(result)))
            }
            Element::Polygons(polygons) => {
                let result = bounding_box_query_polygons(polygons, request)?;
                Ok((!result.is_empty()).then(|| Element::Polygons(result)))
            }
        }
    }
}

/// Named element maps for each supported kind
///
/// A kind with no elements is simply an empty map and is skipped by
/// queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Elements {
    pub points: BTreeMap<String, PointsTable>,
    pub images: BTreeMap<String, Raster>,
    pub labels: BTreeMap<String, Raster>,
    pub polygons: BTreeMap<String, PolygonTable>,
}

impl Elements {
    /// Create an empty element collection
    pub fn new() -> Self {
        Elements::default()
    }

    /// Whether no kind holds any element
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
            && self.images.is_empty()
            && self.labels.is_empty()
            && self.polygons.is_empty()
    }
}
