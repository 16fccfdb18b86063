pub mod api;
pub mod coordinate;
pub mod element;
pub mod errors;
pub mod query;
pub mod transform;

pub use crate::api::bounding_box_query;

pub use coordinate::{Axis, AxisType, CoordinateSystem};
pub use element::{Element, Elements, PointsTable, Polygon, PolygonTable, Raster};
pub use errors::{SpatialError, SpatialResult};
pub use query::BoundingBoxRequest;
pub use transform::Transformation;
