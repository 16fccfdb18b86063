//! Bounding-box query engine
//!
//! This module provides the validated query request and the per-kind
//! query functions for points, images/labels and polygons, including the
//! dictionary variants that drop empty results.

mod bounding_box;
mod request;

#[cfg(test)]
mod tests;

// Public exports
pub use bounding_box::{
    bounding_box_query_image, bounding_box_query_images_map, bounding_box_query_points,
    bounding_box_query_points_map, bounding_box_query_polygons, bounding_box_query_polygons_map,
};
pub use request::BoundingBoxRequest;

pub(crate) use bounding_box::log_request;
