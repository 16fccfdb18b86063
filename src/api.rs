use crate::element::Elements;
use crate::errors::SpatialResult;
use crate::query::{
    bounding_box_query_images_map, bounding_box_query_points_map, bounding_box_query_polygons_map,
    BoundingBoxRequest,
};

/// Query a whole element collection with a bounding box
///
/// Runs the per-kind map queries over every named element and assembles
/// the filtered collection. Kinds with no elements are skipped, and so
/// are elements whose query result is empty; structural errors on any
/// element abort the query.
///
/// # Arguments
/// * `elements` - The element collection to query
/// * `request` - The validated bounding-box request
///
/// # Returns
/// A new collection holding only the retained, filtered elements
pub fn bounding_box_query(
    elements: &Elements,
    request: &BoundingBoxRequest,
) -> SpatialResult<Elements> {
    crate::query::log_request(request);

    Ok(Elements {
        points: bounding_box_query_points_map(&elements.points, request)?,
        images: bounding_box_query_images_map(&elements.images, request)?,
        labels: bounding_box_query_images_map(&elements.labels, request)?,
        polygons: bounding_box_query_polygons_map(&elements.polygons, request)?,
    })
}
