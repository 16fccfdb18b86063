//! Bounding-box query functions for each element kind
//!
//! All functions here assume a pre-validated request. Only empty results
//! are silently dropped by the map variants; structural failures (a
//! missing axis column, a malformed geometry row) propagate as errors.

use std::collections::{BTreeMap, HashMap};

use log::{debug, info};

use crate::element::{PointsTable, PolygonTable, Raster};
use crate::errors::{SpatialError, SpatialResult};
use crate::query::request::BoundingBoxRequest;
use crate::transform::Transformation;

/// Filter a points table to the rows inside the bounding box
///
/// A row is retained only if its value on every spatial axis lies
/// strictly inside the open interval (min, max); points exactly on a
/// boundary are excluded.
pub fn bounding_box_query_points(
    points: &PointsTable,
    request: &BoundingBoxRequest,
) -> SpatialResult<PointsTable> {
    let spatial_axes = request.spatial_axes();
    let mut mask = vec![true; points.len()];

    for (axis_index, axis_name) in spatial_axes.iter().enumerate() {
        let values = points.column(axis_name)?;
        let min_value = request.min_coordinate()[axis_index];
        let max_value = request.max_coordinate()[axis_index];

        for (row, &value) in values.iter().enumerate() {
            mask[row] = mask[row] && min_value < value && value < max_value;
        }
    }

    let result = points.filter(&mask)?;
    debug!("Points query retained {} of {} rows", result.len(), points.len());
    Ok(result)
}

/// Query every named points element, keeping only non-empty results
pub fn bounding_box_query_points_map(
    points_map: &BTreeMap<String, PointsTable>,
    request: &BoundingBoxRequest,
) -> SpatialResult<BTreeMap<String, PointsTable>> {
    let mut requested_points = BTreeMap::new();
    for (points_name, points_data) in points_map {
        let points = bounding_box_query_points(points_data, request)?;
        if !points.is_empty() {
            // do not include elements with no data
            requested_points.insert(points_name.clone(), points);
        }
    }
    Ok(requested_points)
}

/// Crop a raster element to the bounding box and rewrite its transform
///
/// The request max is inclusive while slice semantics are half-open, so
/// each spatial axis selects the integer interval [min, max + 1).
/// Non-spatial axes are left unconstrained.
///
/// The rewritten transformation prepends a translation by the crop's
/// lower corner in the intrinsic frame, so any pixel of the cropped
/// raster still maps to the absolute coordinates it had before the
/// crop. This assumes the attached transform's input coordinate system
/// is the raster's intrinsic coordinate system; rasters carrying a
/// transform chain rooted elsewhere are not supported.
pub fn bounding_box_query_image(
    image: &Raster,
    request: &BoundingBoxRequest,
) -> SpatialResult<Raster> {
    let spatial_axes = request.spatial_axes();

    // build the selection
    let mut selection = HashMap::new();
    for (axis_index, axis_name) in spatial_axes.iter().enumerate() {
        let min_value = request.min_coordinate()[axis_index].floor() as i64;

        // slices are open half intervals, hence the +1 on the max
        let max_value = request.max_coordinate()[axis_index].floor() as i64 + 1;

        selection.insert(axis_name.to_string(), (min_value, max_value));
    }

    let query_result = image.select(&selection)?;

    // update the transform, in the intrinsic frame of the raster
    let initial_transform = image.transform().clone();
    let coordinate_system = initial_transform.input_coordinate_system().clone();
    let n_axes_intrinsic = coordinate_system.len();
    let spatial_indices = coordinate_system.spatial_axis_indices();

    if spatial_indices.len() != request.min_coordinate().len() {
        return Err(SpatialError::DimensionMismatch {
            expected: spatial_indices.len(),
            actual: request.min_coordinate().len(),
        });
    }

    let mut translation_vector = vec![0.0; n_axes_intrinsic];
    for (spatial_axis_index, &coordinate_index) in spatial_indices.iter().enumerate() {
        translation_vector[coordinate_index] = request.min_coordinate()[spatial_axis_index];
    }

    let translation = Transformation::translation(
        translation_vector,
        coordinate_system.clone(),
        coordinate_system.clone(),
    )?;

    let output_coordinate_system = initial_transform.output_coordinate_system().clone();
    let new_transformation = Transformation::sequence(
        vec![translation, initial_transform],
        coordinate_system,
        output_coordinate_system,
    )?;

    debug!("Image query cropped shape {:?} to {:?}", image.shape(), query_result.shape());
    Ok(query_result.with_transform(new_transformation))
}

/// Query every named raster element, keeping only non-empty crops
///
/// Serves both images and labels, which share the raster query path.
pub fn bounding_box_query_images_map(
    image_map: &BTreeMap<String, Raster>,
    request: &BoundingBoxRequest,
) -> SpatialResult<BTreeMap<String, Raster>> {
    let mut requested_images = BTreeMap::new();
    for (image_name, image_data) in image_map {
        let image = bounding_box_query_image(image_data, request)?;
        if !image.has_empty_dimension() {
            // do not include elements with no data
            requested_images.insert(image_name.clone(), image);
        }
    }
    Ok(requested_images)
}

/// Filter a polygon table to the polygons contained in the bounding box
///
/// A polygon is retained only if its entire bounding box lies strictly
/// inside the query box: on every spatial axis the request min must be
/// below the polygon's min bound and the request max above its max
/// bound. Polygons that merely intersect the query box, or whose bounds
/// touch it, are excluded.
pub fn bounding_box_query_polygons(
    polygons_table: &PolygonTable,
    request: &BoundingBoxRequest,
) -> SpatialResult<PolygonTable> {
    let spatial_axes = request.spatial_axes();

    // get the polygon bounding boxes
    let bounds = polygons_table.bounds()?;

    let mut mask = vec![true; polygons_table.len()];
    for (axis_index, axis_name) in spatial_axes.iter().enumerate() {
        let min_bounds = bounds.min_column(axis_name)?;
        let max_bounds = bounds.max_column(axis_name)?;
        let request_min = request.min_coordinate()[axis_index];
        let request_max = request.max_coordinate()[axis_index];

        for row in 0..polygons_table.len() {
            // both the min and the max bound must be strictly inside
            mask[row] = mask[row]
                && request_min < min_bounds[row]
                && request_max > max_bounds[row];
        }
    }

    let result = polygons_table.filter(&mask)?;
    debug!(
        "Polygons query retained {} of {} rows",
        result.len(),
        polygons_table.len()
    );
    Ok(result)
}

/// Query every named polygons element, keeping only non-empty results
pub fn bounding_box_query_polygons_map(
    polygons_map: &BTreeMap<String, PolygonTable>,
    request: &BoundingBoxRequest,
) -> SpatialResult<BTreeMap<String, PolygonTable>> {
    let mut requested_polygons = BTreeMap::new();
    for (polygons_name, polygons_data) in polygons_map {
        let polygons_table = bounding_box_query_polygons(polygons_data, request)?;
        if !polygons_table.is_empty() {
            // do not include elements with no data
            requested_polygons.insert(polygons_name.clone(), polygons_table);
        }
    }
    Ok(requested_polygons)
}

/// Log a summary line for a dataset-level query
pub(crate) fn log_request(request: &BoundingBoxRequest) {
    info!(
        "Bounding box query over axes {:?}: min={:?} max={:?}",
        request.spatial_axes(),
        request.min_coordinate(),
        request.max_coordinate()
    );
}
