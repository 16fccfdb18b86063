//! Tests for the per-kind bounding-box query functions

extern crate std;

use std::collections::BTreeMap;

use crate::errors::SpatialError;
use crate::query::{
    bounding_box_query_image, bounding_box_query_images_map, bounding_box_query_points,
    bounding_box_query_points_map, bounding_box_query_polygons, bounding_box_query_polygons_map,
};

use super::test_utils::{cyx_raster, points_table, rectangles_table, yx_raster, yx_request};

#[test]
fn test_points_strict_open_interval() {
    let points = points_table(&[(0.0, 0.0), (1.0, 5.0), (5.0, 5.0), (10.0, 10.0)]);
    let request = yx_request(vec![1.0, 1.0], vec![9.0, 9.0]);

    let result = bounding_box_query_points(&points, &request).unwrap();

    // boundary points are excluded, only (5,5) is strictly inside
    std::assert_eq!(result.len(), 1);
    std::assert_eq!(result.column("y").unwrap(), &[5.0]);
    std::assert_eq!(result.column("x").unwrap(), &[5.0]);
}

#[test]
fn test_points_missing_axis_column_is_an_error() {
    let points = crate::element::PointsTable::new(vec![(
        "y".to_string(),
        vec![0.0, 5.0],
    )])
    .unwrap();
    let request = yx_request(vec![1.0, 1.0], vec![9.0, 9.0]);

    let result = bounding_box_query_points(&points, &request);
    std::assert!(matches!(result, Err(SpatialError::MissingColumn(_))));
}

#[test]
fn test_points_map_drops_empty_results() {
    let mut points_map = BTreeMap::new();
    points_map.insert("inside".to_string(), points_table(&[(5.0, 5.0)]));
    points_map.insert("outside".to_string(), points_table(&[(20.0, 20.0)]));
    let request = yx_request(vec![1.0, 1.0], vec![9.0, 9.0]);

    let result = bounding_box_query_points_map(&points_map, &request).unwrap();

    std::assert_eq!(result.len(), 1);
    std::assert!(result.contains_key("inside"));
    std::assert_eq!(result["inside"].len(), 1);
}

#[test]
fn test_points_query_idempotent() {
    let points = points_table(&[(0.0, 0.0), (5.0, 5.0), (10.0, 10.0)]);
    let request = yx_request(vec![1.0, 1.0], vec![9.0, 9.0]);

    let first = bounding_box_query_points(&points, &request).unwrap();
    let second = bounding_box_query_points(&first, &request).unwrap();

    std::assert_eq!(second, first);
}

#[test]
fn test_image_crop_selection_is_closed_open() {
    let raster = yx_raster();
    let request = yx_request(vec![2.0, 3.0], vec![5.0, 7.0]);

    let result = bounding_box_query_image(&raster, &request).unwrap();

    // y selects [2, 6), x selects [3, 8)
    std::assert_eq!(result.shape(), &[4, 5]);
    std::assert_eq!(result.get(&[0, 0]), Some(23.0));
    std::assert_eq!(result.get(&[3, 4]), Some(57.0));
}

#[test]
fn test_image_crop_rewrites_transform() {
    let raster = yx_raster();
    let request = yx_request(vec![2.0, 3.0], vec![5.0, 7.0]);

    let result = bounding_box_query_image(&raster, &request).unwrap();

    // the cropped local origin maps back to the crop's lower corner
    let transform = result.transform();
    std::assert_eq!(transform.apply(&[0.0, 0.0]).unwrap(), vec![2.0, 3.0]);
    std::assert_eq!(
        transform.input_coordinate_system(),
        raster.transform().input_coordinate_system()
    );
    std::assert_eq!(
        transform.output_coordinate_system(),
        raster.transform().output_coordinate_system()
    );

    // the source raster keeps its original transform
    let untouched = yx_raster();
    std::assert_eq!(raster.transform(), untouched.transform());
}

#[test]
fn test_image_crop_leaves_channel_axis_unconstrained() {
    let raster = cyx_raster();
    let request = yx_request(vec![2.0, 3.0], vec![5.0, 7.0]);

    let result = bounding_box_query_image(&raster, &request).unwrap();

    std::assert_eq!(result.shape(), &[2, 4, 5]);
    std::assert_eq!(result.get(&[0, 0, 0]), Some(23.0));
    std::assert_eq!(result.get(&[1, 0, 0]), Some(123.0));

    // the translation covers all intrinsic axes, zero on the channel axis
    let transform = result.transform();
    std::assert_eq!(
        transform.apply(&[0.0, 0.0, 0.0]).unwrap(),
        vec![0.0, 2.0, 3.0]
    );
}

#[test]
fn test_image_map_drops_empty_crops() {
    let mut image_map = BTreeMap::new();
    image_map.insert("image".to_string(), yx_raster());
    let request = yx_request(vec![20.0, 20.0], vec![25.0, 25.0]);

    let result = bounding_box_query_images_map(&image_map, &request).unwrap();
    std::assert!(result.is_empty());
}

#[test]
fn test_image_missing_axis_is_an_error() {
    let raster = yx_raster();
    let request = crate::query::BoundingBoxRequest::new(
        crate::coordinate::CoordinateSystem::new(
            Some("query"),
            vec![
                crate::coordinate::Axis::new(
                    "depth",
                    crate::coordinate::AxisType::Space,
                    Some("micrometer"),
                )
                .unwrap(),
            ],
        ),
        vec![0.0],
        vec![5.0],
    )
    .unwrap();

    let result = bounding_box_query_image(&raster, &request);
    std::assert!(matches!(result, Err(SpatialError::MissingAxis(_))));
}

#[test]
fn test_polygons_contained_is_retained() {
    let polygons = rectangles_table(&[((2.0, 2.0), (8.0, 8.0))]);
    let request = yx_request(vec![0.0, 0.0], vec![10.0, 10.0]);

    let result = bounding_box_query_polygons(&polygons, &request).unwrap();
    std::assert_eq!(result.len(), 1);
}

#[test]
fn test_polygons_min_bound_outside_is_excluded() {
    let polygons = rectangles_table(&[((2.0, 2.0), (8.0, 8.0))]);
    let request = yx_request(vec![3.0, 3.0], vec![10.0, 10.0]);

    let result = bounding_box_query_polygons(&polygons, &request).unwrap();
    std::assert!(result.is_empty());
}

#[test]
fn test_polygons_max_bound_outside_is_excluded() {
    let polygons = rectangles_table(&[((2.0, 2.0), (8.0, 8.0))]);
    let request = yx_request(vec![0.0, 0.0], vec![7.0, 7.0]);

    let result = bounding_box_query_polygons(&polygons, &request).unwrap();
    std::assert!(result.is_empty());
}

#[test]
fn test_polygons_touching_bounds_are_excluded() {
    let polygons = rectangles_table(&[((2.0, 2.0), (8.0, 8.0))]);

    // containment is strict on both corners
    let touching_min = yx_request(vec![2.0, 2.0], vec![10.0, 10.0]);
    let result = bounding_box_query_polygons(&polygons, &touching_min).unwrap();
    std::assert!(result.is_empty());

    let touching_max = yx_request(vec![0.0, 0.0], vec![8.0, 8.0]);
    let result = bounding_box_query_polygons(&polygons, &touching_max).unwrap();
    std::assert!(result.is_empty());
}

#[test]
fn test_polygons_intersecting_only_is_excluded() {
    // overlaps the query box but its bounds are not contained
    let polygons = rectangles_table(&[((2.0, 2.0), (12.0, 12.0))]);
    let request = yx_request(vec![0.0, 0.0], vec![10.0, 10.0]);

    let result = bounding_box_query_polygons(&polygons, &request).unwrap();
    std::assert!(result.is_empty());
}

#[test]
fn test_polygons_map_drops_empty_results() {
    let mut polygons_map = BTreeMap::new();
    polygons_map.insert(
        "inside".to_string(),
        rectangles_table(&[((2.0, 2.0), (8.0, 8.0))]),
    );
    polygons_map.insert(
        "outside".to_string(),
        rectangles_table(&[((20.0, 20.0), (30.0, 30.0))]),
    );
    let request = yx_request(vec![0.0, 0.0], vec![10.0, 10.0]);

    let result = bounding_box_query_polygons_map(&polygons_map, &request).unwrap();

    std::assert_eq!(result.len(), 1);
    std::assert!(result.contains_key("inside"));
}

#[test]
fn test_polygons_empty_ring_is_an_error() {
    let polygons = crate::element::PolygonTable::new(
        vec!["y".to_string(), "x".to_string()],
        vec![crate::element::Polygon::new(vec![])],
    );
    let request = yx_request(vec![0.0, 0.0], vec![10.0, 10.0]);

    let result = bounding_box_query_polygons(&polygons, &request);
    std::assert!(matches!(result, Err(SpatialError::EmptyGeometry(0))));
}
