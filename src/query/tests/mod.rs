//! Tests for the bounding-box query engine

mod bounding_box_tests;
