//! Tests for the coordinate module

mod axis_tests;
