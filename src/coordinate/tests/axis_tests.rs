//! Tests for axis declarations

extern crate std;

use crate::coordinate::{Axis, AxisType};
use crate::errors::SpatialError;

#[test]
fn test_axis_type_string_round_trip() {
    for name in ["space", "time", "channel", "array"] {
        std::assert_eq!(AxisType::from_str(name).as_str(), name);
    }

    let other = AxisType::from_str("angular");
    std::assert_eq!(other, AxisType::Other("angular".to_string()));
    std::assert_eq!(other.as_str(), "angular");
}

#[test]
fn test_unit_exempt_types() {
    std::assert!(AxisType::Channel.is_unit_exempt());
    std::assert!(AxisType::Array.is_unit_exempt());
    std::assert!(!AxisType::Space.is_unit_exempt());
    std::assert!(!AxisType::Time.is_unit_exempt());
    std::assert!(!AxisType::Other("angular".to_string()).is_unit_exempt());
}

#[test]
fn test_spatial_axis_requires_unit() {
    let result = Axis::new("x", AxisType::Space, None);
    std::assert!(matches!(result, Err(SpatialError::MissingUnit(_))));

    let axis = Axis::new("x", AxisType::Space, Some("micrometer")).unwrap();
    std::assert!(axis.is_spatial());
    std::assert_eq!(axis.unit.as_deref(), Some("micrometer"));
}

#[test]
fn test_channel_axis_without_unit() {
    let axis = Axis::new("c", AxisType::Channel, None).unwrap();
    std::assert!(!axis.is_spatial());
    std::assert!(axis.unit.is_none());
}
