//! In-memory raster elements with named dimensions

use std::collections::HashMap;

use crate::errors::{SpatialError, SpatialResult};
use crate::transform::Transformation;

/// An n-dimensional image or labels array with named dimensions
///
/// Carries an attached coordinate transformation relating the raster's
/// intrinsic (pixel/voxel) frame to a shared frame. The raster is never
/// mutated in place: cropping and transform replacement both construct
/// new values.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    dims: Vec<String>,
    shape: Vec<usize>,
    data: Vec<f64>,
    transform: Transformation,
}

impl Raster {
    /// Create a raster from named dimensions, a shape and row-major data
    ///
    /// # Arguments
    /// * `dims` - Dimension names, one per shape entry
    /// * `shape` - Extent of each dimension
    /// * `data` - Row-major values, length = product of the shape
    /// * `transform` - Transformation attached to the raster
    ///
    /// # Returns
    /// The raster, or an error on inconsistent dimensions
    pub fn new(
        dims: Vec<String>,
        shape: Vec<usize>,
        data: Vec<f64>,
        transform: Transformation,
    ) -> SpatialResult<Self> {
        if dims.len() != shape.len() {
            return Err(SpatialError::DimensionMismatch {
                expected: dims.len(),
                actual: shape.len(),
            });
        }
        let expected_len: usize = shape.iter().product();
        if data.len() != expected_len {
            return Err(SpatialError::DimensionMismatch {
                expected: expected_len,
                actual: data.len(),
            });
        }
        Ok(Raster {
            dims,
            shape,
            data,
            transform,
        })
    }

    /// Dimension names in axis order
    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    /// Extent of each dimension
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Whether any dimension has zero length
    pub fn has_empty_dimension(&self) -> bool {
        self.shape.iter().any(|&extent| extent == 0)
    }

    /// The attached transformation
    pub fn transform(&self) -> &Transformation {
        &self.transform
    }

    /// Return a copy of this raster with a different attached transformation
    pub fn with_transform(&self, transform: Transformation) -> Raster {
        Raster {
            dims: self.dims.clone(),
            shape: self.shape.clone(),
            data: self.data.clone(),
            transform,
        }
    }

    /// Read a single value by full index
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0;
        for (position, (&i, &extent)) in index.iter().zip(self.shape.iter()).enumerate() {
            if i >= extent {
                return None;
            }
            offset += i * self.stride(position);
        }
        Some(self.data[offset])
    }

    /// Crop the raster with a half-open integer slice per named dimension
    ///
    /// Dimensions absent from the selection are left unconstrained.
    /// Ranges are clamped to the array bounds, so an out-of-range or
    /// inverted range yields an empty dimension rather than a panic.
    ///
    /// # Arguments
    /// * `selection` - Map of dimension name to [start, end) range
    ///
    /// # Returns
    /// The cropped raster, carrying the same attached transformation,
    /// or an error if a selection names an unknown dimension
    pub fn select(&self, selection: &HashMap<String, (i64, i64)>) -> SpatialResult<Raster> {
        for name in selection.keys() {
            if !self.dims.iter().any(|dim| dim == name) {
                return Err(SpatialError::MissingAxis(name.clone()));
            }
        }

        // clamp every requested range into the array bounds
        let mut ranges = Vec::with_capacity(self.dims.len());
        for (dim, &extent) in self.dims.iter().zip(self.shape.iter()) {
            let range = match selection.get(dim) {
                Some(&(start, end)) => {
                    let start = start.max(0).min(extent as i64) as usize;
                    let end = end.max(0).min(extent as i64) as usize;
                    start..end.max(start)
                }
                None => 0..extent,
            };
            ranges.push(range);
        }

        let out_shape: Vec<usize> = ranges.iter().map(|range| range.len()).collect();
        let out_len: usize = out_shape.iter().product();
        let mut out_data = Vec::with_capacity(out_len);

        if out_len > 0 {
            // walk the selected block in row-major order
            let mut cursor: Vec<usize> = ranges.iter().map(|range| range.start).collect();
            for _ in 0..out_len {
                let mut offset = 0;
                for (position, &index) in cursor.iter().enumerate() {
                    offset += index * self.stride(position);
                }
                out_data.push(self.data[offset]);

                // advance the innermost position, carrying outwards
                for position in (0..cursor.len()).rev() {
                    cursor[position] += 1;
                    if cursor[position] < ranges[position].end {
                        break;
                    }
                    cursor[position] = ranges[position].start;
                }
            }
        }

        Ok(Raster {
            dims: self.dims.clone(),
            shape: out_shape,
            data: out_data,
            transform: self.transform.clone(),
        })
    }

    /// Row-major stride of the dimension at the given position
    fn stride(&self, position: usize) -> usize {
        self.shape[position + 1..].iter().product()
    }
}
