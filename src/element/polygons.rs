//! Polygon geometry tables with per-row axis-aligned bounds

use crate::errors::{SpatialError, SpatialResult};

/// A single polygon given by its exterior ring
///
/// Each vertex carries one coordinate per table axis, in the table's
/// declared axis order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec<f64>>,
}

impl Polygon {
    /// Create a polygon from its exterior ring vertices
    pub fn new(vertices: Vec<Vec<f64>>) -> Self {
        Polygon { vertices }
    }

    /// The exterior ring vertices
    pub fn vertices(&self) -> &[Vec<f64>] {
        &self.vertices
    }
}

/// Per-row axis-aligned bounds of a polygon table
///
/// Bounds are exposed as `min<axis>` / `max<axis>` columns, one value
/// per polygon row.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonBounds {
    axes: Vec<String>,
    mins: Vec<Vec<f64>>,
    maxs: Vec<Vec<f64>>,
}

impl PolygonBounds {
    /// The `min<axis>` column for the named axis
    pub fn min_column(&self, axis: &str) -> SpatialResult<&[f64]> {
        self.column(axis, &self.mins, "min")
    }

    /// The `max<axis>` column for the named axis
    pub fn max_column(&self, axis: &str) -> SpatialResult<&[f64]> {
        self.column(axis, &self.maxs, "max")
    }

    fn column<'a>(
        &self,
        axis: &str,
        columns: &'a [Vec<f64>],
        prefix: &str,
    ) -> SpatialResult<&'a [f64]> {
        self.axes
            .iter()
            .position(|name| name == axis)
            .map(|index| columns[index].as_slice())
            .ok_or_else(|| SpatialError::MissingColumn(format!("{}{}", prefix, axis)))
    }
}

/// A table of polygon geometries, one row per polygon
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonTable {
    axes: Vec<String>,
    polygons: Vec<Polygon>,
}

impl PolygonTable {
    /// Create a polygon table
    ///
    /// # Arguments
    /// * `axes` - Axis names giving the meaning of vertex coordinate positions
    /// * `polygons` - One polygon per row
    pub fn new(axes: Vec<String>, polygons: Vec<Polygon>) -> Self {
        PolygonTable { axes, polygons }
    }

    /// Axis names of the vertex coordinate positions
    pub fn axes(&self) -> &[String] {
        &self.axes
    }

    /// The polygon rows
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Compute per-row axis-aligned bounds
    ///
    /// # Returns
    /// The bounds table, or an error if a row has no vertices or a
    /// vertex has the wrong arity
    pub fn bounds(&self) -> SpatialResult<PolygonBounds> {
        let axis_count = self.axes.len();
        let mut mins = vec![Vec::with_capacity(self.polygons.len()); axis_count];
        let mut maxs = vec![Vec::with_capacity(self.polygons.len()); axis_count];

        for (row, polygon) in self.polygons.iter().enumerate() {
            if polygon.vertices.is_empty() {
                return Err(SpatialError::EmptyGeometry(row));
            }
            let mut row_min = vec![f64::INFINITY; axis_count];
            let mut row_max = vec![f64::NEG_INFINITY; axis_count];
            for vertex in &polygon.vertices {
                if vertex.len() != axis_count {
                    return Err(SpatialError::DimensionMismatch {
                        expected: axis_count,
                        actual: vertex.len(),
                    });
                }
                for (position, &value) in vertex.iter().enumerate() {
                    row_min[position] = row_min[position].min(value);
                    row_max[position] = row_max[position].max(value);
                }
            }
            for position in 0..axis_count {
                mins[position].push(row_min[position]);
                maxs[position].push(row_max[position]);
            }
        }

        Ok(PolygonBounds {
            axes: self.axes.clone(),
            mins,
            maxs,
        })
    }

    /// Keep only the rows selected by the mask
    pub fn filter(&self, mask: &[bool]) -> SpatialResult<PolygonTable> {
        if mask.len() != self.len() {
            return Err(SpatialError::DimensionMismatch {
                expected: self.len(),
                actual: mask.len(),
            });
        }
        let polygons = self
            .polygons
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(polygon, _)| polygon.clone())
            .collect();
        Ok(PolygonTable {
            axes: self.axes.clone(),
            polygons,
        })
    }

    /// Number of polygon rows
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}
