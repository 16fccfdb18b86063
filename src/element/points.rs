//! Columnar point tables

use crate::errors::{SpatialError, SpatialResult};

/// A columnar table of point records
///
/// One f64 column per axis name, one row per point. Column order is the
/// insertion order and is kept stable through filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsTable {
    columns: Vec<(String, Vec<f64>)>,
}

impl PointsTable {
    /// Create a points table from named columns
    ///
    /// # Arguments
    /// * `columns` - (axis name, values) pairs, all of equal length
    ///
    /// # Returns
    /// The table, or an error if the columns have unequal lengths
    pub fn new(columns: Vec<(String, Vec<f64>)>) -> SpatialResult<Self> {
        if let Some((_, first)) = columns.first() {
            let expected = first.len();
            for (_, values) in &columns {
                if values.len() != expected {
                    return Err(SpatialError::DimensionMismatch {
                        expected,
                        actual: values.len(),
                    });
                }
            }
        }
        Ok(PointsTable { columns })
    }

    /// Look up a column by axis name
    pub fn column(&self, name: &str) -> SpatialResult<&[f64]> {
        self.columns
            .iter()
            .find(|(column_name, _)| column_name == name)
            .map(|(_, values)| values.as_slice())
            .ok_or_else(|| SpatialError::MissingColumn(name.to_string()))
    }

    /// Names of the columns in declaration order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Keep only the rows selected by the mask
    pub fn filter(&self, mask: &[bool]) -> SpatialResult<PointsTable> {
        if mask.len() != self.len() {
            return Err(SpatialError::DimensionMismatch {
                expected: self.len(),
                actual: mask.len(),
            });
        }
        let columns = self
            .columns
            .iter()
            .map(|(name, values)| {
                let kept = values
                    .iter()
                    .zip(mask.iter())
                    .filter(|(_, keep)| **keep)
                    .map(|(value, _)| *value)
                    .collect();
                (name.clone(), kept)
            })
            .collect();
        Ok(PointsTable { columns })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |(_, values)| values.len())
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
