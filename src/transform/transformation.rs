//! Transformation types for mapping between coordinate frames

use crate::coordinate::CoordinateSystem;
use crate::errors::{SpatialError, SpatialResult};

/// A composable mapping between two coordinate systems
///
/// Each variant carries its own input and output coordinate system.
/// `Sequence` composes transformations in order: the input system of the
/// first member is the overall input and the output system of the last
/// member is the overall output.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformation {
    /// Maps coordinates unchanged between two frames
    Identity {
        input: CoordinateSystem,
        output: CoordinateSystem,
    },
    /// Per-axis additive offset in the input frame
    Translation {
        translation: Vec<f64>,
        input: CoordinateSystem,
        output: CoordinateSystem,
    },
    /// Per-axis multiplicative factor in the input frame
    Scale {
        scale: Vec<f64>,
        input: CoordinateSystem,
        output: CoordinateSystem,
    },
    /// Ordered composition of transformations
    Sequence {
        transformations: Vec<Transformation>,
        input: CoordinateSystem,
        output: CoordinateSystem,
    },
}

impl Transformation {
    /// Create an identity transformation
    pub fn identity(
        input: CoordinateSystem,
        output: CoordinateSystem,
    ) -> SpatialResult<Transformation> {
        if input.len() != output.len() {
            return Err(SpatialError::DimensionMismatch {
                expected: input.len(),
                actual: output.len(),
            });
        }
        Ok(Transformation::Identity { input, output })
    }

    /// Create a translation transformation
    ///
    /// # Arguments
    /// * `translation` - Additive offset, one value per input axis
    /// * `input` - Input coordinate system
    /// * `output` - Output coordinate system
    ///
    /// # Returns
    /// The transformation, or an error if the vector length does not
    /// match the input axis count
    pub fn translation(
        translation: Vec<f64>,
        input: CoordinateSystem,
        output: CoordinateSystem,
    ) -> SpatialResult<Transformation> {
        if translation.len() != input.len() {
            return Err(SpatialError::DimensionMismatch {
                expected: input.len(),
                actual: translation.len(),
            });
        }
        Ok(Transformation::Translation {
            translation,
            input,
            output,
        })
    }

    /// Create a scale transformation
    pub fn scale(
        scale: Vec<f64>,
        input: CoordinateSystem,
        output: CoordinateSystem,
    ) -> SpatialResult<Transformation> {
        if scale.len() != input.len() {
            return Err(SpatialError::DimensionMismatch {
                expected: input.len(),
                actual: scale.len(),
            });
        }
        Ok(Transformation::Scale {
            scale,
            input,
            output,
        })
    }

    /// Create a sequence of transformations
    ///
    /// The declared input system must equal the first member's input
    /// system and the declared output system the last member's output
    /// system.
    pub fn sequence(
        transformations: Vec<Transformation>,
        input: CoordinateSystem,
        output: CoordinateSystem,
    ) -> SpatialResult<Transformation> {
        let first = transformations
            .first()
            .ok_or_else(|| SpatialError::GenericError("Empty transformation sequence".to_string()))?;
        if first.input_coordinate_system() != &input {
            return Err(SpatialError::GenericError(
                "Sequence input does not match its first transformation".to_string(),
            ));
        }
        // first() succeeded, so last() cannot fail
        if let Some(last) = transformations.last() {
            if last.output_coordinate_system() != &output {
                return Err(SpatialError::GenericError(
                    "Sequence output does not match its last transformation".to_string(),
                ));
            }
        }
        Ok(Transformation::Sequence {
            transformations,
            input,
            output,
        })
    }

    /// Get the input coordinate system
    pub fn input_coordinate_system(&self) -> &CoordinateSystem {
        match self {
            Transformation::Identity { input, .. } => input,
            Transformation::Translation { input, .. } => input,
            Transformation::Scale { input, .. } => input,
            Transformation::Sequence { input, .. } => input,
        }
    }

    /// Get the output coordinate system
    pub fn output_coordinate_system(&self) -> &CoordinateSystem {
        match self {
            Transformation::Identity { output, .. } => output,
            Transformation::Translation { output, .. } => output,
            Transformation::Scale { output, .. } => output,
            Transformation::Sequence { output, .. } => output,
        }
    }

    /// Map a coordinate vector from the input frame to the output frame
    ///
    /// # Arguments
    /// * `coordinates` - One value per input axis
    ///
    /// # Returns
    /// The mapped coordinates, or an error on arity mismatch
    pub fn apply(&self, coordinates: &[f64]) -> SpatialResult<Vec<f64>> {
        let expected = self.input_coordinate_system().len();
        if coordinates.len() != expected {
            return Err(SpatialError::DimensionMismatch {
                expected,
                actual: coordinates.len(),
            });
        }

        match self {
            Transformation::Identity { .. } => Ok(coordinates.to_vec()),
            Transformation::Translation { translation, .. } => Ok(coordinates
                .iter()
                .zip(translation.iter())
                .map(|(value, offset)| value + offset)
                .collect()),
            Transformation::Scale { scale, .. } => Ok(coordinates
                .iter()
                .zip(scale.iter())
                .map(|(value, factor)| value * factor)
                .collect()),
            Transformation::Sequence {
                transformations, ..
            } => {
                let mut current = coordinates.to_vec();
                for transformation in transformations {
                    current = transformation.apply(&current)?;
                }
                Ok(current)
            }
        }
    }
}
