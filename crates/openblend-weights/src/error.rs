//! Error types for weight curve generation.

use openblend_formula::FormulaError;

/// Error type for weight curve generation.
///
/// Structural input errors (`FrameCount`, `BoundTooShort`,
/// `InvalidParameter`, `EmptyWeights`) are raised before any computation
/// proceeds. `ZeroSum`/`NonFiniteSum` surface from normalization, and
/// `Formula` wraps failures of a custom formula. Nothing is caught and
/// retried internally; every generator either fully succeeds or fails
/// fast with one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum WeightError {
    /// Frame count below the generator's documented minimum.
    #[error("{curve}: frame count {frames} is below the minimum of {min}")]
    FrameCount {
        /// The generator that rejected the input.
        curve: &'static str,
        /// The supplied frame count.
        frames: usize,
        /// The minimum the generator accepts.
        min: usize,
    },

    /// A bound was supplied with fewer than two components.
    #[error("{curve}: bound needs at least 2 components, got {got}")]
    BoundTooShort {
        /// The generator that rejected the input.
        curve: &'static str,
        /// Number of components supplied.
        got: usize,
    },

    /// A numeric parameter is outside the generator's domain.
    #[error("{curve}: {name} {value} is invalid, {reason}")]
    InvalidParameter {
        /// The generator that rejected the input.
        curve: &'static str,
        /// Parameter name.
        name: &'static str,
        /// The invalid value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// `divide` was given an empty weight array to stretch.
    #[error("{curve}: weight array must not be empty")]
    EmptyWeights {
        /// The generator that rejected the input.
        curve: &'static str,
    },

    /// Normalization of an all-zero (or empty) weight sequence.
    #[error("cannot normalize weights that sum to zero")]
    ZeroSum,

    /// Normalization of a sequence whose sum is not finite.
    #[error("cannot normalize weights, sum {sum} is not finite")]
    NonFiniteSum {
        /// The offending sum.
        sum: f64,
    },

    /// A custom formula failed to compile or evaluate.
    #[error(transparent)]
    Formula(#[from] FormulaError),
}

impl WeightError {
    /// Create a frame count error.
    pub fn frame_count(curve: &'static str, frames: usize, min: usize) -> Self {
        WeightError::FrameCount { curve, frames, min }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(
        curve: &'static str,
        name: &'static str,
        value: f64,
        reason: &'static str,
    ) -> Self {
        WeightError::InvalidParameter {
            curve,
            name,
            value,
            reason,
        }
    }
}
