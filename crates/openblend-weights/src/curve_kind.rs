//! Declarative curve selection for profile/configuration layers.

use serde::{Deserialize, Serialize};

use openblend_formula::Formula;

use crate::bound::Bound;
use crate::custom::custom;
use crate::divide::divide;
use crate::error::WeightError;
use crate::gaussian::{
    DEFAULT_GAUSSIAN_BOUND, gaussian, gaussian_sym, validate_apex, validate_std_dev,
};
use crate::linear::{ascending, descending, equal};
use crate::pyramid::pyramid;

fn default_apex() -> f64 {
    1.0
}

fn default_std_dev() -> f64 {
    1.0
}

fn default_gaussian_bound() -> Bound {
    DEFAULT_GAUSSIAN_BOUND
}

/// Supported weight curve families.
///
/// This is the serializable façade over the generator functions, meant
/// for configuration files and profiles: deserialize a `WeightCurve`,
/// [`validate`](WeightCurve::validate) it at load time, then call
/// [`weights`](WeightCurve::weights) per blend.
///
/// # Example
///
/// ```
/// use openblend_weights::WeightCurve;
///
/// let curve = WeightCurve::Gaussian {
///     apex: 1.0,
///     std_dev: 1.0,
///     bound: (0.0, 2.0).into(),
/// };
/// curve.validate()?;
/// let weights = curve.weights(24)?;
/// assert_eq!(weights.len(), 24);
/// # Ok::<(), openblend_weights::WeightError>(())
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub enum WeightCurve {
    /// Flat curve: every frame weighs the same.
    #[default]
    Equal,

    /// Linear ramp favouring later frames.
    Ascending,

    /// Linear ramp favouring earlier frames.
    Descending,

    /// Triangular ramp peaking at the centre.
    Pyramid,

    /// Gaussian bell over a coordinate axis.
    Gaussian {
        /// Peak position μ, relative to the axis.
        #[serde(default = "default_apex")]
        apex: f64,
        /// Bell width σ; higher is broader and flatter.
        #[serde(default = "default_std_dev")]
        std_dev: f64,
        /// Axis domain the density is sampled over.
        #[serde(default = "default_gaussian_bound")]
        bound: Bound,
    },

    /// Gaussian bell with the peak forced to the sequence centre.
    GaussianSym {
        /// Bell width σ; higher is broader and flatter.
        #[serde(default = "default_std_dev")]
        std_dev: f64,
        /// Axis domain; only its largest absolute endpoint matters.
        #[serde(default = "default_gaussian_bound")]
        bound: Bound,
    },

    /// A short weight array stretched across the frame count.
    Divide {
        /// Per-bucket weights to stretch.
        weights: Vec<f64>,
    },

    /// An arbitrary sandboxed formula evaluated over a coordinate axis.
    Custom {
        /// The formula text, e.g. `"exp(-x ** 2)"`.
        formula: String,
        /// Axis domain the formula is evaluated over.
        #[serde(default)]
        bound: Bound,
    },
}

impl WeightCurve {
    /// Generate the normalized weight sequence for `frames` frames.
    ///
    /// # Errors
    ///
    /// Propagates the underlying generator's [`WeightError`].
    pub fn weights(&self, frames: usize) -> Result<Vec<f64>, WeightError> {
        match self {
            WeightCurve::Equal => equal(frames),
            WeightCurve::Ascending => ascending(frames),
            WeightCurve::Descending => descending(frames),
            WeightCurve::Pyramid => pyramid(frames),
            WeightCurve::Gaussian {
                apex,
                std_dev,
                bound,
            } => gaussian(frames, *apex, *std_dev, &[bound.start, bound.end]),
            WeightCurve::GaussianSym { std_dev, bound } => {
                gaussian_sym(frames, *std_dev, &[bound.start, bound.end])
            }
            WeightCurve::Divide { weights } => divide(frames, weights),
            WeightCurve::Custom { formula, bound } => {
                custom(frames, formula, &[bound.start, bound.end])
            }
        }
    }

    /// Validate the curve parameters without generating weights.
    ///
    /// Meant for profile load time: a curve that validates can still
    /// fail per-blend (a formula dividing by zero at some coordinate,
    /// weights cancelling to a zero sum), but its structure is sound.
    ///
    /// # Errors
    ///
    /// Returns the same structural [`WeightError`]s the generator would.
    pub fn validate(&self) -> Result<(), WeightError> {
        match self {
            WeightCurve::Equal
            | WeightCurve::Ascending
            | WeightCurve::Descending
            | WeightCurve::Pyramid => Ok(()),
            WeightCurve::Gaussian { apex, std_dev, .. } => {
                validate_apex("gaussian", *apex)?;
                validate_std_dev("gaussian", *std_dev)
            }
            WeightCurve::GaussianSym { std_dev, .. } => {
                validate_std_dev("gaussian_sym", *std_dev)
            }
            WeightCurve::Divide { weights } => {
                if weights.is_empty() {
                    return Err(WeightError::EmptyWeights { curve: "divide" });
                }
                Ok(())
            }
            WeightCurve::Custom { formula, .. } => {
                Formula::parse(formula)?;
                Ok(())
            }
        }
    }
}
