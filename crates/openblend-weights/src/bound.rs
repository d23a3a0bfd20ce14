//! The coordinate-axis domain supplied to bounded generators.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::WeightError;

/// The `(start, end)` domain a coordinate axis is generated over.
///
/// Bounds arrive from configuration as a list of numbers. Exactly two
/// components are expected; anything longer is tolerated with a warning
/// and only the first two are used, anything shorter is a hard error.
///
/// # Example
///
/// ```
/// use openblend_weights::Bound;
///
/// let bound = Bound::from_slice(&[0.0, 2.0], "gaussian")?;
/// assert_eq!(bound, Bound::new(0.0, 2.0));
/// # Ok::<(), openblend_weights::WeightError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    /// First coordinate of the axis.
    pub start: f64,
    /// Last coordinate of the axis.
    pub end: f64,
}

impl Bound {
    /// Create a bound from explicit endpoints.
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Validate a caller-supplied component list.
    ///
    /// `curve` names the generator on whose behalf the bound is being
    /// validated; it appears in the error and in the too-many-components
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns [`WeightError::BoundTooShort`] for fewer than two
    /// components. More than two components is not an error: the extra
    /// values are ignored and a warning is emitted.
    pub fn from_slice(values: &[f64], curve: &'static str) -> Result<Self, WeightError> {
        match values {
            [] | [_] => Err(WeightError::BoundTooShort {
                curve,
                got: values.len(),
            }),
            [start, end] => Ok(Self::new(*start, *end)),
            [start, end, ..] => {
                warn!(
                    curve,
                    components = values.len(),
                    "bound has more than 2 components, using only the first two"
                );
                Ok(Self::new(*start, *end))
            }
        }
    }

    /// Largest absolute endpoint, used to build symmetric axes.
    pub fn abs_max(&self) -> f64 {
        self.start.abs().max(self.end.abs())
    }
}

impl Default for Bound {
    /// The unit interval, the default domain for custom formulas.
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl From<(f64, f64)> for Bound {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

impl From<[f64; 2]> for Bound {
    fn from([start, end]: [f64; 2]) -> Self {
        Self::new(start, end)
    }
}
