//! Arbitrary weight curves from caller-supplied formulas.

use openblend_formula::Formula;

use crate::bound::Bound;
use crate::error::WeightError;
use crate::normalize::normalize;
use crate::sample::sample_axis;

/// Weight curve from an arbitrary formula.
///
/// A coordinate axis is generated over `bound` (conventionally the unit
/// interval), the formula is evaluated once per coordinate with `x`
/// bound to the coordinate and `frames` to the frame count, and the
/// results are normalized. The formula runs in the
/// [`openblend_formula`] sandbox: only math functions, the restricted
/// helpers, `x` and `frames` are reachable.
///
/// # Errors
///
/// Returns [`WeightError::BoundTooShort`] for a bound with fewer than
/// two components, [`WeightError::FrameCount`] for `frames == 0`,
/// [`WeightError::Formula`] when the formula fails to compile or
/// evaluate, and the normalization errors when the evaluated weights sum
/// to zero or to a non-finite value.
///
/// # Example
///
/// ```
/// use openblend_weights::custom;
///
/// // Quadratic ramp over the unit interval.
/// let weights = custom(5, "x ** 2 + 0.1", &[0.0, 1.0])?;
/// assert_eq!(weights.len(), 5);
/// let total: f64 = weights.iter().sum();
/// assert!((total - 1.0).abs() < 1e-9);
/// # Ok::<(), openblend_weights::WeightError>(())
/// ```
pub fn custom(frames: usize, expression: &str, bound: &[f64]) -> Result<Vec<f64>, WeightError> {
    let bound = Bound::from_slice(bound, "custom")?;
    let formula = Formula::parse(expression)?;

    let axis = sample_axis("custom", frames, bound)?;
    let values = formula.eval_sequence(&axis)?;
    normalize(&values)
}
