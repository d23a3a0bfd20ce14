//! Rescaling of raw weights to a unit-sum sequence.

use crate::error::WeightError;

/// Rescale `weights` so the result sums to 1.
///
/// Order- and length-preserving: element `i` of the output is
/// `weights[i] / sum(weights)`.
///
/// # Errors
///
/// Returns [`WeightError::ZeroSum`] when the sum is zero (including the
/// empty slice) and [`WeightError::NonFiniteSum`] when the sum is NaN or
/// infinite; neither case is silently corrected.
///
/// # Example
///
/// ```
/// use openblend_weights::normalize;
///
/// let weights = normalize(&[1.0, 2.0, 3.0])?;
/// assert_eq!(weights, vec![1.0 / 6.0, 2.0 / 6.0, 3.0 / 6.0]);
/// # Ok::<(), openblend_weights::WeightError>(())
/// ```
pub fn normalize(weights: &[f64]) -> Result<Vec<f64>, WeightError> {
    let sum: f64 = weights.iter().sum();
    if sum == 0.0 {
        return Err(WeightError::ZeroSum);
    }
    if !sum.is_finite() {
        return Err(WeightError::NonFiniteSum { sum });
    }
    Ok(weights.iter().map(|w| w / sum).collect())
}
