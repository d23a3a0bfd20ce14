//! Stretching a short weight array across a frame count.

use crate::bound::Bound;
use crate::error::WeightError;
use crate::normalize::normalize;
use crate::sample::sample_axis;

/// Stretch `weights` to `frames` elements by nearest-bucket lookup, then
/// normalize.
///
/// A coordinate axis runs from 0 to `weights.len() - 0.1`; each output
/// element takes the input weight at the floor of its coordinate. The
/// `-0.1` keeps the floor of the final coordinate inside the array, so
/// every bucket gets an even share of the frames.
///
/// # Errors
///
/// Returns [`WeightError::EmptyWeights`] for an empty input array and
/// [`WeightError::FrameCount`] for `frames == 0`.
///
/// # Example
///
/// ```
/// use openblend_weights::divide;
///
/// // Five frames of 1/15 followed by five frames of 2/15.
/// let weights = divide(10, &[1.0, 2.0])?;
/// assert_eq!(weights.len(), 10);
/// assert!((weights[0] - 1.0 / 15.0).abs() < 1e-9);
/// assert!((weights[9] - 2.0 / 15.0).abs() < 1e-9);
/// # Ok::<(), openblend_weights::WeightError>(())
/// ```
pub fn divide(frames: usize, weights: &[f64]) -> Result<Vec<f64>, WeightError> {
    if weights.is_empty() {
        return Err(WeightError::EmptyWeights { curve: "divide" });
    }

    let end = weights.len() as f64 - 0.1;
    let axis = sample_axis("divide", frames, Bound::new(0.0, end))?;

    let last = weights.len() - 1;
    let raw: Vec<f64> = axis
        .iter()
        .map(|&coordinate| {
            let bucket = (coordinate as usize).min(last);
            weights[bucket]
        })
        .collect();
    normalize(&raw)
}
