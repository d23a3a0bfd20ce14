//! Evenly spaced coordinate axes.

use crate::bound::Bound;
use crate::error::WeightError;

/// Build a length-`n` evenly spaced sequence from `start` to `end`
/// inclusive.
///
/// Spacing is uniform: element `i` is `start + i * (end - start) / (n - 1)`.
/// Both endpoints land exactly on `start` and `end` (modulo
/// floating-point rounding of the interior arithmetic).
///
/// # Errors
///
/// `n < 2` is a precondition violation and returns
/// [`WeightError::FrameCount`]; a two-point axis is the smallest this
/// primitive can describe. Generators that accept a single frame sample
/// the midpoint of their bound instead of calling this.
///
/// # Example
///
/// ```
/// use openblend_weights::scale_range;
///
/// let axis = scale_range(5, 0.0, 2.0)?;
/// assert_eq!(axis, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
/// # Ok::<(), openblend_weights::WeightError>(())
/// ```
pub fn scale_range(n: usize, start: f64, end: f64) -> Result<Vec<f64>, WeightError> {
    if n < 2 {
        return Err(WeightError::frame_count("scale_range", n, 2));
    }
    let span = end - start;
    let last = (n - 1) as f64;
    Ok((0..n).map(|i| (i as f64 * span / last) + start).collect())
}

/// Coordinate axis for a generator: `scale_range` over the bound, with a
/// single frame sampling the bound's midpoint.
pub(crate) fn sample_axis(
    curve: &'static str,
    n: usize,
    bound: Bound,
) -> Result<Vec<f64>, WeightError> {
    match n {
        0 => Err(WeightError::frame_count(curve, 0, 1)),
        1 => Ok(vec![(bound.start + bound.end) / 2.0]),
        _ => scale_range(n, bound.start, bound.end),
    }
}
