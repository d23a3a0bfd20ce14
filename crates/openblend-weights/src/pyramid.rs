//! Triangular weight curve peaking at the centre.

use crate::error::WeightError;
use crate::normalize::normalize;

/// Symmetric pyramid curve.
///
/// Raw weight at position `i` is `half - |i - half| + 1` where
/// `half = (frames - 1) / 2`, a triangular ramp that rises to the centre
/// and falls off symmetrically; the result is normalized. For even frame
/// counts the two central frames share the peak.
///
/// # Errors
///
/// Returns [`WeightError::FrameCount`] for `frames == 0`.
///
/// # Example
///
/// ```
/// use openblend_weights::pyramid;
///
/// let weights = pyramid(5)?;
/// assert_eq!(
///     weights,
///     vec![1.0 / 9.0, 2.0 / 9.0, 3.0 / 9.0, 2.0 / 9.0, 1.0 / 9.0]
/// );
/// # Ok::<(), openblend_weights::WeightError>(())
/// ```
pub fn pyramid(frames: usize) -> Result<Vec<f64>, WeightError> {
    if frames == 0 {
        return Err(WeightError::frame_count("pyramid", 0, 1));
    }
    let half = (frames - 1) as f64 / 2.0;
    let raw: Vec<f64> = (0..frames)
        .map(|i| half - (i as f64 - half).abs() + 1.0)
        .collect();
    normalize(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn test_pyramid_five_frames() {
        let weights = must(pyramid(5));
        assert_eq!(
            weights,
            vec![1.0 / 9.0, 2.0 / 9.0, 3.0 / 9.0, 2.0 / 9.0, 1.0 / 9.0]
        );
    }

    #[test]
    fn test_pyramid_even_count_has_flat_top() {
        // frames = 4: raw [1, 2, 2, 1].
        let weights = must(pyramid(4));
        assert_eq!(weights, vec![1.0 / 6.0, 2.0 / 6.0, 2.0 / 6.0, 1.0 / 6.0]);
    }

    #[test]
    fn test_pyramid_is_symmetric() {
        for frames in 1..=20 {
            let weights = must(pyramid(frames));
            for (a, b) in weights.iter().zip(weights.iter().rev()) {
                assert_relative_eq!(*a, *b, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_pyramid_sums_to_one() {
        for frames in 1..=40 {
            let total: f64 = must(pyramid(frames)).iter().sum();
            assert_relative_eq!(total, 1.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_pyramid_single_frame() {
        assert_eq!(must(pyramid(1)), vec![1.0]);
    }

    #[test]
    fn test_pyramid_zero_frames_rejected() {
        assert!(matches!(
            pyramid(0),
            Err(WeightError::FrameCount { curve: "pyramid", .. })
        ));
    }
}
