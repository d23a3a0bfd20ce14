//! Flat and linear ramp curves.

use crate::error::WeightError;
use crate::normalize::normalize;

/// Linear ascending curve: raw weights `1..=frames`, normalized.
///
/// Later frames dominate the blend.
///
/// # Errors
///
/// Returns [`WeightError::FrameCount`] for `frames == 0`.
///
/// # Example
///
/// ```
/// use openblend_weights::ascending;
///
/// assert_eq!(ascending(4)?, vec![0.1, 0.2, 0.3, 0.4]);
/// # Ok::<(), openblend_weights::WeightError>(())
/// ```
pub fn ascending(frames: usize) -> Result<Vec<f64>, WeightError> {
    if frames == 0 {
        return Err(WeightError::frame_count("ascending", 0, 1));
    }
    let raw: Vec<f64> = (1..=frames).map(|i| i as f64).collect();
    normalize(&raw)
}

/// Linear descending curve: raw weights `frames..=1`, normalized.
///
/// Earlier frames dominate the blend.
///
/// # Errors
///
/// Returns [`WeightError::FrameCount`] for `frames == 0`.
pub fn descending(frames: usize) -> Result<Vec<f64>, WeightError> {
    if frames == 0 {
        return Err(WeightError::frame_count("descending", 0, 1));
    }
    let raw: Vec<f64> = (1..=frames).rev().map(|i| i as f64).collect();
    normalize(&raw)
}

/// Flat curve: every weight is `1 / frames`.
///
/// # Errors
///
/// Returns [`WeightError::FrameCount`] for `frames == 0`.
pub fn equal(frames: usize) -> Result<Vec<f64>, WeightError> {
    if frames == 0 {
        return Err(WeightError::frame_count("equal", 0, 1));
    }
    Ok(vec![1.0 / frames as f64; frames])
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
    fn test_ascending_four_frames() {
        assert_eq!(must(ascending(4)), vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_descending_four_frames() {
        assert_eq!(must(descending(4)), vec![0.4, 0.3, 0.2, 0.1]);
    }

    #[test]
    fn test_descending_is_ascending_reversed() {
        let mut up = must(ascending(9));
        up.reverse();
        assert_eq!(up, must(descending(9)));
    }

    #[test]
    fn test_equal_four_frames() {
        assert_eq!(must(equal(4)), vec![0.25, 0.25, 0.25, 0.25]);
    }

    #[test]
    fn test_single_frame_degenerates_to_unit_weight() {
        assert_eq!(must(ascending(1)), vec![1.0]);
        assert_eq!(must(descending(1)), vec![1.0]);
        assert_eq!(must(equal(1)), vec![1.0]);
    }

    #[test]
    fn test_zero_frames_rejected() {
        assert!(matches!(
            ascending(0),
            Err(WeightError::FrameCount { curve: "ascending", .. })
        ));
        assert!(matches!(
            descending(0),
            Err(WeightError::FrameCount { curve: "descending", .. })
        ));
        assert!(matches!(
            equal(0),
            Err(WeightError::FrameCount { curve: "equal", .. })
        ));
    }

    #[test]
    fn test_sums_to_one() {
        for frames in 1..40 {
            let total: f64 = must(ascending(frames)).iter().sum();
            assert_relative_eq!(total, 1.0, max_relative = 1e-9);
            let total: f64 = must(equal(frames)).iter().sum();
            assert_relative_eq!(total, 1.0, max_relative = 1e-9);
        }
    }
}
