//! Gaussian-shaped weight curves.

use crate::bound::Bound;
use crate::error::WeightError;
use crate::normalize::normalize;
use crate::sample::sample_axis;

/// Default axis domain when a caller does not supply one.
pub const DEFAULT_GAUSSIAN_BOUND: Bound = Bound::new(0.0, 2.0);

/// Gaussian probability density with mean `apex` and deviation `std_dev`.
fn density(x: f64, apex: f64, std_dev: f64) -> f64 {
    let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * std_dev);
    norm * (-((x - apex) / std_dev).powi(2) / 2.0).exp()
}

pub(crate) fn validate_std_dev(curve: &'static str, std_dev: f64) -> Result<(), WeightError> {
    if !std_dev.is_finite() {
        return Err(WeightError::invalid_parameter(
            curve,
            "std_dev",
            std_dev,
            "must be finite",
        ));
    }
    if std_dev <= 0.0 {
        return Err(WeightError::invalid_parameter(
            curve,
            "std_dev",
            std_dev,
            "must be > 0",
        ));
    }
    Ok(())
}

pub(crate) fn validate_apex(curve: &'static str, apex: f64) -> Result<(), WeightError> {
    if !apex.is_finite() {
        return Err(WeightError::invalid_parameter(
            curve,
            "apex",
            apex,
            "must be finite",
        ));
    }
    Ok(())
}

/// Gaussian curve: density sampled over `bound`, normalized.
///
/// `apex` (μ) positions the peak relative to the axis and `std_dev` (σ)
/// sets its width; higher deviation means a broader, flatter bell. The
/// conventional domain is [`DEFAULT_GAUSSIAN_BOUND`] with `apex = 1.0`
/// and `std_dev = 1.0`.
///
/// # Errors
///
/// Returns [`WeightError::BoundTooShort`] for a bound with fewer than
/// two components, [`WeightError::InvalidParameter`] for a non-finite
/// apex or a deviation that is not strictly positive, and
/// [`WeightError::FrameCount`] for `frames == 0`.
///
/// # Example
///
/// ```
/// use openblend_weights::gaussian;
///
/// let weights = gaussian(5, 1.0, 1.0, &[0.0, 2.0])?;
/// let total: f64 = weights.iter().sum();
/// assert!((total - 1.0).abs() < 1e-9);
/// # Ok::<(), openblend_weights::WeightError>(())
/// ```
pub fn gaussian(
    frames: usize,
    apex: f64,
    std_dev: f64,
    bound: &[f64],
) -> Result<Vec<f64>, WeightError> {
    let bound = Bound::from_slice(bound, "gaussian")?;
    validate_apex("gaussian", apex)?;
    validate_std_dev("gaussian", std_dev)?;

    let axis = sample_axis("gaussian", frames, bound)?;
    let raw: Vec<f64> = axis.iter().map(|&x| density(x, apex, std_dev)).collect();
    normalize(&raw)
}

/// Symmetric Gaussian curve: the peak is forced to the centre.
///
/// The axis runs from `-m` to `+m` where `m` is the largest absolute
/// endpoint of `bound`, and the density is centred at 0, so the apex
/// always lands on the middle of the sequence.
///
/// # Errors
///
/// Same conditions as [`gaussian`], minus the apex check.
pub fn gaussian_sym(frames: usize, std_dev: f64, bound: &[f64]) -> Result<Vec<f64>, WeightError> {
    let bound = Bound::from_slice(bound, "gaussian_sym")?;
    validate_std_dev("gaussian_sym", std_dev)?;

    let max_abs = bound.abs_max();
    let axis = sample_axis("gaussian_sym", frames, Bound::new(-max_abs, max_abs))?;
    let raw: Vec<f64> = axis.iter().map(|&x| density(x, 0.0, std_dev)).collect();
    normalize(&raw)
}
