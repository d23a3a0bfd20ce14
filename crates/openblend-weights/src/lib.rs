//! Frame-Blend Weight Curves for OpenBlend
//!
//! This crate generates the normalized weight sequences that drive frame
//! blending when resampling high-frame-rate footage: given a frame
//! count, each generator returns a weight sequence of that length
//! summing to 1, shaped by the chosen curve family.
//!
//! # Curve families
//!
//! - **Equal**: every frame weighs the same
//! - **Ascending / Descending**: linear ramps
//! - **Pyramid**: triangular ramp peaking at the centre
//! - **Gaussian / GaussianSym**: bell curves over a configurable axis
//! - **Divide**: a short weight array stretched across the frame count
//! - **Custom**: an arbitrary formula, evaluated in the
//!   [`openblend_formula`] sandbox
//!
//! Curves come either as free functions ([`gaussian`], [`pyramid`], …)
//! or through the serializable [`WeightCurve`] selector for profile
//! layers.
//!
//! # Invariants
//!
//! Every successful result has exactly `frames` elements, sums to 1
//! within floating-point tolerance, and contains only finite values.
//! Generators are pure: no state is carried between calls, and identical
//! arguments yield identical sequences. Degenerate inputs fail fast with
//! a [`WeightError`] instead of being silently corrected.
//!
//! # Example
//!
//! ```
//! use openblend_weights::{WeightCurve, custom, pyramid};
//!
//! // Closed-form curve.
//! let weights = pyramid(5)?;
//! assert_eq!(weights.len(), 5);
//!
//! // Formula-driven curve over the unit interval.
//! let weights = custom(24, "exp(-((x - 0.5) / 0.2) ** 2)", &[0.0, 1.0])?;
//! let total: f64 = weights.iter().sum();
//! assert!((total - 1.0).abs() < 1e-9);
//!
//! // Declarative selection, e.g. deserialized from a profile.
//! let curve = WeightCurve::Pyramid;
//! assert_eq!(curve.weights(5)?, pyramid(5)?);
//! # Ok::<(), openblend_weights::WeightError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bound;
pub mod curve_kind;
pub mod custom;
pub mod divide;
pub mod error;
pub mod gaussian;
pub mod linear;
pub mod normalize;
pub mod pyramid;
pub mod sample;

pub use bound::Bound;
pub use curve_kind::WeightCurve;
pub use custom::custom;
pub use divide::divide;
pub use error::WeightError;
pub use gaussian::{DEFAULT_GAUSSIAN_BOUND, gaussian, gaussian_sym};
pub use linear::{ascending, descending, equal};
pub use normalize::normalize;
pub use pyramid::pyramid;
pub use sample::scale_range;

pub use openblend_formula::{Formula, FormulaError};
