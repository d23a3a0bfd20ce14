//! Sandboxed Formula Engine for OpenBlend
//!
//! This crate compiles and evaluates the arithmetic formulas that drive
//! custom weight curves. A formula is ordinary math text — `sin(x * pi)`,
//! `exp(-(x - 1) ** 2 / 2)`, `(x > 0.5) * x` — evaluated once per
//! coordinate of a generated axis.
//!
//! # Sandbox
//!
//! Formulas are untrusted input. Instead of handing them to a scripting
//! engine, this crate parses them into a fixed grammar (numeric literals,
//! arithmetic and comparison operators, parentheses, calls) and resolves
//! every identifier at parse time against a static allow-list:
//!
//! - the usual `f64` math functions (`sin`, `sqrt`, `exp`, `log`, …) and
//!   constants (`pi`, `tau`, `e`, `inf`, `nan`);
//! - a small set of general-purpose helpers: `sum`, `abs`, `max`, `min`,
//!   `len`, `pow`, `range`, `round`;
//! - the two evaluation bindings `x` (current coordinate) and `frames`
//!   (coordinate count).
//!
//! Nothing else can be named, so a formula that parses cannot reach any
//! host capability. Nesting depth and generated-sequence length are
//! capped so hostile input cannot exhaust the stack or memory.
//!
//! # Example
//!
//! ```
//! use openblend_formula::Formula;
//!
//! let formula = Formula::parse("x ** 2 + 1")?;
//! let values = formula.eval_sequence(&[0.0, 1.0, 2.0])?;
//! assert_eq!(values, vec![1.0, 2.0, 5.0]);
//! # Ok::<(), openblend_formula::FormulaError>(())
//! ```
//!
//! Failures carry the formula text and the underlying cause:
//!
//! ```
//! use openblend_formula::eval;
//!
//! let err = eval("boo(x)", &[0.0]).unwrap_err();
//! assert!(err.to_string().contains("unknown function `boo`"));
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod ast;
mod eval;
pub mod error;
mod parser;
mod symbols;
mod token;

pub use error::{FormulaError, FormulaErrorKind};

use crate::ast::Expr;
use crate::eval::{EvalContext, Value, eval_expr};

/// A compiled formula, ready for repeated evaluation.
///
/// Parsing resolves every name, so a `Formula` holds no references to
/// anything but its own tree; evaluation is a pure function of the
/// formula and the `(x, frames)` context, with no state carried between
/// calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    expression: String,
    root: Expr,
}

impl Formula {
    /// Compile `expression` against the allow-listed namespace.
    ///
    /// # Errors
    ///
    /// Returns a [`FormulaError`] if the text does not lex or parse, or
    /// if it names an identifier or function outside the sandbox.
    pub fn parse(expression: &str) -> Result<Self, FormulaError> {
        match parser::parse(expression) {
            Ok(root) => Ok(Self {
                expression: expression.to_string(),
                root,
            }),
            Err(kind) => Err(FormulaError::new(expression, kind)),
        }
    }

    /// The formula text as supplied to [`Formula::parse`].
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Evaluate at a single coordinate.
    ///
    /// `frames` is the total length of the coordinate sequence the
    /// formula is being mapped over; it is visible to the formula under
    /// that name.
    ///
    /// # Errors
    ///
    /// Returns a [`FormulaError`] on runtime failures (division by zero,
    /// math domain errors) or if the formula result is a sequence rather
    /// than a number.
    pub fn eval_at(&self, x: f64, frames: usize) -> Result<f64, FormulaError> {
        let ctx = EvalContext {
            x,
            frames: frames as f64,
        };
        let value =
            eval_expr(&self.root, &ctx).map_err(|kind| FormulaError::new(&self.expression, kind))?;
        match value {
            Value::Scalar(v) => Ok(v),
            other => Err(FormulaError::new(
                &self.expression,
                FormulaErrorKind::TypeMismatch {
                    context: "the formula result".to_string(),
                    expected: "a number",
                    found: other.kind_name(),
                },
            )),
        }
    }

    /// Evaluate once per element of `coords`, in order.
    ///
    /// The output has the same length as `coords`. Elements are
    /// independent; a failure at any element fails the whole evaluation.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormulaError`] encountered, if any.
    pub fn eval_sequence(&self, coords: &[f64]) -> Result<Vec<f64>, FormulaError> {
        let frames = coords.len();
        coords.iter().map(|&x| self.eval_at(x, frames)).collect()
    }
}

/// One-shot convenience: parse `expression` and map it over `coords`.
///
/// # Errors
///
/// Returns a [`FormulaError`] from either compilation or evaluation.
pub fn eval(expression: &str, coords: &[f64]) -> Result<Vec<f64>, FormulaError> {
    Formula::parse(expression)?.eval_sequence(coords)
}
