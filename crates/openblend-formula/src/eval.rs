//! Tree-walking evaluation against an explicit context.
//!
//! The context carries the only per-evaluation bindings (`x`, `frames`);
//! everything else was resolved at parse time. Evaluation is a pure
//! function of the tree and the context.
//!
//! Division (including floor division and modulo) by zero is an error,
//! and a function call or `**` on finite operands that produces a
//! non-finite result is a math domain error. Plain `+ - *` overflow to
//! infinity without failing, as IEEE arithmetic does.

use crate::ast::{BinaryOp, Expr};
use crate::error::FormulaErrorKind;
use crate::symbols::{Extremum, FunctionDef, FunctionKind};

/// Sequences a formula may build (`range`) are capped so a hostile
/// expression cannot exhaust memory.
pub(crate) const MAX_SEQUENCE_LEN: usize = 1 << 20;

/// Per-evaluation bindings.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EvalContext {
    /// Current coordinate, rebound per element.
    pub x: f64,
    /// Length of the coordinate sequence, constant per evaluation.
    pub frames: f64,
}

/// A value flowing through evaluation: a scalar, or a sequence produced
/// by `range` and consumed by `sum`/`len`/`max`/`min`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl Value {
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "a number",
            Value::Sequence(_) => "a sequence",
        }
    }
}

pub(crate) fn eval_expr(expr: &Expr, ctx: &EvalContext) -> Result<Value, FormulaErrorKind> {
    match expr {
        Expr::Number(value) => Ok(Value::Scalar(*value)),
        Expr::Coord => Ok(Value::Scalar(ctx.x)),
        Expr::FrameCount => Ok(Value::Scalar(ctx.frames)),
        Expr::Neg(operand) => {
            let value = require_scalar(eval_expr(operand, ctx)?, "unary `-`")?;
            Ok(Value::Scalar(-value))
        }
        Expr::Binary { op, lhs, rhs } => {
            let context = op.symbol();
            let lhs = require_scalar(eval_expr(lhs, ctx)?, context)?;
            let rhs = require_scalar(eval_expr(rhs, ctx)?, context)?;
            apply_binary(*op, lhs, rhs)
        }
        Expr::Call { function, args } => {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(eval_expr(arg, ctx)?);
            }
            apply_function(*function, values)
        }
    }
}

fn require_scalar(value: Value, operator: &'static str) -> Result<f64, FormulaErrorKind> {
    match value {
        Value::Scalar(v) => Ok(v),
        other => Err(FormulaErrorKind::TypeMismatch {
            context: format!("operator `{operator}`"),
            expected: "a number",
            found: other.kind_name(),
        }),
    }
}

fn bool_value(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}

fn apply_binary(op: BinaryOp, lhs: f64, rhs: f64) -> Result<Value, FormulaErrorKind> {
    let value = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Sub => lhs - rhs,
        BinaryOp::Mul => lhs * rhs,
        BinaryOp::Div => {
            if rhs == 0.0 {
                return Err(FormulaErrorKind::DivisionByZero { operator: "/" });
            }
            lhs / rhs
        }
        BinaryOp::FloorDiv => {
            if rhs == 0.0 {
                return Err(FormulaErrorKind::DivisionByZero { operator: "//" });
            }
            (lhs / rhs).floor()
        }
        // Modulo takes the sign of the divisor, matching `x - y*floor(x/y)`.
        BinaryOp::Rem => {
            if rhs == 0.0 {
                return Err(FormulaErrorKind::DivisionByZero { operator: "%" });
            }
            lhs - rhs * (lhs / rhs).floor()
        }
        BinaryOp::Pow => {
            let value = lhs.powf(rhs);
            if lhs.is_finite() && rhs.is_finite() && !value.is_finite() {
                return Err(FormulaErrorKind::NonFinite {
                    context: format!("`{lhs} ** {rhs}`"),
                });
            }
            value
        }
        BinaryOp::Lt => bool_value(lhs < rhs),
        BinaryOp::Le => bool_value(lhs <= rhs),
        BinaryOp::Gt => bool_value(lhs > rhs),
        BinaryOp::Ge => bool_value(lhs >= rhs),
        BinaryOp::Eq => bool_value(lhs == rhs),
        BinaryOp::Ne => bool_value(lhs != rhs),
    };
    Ok(Value::Scalar(value))
}

fn checked1(name: &'static str, x: f64, value: f64) -> Result<Value, FormulaErrorKind> {
    if x.is_finite() && !value.is_finite() {
        return Err(FormulaErrorKind::NonFinite {
            context: format!("`{name}({x})`"),
        });
    }
    Ok(Value::Scalar(value))
}

fn checked2(name: &'static str, x: f64, y: f64, value: f64) -> Result<Value, FormulaErrorKind> {
    if x.is_finite() && y.is_finite() && !value.is_finite() {
        return Err(FormulaErrorKind::NonFinite {
            context: format!("`{name}({x}, {y})`"),
        });
    }
    Ok(Value::Scalar(value))
}

fn type_mismatch(
    function: &'static str,
    expected: &'static str,
    found: &Value,
) -> FormulaErrorKind {
    FormulaErrorKind::TypeMismatch {
        context: format!("`{function}()`"),
        expected,
        found: found.kind_name(),
    }
}

fn arity_error(def: &'static FunctionDef, got: usize) -> FormulaErrorKind {
    FormulaErrorKind::Arity {
        function: def.name,
        expected: def.arity.describe(),
        got,
    }
}

fn apply_function(
    def: &'static FunctionDef,
    args: Vec<Value>,
) -> Result<Value, FormulaErrorKind> {
    match def.kind {
        FunctionKind::Map1(f) => match args.as_slice() {
            [Value::Scalar(x)] => checked1(def.name, *x, f(*x)),
            [other] => Err(type_mismatch(def.name, "a number", other)),
            _ => Err(arity_error(def, args.len())),
        },
        FunctionKind::Map2(f) => match args.as_slice() {
            [Value::Scalar(x), Value::Scalar(y)] => checked2(def.name, *x, *y, f(*x, *y)),
            [a, b] => {
                let offender = if matches!(a, Value::Sequence(_)) { a } else { b };
                Err(type_mismatch(def.name, "numbers", offender))
            }
            _ => Err(arity_error(def, args.len())),
        },
        FunctionKind::Fold(extremum) => apply_fold(def, extremum, &args),
        FunctionKind::Sum => match args.as_slice() {
            [Value::Sequence(items)] => Ok(Value::Scalar(items.iter().sum())),
            [other] => Err(type_mismatch(def.name, "a sequence", other)),
            _ => Err(arity_error(def, args.len())),
        },
        FunctionKind::Len => match args.as_slice() {
            [Value::Sequence(items)] => Ok(Value::Scalar(items.len() as f64)),
            [other] => Err(type_mismatch(def.name, "a sequence", other)),
            _ => Err(arity_error(def, args.len())),
        },
        FunctionKind::Range => apply_range(def, &args),
        FunctionKind::Round => match args.as_slice() {
            [Value::Scalar(x)] => Ok(Value::Scalar(x.round())),
            [Value::Scalar(x), Value::Scalar(digits)] => {
                let digits = digits.trunc().clamp(-300.0, 300.0) as i32;
                let factor = 10f64.powi(digits);
                Ok(Value::Scalar((x * factor).round() / factor))
            }
            [a, b] => {
                let offender = if matches!(a, Value::Sequence(_)) { a } else { b };
                Err(type_mismatch(def.name, "numbers", offender))
            }
            _ => Err(arity_error(def, args.len())),
        },
    }
}

/// `max`/`min`: one sequence argument, or two-or-more scalars.
fn apply_fold(
    def: &'static FunctionDef,
    extremum: Extremum,
    args: &[Value],
) -> Result<Value, FormulaErrorKind> {
    let fold = |acc: f64, v: f64| match extremum {
        Extremum::Max => acc.max(v),
        Extremum::Min => acc.min(v),
    };

    match args {
        [] => Err(arity_error(def, 0)),
        [Value::Sequence(items)] => {
            let mut iter = items.iter().copied();
            let Some(first) = iter.next() else {
                return Err(FormulaErrorKind::EmptySequence { function: def.name });
            };
            Ok(Value::Scalar(iter.fold(first, fold)))
        }
        [single] => Err(type_mismatch(def.name, "a sequence or several numbers", single)),
        many => {
            let mut acc: Option<f64> = None;
            for value in many {
                match value {
                    Value::Scalar(v) => {
                        acc = Some(match acc {
                            Some(current) => fold(current, *v),
                            None => *v,
                        });
                    }
                    other => return Err(type_mismatch(def.name, "numbers", other)),
                }
            }
            match acc {
                Some(result) => Ok(Value::Scalar(result)),
                None => Err(arity_error(def, 0)),
            }
        }
    }
}

/// `range`: integral bounds, non-zero step, capped length.
fn apply_range(def: &'static FunctionDef, args: &[Value]) -> Result<Value, FormulaErrorKind> {
    let (start, stop, step) = match args {
        [Value::Scalar(stop)] => (0.0, *stop, 1.0),
        [Value::Scalar(start), Value::Scalar(stop)] => (*start, *stop, 1.0),
        [Value::Scalar(start), Value::Scalar(stop), Value::Scalar(step)] => {
            (*start, *stop, *step)
        }
        short if short.len() <= 3 => {
            let offender = short.iter().find(|v| matches!(v, Value::Sequence(_)));
            return match offender {
                Some(seq) => Err(type_mismatch(def.name, "numbers", seq)),
                None => Err(arity_error(def, short.len())),
            };
        }
        long => return Err(arity_error(def, long.len())),
    };

    if !start.is_finite() || !stop.is_finite() || !step.is_finite() {
        return Err(FormulaErrorKind::InvalidArgument {
            function: def.name,
            reason: "bounds must be finite",
        });
    }

    let (start, stop, step) = (start.trunc(), stop.trunc(), step.trunc());
    if step == 0.0 {
        return Err(FormulaErrorKind::InvalidArgument {
            function: def.name,
            reason: "step must not be zero",
        });
    }

    let count = ((stop - start) / step).ceil().max(0.0);
    if count > MAX_SEQUENCE_LEN as f64 {
        return Err(FormulaErrorKind::SequenceTooLong {
            function: def.name,
            requested: count,
            limit: MAX_SEQUENCE_LEN,
        });
    }

    let count = count as usize;
    let items = (0..count).map(|i| start + step * i as f64).collect();
    Ok(Value::Sequence(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    fn eval_one(text: &str, x: f64, frames: f64) -> Result<Value, FormulaErrorKind> {
        let expr = must(parse(text));
        eval_expr(&expr, &EvalContext { x, frames })
    }

    fn scalar(text: &str, x: f64, frames: f64) -> f64 {
        match must(eval_one(text, x, frames)) {
            Value::Scalar(v) => v,
            Value::Sequence(items) => panic!("expected scalar, got sequence {:?}", items),
        }
    }

    #[test]
    fn test_eval_bindings() {
        assert!((scalar("x", 2.5, 10.0) - 2.5).abs() < 1e-12);
        assert!((scalar("frames", 0.0, 10.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_eval_arithmetic() {
        assert!((scalar("1 + 2 * 3", 0.0, 1.0) - 7.0).abs() < 1e-12);
        assert!((scalar("(1 + 2) * 3", 0.0, 1.0) - 9.0).abs() < 1e-12);
        assert!((scalar("2 ** 10", 0.0, 1.0) - 1024.0).abs() < 1e-12);
        assert!((scalar("7 // 2", 0.0, 1.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_eval_modulo_takes_divisor_sign() {
        assert!((scalar("-7 % 3", 0.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((scalar("7 % -3", 0.0, 1.0) - -2.0).abs() < 1e-12);
    }

    #[test]
    fn test_eval_fmod_takes_dividend_sign() {
        assert!((scalar("fmod(-7, 3)", 0.0, 1.0) - -1.0).abs() < 1e-12);
    }

    #[test]
    fn test_eval_comparisons_produce_unit_booleans() {
        assert!((scalar("1 < 2", 0.0, 1.0) - 1.0).abs() < 1e-12);
        assert!((scalar("2 < 1", 0.0, 1.0) - 0.0).abs() < 1e-12);
        assert!((scalar("(x > 0.5) * x", 0.75, 1.0) - 0.75).abs() < 1e-12);
        assert!((scalar("(x > 0.5) * x", 0.25, 1.0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_eval_division_by_zero() {
        assert!(matches!(
            eval_one("1 / 0", 0.0, 1.0),
            Err(FormulaErrorKind::DivisionByZero { operator: "/" })
        ));
        assert!(matches!(
            eval_one("1 // 0", 0.0, 1.0),
            Err(FormulaErrorKind::DivisionByZero { operator: "//" })
        ));
        assert!(matches!(
            eval_one("1 % 0", 0.0, 1.0),
            Err(FormulaErrorKind::DivisionByZero { operator: "%" })
        ));
    }

    #[test]
    fn test_eval_math_domain_errors() {
        assert!(matches!(
            eval_one("sqrt(0 - 1)", 0.0, 1.0),
            Err(FormulaErrorKind::NonFinite { .. })
        ));
        assert!(matches!(
            eval_one("log(0)", 0.0, 1.0),
            Err(FormulaErrorKind::NonFinite { .. })
        ));
        assert!(matches!(
            eval_one("exp(1000)", 0.0, 1.0),
            Err(FormulaErrorKind::NonFinite { .. })
        ));
    }

    #[test]
    fn test_eval_infinity_propagates_without_error() {
        let value = scalar("exp(inf)", 0.0, 1.0);
        assert!(value.is_infinite() && value > 0.0);
    }

    #[test]
    fn test_eval_pow_overflow_is_domain_error() {
        assert!(matches!(
            eval_one("10 ** 1000", 0.0, 1.0),
            Err(FormulaErrorKind::NonFinite { .. })
        ));
    }

    #[test]
    fn test_eval_range_and_sum() {
        assert!((scalar("sum(range(5))", 0.0, 1.0) - 10.0).abs() < 1e-12);
        assert!((scalar("sum(range(1, 4))", 0.0, 1.0) - 6.0).abs() < 1e-12);
        assert!((scalar("sum(range(0, 10, 2))", 0.0, 1.0) - 20.0).abs() < 1e-12);
        assert!((scalar("len(range(frames))", 0.0, 7.0) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_eval_range_descending() {
        assert!((scalar("sum(range(5, 0, -1))", 0.0, 1.0) - 15.0).abs() < 1e-12);
        assert!((scalar("len(range(5, 0))", 0.0, 1.0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_eval_range_zero_step_rejected() {
        assert!(matches!(
            eval_one("range(1, 5, 0)", 0.0, 1.0),
            Err(FormulaErrorKind::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_eval_range_cap() {
        assert!(matches!(
            eval_one("range(1e18)", 0.0, 1.0),
            Err(FormulaErrorKind::SequenceTooLong { .. })
        ));
    }

    #[test]
    fn test_eval_max_min() {
        assert!((scalar("max(1, 2, 3)", 0.0, 1.0) - 3.0).abs() < 1e-12);
        assert!((scalar("min(1, 2, 3)", 0.0, 1.0) - 1.0).abs() < 1e-12);
        assert!((scalar("max(range(5))", 0.0, 1.0) - 4.0).abs() < 1e-12);
        assert!((scalar("min(range(2, 9))", 0.0, 1.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_eval_max_of_single_scalar_rejected() {
        assert!(matches!(
            eval_one("max(3)", 0.0, 1.0),
            Err(FormulaErrorKind::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_eval_max_of_empty_sequence_rejected() {
        assert!(matches!(
            eval_one("max(range(0))", 0.0, 1.0),
            Err(FormulaErrorKind::EmptySequence { function: "max" })
        ));
    }

    #[test]
    fn test_eval_round() {
        assert!((scalar("round(2.5)", 0.0, 1.0) - 3.0).abs() < 1e-12);
        assert!((scalar("round(2.4)", 0.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((scalar("round(2.567, 2)", 0.0, 1.0) - 2.57).abs() < 1e-9);
    }

    #[test]
    fn test_eval_sequence_in_arithmetic_rejected() {
        assert!(matches!(
            eval_one("range(3) + 1", 0.0, 1.0),
            Err(FormulaErrorKind::TypeMismatch { .. })
        ));
        assert!(matches!(
            eval_one("-range(3)", 0.0, 1.0),
            Err(FormulaErrorKind::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_eval_sum_of_scalar_rejected() {
        assert!(matches!(
            eval_one("sum(1)", 0.0, 1.0),
            Err(FormulaErrorKind::TypeMismatch { .. })
        ));
    }
}
