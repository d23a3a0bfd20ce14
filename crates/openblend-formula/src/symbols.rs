//! The allow-listed namespace: functions and constants reachable from a
//! formula.
//!
//! This is the sandbox boundary. The table is static, built once, and
//! consulted read-only at parse time; nothing outside it can be named in
//! an expression. Per-evaluation state (`x`, `frames`) is passed as an
//! explicit context instead of being injected into a namespace.

use std::f64::consts;

/// How many arguments a function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arity {
    Exact(usize),
    Between(usize, usize),
    AtLeast(usize),
}

impl Arity {
    pub(crate) fn accepts(self, n: usize) -> bool {
        match self {
            Arity::Exact(want) => n == want,
            Arity::Between(lo, hi) => n >= lo && n <= hi,
            Arity::AtLeast(min) => n >= min,
        }
    }

    pub(crate) fn describe(self) -> String {
        match self {
            Arity::Exact(1) => "exactly 1 argument".to_string(),
            Arity::Exact(want) => format!("exactly {want} arguments"),
            Arity::Between(lo, hi) => format!("between {lo} and {hi} arguments"),
            Arity::AtLeast(1) => "at least 1 argument".to_string(),
            Arity::AtLeast(min) => format!("at least {min} arguments"),
        }
    }
}

/// Whether a fold picks the largest or the smallest element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extremum {
    Max,
    Min,
}

/// Evaluation strategy for an allow-listed function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum FunctionKind {
    /// One scalar in, one scalar out.
    Map1(fn(f64) -> f64),
    /// Two scalars in, one scalar out.
    Map2(fn(f64, f64) -> f64),
    /// `max`/`min` over one sequence or two-or-more scalars.
    Fold(Extremum),
    /// `sum(sequence)`.
    Sum,
    /// `len(sequence)`.
    Len,
    /// `range(stop)`, `range(start, stop)`, `range(start, stop, step)`.
    Range,
    /// `round(x)` or `round(x, ndigits)`.
    Round,
}

/// One entry of the allow-listed function table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FunctionDef {
    pub name: &'static str,
    pub arity: Arity,
    pub kind: FunctionKind,
}

fn fmod(x: f64, y: f64) -> f64 {
    x % y
}

/// Every function a formula may call. Sorted by name.
static FUNCTIONS: &[FunctionDef] = &[
    FunctionDef {
        name: "abs",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::abs),
    },
    FunctionDef {
        name: "acos",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::acos),
    },
    FunctionDef {
        name: "acosh",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::acosh),
    },
    FunctionDef {
        name: "asin",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::asin),
    },
    FunctionDef {
        name: "asinh",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::asinh),
    },
    FunctionDef {
        name: "atan",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::atan),
    },
    FunctionDef {
        name: "atan2",
        arity: Arity::Exact(2),
        kind: FunctionKind::Map2(f64::atan2),
    },
    FunctionDef {
        name: "atanh",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::atanh),
    },
    FunctionDef {
        name: "cbrt",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::cbrt),
    },
    FunctionDef {
        name: "ceil",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::ceil),
    },
    FunctionDef {
        name: "copysign",
        arity: Arity::Exact(2),
        kind: FunctionKind::Map2(f64::copysign),
    },
    FunctionDef {
        name: "cos",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::cos),
    },
    FunctionDef {
        name: "cosh",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::cosh),
    },
    FunctionDef {
        name: "degrees",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::to_degrees),
    },
    FunctionDef {
        name: "exp",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::exp),
    },
    FunctionDef {
        name: "exp2",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::exp2),
    },
    FunctionDef {
        name: "expm1",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::exp_m1),
    },
    FunctionDef {
        name: "fabs",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::abs),
    },
    FunctionDef {
        name: "floor",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::floor),
    },
    FunctionDef {
        name: "fmod",
        arity: Arity::Exact(2),
        kind: FunctionKind::Map2(fmod),
    },
    FunctionDef {
        name: "hypot",
        arity: Arity::Exact(2),
        kind: FunctionKind::Map2(f64::hypot),
    },
    FunctionDef {
        name: "len",
        arity: Arity::Exact(1),
        kind: FunctionKind::Len,
    },
    FunctionDef {
        name: "log",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::ln),
    },
    FunctionDef {
        name: "log10",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::log10),
    },
    FunctionDef {
        name: "log1p",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::ln_1p),
    },
    FunctionDef {
        name: "log2",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::log2),
    },
    FunctionDef {
        name: "max",
        arity: Arity::AtLeast(1),
        kind: FunctionKind::Fold(Extremum::Max),
    },
    FunctionDef {
        name: "min",
        arity: Arity::AtLeast(1),
        kind: FunctionKind::Fold(Extremum::Min),
    },
    FunctionDef {
        name: "pow",
        arity: Arity::Exact(2),
        kind: FunctionKind::Map2(f64::powf),
    },
    FunctionDef {
        name: "radians",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::to_radians),
    },
    FunctionDef {
        name: "range",
        arity: Arity::Between(1, 3),
        kind: FunctionKind::Range,
    },
    FunctionDef {
        name: "round",
        arity: Arity::Between(1, 2),
        kind: FunctionKind::Round,
    },
    FunctionDef {
        name: "sin",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::sin),
    },
    FunctionDef {
        name: "sinh",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::sinh),
    },
    FunctionDef {
        name: "sqrt",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::sqrt),
    },
    FunctionDef {
        name: "sum",
        arity: Arity::Exact(1),
        kind: FunctionKind::Sum,
    },
    FunctionDef {
        name: "tan",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::tan),
    },
    FunctionDef {
        name: "tanh",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::tanh),
    },
    FunctionDef {
        name: "trunc",
        arity: Arity::Exact(1),
        kind: FunctionKind::Map1(f64::trunc),
    },
];

/// Look up an allow-listed function by name.
pub(crate) fn function(name: &str) -> Option<&'static FunctionDef> {
    FUNCTIONS.iter().find(|def| def.name == name)
}

/// Look up an allow-listed constant by name.
pub(crate) fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        "tau" => Some(consts::TAU),
        "e" => Some(consts::E),
        "inf" => Some(f64::INFINITY),
        "nan" => Some(f64::NAN),
        _ => None,
    }
}
