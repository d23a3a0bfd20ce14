//! Error types for formula compilation and evaluation.

/// Error produced while parsing or evaluating a formula.
///
/// The offending expression text is always attached so that a caller
/// holding only the error can still report which formula failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("formula `{expression}`: {kind}")]
pub struct FormulaError {
    /// The formula text as supplied by the caller.
    pub expression: String,
    /// What went wrong.
    pub kind: FormulaErrorKind,
}

impl FormulaError {
    pub(crate) fn new(expression: &str, kind: FormulaErrorKind) -> Self {
        Self {
            expression: expression.to_string(),
            kind,
        }
    }
}

/// The underlying cause of a [`FormulaError`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum FormulaErrorKind {
    /// A character outside the grammar was encountered.
    #[error("unexpected character `{found}` at offset {offset}")]
    UnexpectedCharacter {
        /// The rejected character.
        found: char,
        /// Byte offset into the expression.
        offset: usize,
    },

    /// A numeric literal could not be read.
    #[error("malformed number `{literal}` at offset {offset}")]
    MalformedNumber {
        /// The literal as scanned.
        literal: String,
        /// Byte offset into the expression.
        offset: usize,
    },

    /// A token appeared where the grammar does not allow it.
    #[error("unexpected {found} at offset {offset}, expected {expected}")]
    UnexpectedToken {
        /// Description of the offending token.
        found: String,
        /// What the parser was looking for.
        expected: &'static str,
        /// Byte offset into the expression.
        offset: usize,
    },

    /// The expression ended before the grammar was satisfied.
    #[error("unexpected end of formula, expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
    },

    /// Parenthesis or operator nesting exceeded the supported depth.
    #[error("expression nesting exceeds the supported depth of {limit}")]
    NestingTooDeep {
        /// Maximum nesting depth.
        limit: usize,
    },

    /// An identifier is not in the allow-listed namespace.
    #[error("unknown identifier `{name}`")]
    UnknownIdentifier {
        /// The identifier as written.
        name: String,
    },

    /// A called function is not in the allow-listed namespace.
    #[error("unknown function `{name}`")]
    UnknownFunction {
        /// The function name as written.
        name: String,
    },

    /// A function was called with the wrong number of arguments.
    #[error("`{function}()` takes {expected}, got {got}")]
    Arity {
        /// The function name.
        function: &'static str,
        /// Human-readable arity description.
        expected: String,
        /// Number of arguments supplied.
        got: usize,
    },

    /// A number was supplied where a sequence was needed, or vice versa.
    #[error("{context} expects {expected}, got {found}")]
    TypeMismatch {
        /// Where the mismatch occurred.
        context: String,
        /// The expected kind of value.
        expected: &'static str,
        /// The kind of value found.
        found: &'static str,
    },

    /// Division (or floor division / modulo) by zero.
    #[error("division by zero in `{operator}`")]
    DivisionByZero {
        /// The operator that divided by zero.
        operator: &'static str,
    },

    /// A math operation on finite inputs produced a non-finite result.
    #[error("math domain error: {context} is not finite")]
    NonFinite {
        /// The offending call or operator, with its operands.
        context: String,
    },

    /// `max`/`min` over a sequence with no elements.
    #[error("`{function}()` of an empty sequence")]
    EmptySequence {
        /// The function name.
        function: &'static str,
    },

    /// An argument value is outside what the function accepts.
    #[error("`{function}()`: {reason}")]
    InvalidArgument {
        /// The function name.
        function: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },

    /// A generated sequence would exceed the sandbox size cap.
    #[error("`{function}()` would produce {requested} elements, limit is {limit}")]
    SequenceTooLong {
        /// The function name.
        function: &'static str,
        /// Number of elements the call asked for.
        requested: f64,
        /// Maximum permitted length.
        limit: usize,
    },
}
