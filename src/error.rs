/// Tokenizer and converter errors.
///
/// Defines all error types that can occur while turning source text into a
/// postfix token sequence: unrecognised characters, operator-shaped lexemes
/// without meaning, oversized literals, and (under the strict policy)
/// unbalanced parentheses.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing a postfix
/// sequence to a value: missing or surplus operands, division by zero and
/// arithmetic overflow.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseResult};
pub use runtime_error::RuntimeError;

/// The failure kinds a caller can match on, independent of the pipeline
/// phase that raised them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An unrecognised character, or a token the evaluator cannot handle.
    InvalidToken,
    /// An operator-shaped lexeme with no meaning in its position, or an
    /// operator handed to a routine that does not define it.
    UnknownOperator,
    /// An integer literal outside the `i64` range.
    LiteralTooLarge,
    /// An unmatched `(` or `)` (strict parenthesis policy only).
    UnboundedParenthesis,
    /// An operator (or the final read) found too few operands.
    StackUnderflow,
    /// More than one value was left once the sequence was consumed.
    TrailingOperands,
    /// Division or remainder by zero, or zero raised to a negative power.
    DivisionByZero,
    /// The result of an operation does not fit in an `i64`.
    Overflow,
}

/// Any failure of [`crate::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The expression could not be tokenized or converted to postfix.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The postfix sequence could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the failure kind, regardless of the phase that raised it.
    ///
    /// # Example
    /// ```
    /// use infixa::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("5/0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}
