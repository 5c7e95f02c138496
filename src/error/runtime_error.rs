use crate::error::ErrorKind;

/// Represents all errors that can occur while evaluating a postfix sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A token that has no meaning in postfix position, such as a
    /// parenthesis, reached the evaluator.
    #[error("Invalid token in postfix: {token}.")]
    InvalidToken {
        /// The offending token, rendered.
        token: String,
    },
    /// An operator found fewer operands than it needs. Also raised when the
    /// sequence leaves no value at all.
    #[error("Stack underflow: needed {needed} operand(s) but found {found}.")]
    StackUnderflow {
        /// Operands required.
        needed: usize,
        /// Operands available.
        found:  usize,
    },
    /// The sequence left more than one value on the stack.
    #[error("Malformed expression: {count} values left without an operator.")]
    TrailingOperands {
        /// Values left on the stack.
        count: usize,
    },
    /// Attempted division or remainder by zero, or raised zero to a negative
    /// power.
    #[error("Division by zero.")]
    DivisionByZero,
    /// An operator was handed to a routine that does not define it.
    #[error("Unknown operator '{operator}' in postfix.")]
    UnknownOperator {
        /// The operator, rendered.
        operator: String,
    },
    /// An operation produced a value outside the `i64` range.
    #[error("Integer overflow while computing '{operator}'.")]
    Overflow {
        /// The operator that overflowed, rendered.
        operator: String,
    },
}

impl RuntimeError {
    /// Returns the failure kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidToken { .. } => ErrorKind::InvalidToken,
            Self::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            Self::TrailingOperands { .. } => ErrorKind::TrailingOperands,
            Self::UnknownOperator { .. } => ErrorKind::UnknownOperator,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::Overflow { .. } => ErrorKind::Overflow,
        }
    }

    /// Builds an [`RuntimeError::UnknownOperator`] naming `operator`.
    pub(crate) fn unknown_operator(operator: impl std::fmt::Display) -> Self {
        Self::UnknownOperator { operator: operator.to_string() }
    }

    /// Builds an [`RuntimeError::Overflow`] naming `operator`.
    pub(crate) fn overflow(operator: impl std::fmt::Display) -> Self {
        Self::Overflow { operator: operator.to_string() }
    }
}
