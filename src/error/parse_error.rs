use crate::error::ErrorKind;

/// Represents all errors that can occur during tokenization or conversion to
/// postfix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a character that starts no recognised lexeme.
    #[error("Invalid token '{token}' at offset {offset}.")]
    InvalidToken {
        /// The offending text.
        token:  String,
        /// Byte offset into the expression.
        offset: usize,
    },
    /// Found an operator-shaped lexeme with no meaning in its position, such
    /// as a lone `&` or a `++` following a value.
    #[error("Unknown operator '{operator}' at offset {offset}.")]
    UnknownOperator {
        /// The operator text.
        operator: String,
        /// Byte offset into the expression.
        offset:   usize,
    },
    /// An integer literal does not fit in an `i64`.
    #[error("Literal '{literal}' at offset {offset} is too large.")]
    LiteralTooLarge {
        /// The literal digits.
        literal: String,
        /// Byte offset into the expression.
        offset:  usize,
    },
    /// A parenthesis has no partner.
    #[error("Unbalanced parenthesis: unmatched '{paren}'.")]
    UnboundedParenthesis {
        /// The unmatched parenthesis, `(` or `)`.
        paren: char,
    },
}

/// Result of a tokenizer or converter step.
pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// Returns the failure kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidToken { .. } => ErrorKind::InvalidToken,
            Self::UnknownOperator { .. } => ErrorKind::UnknownOperator,
            Self::LiteralTooLarge { .. } => ErrorKind::LiteralTooLarge,
            Self::UnboundedParenthesis { .. } => ErrorKind::UnboundedParenthesis,
        }
    }
}
