/// How the converter treats parentheses without a partner.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ParenthesisPolicy {
    /// An unmatched `)` is dropped silently. A leftover `(` is flushed into
    /// the postfix output, where the evaluator rejects it as an invalid
    /// token.
    #[default]
    Lenient,
    /// Any unmatched parenthesis is reported as
    /// [`ParseError::UnboundedParenthesis`](crate::error::ParseError).
    Strict,
}

/// How `^` is computed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PowerMode {
    /// Both operands are converted to `f64`, raised with `powf`, and the
    /// result is truncated toward zero. Results beyond 2^53 lose precision, so
    /// `3 ^ 39` does not come out exact.
    #[default]
    Lossy,
    /// Checked integer exponentiation. Negative exponents truncate
    /// `1 / base^n` toward zero.
    Exact,
}

/// Options controlling a single evaluation.
///
/// The defaults reproduce the classic behavior of the evaluator: lenient
/// parentheses and floating-point exponentiation.
///
/// # Example
/// ```
/// use infixa::{
///     config::{EvalOptions, ParenthesisPolicy, PowerMode},
///     evaluate_with,
/// };
///
/// let options = EvalOptions { parentheses: ParenthesisPolicy::Strict,
///                             power:       PowerMode::Exact, };
///
/// assert_eq!(evaluate_with("3^39", &options).unwrap(), 4_052_555_153_018_976_267);
/// assert!(evaluate_with("(1+2", &options).is_err());
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Treatment of unmatched parentheses.
    pub parentheses: ParenthesisPolicy,
    /// Semantics of `^`.
    pub power:       PowerMode,
}
