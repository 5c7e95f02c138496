use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    token::{Operator, UnaryOperator},
};

/// Applies a unary operator to a value.
///
/// - `Plus`: the value unchanged.
/// - `Negate`: arithmetic negation.
/// - `Not`: `1` if the value is zero, otherwise `0`.
/// - `Increment` / `Decrement`: the value plus or minus one.
///
/// # Errors
/// [`RuntimeError::Overflow`] when negating `i64::MIN` or stepping past
/// either end of the `i64` range.
///
/// # Example
/// ```
/// use infixa::{interpreter::evaluator::unary::apply_unary, token::UnaryOperator};
///
/// assert_eq!(apply_unary(UnaryOperator::Negate, 5), Ok(-5));
/// assert_eq!(apply_unary(UnaryOperator::Not, 0), Ok(1));
/// assert_eq!(apply_unary(UnaryOperator::Not, -3), Ok(0));
/// assert_eq!(apply_unary(UnaryOperator::Increment, 41), Ok(42));
/// assert!(apply_unary(UnaryOperator::Negate, i64::MIN).is_err());
/// ```
pub fn apply_unary(op: UnaryOperator, value: i64) -> EvalResult<i64> {
    let result = match op {
        UnaryOperator::Plus => Some(value),
        UnaryOperator::Negate => value.checked_neg(),
        UnaryOperator::Not => Some(i64::from(value == 0)),
        UnaryOperator::Increment => value.checked_add(1),
        UnaryOperator::Decrement => value.checked_sub(1),
    };
    result.ok_or_else(|| RuntimeError::overflow(Operator::Unary(op)))
}
