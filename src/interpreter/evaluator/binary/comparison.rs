use crate::{
    error::RuntimeError, interpreter::evaluator::core::EvalResult, token::BinaryOperator,
};

/// Evaluates a relational or equality operator, yielding `1` for true and
/// `0` for false.
///
/// # Errors
/// [`RuntimeError::UnknownOperator`] for an operator outside this family.
///
/// # Example
/// ```
/// use infixa::{
///     interpreter::evaluator::binary::comparison::eval_comparison, token::BinaryOperator,
/// };
///
/// assert_eq!(eval_comparison(BinaryOperator::Greater, 3, 2), Ok(1));
/// assert_eq!(eval_comparison(BinaryOperator::NotEqual, 2, 2), Ok(0));
/// assert!(eval_comparison(BinaryOperator::Add, 1, 2).is_err());
/// ```
pub fn eval_comparison(op: BinaryOperator, lhs: i64, rhs: i64) -> EvalResult<i64> {
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    let holds = match op {
        Less => lhs < rhs,
        Greater => lhs > rhs,
        LessEqual => lhs <= rhs,
        GreaterEqual => lhs >= rhs,
        Equal => lhs == rhs,
        NotEqual => lhs != rhs,
        _ => return Err(RuntimeError::unknown_operator(op)),
    };
    Ok(i64::from(holds))
}
