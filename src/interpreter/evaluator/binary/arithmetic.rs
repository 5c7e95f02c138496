use crate::{
    error::RuntimeError, interpreter::evaluator::core::EvalResult, token::BinaryOperator,
};

/// Evaluates `+`, `-`, `*`, `/` or `%`.
///
/// Division truncates toward zero and the remainder takes the sign of the
/// dividend, so `-7 / 2` is `-3` and `-7 % 2` is `-1`.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for `/` or `%` with a zero `rhs`.
/// - [`RuntimeError::Overflow`] when the result leaves the `i64` range,
///   including `i64::MIN / -1` and `i64::MIN % -1`.
/// - [`RuntimeError::UnknownOperator`] for an operator outside this family.
pub fn eval_arithmetic(op: BinaryOperator, lhs: i64, rhs: i64) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    if matches!(op, Div | Mod) && rhs == 0 {
        return Err(RuntimeError::DivisionByZero);
    }

    let result = match op {
        Add => lhs.checked_add(rhs),
        Sub => lhs.checked_sub(rhs),
        Mul => lhs.checked_mul(rhs),
        Div => lhs.checked_div(rhs),
        Mod => lhs.checked_rem(rhs),
        _ => return Err(RuntimeError::unknown_operator(op)),
    };
    result.ok_or_else(|| RuntimeError::overflow(op))
}
