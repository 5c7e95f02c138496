use crate::{
    config::PowerMode,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    token::BinaryOperator,
    util::num::{f64_to_i64_truncated, i64_to_f64_lossy, i64_to_u32_checked},
};

/// Evaluates `base ^ exponent`.
///
/// With [`PowerMode::Lossy`] both operands go through `f64::powf` and the
/// result is truncated toward zero; results above `2^53` are rounded
/// before truncation. With [`PowerMode::Exact`] the power is computed with
/// checked integer arithmetic. Negative exponents truncate toward zero in
/// both modes, so `2 ^ -1` is `0`.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for zero raised to a negative power.
/// - [`RuntimeError::Overflow`] when the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use infixa::{config::PowerMode, interpreter::evaluator::binary::power::eval_pow};
///
/// assert_eq!(eval_pow(2, 10, PowerMode::Lossy), Ok(1024));
/// assert_eq!(eval_pow(-2, 3, PowerMode::Exact), Ok(-8));
/// assert_eq!(eval_pow(-1, -3, PowerMode::Exact), Ok(-1));
///
/// // Above 2^53 the floating-point path rounds.
/// assert_eq!(eval_pow(3, 39, PowerMode::Exact), Ok(4_052_555_153_018_976_267));
/// assert_ne!(eval_pow(3, 39, PowerMode::Lossy), Ok(4_052_555_153_018_976_267));
/// ```
pub fn eval_pow(base: i64, exponent: i64, mode: PowerMode) -> EvalResult<i64> {
    if base == 0 && exponent < 0 {
        return Err(RuntimeError::DivisionByZero);
    }

    match mode {
        PowerMode::Lossy => {
            let result = i64_to_f64_lossy(base).powf(i64_to_f64_lossy(exponent));
            f64_to_i64_truncated(result, RuntimeError::overflow(BinaryOperator::Pow))
        },
        PowerMode::Exact => exact_pow(base, exponent),
    }
}

fn exact_pow(base: i64, exponent: i64) -> EvalResult<i64> {
    let odd = exponent % 2 != 0;

    match base {
        1 => Ok(1),
        -1 => Ok(if odd { -1 } else { 1 }),
        _ if exponent < 0 => Ok(0),
        0 => Ok(i64::from(exponent == 0)),
        _ => {
            let exponent =
                i64_to_u32_checked(exponent, RuntimeError::overflow(BinaryOperator::Pow))?;
            base.checked_pow(exponent)
                .ok_or_else(|| RuntimeError::overflow(BinaryOperator::Pow))
        },
    }
}
