use crate::{
    error::RuntimeError, interpreter::evaluator::core::EvalResult, token::BinaryOperator,
};

/// Evaluates `&&` or `||`, treating every nonzero value as true. The result
/// is `1` or `0`.
///
/// # Errors
/// [`RuntimeError::UnknownOperator`] for an operator other than `&&` or `||`.
pub fn eval_logic(op: BinaryOperator, lhs: i64, rhs: i64) -> EvalResult<i64> {
    let (lhs, rhs) = (lhs != 0, rhs != 0);
    let holds = match op {
        BinaryOperator::And => lhs && rhs,
        BinaryOperator::Or => lhs || rhs,
        _ => return Err(RuntimeError::unknown_operator(op)),
    };
    Ok(i64::from(holds))
}
