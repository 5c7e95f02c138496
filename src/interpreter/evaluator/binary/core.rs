use crate::{
    config::PowerMode,
    interpreter::evaluator::{
        binary::{
            arithmetic::eval_arithmetic, comparison::eval_comparison, logic::eval_logic,
            power::eval_pow,
        },
        core::EvalResult,
    },
    token::BinaryOperator,
};

/// Applies a binary operator to two values.
///
/// Routes the operator to its family: arithmetic, power, comparison or
/// logic. Comparisons and logical connectives yield `1` or `0`.
///
/// # Parameters
/// - `op`: The operator.
/// - `lhs`: Left operand.
/// - `rhs`: Right operand.
/// - `power`: How `^` is computed.
///
/// # Example
/// ```
/// use infixa::{
///     config::PowerMode, interpreter::evaluator::binary::core::apply_binary,
///     token::BinaryOperator,
/// };
///
/// assert_eq!(apply_binary(BinaryOperator::Sub, 3, 4, PowerMode::Lossy), Ok(-1));
/// assert_eq!(apply_binary(BinaryOperator::LessEqual, 3, 4, PowerMode::Lossy), Ok(1));
/// assert_eq!(apply_binary(BinaryOperator::Pow, 2, 10, PowerMode::Exact), Ok(1024));
/// assert!(apply_binary(BinaryOperator::Mod, 3, 0, PowerMode::Lossy).is_err());
/// ```
pub fn apply_binary(op: BinaryOperator, lhs: i64, rhs: i64, power: PowerMode) -> EvalResult<i64> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or, Pow,
        Sub,
    };

    match op {
        Add | Sub | Mul | Div | Mod => eval_arithmetic(op, lhs, rhs),
        Pow => eval_pow(lhs, rhs, power),
        Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
            eval_comparison(op, lhs, rhs)
        },
        And | Or => eval_logic(op, lhs, rhs),
    }
}
