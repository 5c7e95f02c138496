use tracing::{debug, trace};

use crate::{
    config::EvalOptions,
    error::RuntimeError,
    interpreter::evaluator::{binary::core::apply_binary, unary::apply_unary},
    token::{Token, render},
    util::stack::Stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix token sequence.
///
/// Numbers are pushed on an operand stack. A unary operator replaces the top
/// value with its result; a binary operator pops the right operand, then the
/// left one, and pushes the result. Exactly one value must remain at the end.
///
/// Both operands of `&&` and `||` are always evaluated, so `0 && 1/0` fails.
///
/// # Errors
/// - [`RuntimeError::StackUnderflow`] when an operator lacks operands, or
///   when the sequence produces no value.
/// - [`RuntimeError::TrailingOperands`] when more than one value remains.
/// - [`RuntimeError::InvalidToken`] for a parenthesis in the sequence.
/// - [`RuntimeError::DivisionByZero`] and [`RuntimeError::Overflow`] from the
///   operators themselves.
///
/// # Example
/// ```
/// use infixa::{
///     config::EvalOptions,
///     error::RuntimeError,
///     interpreter::evaluator::core::evaluate_postfix,
///     token::{BinaryOperator, Token},
/// };
///
/// let options = EvalOptions::default();
/// let postfix = [Token::Number(7), Token::Number(2), Token::Binary(BinaryOperator::Sub)];
/// assert_eq!(evaluate_postfix(&postfix, &options), Ok(5));
///
/// let err = evaluate_postfix(&[Token::Binary(BinaryOperator::Add)], &options).unwrap_err();
/// assert_eq!(err, RuntimeError::StackUnderflow { needed: 2, found: 0 });
/// ```
pub fn evaluate_postfix(postfix: &[Token], options: &EvalOptions) -> EvalResult<i64> {
    let mut operands: Stack<i64> = Stack::new();

    for &token in postfix {
        match token {
            Token::Number(value) => operands.push(value),
            Token::Unary(op) => {
                let value =
                    operands.pop().ok_or(RuntimeError::StackUnderflow { needed: 1, found: 0 })?;
                let result = apply_unary(op, value)?;
                trace!(operator = %token, value, result, "applied unary operator");
                operands.push(result);
            },
            Token::Binary(op) => {
                let found = operands.len();
                let underflow = move || RuntimeError::StackUnderflow { needed: 2, found };
                let rhs = operands.pop().ok_or_else(underflow)?;
                let lhs = operands.pop().ok_or_else(underflow)?;
                let result = apply_binary(op, lhs, rhs, options.power)?;
                trace!(operator = %token, lhs, rhs, result, "applied binary operator");
                operands.push(result);
            },
            Token::LParen | Token::RParen => {
                debug!(postfix = %render(postfix), "parenthesis in postfix sequence");
                return Err(RuntimeError::InvalidToken { token: token.to_string() });
            },
        }
    }

    if operands.len() > 1 {
        return Err(RuntimeError::TrailingOperands { count: operands.len() });
    }

    let result = operands.pop().ok_or(RuntimeError::StackUnderflow { needed: 1, found: 0 })?;
    debug!(result, "evaluated postfix");
    Ok(result)
}
