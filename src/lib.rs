//! # infixa
//!
//! infixa evaluates integer infix expressions written as text.
//! It supports arithmetic, exponentiation, comparisons, boolean logic, unary
//! operators and parentheses, and returns a single `i64`.
//!
//! Evaluation is a three-stage pipeline: the lexer turns text into tokens,
//! the converter reorders them into postfix notation with the shunting-yard
//! algorithm, and the evaluator reduces the postfix sequence on an operand
//! stack. Every call is self-contained; nothing is shared between calls.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    config::EvalOptions,
    interpreter::{converter::to_postfix, evaluator::core::evaluate_postfix, lexer::tokenize},
    token::Token,
};

/// Options controlling evaluation.
///
/// This module declares [`config::EvalOptions`] and the policies it selects:
/// how unmatched parentheses are treated and how `^` is computed. The
/// defaults keep the classic, permissive behavior.
pub mod config;
/// Provides the error types for every stage of evaluation.
///
/// This module defines all errors that can be raised during tokenizing,
/// converting or evaluating an expression. Each error carries enough detail
/// for a readable message, and [`error::Error::kind`] maps it to a failure
/// kind callers can match on.
///
/// # Responsibilities
/// - Defines error enums for the parse and runtime phases.
/// - Attaches offsets, operands and operators for context.
/// - Wraps both phases in one error for the top-level entry points.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together the lexer, the precedence table, the
/// infix-to-postfix converter and the postfix evaluator.
///
/// # Responsibilities
/// - Coordinates the three stages.
/// - Provides each stage as a separately callable function.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// Defines the tokens flowing between stages.
///
/// Tokens form a closed set: numbers, parentheses and operators already
/// tagged as unary or binary.
pub mod token;
/// General utilities: numeric conversions and the working stack.
pub mod util;

pub use error::Error;

/// Evaluates an expression with the default options.
///
/// # Errors
/// Returns an error if the expression contains an unrecognised character,
/// is malformed, or an operation fails (division by zero, overflow).
///
/// # Examples
/// ```
/// use infixa::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14);
/// assert_eq!(evaluate("(2+3)*4").unwrap(), 20);
/// assert_eq!(evaluate("2^3^2").unwrap(), 512);
/// assert_eq!(evaluate("1==1 && 2<3").unwrap(), 1);
///
/// let err = evaluate("5/0").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// assert_eq!(err.to_string(), "Division by zero.");
/// ```
pub fn evaluate(expression: &str) -> Result<i64, Error> {
    evaluate_with(expression, &EvalOptions::default())
}

/// Evaluates an expression with explicit options.
///
/// # Errors
/// As [`evaluate`]; in addition, unmatched parentheses fail under
/// [`config::ParenthesisPolicy::Strict`].
///
/// # Examples
/// ```
/// use infixa::{
///     config::{EvalOptions, ParenthesisPolicy},
///     error::ErrorKind,
///     evaluate_with,
/// };
///
/// let strict = EvalOptions { parentheses: ParenthesisPolicy::Strict,
///                            ..EvalOptions::default() };
///
/// assert_eq!(evaluate_with("(1+2))", &EvalOptions::default()).unwrap(), 3);
/// let err = evaluate_with("(1+2))", &strict).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnboundedParenthesis);
/// ```
pub fn evaluate_with(expression: &str, options: &EvalOptions) -> Result<i64, Error> {
    let postfix = compile(expression, options)?;
    let result = evaluate_postfix(&postfix, options)?;
    debug!(expression, result, "evaluated expression");
    Ok(result)
}

/// Tokenizes an expression and converts it to postfix order without
/// evaluating it.
///
/// # Errors
/// Returns an error if tokenization fails, or if a parenthesis is unmatched
/// under [`config::ParenthesisPolicy::Strict`].
///
/// # Examples
/// ```
/// use infixa::{compile, config::EvalOptions, token::render};
///
/// let postfix = compile("-5+3", &EvalOptions::default()).unwrap();
/// assert_eq!(render(&postfix), "5 u- 3 +");
/// ```
pub fn compile(expression: &str, options: &EvalOptions) -> Result<Vec<Token>, Error> {
    let tokens = tokenize(expression)?;
    Ok(to_postfix(&tokens, options.parentheses)?)
}
