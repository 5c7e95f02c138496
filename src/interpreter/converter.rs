use tracing::debug;

use crate::{
    config::ParenthesisPolicy,
    error::{ParseError, ParseResult},
    token::{Operator, Token, render},
    util::stack::Stack,
};

/// Converts an infix token sequence to postfix order (shunting-yard).
///
/// Numbers go straight to the output. Operators wait on a stack until an
/// incoming operator binds no tighter than they do (see
/// [`Operator::yields_before`](crate::token::Operator::yields_before)), a
/// `)` closes their group, or the input ends.
///
/// Unmatched parentheses follow `policy`. Under
/// [`ParenthesisPolicy::Lenient`] an unmatched `)` is dropped and a leftover
/// `(` is flushed to the output with the remaining operators.
///
/// # Errors
/// [`ParseError::UnboundedParenthesis`] for an unmatched parenthesis under
/// [`ParenthesisPolicy::Strict`]. The lenient policy never fails.
///
/// # Example
/// ```
/// use infixa::{
///     config::ParenthesisPolicy,
///     interpreter::{converter::to_postfix, lexer::tokenize},
///     token::render,
/// };
///
/// let tokens = tokenize("2^3^2").unwrap();
/// let postfix = to_postfix(&tokens, ParenthesisPolicy::Lenient).unwrap();
/// assert_eq!(render(&postfix), "2 3 2 ^ ^");
///
/// let tokens = tokenize("(2+3)*4").unwrap();
/// let postfix = to_postfix(&tokens, ParenthesisPolicy::Strict).unwrap();
/// assert_eq!(render(&postfix), "2 3 + 4 *");
/// ```
pub fn to_postfix(tokens: &[Token], policy: ParenthesisPolicy) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Stack<Token> = Stack::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::LParen => operators.push(token),
            Token::RParen => close_group(&mut operators, &mut output, policy)?,
            Token::Binary(op) => push_operator(&mut operators, &mut output, Operator::Binary(op)),
            Token::Unary(op) => push_operator(&mut operators, &mut output, Operator::Unary(op)),
        }
    }

    for token in operators.drain() {
        if token == Token::LParen && policy == ParenthesisPolicy::Strict {
            debug!("unmatched '(' at end of input");
            return Err(ParseError::UnboundedParenthesis { paren: '(' });
        }
        output.push(token);
    }

    debug!(postfix = %render(&output), "converted to postfix");
    Ok(output)
}

/// Moves every stacked operator that binds at least as tightly as `incoming`
/// to the output, then stacks `incoming`. A `(` on the stack stops the scan.
fn push_operator(operators: &mut Stack<Token>, output: &mut Vec<Token>, incoming: Operator) {
    while let Some(top) =
        operators.pop_if(|top| top.operator().is_some_and(|op| op.yields_before(incoming)))
    {
        output.push(top);
    }
    operators.push(Token::from(incoming));
}

/// Pops operators to the output until the matching `(`, which is discarded.
fn close_group(operators: &mut Stack<Token>,
               output: &mut Vec<Token>,
               policy: ParenthesisPolicy)
               -> ParseResult<()> {
    while let Some(token) = operators.pop() {
        if token == Token::LParen {
            return Ok(());
        }
        output.push(token);
    }

    match policy {
        ParenthesisPolicy::Lenient => {
            debug!("dropping unmatched ')'");
            Ok(())
        },
        ParenthesisPolicy::Strict => Err(ParseError::UnboundedParenthesis { paren: ')' }),
    }
}
