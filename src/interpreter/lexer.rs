use logos::Logos;
use tracing::debug;

use crate::{
    error::{ParseError, ParseResult},
    token::{BinaryOperator, Token, UnaryOperator},
};

/// A raw lexeme recognised in the source text.
///
/// Lexemes carry no sign information: whether `-` is a negation or a
/// subtraction is decided by [`tokenize`]. The lexer prefers the longest
/// match, so `==`, `!=`, `>=`, `<=`, `&&`, `||`, `++` and `--` are always
/// consumed as one lexeme.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
pub enum Lexeme {
    /// A run of decimal digits, such as `42`.
    #[regex("[0-9]+")]
    Integer,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `&`, recognised only to be rejected as an unknown operator.
    #[token("&")]
    Ampersand,
    /// `|`, recognised only to be rejected as an unknown operator.
    #[token("|")]
    Pipe,
    /// `=`, recognised only to be rejected as an unknown operator.
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Splits an expression into tokens.
///
/// The scan runs left to right with a single flag, `expect_unary`, that
/// tells whether the next sign-like operator (`+`, `-`, `!`, `++`, `--`)
/// starts an operand. It is set at the start of input, after `(` and after
/// any operator, and cleared after a number or `)`.
///
/// # Errors
/// - [`ParseError::InvalidToken`] for a character that starts no lexeme.
/// - [`ParseError::LiteralTooLarge`] for a digit run outside the `i64`
///   range.
/// - [`ParseError::UnknownOperator`] for `&`, `|`, `=`, or for `!`, `++`,
///   `--` following a value.
///
/// # Example
/// ```
/// use infixa::{
///     interpreter::lexer::tokenize,
///     token::{BinaryOperator, Token, UnaryOperator},
/// };
///
/// let tokens = tokenize("5- -3").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(5),
///                 Token::Binary(BinaryOperator::Sub),
///                 Token::Unary(UnaryOperator::Negate),
///                 Token::Number(3)]);
///
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut expect_unary = true;
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let slice = lexer.slice();
        let offset = lexer.span().start;

        let Ok(lexeme) = lexeme else {
            debug!(token = slice, offset, "unrecognised character");
            return Err(ParseError::InvalidToken { token: slice.to_string(),
                                                  offset });
        };

        let token = match lexeme {
            Lexeme::Integer => {
                let value = slice.parse().map_err(|_| {
                                              ParseError::LiteralTooLarge { literal: slice.to_string(),
                                                                            offset }
                                          })?;
                Token::Number(value)
            },
            Lexeme::LParen => Token::LParen,
            Lexeme::RParen => Token::RParen,
            _ => classify_operator(lexeme, expect_unary).ok_or_else(|| {
                     debug!(operator = slice, offset, expect_unary, "operator has no meaning here");
                     ParseError::UnknownOperator { operator: slice.to_string(),
                                                   offset }
                 })?,
        };

        expect_unary = !matches!(token, Token::Number(_) | Token::RParen);
        tokens.push(token);
    }

    debug!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Maps an operator lexeme to a token, given whether an operand is expected.
///
/// Returns `None` for lexemes that are not operators in that position.
const fn classify_operator(lexeme: Lexeme, expect_unary: bool) -> Option<Token> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or, Pow,
        Sub,
    };
    use UnaryOperator::{Decrement, Increment, Negate, Not, Plus};

    let token = match (lexeme, expect_unary) {
        (Lexeme::Plus, true) => Token::Unary(Plus),
        (Lexeme::Minus, true) => Token::Unary(Negate),
        (Lexeme::Bang, true) => Token::Unary(Not),
        (Lexeme::PlusPlus, true) => Token::Unary(Increment),
        (Lexeme::MinusMinus, true) => Token::Unary(Decrement),
        (Lexeme::Plus, false) => Token::Binary(Add),
        (Lexeme::Minus, false) => Token::Binary(Sub),
        (Lexeme::Star, _) => Token::Binary(Mul),
        (Lexeme::Slash, _) => Token::Binary(Div),
        (Lexeme::Percent, _) => Token::Binary(Mod),
        (Lexeme::Caret, _) => Token::Binary(Pow),
        (Lexeme::EqualEqual, _) => Token::Binary(Equal),
        (Lexeme::BangEqual, _) => Token::Binary(NotEqual),
        (Lexeme::Less, _) => Token::Binary(Less),
        (Lexeme::Greater, _) => Token::Binary(Greater),
        (Lexeme::LessEqual, _) => Token::Binary(LessEqual),
        (Lexeme::GreaterEqual, _) => Token::Binary(GreaterEqual),
        (Lexeme::DoubleAmpersand, _) => Token::Binary(And),
        (Lexeme::DoublePipe, _) => Token::Binary(Or),
        (Lexeme::Bang | Lexeme::PlusPlus | Lexeme::MinusMinus, false)
        | (Lexeme::Ampersand
           | Lexeme::Pipe
           | Lexeme::Equals
           | Lexeme::Integer
           | Lexeme::LParen
           | Lexeme::RParen,
           _) => return None,
    };
    Some(token)
}
