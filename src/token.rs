/// A token produced by the tokenizer and consumed by the converter and the
/// evaluator.
///
/// Numbers never carry a sign: `-5` is the two tokens
/// `Unary(Negate), Number(5)`. Whether a sign-like operator is unary or
/// binary is decided once, during tokenization, and is encoded in the variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    /// A non-negative integer literal.
    Number(i64),
    /// An infix operator.
    Binary(BinaryOperator),
    /// A prefix operator.
    Unary(UnaryOperator),
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Token {
    /// Returns the operator carried by this token, if any.
    ///
    /// # Example
    /// ```
    /// use infixa::token::{BinaryOperator, Operator, Token};
    ///
    /// let token = Token::Binary(BinaryOperator::Add);
    /// assert_eq!(token.operator(), Some(Operator::Binary(BinaryOperator::Add)));
    /// assert_eq!(Token::LParen.operator(), None);
    /// ```
    #[must_use]
    pub const fn operator(self) -> Option<Operator> {
        match self {
            Self::Binary(op) => Some(Operator::Binary(op)),
            Self::Unary(op) => Some(Operator::Unary(op)),
            Self::Number(_) | Self::LParen | Self::RParen => None,
        }
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Binary(op) => Self::Binary(op),
            Operator::Unary(op) => Self::Unary(op),
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and logical connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a unary (prefix) operator.
///
/// `++` and `--` are plain increment and decrement of a value; there are no
/// variables, so there is no pre/post distinction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
    /// Increment (`++x`).
    Increment,
    /// Decrement (`--x`).
    Decrement,
}

/// Either kind of operator, as stored on the converter's operator stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// An infix operator.
    Binary(BinaryOperator),
    /// A prefix operator.
    Unary(UnaryOperator),
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "!",
            Self::Increment => "++",
            Self::Decrement => "--",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary(op) => write!(f, "{op}"),
            Self::Unary(op) => write!(f, "u{op}"),
        }
    }
}

/// Unary operators are written with a `u` prefix so a postfix listing stays
/// unambiguous: `-5+3` becomes `5 u- 3 +`.
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Binary(op) => write!(f, "{op}"),
            Self::Unary(op) => write!(f, "u{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Renders a token sequence separated by single spaces.
///
/// # Example
/// ```
/// use infixa::token::{BinaryOperator, Token, UnaryOperator, render};
///
/// let postfix = [Token::Number(5),
///                Token::Unary(UnaryOperator::Negate),
///                Token::Number(3),
///                Token::Binary(BinaryOperator::Add)];
/// assert_eq!(render(&postfix), "5 u- 3 +");
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
