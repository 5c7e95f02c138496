use crate::token::{BinaryOperator, Operator};

/// Tie-break rule for adjacent operators of equal precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Number of operands an operator consumes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    /// One operand, written after the operator.
    Unary,
    /// Two operands, one on each side.
    Binary,
}

/// Static properties of an operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OperatorDescriptor {
    /// Binding strength; higher binds tighter.
    pub precedence:    u8,
    /// Grouping of equal-precedence chains.
    pub associativity: Associativity,
    /// Operands consumed.
    pub arity:         Arity,
}

impl Operator {
    /// Looks up the operator in the precedence table.
    ///
    /// | Precedence | Operators                     |
    /// |------------|-------------------------------|
    /// | 8          | every unary operator          |
    /// | 7          | `^`                           |
    /// | 6          | `*` `/` `%`                   |
    /// | 5          | `+` `-`                       |
    /// | 4          | `<` `>` `<=` `>=`             |
    /// | 3          | `==` `!=`                     |
    /// | 2          | `&&`                          |
    /// | 1          | `\|\|`                        |
    ///
    /// `^` and the unary operators are right-associative; everything else is
    /// left-associative.
    ///
    /// # Example
    /// ```
    /// use infixa::{
    ///     interpreter::precedence::{Arity, Associativity},
    ///     token::{BinaryOperator, Operator, UnaryOperator},
    /// };
    ///
    /// let pow = Operator::Binary(BinaryOperator::Pow).descriptor();
    /// assert_eq!(pow.precedence, 7);
    /// assert_eq!(pow.associativity, Associativity::Right);
    ///
    /// let neg = Operator::Unary(UnaryOperator::Negate).descriptor();
    /// assert_eq!(neg.precedence, 8);
    /// assert_eq!(neg.arity, Arity::Unary);
    /// ```
    #[must_use]
    pub const fn descriptor(self) -> OperatorDescriptor {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };

        match self {
            Self::Unary(_) => OperatorDescriptor { precedence:    8,
                                                   associativity: Associativity::Right,
                                                   arity:         Arity::Unary, },
            Self::Binary(op) => {
                let precedence = match op {
                    Pow => 7,
                    Mul | Div | Mod => 6,
                    Add | Sub => 5,
                    Less | Greater | LessEqual | GreaterEqual => 4,
                    Equal | NotEqual => 3,
                    And => 2,
                    Or => 1,
                };
                let associativity = if matches!(op, Pow) {
                    Associativity::Right
                } else {
                    Associativity::Left
                };
                OperatorDescriptor { precedence,
                                     associativity,
                                     arity: Arity::Binary }
            },
        }
    }

    /// Returns `true` if `self`, sitting on the operator stack, must be
    /// emitted before `incoming` is pushed.
    ///
    /// That is the case when `self` binds tighter, or binds equally and
    /// `incoming` is left-associative.
    #[must_use]
    pub const fn yields_before(self, incoming: Self) -> bool {
        let top = self.descriptor();
        let next = incoming.descriptor();
        top.precedence > next.precedence
        || (top.precedence == next.precedence
            && matches!(next.associativity, Associativity::Left))
    }
}
