/// Postfix evaluation.
///
/// Reduces a postfix token sequence to a single value using an operand
/// stack.
pub mod core;

/// Unary operator semantics.
///
/// Identity, negation, logical NOT, increment and decrement.
pub mod unary;

/// Binary operator semantics.
///
/// Arithmetic, exponentiation, comparisons and logical connectives.
pub mod binary;
