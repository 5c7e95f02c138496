/// Dispatch of binary operators to their semantics.
pub mod core;

/// `+`, `-`, `*`, `/` and `%` with overflow and division checks.
pub mod arithmetic;

/// `^` in both power modes.
pub mod power;

/// Relational and equality operators, producing `1` or `0`.
pub mod comparison;

/// `&&` and `||` over "nonzero is true".
pub mod logic;
