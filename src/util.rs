/// Numeric conversion helpers.
///
/// This module provides the conversions between `i64`, `u32` and `f64` used
/// by exponentiation. The lossy direction is explicit in its name; every
/// other conversion returns a `Result` and never saturates or wraps.
pub mod num;
/// The working stack.
///
/// A last-in-first-out container backing the converter's operator stack and
/// the evaluator's operand stack. One is created per call and dropped when
/// the call returns, on every path.
pub mod stack;
