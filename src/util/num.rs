/// `2^63` as an `f64`; the first value above the `i64` range.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `i64` to the nearest `f64`.
///
/// Values above `2^53` in magnitude are rounded; this is the precision loss
/// the floating-point power mode accepts.
///
/// ## Example
/// ```
/// use infixa::util::num::i64_to_f64_lossy;
///
/// assert_eq!(i64_to_f64_lossy(42), 42.0);
/// assert_eq!(i64_to_f64_lossy(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn i64_to_f64_lossy(value: i64) -> f64 {
    value as f64
}

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// ## Errors
/// Returns `Err(error)` if the value is not finite or its truncation lies
/// outside the `i64` range. Unlike an `as` cast, nothing saturates.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `error`: The error to return if the value cannot be represented.
///
/// ## Example
/// ```
/// use infixa::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(2.9, "overflow"), Ok(2));
/// assert_eq!(f64_to_i64_truncated(-2.9, "overflow"), Ok(-2));
/// assert_eq!(f64_to_i64_truncated(1e19, "overflow"), Err("overflow"));
/// assert_eq!(f64_to_i64_truncated(f64::NAN, "overflow"), Err("overflow"));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated<E>(value: f64, error: E) -> Result<i64, E> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < -I64_UPPER_BOUND || truncated >= I64_UPPER_BOUND {
        return Err(error);
    }
    Ok(truncated as i64)
}

/// Converts a non-negative `i64` to `u32` if it is exactly representable.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds `u32::MAX`.
///
/// ## Example
/// ```
/// use infixa::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(45, "bad"), Ok(45));
/// assert_eq!(i64_to_u32_checked(-1, "bad"), Err("bad"));
/// assert_eq!(i64_to_u32_checked(i64::MAX, "bad"), Err("bad"));
/// ```
pub fn i64_to_u32_checked<E>(value: i64, error: E) -> Result<u32, E> {
    u32::try_from(value).map_err(|_| error)
}
