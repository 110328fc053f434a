/// Safely converts an `i64` to `u32` if and only if it is in range.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds `u32::MAX`.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if the value does not fit.
///
/// ## Example
/// ```
/// use rpncalc::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(42, "out of range"), Ok(42));
/// assert!(i64_to_u32_checked(-1, "out of range").is_err());
/// assert!(i64_to_u32_checked(1 << 40, "out of range").is_err());
/// ```
pub fn i64_to_u32_checked<E>(value: i64, error: E) -> Result<u32, E> {
    u32::try_from(value).map_err(|_| error)
}
