use crate::error::CurveError;
use primitive_types::U256;

/// Returns `1^2 + 2^2 + ... + n^2` via the closed form `n(n+1)(2n+1)/6`.
///
/// The product is always a multiple of 6, so the division is exact.
///
/// # Errors
/// Returns [`CurveError::Overflow`] if an intermediate product exceeds 256 bits.
pub fn sum_of_squares(n: U256) -> Result<U256, CurveError> {
    let overflow = || CurveError::Overflow("sum of squares");

    let n_plus_one = n.checked_add(U256::one()).ok_or_else(overflow)?;
    let two_n_plus_one = n
        .checked_mul(U256::from(2u8))
        .and_then(|v| v.checked_add(U256::one()))
        .ok_or_else(overflow)?;

    let product = n
        .checked_mul(n_plus_one)
        .and_then(|v| v.checked_mul(two_n_plus_one))
        .ok_or_else(overflow)?;

    Ok(product / U256::from(6u8))
}

/// Returns `1^2 + ... + (n-1)^2`, the squares strictly below `n`.
///
/// Zero when `n` is zero, where the closed form would be evaluated at `-1`.
///
/// # Errors
/// Returns [`CurveError::Overflow`] if an intermediate product exceeds 256 bits.
pub fn sum_of_squares_below(n: U256) -> Result<U256, CurveError> {
    if n.is_zero() {
        return Ok(U256::zero());
    }
    sum_of_squares(n - U256::one())
}
