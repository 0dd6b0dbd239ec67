//! Widening multiply-then-divide for fixed-point quotes.
//!
//! Quotes multiply up to three operands before dividing: two `u128`
//! amounts and a basis-point factor below `2^14`. The product needs at
//! most 270 bits, so every intermediate is held in a 384-bit unsigned
//! integer and only the final quotient is narrowed back to `u128`.

use crate::domain::Rounding;
use crate::error::{QuoteError, Result};

pub use wide::U384;

// Kept apart from the crate's `Result` alias, which the macro expansion
// would otherwise pick up.
mod wide {
    uint::construct_uint! {
        /// 384-bit unsigned integer for quote intermediates.
        pub struct U384(6);
    }
}

/// Computes `a × b / denominator` with explicit rounding.
///
/// # Errors
///
/// - [`QuoteError::DivisionByZero`] if `denominator` is zero.
/// - [`QuoteError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::Rounding;
/// use amm_quote::math::mul_div;
///
/// // u128::MAX × 2 / 4 overflows u128 in the numerator but not in the result.
/// let half = mul_div(u128::MAX, 2, 4, Rounding::Down).expect("fits");
/// assert_eq!(half, u128::MAX / 2);
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128> {
    let numerator = U384::from(a)
        .checked_mul(U384::from(b))
        .ok_or(QuoteError::Overflow("mul_div numerator"))?;
    div_wide(numerator, U384::from(denominator), rounding)
}

/// Divides two wide values with explicit rounding, narrowing the result to
/// `u128`.
///
/// # Errors
///
/// - [`QuoteError::DivisionByZero`] if `denominator` is zero.
/// - [`QuoteError::Overflow`] if the quotient does not fit in `u128`.
pub fn div_wide(numerator: U384, denominator: U384, rounding: Rounding) -> Result<u128> {
    if denominator.is_zero() {
        return Err(QuoteError::DivisionByZero);
    }
    let (quotient, remainder) = numerator.div_mod(denominator);
    if quotient.bits() > 128 {
        return Err(QuoteError::Overflow("quotient exceeds u128"));
    }
    // bits() <= 128 guarantees as_u128 does not panic.
    let truncated = quotient.as_u128();
    if rounding.is_up() && !remainder.is_zero() && truncated == u128::MAX {
        return Err(QuoteError::Overflow("rounded quotient exceeds u128"));
    }
    Ok(rounding.resolve(truncated, !remainder.is_zero()))
}
