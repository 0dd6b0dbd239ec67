//! Deposit and withdrawal quotation.

use crate::domain::{Amount, Fraction, Rounding};
use crate::error::{QuoteError, Result};
use crate::math::CheckedArithmetic;

/// Quotes the token-1 amount that must accompany `amount_a` of token-0 so
/// the deposit keeps the pool ratio: `⌊amount_a × reserve_b / reserve_a⌋`.
///
/// Flooring keeps `(reserve_b + amount_b) / (reserve_a + amount_a)` within
/// `1 / (reserve_a + amount_a)` below the current ratio.
///
/// # Errors
///
/// - [`QuoteError::PoolNotInitialized`] if either reserve is zero.
/// - [`QuoteError::InvalidInput`] if `amount_a` is zero.
/// - [`QuoteError::Overflow`] if the result does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::Amount;
/// use amm_quote::quote::quote_deposit;
///
/// let b = quote_deposit(Amount::new(1_000_000), Amount::new(2_000_000), Amount::new(1_500_000));
/// assert_eq!(b, Ok(Amount::new(3_000_000)));
/// ```
pub fn quote_deposit(reserve_a: Amount, reserve_b: Amount, amount_a: Amount) -> Result<Amount> {
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(QuoteError::PoolNotInitialized);
    }
    let amount_a = amount_a.require_positive("deposit amount must be positive")?;
    amount_a.safe_mul_div(&reserve_b, &reserve_a, Rounding::Down)
}

/// Quotes how many LP shares to burn for a share of the caller's balance:
/// `⌊user_lp_balance × lp_fraction⌋`.
///
/// Only LP accounting is done here; the token payouts are computed by the
/// contract when the burn executes.
///
/// # Errors
///
/// The product never exceeds `user_lp_balance`, so this does not fail for
/// any valid [`Fraction`].
///
/// # Examples
///
/// ```
/// use amm_quote::domain::{Amount, Fraction};
/// use amm_quote::quote::quote_withdraw;
///
/// let quarter = Fraction::from_percent(25).expect("valid");
/// assert_eq!(quote_withdraw(Amount::new(1_000_003), quarter), Ok(Amount::new(250_000)));
/// ```
pub fn quote_withdraw(user_lp_balance: Amount, lp_fraction: Fraction) -> Result<Amount> {
    lp_fraction.apply(user_lp_balance, Rounding::Down)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn deposit_preserves_ratio() {
        assert_eq!(
            quote_deposit(Amount::new(1_000_000), Amount::new(2_000_000), Amount::new(10)),
            Ok(Amount::new(20))
        );
    }

    #[test]
    fn deposit_rounds_toward_zero() {
        // 10 × 2 / 3 = 6.67
        assert_eq!(
            quote_deposit(Amount::new(3), Amount::new(2), Amount::new(10)),
            Ok(Amount::new(6))
        );
    }

    #[test]
    fn deposit_into_uninitialized_pool() {
        assert_eq!(
            quote_deposit(Amount::ZERO, Amount::new(5), Amount::new(1)),
            Err(QuoteError::PoolNotInitialized)
        );
        assert_eq!(
            quote_deposit(Amount::new(5), Amount::ZERO, Amount::new(1)),
            Err(QuoteError::PoolNotInitialized)
        );
    }

    #[test]
    fn deposit_zero_amount() {
        let Err(QuoteError::InvalidInput(_)) =
            quote_deposit(Amount::new(5), Amount::new(5), Amount::ZERO)
        else {
            panic!("expected InvalidInput");
        };
    }

    #[test]
    fn deposit_overflow() {
        let Err(QuoteError::Overflow(_)) =
            quote_deposit(Amount::new(1), Amount::MAX, Amount::new(2))
        else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn withdraw_floors_share() {
        let Ok(third) = Fraction::from_parts_per_million(333_333) else {
            panic!("valid fraction");
        };
        assert_eq!(quote_withdraw(Amount::new(10), third), Ok(Amount::new(3)));
        assert_eq!(
            quote_withdraw(Amount::new(7_000_000), Fraction::ONE),
            Ok(Amount::new(7_000_000))
        );
        assert_eq!(
            quote_withdraw(Amount::new(7_000_000), Fraction::ZERO),
            Ok(Amount::ZERO)
        );
    }

    #[test]
    fn withdraw_full_balance_at_max() {
        assert_eq!(quote_withdraw(Amount::MAX, Fraction::ONE), Ok(Amount::MAX));
    }
}
