//! Constant-product swap quotation with the fee taken on the input.
//!
//! ```text
//! amount_out = ⌊ reserve_out × amount_in × (10 000 − fee_bps)
//!                / ((reserve_in + amount_in) × 10 000) ⌋
//! ```
//!
//! This mirrors the AMM contract's `get-amount-out` so the quote matches
//! the on-chain result to the smallest unit. Since
//! `amount_in × (10 000 − fee) < (reserve_in + amount_in) × 10 000`, the
//! output is always strictly below `reserve_out`.

use crate::domain::{Amount, FeeBasisPoints, Rounding, BPS_DENOMINATOR};
use crate::error::{QuoteError, Result};
use crate::math::{div_wide, U384};

/// Quotes the output of selling `amount_in` into a constant-product pool.
///
/// The result is non-decreasing in `amount_in` and always strictly less
/// than `reserve_out`. Tiny inputs may quote zero.
///
/// # Errors
///
/// Returns [`QuoteError::InvalidInput`] if either reserve or `amount_in`
/// is zero.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::{Amount, FeeBasisPoints};
/// use amm_quote::quote::quote_swap;
///
/// let out = quote_swap(
///     Amount::new(1_000_000_000_000),
///     Amount::new(2_000_000_000_000),
///     FeeBasisPoints::new(500).expect("valid"),
///     Amount::new(10_000_000_000),
/// )
/// .expect("valid inputs");
/// assert_eq!(out, Amount::new(18_811_881_188));
/// ```
pub fn quote_swap(
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeBasisPoints,
    amount_in: Amount,
) -> Result<Amount> {
    let reserve_in = reserve_in.require_positive("reserve_in must be positive")?;
    let reserve_out = reserve_out.require_positive("reserve_out must be positive")?;
    let amount_in = amount_in.require_positive("amount_in must be positive")?;

    let numerator = wide(reserve_out)
        .checked_mul(wide(amount_in))
        .and_then(|v| v.checked_mul(U384::from(fee.complement())))
        .ok_or(QuoteError::Overflow("swap numerator"))?;
    let denominator = wide(reserve_in)
        .checked_add(wide(amount_in))
        .and_then(|v| v.checked_mul(U384::from(BPS_DENOMINATOR)))
        .ok_or(QuoteError::Overflow("swap denominator"))?;

    div_wide(numerator, denominator, Rounding::Down).map(Amount::new)
}

fn wide(amount: Amount) -> U384 {
    U384::from(amount.get())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn fee(bps: u16) -> FeeBasisPoints {
        let Ok(f) = FeeBasisPoints::new(bps) else {
            panic!("valid fee");
        };
        f
    }

    fn swap(rin: u128, rout: u128, bps: u16, amount_in: u128) -> Amount {
        let Ok(out) = quote_swap(
            Amount::new(rin),
            Amount::new(rout),
            fee(bps),
            Amount::new(amount_in),
        ) else {
            panic!("expected a quote");
        };
        out
    }

    #[test]
    fn million_unit_pool_five_percent_fee() {
        // 2e12 × 1e10 × 9500 / (1.01e12 × 1e4) = 18 811 881 188.118…
        assert_eq!(
            swap(1_000_000_000_000, 2_000_000_000_000, 500, 10_000_000_000),
            Amount::new(18_811_881_188)
        );
    }

    #[test]
    fn zero_fee_is_plain_constant_product() {
        // 2_000_000 × 1_000 / 1_001_000 = 1998.001…
        assert_eq!(swap(1_000_000, 2_000_000, 0, 1_000), Amount::new(1_998));
    }

    #[test]
    fn tiny_input_may_quote_zero() {
        assert_eq!(swap(1_000_000, 1_000_000, 500, 1), Amount::ZERO);
    }

    #[test]
    fn huge_input_never_drains_pool() {
        let out = swap(1, 1_000, 0, u128::MAX);
        assert!(out < Amount::new(1_000));
        assert_eq!(out, Amount::new(999));
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let out = swap(u128::MAX, u128::MAX, 9_999, u128::MAX);
        assert!(out < Amount::MAX);
    }

    #[test]
    fn rejects_zero_inputs() {
        let f = fee(30);
        let one = Amount::new(1);
        for (rin, rout, ain) in [
            (Amount::ZERO, one, one),
            (one, Amount::ZERO, one),
            (one, one, Amount::ZERO),
        ] {
            let Err(QuoteError::InvalidInput(_)) = quote_swap(rin, rout, f, ain) else {
                panic!("expected InvalidInput");
            };
        }
    }

    #[test]
    fn idempotent() {
        let a = swap(5_000_000, 7_000_000, 30, 12_345);
        let b = swap(5_000_000, 7_000_000, 30, 12_345);
        assert_eq!(a, b);
    }
}
