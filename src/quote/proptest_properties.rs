//! Property-based tests for the quotation engine.
//!
//! 1. **Swap bounds**: `0 ≤ out < reserve_out` for every valid input.
//! 2. **Swap monotonicity**: more input never quotes less output.
//! 3. **Zero-fee equality**: with no fee the quote is the plain
//!    constant-product floor.
//! 4. **Deposit ratio preservation**: the post-deposit ratio stays within
//!    rounding of the current one.
//! 5. **Purity**: equal arguments give equal answers.
//! 6. **Floors**: slippage minimums and LP burns never exceed their base.

use proptest::prelude::*;

use super::{evaluate, min_acceptable, quote_deposit, quote_swap, quote_withdraw};
use crate::domain::{Amount, FeeBasisPoints, Fraction, PoolState, QuoteRequest, SwapDirection};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn positive_u128() -> impl Strategy<Value = u128> {
    1u128..=u128::MAX
}

/// Values small enough that two of them multiply and add inside `u128`.
fn bounded() -> impl Strategy<Value = u128> {
    1u128..=(1u128 << 60)
}

fn fee_strategy() -> impl Strategy<Value = FeeBasisPoints> {
    (0u16..10_000u16).prop_filter_map("fee below 100%", |v| FeeBasisPoints::new(v).ok())
}

fn fraction_strategy() -> impl Strategy<Value = Fraction> {
    (0u32..=1_000_000u32).prop_filter_map("within [0, 1]", |v| {
        Fraction::from_parts_per_million(v).ok()
    })
}

// ---------------------------------------------------------------------------
// Swap
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_swap_output_below_reserve(
        rin in positive_u128(),
        rout in positive_u128(),
        fee in fee_strategy(),
        ain in positive_u128(),
    ) {
        let Ok(out) = quote_swap(Amount::new(rin), Amount::new(rout), fee, Amount::new(ain)) else {
            return Err(TestCaseError::fail("valid inputs must quote"));
        };
        prop_assert!(out.get() < rout, "out={} reserve_out={}", out, rout);
    }

    #[test]
    fn prop_swap_monotonic_in_amount(
        rin in positive_u128(),
        rout in positive_u128(),
        fee in fee_strategy(),
        a in positive_u128(),
        b in positive_u128(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (Ok(out_lo), Ok(out_hi)) = (
            quote_swap(Amount::new(rin), Amount::new(rout), fee, Amount::new(lo)),
            quote_swap(Amount::new(rin), Amount::new(rout), fee, Amount::new(hi)),
        ) else {
            return Err(TestCaseError::fail("valid inputs must quote"));
        };
        prop_assert!(out_lo <= out_hi, "f({})={} > f({})={}", lo, out_lo, hi, out_hi);
    }

    #[test]
    fn prop_zero_fee_matches_constant_product(
        rin in bounded(),
        rout in bounded(),
        ain in bounded(),
    ) {
        let expected = rout * ain / (rin + ain);
        let Ok(out) = quote_swap(Amount::new(rin), Amount::new(rout), FeeBasisPoints::ZERO, Amount::new(ain)) else {
            return Err(TestCaseError::fail("valid inputs must quote"));
        };
        prop_assert_eq!(out.get(), expected);
    }

    #[test]
    fn prop_swap_is_pure(
        rin in positive_u128(),
        rout in positive_u128(),
        fee in fee_strategy(),
        ain in positive_u128(),
    ) {
        let first = quote_swap(Amount::new(rin), Amount::new(rout), fee, Amount::new(ain));
        let second = quote_swap(Amount::new(rin), Amount::new(rout), fee, Amount::new(ain));
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Deposit / withdraw / slippage
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_deposit_preserves_ratio(
        ra in bounded(),
        rb in bounded(),
        aa in bounded(),
    ) {
        let Ok(ab) = quote_deposit(Amount::new(ra), Amount::new(rb), Amount::new(aa)) else {
            return Err(TestCaseError::fail("initialized pool must quote"));
        };
        // rb/ra − (rb+ab)/(ra+aa), cross-multiplied: rb·aa − ab·ra ∈ [0, ra).
        let before = rb * (ra + aa);
        let after = (rb + ab.get()) * ra;
        prop_assert!(after <= before);
        prop_assert!(before - after < ra);
    }

    #[test]
    fn prop_withdraw_never_exceeds_balance(
        balance in any::<u128>(),
        fraction in fraction_strategy(),
    ) {
        let Ok(burn) = quote_withdraw(Amount::new(balance), fraction) else {
            return Err(TestCaseError::fail("withdraw cannot fail"));
        };
        prop_assert!(burn.get() <= balance);
    }

    #[test]
    fn prop_slippage_floor_below_quote(
        amount in any::<u128>(),
        tolerance in fraction_strategy(),
    ) {
        let Ok(floor) = min_acceptable(Amount::new(amount), tolerance) else {
            return Err(TestCaseError::fail("floor cannot fail"));
        };
        prop_assert!(floor.get() <= amount);
    }

    #[test]
    fn prop_evaluated_swap_floor_tracks_quote(
        ra in positive_u128(),
        rb in positive_u128(),
        fee in fee_strategy(),
        ain in positive_u128(),
        tolerance in fraction_strategy(),
    ) {
        let pool = PoolState::new(Amount::new(ra), Amount::new(rb), fee, Amount::ZERO);
        let request = QuoteRequest::Swap { amount_in: Amount::new(ain), direction: SwapDirection::AToB };
        let Ok(result) = evaluate(&pool, &request, tolerance) else {
            return Err(TestCaseError::fail("initialized pool must quote"));
        };
        prop_assert!(result.min_acceptable() <= result.amount());
        prop_assert!(result.amount().get() < rb);
    }
}
