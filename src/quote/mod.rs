//! The quotation engine.
//!
//! Pure functions that re-derive, off-chain, the amounts the AMM contract
//! will compute, so a caller can display an estimate and attach slippage
//! floors before submitting a call. Nothing here performs I/O or keeps
//! state: each call is a function of one [`PoolState`] snapshot and one
//! request, and repeating a call repeats its answer.
//!
//! | Function | Computes |
//! |----------|----------|
//! | [`quote_swap`] | constant-product output, fee on input |
//! | [`quote_deposit`] | ratio-preserving token-1 deposit |
//! | [`quote_withdraw`] | LP shares to burn for a fraction of a balance |
//! | [`min_acceptable`] | slippage floor `⌊amount × (1 − tolerance)⌋` |
//! | [`evaluate`] | dispatch of a [`QuoteRequest`] against a snapshot |

mod liquidity;
mod slippage;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use liquidity::{quote_deposit, quote_withdraw};
pub use slippage::min_acceptable;
pub use swap::quote_swap;

use crate::domain::{
    DepositQuote, Fraction, PoolState, QuoteRequest, QuoteResult, Rounding, SwapQuote,
    WithdrawQuote,
};
use crate::error::{QuoteError, Result};

/// Evaluates a request against a pool snapshot.
///
/// The pool must be initialized for every request kind. Swap and deposit
/// floors use `tolerance`; withdrawal floors are zero because the
/// contract determines the payout.
///
/// # Errors
///
/// - [`QuoteError::PoolNotInitialized`] if either reserve is zero.
/// - [`QuoteError::InvalidInput`] for a zero amount or a zero withdrawal
///   fraction.
/// - [`QuoteError::Overflow`] if a deposit quote exceeds `u128`.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::{
///     Amount, FeeBasisPoints, Fraction, PoolState, QuoteRequest, QuoteResult, SwapDirection,
/// };
/// use amm_quote::quote::evaluate;
///
/// let pool = PoolState::new(
///     Amount::new(1_000_000_000_000),
///     Amount::new(2_000_000_000_000),
///     FeeBasisPoints::new(500).expect("valid"),
///     Amount::ZERO,
/// );
/// let request = QuoteRequest::Swap {
///     amount_in: Amount::new(10_000_000_000),
///     direction: SwapDirection::AToB,
/// };
/// let tolerance = Fraction::from_percent(1).expect("valid");
///
/// let QuoteResult::Swap(quote) = evaluate(&pool, &request, tolerance).expect("quoted") else {
///     unreachable!();
/// };
/// assert_eq!(quote.amount_out(), Amount::new(18_811_881_188));
/// assert_eq!(quote.min_amount_out(), Amount::new(18_623_762_376));
/// ```
pub fn evaluate(pool: &PoolState, request: &QuoteRequest, tolerance: Fraction) -> Result<QuoteResult> {
    pool.require_initialized()?;
    match *request {
        QuoteRequest::Swap {
            amount_in,
            direction,
        } => {
            let (reserve_in, reserve_out) = pool.reserves_for(direction);
            let amount_out = quote_swap(reserve_in, reserve_out, pool.fee(), amount_in)?;
            let fee = pool.fee().fee_on(amount_in, Rounding::Up)?;
            let floor = min_acceptable(amount_out, tolerance)?;
            Ok(QuoteResult::Swap(SwapQuote::new(
                direction, amount_in, amount_out, fee, floor,
            )))
        }
        QuoteRequest::Deposit { amount_a } => {
            let amount_b = quote_deposit(pool.reserve_a(), pool.reserve_b(), amount_a)?;
            Ok(QuoteResult::Deposit(DepositQuote::new(
                amount_a,
                amount_b,
                min_acceptable(amount_a, tolerance)?,
                min_acceptable(amount_b, tolerance)?,
            )))
        }
        QuoteRequest::Withdraw {
            lp_balance,
            lp_fraction,
        } => {
            if lp_fraction.is_zero() {
                return Err(QuoteError::InvalidInput("withdraw fraction must be positive"));
            }
            let lp_to_burn = quote_withdraw(lp_balance, lp_fraction)?;
            Ok(QuoteResult::Withdraw(WithdrawQuote::new(
                lp_balance,
                lp_fraction,
                lp_to_burn,
            )))
        }
    }
}
