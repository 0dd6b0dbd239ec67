//! Snapshot of a pool as returned by the chain reader.

use super::{Amount, Decimals, FeeBasisPoints, Rounding, SwapDirection};
use crate::error::{QuoteError, Result};
use crate::math::mul_div;

/// Immutable snapshot of a pool's on-chain state.
///
/// A snapshot is fetched fresh before each quotation and dropped right
/// after; nothing in the crate caches it.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::{Amount, Decimals, FeeBasisPoints, PoolState};
///
/// let fee = FeeBasisPoints::new(500).expect("valid");
/// let pool = PoolState::new(Amount::new(1_000_000), Amount::new(2_000_000), fee, Amount::new(1_414_213));
/// assert!(pool.is_initialized());
/// assert_eq!(pool.ratio_b_per_a(Decimals::MICRO), Ok(Amount::new(2_000_000)));
///
/// let empty = PoolState::new(Amount::ZERO, Amount::ZERO, fee, Amount::ZERO);
/// assert!(!empty.is_initialized());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolState {
    reserve_a: Amount,
    reserve_b: Amount,
    fee: FeeBasisPoints,
    lp_supply: Amount,
}

impl PoolState {
    /// Creates a snapshot from the values read on-chain.
    pub const fn new(
        reserve_a: Amount,
        reserve_b: Amount,
        fee: FeeBasisPoints,
        lp_supply: Amount,
    ) -> Self {
        Self {
            reserve_a,
            reserve_b,
            fee,
            lp_supply,
        }
    }

    /// Returns the token-0 reserve.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the token-1 reserve.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the pool fee.
    #[must_use]
    pub const fn fee(&self) -> FeeBasisPoints {
        self.fee
    }

    /// Returns the outstanding LP share supply.
    pub const fn lp_supply(&self) -> Amount {
        self.lp_supply
    }

    /// A pool is initialized only when both reserves are strictly positive.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        !self.reserve_a.is_zero() && !self.reserve_b.is_zero()
    }

    /// Returns `self` if the pool is initialized.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::PoolNotInitialized`] if either reserve is zero.
    pub const fn require_initialized(&self) -> Result<&Self> {
        if !self.is_initialized() {
            return Err(QuoteError::PoolNotInitialized);
        }
        Ok(self)
    }

    /// Returns `(reserve_in, reserve_out)` for a swap direction.
    #[must_use]
    pub const fn reserves_for(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::AToB => (self.reserve_a, self.reserve_b),
            SwapDirection::BToA => (self.reserve_b, self.reserve_a),
        }
    }

    /// Returns `reserve_b / reserve_a` as a fixed-point value at
    /// `decimals` precision: how much token-1 one whole token-0 deposit
    /// requires.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::PoolNotInitialized`] if either reserve is zero.
    /// - [`QuoteError::Overflow`] if the ratio does not fit in `u128`.
    pub fn ratio_b_per_a(&self, decimals: Decimals) -> Result<Amount> {
        self.require_initialized()?;
        mul_div(
            self.reserve_b.get(),
            decimals.scale(),
            self.reserve_a.get(),
            Rounding::Down,
        )
        .map(Amount::new)
    }
}
