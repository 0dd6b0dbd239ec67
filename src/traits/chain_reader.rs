//! Read-only access to on-chain pool and LP-token state.
//!
//! [`ChainReader`] is the seam between the quotation engine and whatever
//! node or API the host application talks to. The engine only ever asks
//! two questions:
//!
//! 1. **Pool snapshot**: [`ChainReader::pool_state`] returns the reserves,
//!    fee and LP supply of one pool, or `None` when the pool was never
//!    created.
//! 2. **LP holding**: [`ChainReader::lp_balance`] returns how many LP
//!    tokens an account holds.
//!
//! Implementations are expected to evaluate the read-only calls built by
//! [`PoolKey::get_pool_data`] and [`PoolKey::get_lp_balance`] and decode
//! their results. Transport failures map to [`QuoteError::ChainRead`].
//!
//! [`QuoteError::ChainRead`]: crate::error::QuoteError::ChainRead

use crate::contract::PoolKey;
use crate::domain::{Amount, ContractPrincipal, PoolState, StandardPrincipal};
use crate::error::Result;

/// Source of on-chain snapshots.
///
/// Every call must return a fresh read; the engine never caches and
/// re-reads before each state-changing submission.
pub trait ChainReader {
    /// Reads the current state of the pool identified by `key`.
    ///
    /// Returns `Ok(None)` when the contract reports no such pool.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::ChainRead`](crate::error::QuoteError::ChainRead)
    /// if the node could not be reached or the response did not decode.
    fn pool_state(&self, key: &PoolKey) -> Result<Option<PoolState>>;

    /// Reads the LP-token balance of `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::ChainRead`](crate::error::QuoteError::ChainRead)
    /// if the read fails.
    fn lp_balance(&self, lp_token: &ContractPrincipal, owner: &StandardPrincipal)
        -> Result<Amount>;
}

impl<T: ChainReader + ?Sized> ChainReader for &T {
    fn pool_state(&self, key: &PoolKey) -> Result<Option<PoolState>> {
        (**self).pool_state(key)
    }

    fn lp_balance(
        &self,
        lp_token: &ContractPrincipal,
        owner: &StandardPrincipal,
    ) -> Result<Amount> {
        (**self).lp_balance(lp_token, owner)
    }
}
