//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use amm_quote::prelude::*;
//! ```

pub use crate::client::DexClient;
pub use crate::config::QuoteConfig;
pub use crate::contract::{ClarityValue, ContractCall, ContractFunction, PoolKey, TxId};
pub use crate::domain::{
    Amount, ContractPrincipal, Decimals, DepositQuote, FeeBasisPoints, Fraction, PoolState,
    QuoteRequest, QuoteResult, Rounding, StandardPrincipal, SwapDirection, SwapQuote, TokenPair,
    WithdrawQuote,
};
pub use crate::error::{QuoteError, Result};
pub use crate::math::CheckedArithmetic;
pub use crate::quote::evaluate;
pub use crate::traits::{ChainReader, TransactionSubmitter, WalletSession};
