//! # AMM Quote
//!
//! Off-chain quotation engine for a constant-product AMM deployed as a
//! Clarity contract on Stacks.
//!
//! Given a snapshot of a pool's reserves and fee, the engine computes
//! what a swap will yield, how much of the second token a deposit needs,
//! and how many LP tokens a withdrawal burns, then applies a slippage
//! tolerance to derive the minimum amounts the contract will be asked to
//! accept. All arithmetic is exact unsigned integer math on the chain's
//! smallest units; intermediates are widened so no quote can overflow
//! silently.
//!
//! # Quick Start
//!
//! ```rust
//! use amm_quote::domain::{Amount, FeeBasisPoints, Fraction, PoolState};
//! use amm_quote::domain::{QuoteRequest, QuoteResult, SwapDirection};
//! use amm_quote::quote::evaluate;
//!
//! // 1. A pool holding 1 000 000 A and 2 000 000 B (6 decimals), 5% fee
//! let pool = PoolState::new(
//!     Amount::new(1_000_000_000_000),
//!     Amount::new(2_000_000_000_000),
//!     FeeBasisPoints::new(500).expect("valid fee"),
//!     Amount::new(1_414_213_562_373),
//! );
//!
//! // 2. Sell 10 000 A with 1% slippage tolerance
//! let request = QuoteRequest::Swap {
//!     amount_in: Amount::new(10_000_000_000),
//!     direction: SwapDirection::AToB,
//! };
//! let tolerance = Fraction::from_percent(1).expect("valid tolerance");
//!
//! // 3. Quote
//! let QuoteResult::Swap(quote) = evaluate(&pool, &request, tolerance).expect("quoted") else {
//!     unreachable!();
//! };
//! assert_eq!(quote.amount_out(), Amount::new(18_811_881_188));
//! assert_eq!(quote.min_amount_out(), Amount::new(18_623_762_376));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Front-end   │  implements ChainReader / TransactionSubmitter / WalletSession
//! └──────┬───────┘
//!        │ DexClient::new(config, reader, submitter, wallet)
//!        ▼
//! ┌──────────────┐
//! │    Client    │  fresh snapshot → quote → ordered contract call
//! └──────┬───────┘
//!        │ evaluate(pool, request, tolerance)
//!        ▼
//! ┌──────────────┐
//! │    Quote     │  swap, deposit, withdraw, slippage floor
//! └──────┬───────┘
//!        │ mul_div / CheckedArithmetic
//!        ▼
//! ┌──────────────┐
//! │    Domain    │  Amount, FeeBasisPoints, Fraction, PoolState, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`PoolState`](domain::PoolState), [`QuoteResult`](domain::QuoteResult), etc. |
//! | [`math`]   | 384-bit widening [`mul_div`](math::mul_div) and [`CheckedArithmetic`](math::CheckedArithmetic) |
//! | [`quote`]  | Pure quotation functions and [`evaluate`](quote::evaluate) |
//! | [`contract`] | Clarity call payloads: [`ContractCall`](contract::ContractCall), [`PoolKey`](contract::PoolKey) |
//! | [`traits`] | Collaborators: [`ChainReader`](traits::ChainReader), [`TransactionSubmitter`](traits::TransactionSubmitter), [`WalletSession`](traits::WalletSession) |
//! | [`config`] | [`QuoteConfig`](config::QuoteConfig) and its JSON loader |
//! | [`client`] | [`DexClient`](client::DexClient) orchestration |
//! | [`error`]  | [`QuoteError`](error::QuoteError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! [`DexClient`](client::DexClient) emits [`tracing`] events for snapshots,
//! quotes, rejections and submissions. The pure quote functions never log,
//! and the crate never installs a subscriber.

pub mod client;
pub mod config;
pub mod contract;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod quote;
pub mod traits;
