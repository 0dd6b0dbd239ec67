//! Collaborator traits the host application implements.
//!
//! | Trait | Role |
//! |-------|------|
//! | [`ChainReader`] | Fresh pool snapshots and LP balances |
//! | [`TransactionSubmitter`] | Signs and broadcasts contract calls |
//! | [`WalletSession`] | Sign-in state and the active account |
//!
//! All three are synchronous; an async host wraps its client and blocks
//! or drives the future itself.

mod chain_reader;
mod transaction_submitter;
mod wallet_session;

pub use chain_reader::ChainReader;
pub use transaction_submitter::TransactionSubmitter;
pub use wallet_session::WalletSession;
