//! Contract-call payloads for the AMM deployment.
//!
//! The engine never talks to the chain itself. It builds [`ContractCall`]s
//! (function name plus ordered [`ClarityValue`] arguments) and hands them
//! to a [`TransactionSubmitter`](crate::traits::TransactionSubmitter) or a
//! [`ChainReader`](crate::traits::ChainReader).

mod call;
mod pool_key;
mod value;

pub use call::{ContractCall, ContractFunction, TxId};
pub use pool_key::PoolKey;
pub use value::ClarityValue;
