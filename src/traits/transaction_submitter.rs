//! Hand-off of signed contract calls to the wallet.

use crate::contract::{ContractCall, TxId};
use crate::error::Result;

/// Submits a state-changing [`ContractCall`] on behalf of the signed-in
/// account.
///
/// Signing and broadcasting are entirely the implementor's concern. The
/// engine only guarantees that the call's arguments are in contract order
/// and that every minimum-output argument came from a fresh quote.
pub trait TransactionSubmitter {
    /// Submits `call` and returns the transaction id on acceptance.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Submission`](crate::error::QuoteError::Submission)
    /// if the wallet rejected or failed to broadcast the transaction.
    fn submit(&self, call: &ContractCall) -> Result<TxId>;
}

impl<T: TransactionSubmitter + ?Sized> TransactionSubmitter for &T {
    fn submit(&self, call: &ContractCall) -> Result<TxId> {
        (**self).submit(call)
    }
}
