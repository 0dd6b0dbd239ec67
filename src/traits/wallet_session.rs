//! Wallet sign-in state.

use crate::domain::StandardPrincipal;

/// The user's wallet session.
///
/// Quotes are available to anyone; every state-changing operation first
/// checks [`is_signed_in`](Self::is_signed_in).
pub trait WalletSession {
    /// Whether a wallet is connected and authorised.
    fn is_signed_in(&self) -> bool;

    /// The signed-in account, if any.
    fn account(&self) -> Option<StandardPrincipal>;
}

impl<T: WalletSession + ?Sized> WalletSession for &T {
    fn is_signed_in(&self) -> bool {
        (**self).is_signed_in()
    }

    fn account(&self) -> Option<StandardPrincipal> {
        (**self).account()
    }
}
