//! Raw token amount in the smallest on-chain unit.

use core::fmt;

use crate::error::{QuoteError, Result};

/// A token quantity in the smallest on-chain unit.
///
/// With the usual 6-decimal tokens, `Amount::new(1_500_000)` is `1.5`
/// whole tokens. `Amount` never interprets decimals itself; parsing and
/// display go through [`Decimals`](super::Decimals).
///
/// Arithmetic is checked and returns `None` instead of wrapping or
/// panicking. Use [`CheckedArithmetic`](crate::math::CheckedArithmetic) for
/// the `Result`-returning variants.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(250);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(350)));
/// assert_eq!(a.checked_sub(&b), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw smallest-unit value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw smallest-unit value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `self` if it is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] with `what` as the message when
    /// the amount is zero.
    pub const fn require_positive(self, what: &'static str) -> Result<Self> {
        if self.0 == 0 {
            return Err(QuoteError::InvalidInput(what));
        }
        Ok(self)
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
