//! `Result`-returning arithmetic for [`Amount`].
//!
//! [`Amount`]'s inherent methods return `Option`; the quotation engine
//! needs typed errors instead, so [`CheckedArithmetic`] maps each failure
//! onto the matching [`QuoteError`] variant.
//!
//! # Examples
//!
//! ```
//! use amm_quote::domain::{Amount, Rounding};
//! use amm_quote::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(1_000);
//! let deposit = Amount::new(250);
//! assert_eq!(reserve.safe_add(&deposit), Ok(Amount::new(1_250)));
//! assert!(Amount::MAX.safe_add(&deposit).is_err());
//! assert_eq!(
//!     reserve.safe_mul_div(&deposit, &Amount::new(100), Rounding::Down),
//!     Ok(Amount::new(2_500)),
//! );
//! ```

use super::mul_div;
use crate::domain::{Amount, Rounding};
use crate::error::{QuoteError, Result};

/// Fallible arithmetic returning [`QuoteError`].
///
/// No method panics and none saturates: every failure is an `Err`.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Overflow`] if the sum exceeds the range.
    fn safe_add(&self, other: &Self) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Overflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self>;

    /// Computes `self × factor / divisor` with a widened intermediate.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::DivisionByZero`] if `divisor` is zero.
    /// - [`QuoteError::Overflow`] if the quotient exceeds the range.
    fn safe_mul_div(&self, factor: &Self, divisor: &Self, rounding: Rounding) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(QuoteError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(QuoteError::Overflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul_div(&self, factor: &Self, divisor: &Self, rounding: Rounding) -> Result<Self> {
        mul_div(self.get(), factor.get(), divisor.get(), rounding).map(Amount::new)
    }
}
