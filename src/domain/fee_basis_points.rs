//! Pool fee expressed in basis points.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::{QuoteError, Result};
use crate::math::mul_div;

/// 100% expressed in basis points.
pub(crate) const BPS_DENOMINATOR: u128 = 10_000;

/// Fee charged on the input side of a swap, in basis points
/// (1 bp = 0.01%, 10 000 bp = 100%).
///
/// A pool with a 100% fee could never pay out, so the valid range is the
/// half-open interval `[0, 10000)`, enforced at construction.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::FeeBasisPoints;
///
/// let fee = FeeBasisPoints::new(500).expect("5% is valid");
/// assert_eq!(fee.complement(), 9_500);
/// assert_eq!(fee.to_string(), "500bp");
/// assert!(FeeBasisPoints::new(10_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FeeBasisPoints(u16);

impl FeeBasisPoints {
    /// A fee-free pool.
    pub const ZERO: Self = Self(0);

    /// Creates a fee after validating it is below 100%.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidFee`] if `bps >= 10_000`.
    pub const fn new(bps: u16) -> Result<Self> {
        if bps as u128 >= BPS_DENOMINATOR {
            return Err(QuoteError::InvalidFee("fee must be below 10000 bps"));
        }
        Ok(Self(bps))
    }

    /// Returns the raw basis-point value.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Returns `10_000 − bps`, the share of the input that reaches the curve.
    #[must_use]
    pub const fn complement(&self) -> u128 {
        BPS_DENOMINATOR - self.0 as u128
    }

    /// Returns the fee as a percentage, e.g. 500 bp → `5.0`.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Computes the fee portion of `amount_in`.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Overflow`] only if the rounded-up result
    /// exceeds `u128`, which requires `amount_in` near `u128::MAX`.
    pub fn fee_on(&self, amount_in: Amount, rounding: Rounding) -> Result<Amount> {
        mul_div(amount_in.get(), u128::from(self.0), BPS_DENOMINATOR, rounding).map(Amount::new)
    }
}

impl fmt::Display for FeeBasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
