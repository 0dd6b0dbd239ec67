//! Fractions in `[0, 1]` at micro-unit precision.

use core::fmt;

use super::{Amount, Decimals, Rounding};
use crate::error::{QuoteError, Result};
use crate::math::mul_div;

/// Parts per million representing one whole.
const PPM: u32 = 1_000_000;

/// A fraction in the closed interval `[0, 1]`, stored in parts per
/// million so it shares the 6-decimal precision of on-chain amounts.
///
/// Used for slippage tolerances and for the share of a liquidity
/// position to withdraw.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::{Amount, Fraction, Rounding};
///
/// let one_percent = Fraction::from_percent(1).expect("<= 100");
/// assert_eq!(one_percent.parts_per_million(), 10_000);
///
/// let kept = one_percent.complement();
/// assert_eq!(kept.apply(Amount::new(1_000), Rounding::Down), Ok(Amount::new(990)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fraction(u32);

impl Fraction {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// One whole.
    pub const ONE: Self = Self(PPM);

    /// Creates a fraction from parts per million.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] if `ppm` exceeds one million.
    pub const fn from_parts_per_million(ppm: u32) -> Result<Self> {
        if ppm > PPM {
            return Err(QuoteError::InvalidInput("fraction must be within [0, 1]"));
        }
        Ok(Self(ppm))
    }

    /// Creates a fraction from a whole percentage (`0..=100`).
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] if `percent` exceeds 100.
    pub const fn from_percent(percent: u8) -> Result<Self> {
        Self::from_parts_per_million(percent as u32 * 10_000)
    }

    /// Creates a fraction from basis points (`0..=10_000`).
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] if `bps` exceeds 10 000.
    pub const fn from_basis_points(bps: u16) -> Result<Self> {
        Self::from_parts_per_million(bps as u32 * 100)
    }

    /// Parses a decimal such as `"0.25"` or `"1"`.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] if the text is not a decimal or
    /// the value lies outside `[0, 1]`.
    pub fn parse(input: &str) -> Result<Self> {
        let raw = Decimals::MICRO.parse_amount(input).map_err(|e| match e {
            QuoteError::Overflow(_) => QuoteError::InvalidInput("fraction must be within [0, 1]"),
            other => other,
        })?;
        let ppm = u32::try_from(raw.get())
            .map_err(|_| QuoteError::InvalidInput("fraction must be within [0, 1]"))?;
        Self::from_parts_per_million(ppm)
    }

    /// Returns the value in parts per million.
    #[must_use]
    pub const fn parts_per_million(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the fraction is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `1 − self`.
    #[must_use]
    pub const fn complement(&self) -> Self {
        Self(PPM - self.0)
    }

    /// Computes `amount × self`.
    ///
    /// The result never exceeds `amount`, so it cannot overflow.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the `Result` carries the shared arithmetic
    /// error type.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        mul_div(amount.get(), u128::from(self.0), u128::from(PPM), rounding).map(Amount::new)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = Decimals::MICRO.format_amount(Amount::new(u128::from(self.0)));
        f.write_str(&text)
    }
}
