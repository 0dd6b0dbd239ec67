//! Token decimal places, with fixed-point parsing and formatting.

use crate::error::{QuoteError, Result};

use super::Amount;

/// Largest supported number of decimal places.
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places between a token's smallest unit and one whole
/// token.
///
/// Valid range is `0..=18`. The reference pools use 6 decimals
/// ([`Decimals::MICRO`]), so `1.5` tokens is `1_500_000` smallest units.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::{Amount, Decimals};
///
/// let d = Decimals::MICRO;
/// let raw = d.parse_amount("1.5").expect("valid decimal");
/// assert_eq!(raw, Amount::new(1_500_000));
/// assert_eq!(d.format_amount(raw), "1.500000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimals(u8);

impl Default for Decimals {
    fn default() -> Self {
        Self::MICRO
    }
}

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Six decimal places (micro-units), the on-chain precision of the
    /// reference tokens and of every ratio the engine displays.
    pub const MICRO: Self = Self(6);

    /// Maximum supported decimal places.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self> {
        if value > MAX_DECIMALS {
            return Err(QuoteError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`, the number of smallest units in one token.
    #[must_use]
    pub const fn scale(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }

    /// Parses a human-entered decimal string into smallest units.
    ///
    /// Accepts plain decimals such as `"12"`, `"1.5"` or `".25"`, with
    /// surrounding whitespace. Digits beyond the precision are dropped,
    /// which rounds toward zero.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::InvalidInput`] for empty input, signs, exponents,
    ///   more than one dot, or any other non-digit character.
    /// - [`QuoteError::Overflow`] if the value does not fit in `u128`.
    pub fn parse_amount(&self, input: &str) -> Result<Amount> {
        let text = input.trim();
        let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(QuoteError::InvalidInput("amount has no digits"));
        }
        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(whole) || !is_digits(frac) {
            return Err(QuoteError::InvalidInput("amount is not a decimal number"));
        }

        let places = usize::from(self.0);
        let mut raw: u128 = 0;
        let kept = whole.bytes().chain(frac.bytes().take(places));
        for digit in kept {
            raw = push_digit(raw, digit - b'0')?;
        }
        for _ in frac.len().min(places)..places {
            raw = push_digit(raw, 0)?;
        }
        Ok(Amount::new(raw))
    }

    /// Formats smallest units as a decimal string with exactly `decimals`
    /// fractional digits.
    #[must_use]
    pub fn format_amount(&self, amount: Amount) -> String {
        let scale = self.scale();
        let whole = amount.get() / scale;
        if self.0 == 0 {
            return whole.to_string();
        }
        let frac = amount.get() % scale;
        format!("{whole}.{frac:0width$}", width = usize::from(self.0))
    }
}

fn push_digit(acc: u128, digit: u8) -> Result<u128> {
    acc.checked_mul(10)
        .and_then(|v| v.checked_add(u128::from(digit)))
        .ok_or(QuoteError::Overflow("amount exceeds u128"))
}
