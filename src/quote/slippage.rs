//! Slippage floors submitted alongside state-changing calls.

use crate::domain::{Amount, Fraction, Rounding};
use crate::error::Result;

/// Returns `⌊amount × (1 − tolerance)⌋`, the smallest amount the caller
/// accepts when the call executes.
///
/// Swaps and deposits derive their floors through this one function.
///
/// # Errors
///
/// Never fails for a valid [`Fraction`]; the result is at most `amount`.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::{Amount, Fraction};
/// use amm_quote::quote::min_acceptable;
///
/// let one_percent = Fraction::from_percent(1).expect("valid");
/// assert_eq!(min_acceptable(Amount::new(1_000_000), one_percent), Ok(Amount::new(990_000)));
/// ```
pub fn min_acceptable(amount: Amount, tolerance: Fraction) -> Result<Amount> {
    tolerance.complement().apply(amount, Rounding::Down)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn pct(p: u8) -> Fraction {
        let Ok(f) = Fraction::from_percent(p) else {
            panic!("valid percent");
        };
        f
    }

    #[test]
    fn one_percent_floor() {
        assert_eq!(
            min_acceptable(Amount::new(18_811_881_188), pct(1)),
            Ok(Amount::new(18_623_762_376))
        );
    }

    #[test]
    fn floors_toward_zero() {
        // 99 × 0.99 = 98.01
        assert_eq!(min_acceptable(Amount::new(99), pct(1)), Ok(Amount::new(98)));
    }

    #[test]
    fn zero_tolerance_is_identity() {
        assert_eq!(
            min_acceptable(Amount::new(12_345), Fraction::ZERO),
            Ok(Amount::new(12_345))
        );
    }

    #[test]
    fn full_tolerance_accepts_anything() {
        assert_eq!(min_acceptable(Amount::MAX, Fraction::ONE), Ok(Amount::ZERO));
    }
}
