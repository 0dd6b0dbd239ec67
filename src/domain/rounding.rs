//! Explicit rounding direction for fixed-point division.

/// Rounding direction for a division whose exact quotient is fractional.
///
/// Quoted outputs and slippage minimums are always [`Rounding::Down`] so
/// the engine never promises more than the contract pays out. Fee
/// estimates shown to the user are [`Rounding::Up`].
///
/// # Examples
///
/// ```
/// use amm_quote::domain::Rounding;
///
/// assert_eq!(Rounding::Down.resolve(3, true), 3);
/// assert_eq!(Rounding::Up.resolve(3, true), 4);
/// assert_eq!(Rounding::Up.resolve(3, false), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    #[default]
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Applies the direction to a truncated quotient, given whether the
    /// division left a remainder.
    ///
    /// A ceiling adjustment on `u128::MAX` saturates; callers only reach
    /// that with a remainder when the quotient is below the maximum.
    #[must_use]
    pub const fn resolve(&self, truncated: u128, has_remainder: bool) -> u128 {
        match self {
            Self::Up if has_remainder => truncated.saturating_add(1),
            _ => truncated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_down() {
        assert_eq!(Rounding::default(), Rounding::Down);
        assert!(!Rounding::default().is_up());
    }

    #[test]
    fn down_ignores_remainder() {
        assert_eq!(Rounding::Down.resolve(10, true), 10);
        assert_eq!(Rounding::Down.resolve(10, false), 10);
    }

    #[test]
    fn up_adds_one_only_with_remainder() {
        assert_eq!(Rounding::Up.resolve(10, true), 11);
        assert_eq!(Rounding::Up.resolve(10, false), 10);
    }
}
