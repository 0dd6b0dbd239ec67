//! Quotation requests and their results.

use super::{Amount, Decimals, Fraction, Rounding, SwapDirection};
use crate::error::Result;
use crate::math::mul_div;

/// What the caller wants quoted against the current pool snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteRequest {
    /// Sell `amount_in` in the given direction.
    Swap {
        /// Input amount in smallest units; must be positive.
        amount_in: Amount,
        /// Which token is sold.
        direction: SwapDirection,
    },
    /// Deposit `amount_a` of token-0 and the ratio-preserving amount of
    /// token-1.
    Deposit {
        /// Token-0 amount in smallest units; must be positive.
        amount_a: Amount,
    },
    /// Burn a share of the caller's LP balance.
    Withdraw {
        /// The caller's LP balance, read from the LP token contract.
        lp_balance: Amount,
        /// Share to burn; must lie in `(0, 1]`.
        lp_fraction: Fraction,
    },
}

/// A quoted swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapQuote {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
    min_amount_out: Amount,
}

impl SwapQuote {
    pub(crate) const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
        min_amount_out: Amount,
    ) -> Self {
        Self {
            direction,
            amount_in,
            amount_out,
            fee,
            min_amount_out,
        }
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the expected output.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee portion of the input, rounded up.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Returns the minimum output submitted with the swap.
    pub const fn min_amount_out(&self) -> Amount {
        self.min_amount_out
    }

    /// Output per whole unit of input, as a fixed-point value at
    /// `decimals` precision, so it formats with the same
    /// [`Decimals`] as the token amounts.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Overflow`](crate::error::QuoteError::Overflow)
    /// if the rate does not fit in `u128`.
    pub fn effective_rate(&self, decimals: Decimals) -> Result<Amount> {
        mul_div(
            self.amount_out.get(),
            decimals.scale(),
            self.amount_in.get(),
            Rounding::Down,
        )
        .map(Amount::new)
    }
}

/// A quoted ratio-preserving deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositQuote {
    amount_a: Amount,
    amount_b: Amount,
    min_amount_a: Amount,
    min_amount_b: Amount,
}

impl DepositQuote {
    pub(crate) const fn new(
        amount_a: Amount,
        amount_b: Amount,
        min_amount_a: Amount,
        min_amount_b: Amount,
    ) -> Self {
        Self {
            amount_a,
            amount_b,
            min_amount_a,
            min_amount_b,
        }
    }

    /// Returns the token-0 deposit.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the token-1 deposit that preserves the pool ratio.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Returns the slippage floor for token-0.
    pub const fn min_amount_a(&self) -> Amount {
        self.min_amount_a
    }

    /// Returns the slippage floor for token-1.
    pub const fn min_amount_b(&self) -> Amount {
        self.min_amount_b
    }
}

/// A quoted LP burn.
///
/// Payout amounts are left to the contract, so both minimums are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawQuote {
    lp_balance: Amount,
    lp_fraction: Fraction,
    lp_to_burn: Amount,
}

impl WithdrawQuote {
    pub(crate) const fn new(lp_balance: Amount, lp_fraction: Fraction, lp_to_burn: Amount) -> Self {
        Self {
            lp_balance,
            lp_fraction,
            lp_to_burn,
        }
    }

    /// Returns the LP balance the quote was computed from.
    pub const fn lp_balance(&self) -> Amount {
        self.lp_balance
    }

    /// Returns the requested share.
    #[must_use]
    pub const fn lp_fraction(&self) -> Fraction {
        self.lp_fraction
    }

    /// Returns the LP shares to burn.
    pub const fn lp_to_burn(&self) -> Amount {
        self.lp_to_burn
    }

    /// Minimum token-0 payout; always zero.
    pub const fn min_amount_a(&self) -> Amount {
        Amount::ZERO
    }

    /// Minimum token-1 payout; always zero.
    pub const fn min_amount_b(&self) -> Amount {
        Amount::ZERO
    }
}

/// Result of evaluating a [`QuoteRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteResult {
    /// Answer to [`QuoteRequest::Swap`].
    Swap(SwapQuote),
    /// Answer to [`QuoteRequest::Deposit`].
    Deposit(DepositQuote),
    /// Answer to [`QuoteRequest::Withdraw`].
    Withdraw(WithdrawQuote),
}

impl QuoteResult {
    /// The derived amount: swap output, token-1 deposit, or LP to burn.
    pub const fn amount(&self) -> Amount {
        match self {
            Self::Swap(q) => q.amount_out(),
            Self::Deposit(q) => q.amount_b(),
            Self::Withdraw(q) => q.lp_to_burn(),
        }
    }

    /// The slippage floor that accompanies [`amount`](Self::amount).
    pub const fn min_acceptable(&self) -> Amount {
        match self {
            Self::Swap(q) => q.min_amount_out(),
            Self::Deposit(q) => q.min_amount_b(),
            Self::Withdraw(q) => q.min_amount_b(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn swap_quote(amount_in: u128, amount_out: u128) -> SwapQuote {
        SwapQuote::new(
            SwapDirection::AToB,
            Amount::new(amount_in),
            Amount::new(amount_out),
            Amount::ZERO,
            Amount::new(amount_out),
        )
    }

    #[test]
    fn effective_rate_is_micro_fixed_point() {
        assert_eq!(
            swap_quote(2_000_000, 3_000_000).effective_rate(Decimals::MICRO),
            Ok(Amount::new(1_500_000))
        );
        assert_eq!(
            swap_quote(3, 1).effective_rate(Decimals::MICRO),
            Ok(Amount::new(333_333))
        );
    }

    #[test]
    fn effective_rate_follows_token_precision() {
        let Ok(eight) = Decimals::new(8) else {
            panic!("valid decimals");
        };
        let quote = swap_quote(2_000_000, 3_000_000);
        let Ok(rate) = quote.effective_rate(eight) else {
            panic!("rate fits");
        };
        assert_eq!(rate, Amount::new(150_000_000));
        assert_eq!(eight.format_amount(rate), "1.50000000");
        assert_eq!(quote.effective_rate(Decimals::ZERO), Ok(Amount::new(1)));
    }

    #[test]
    fn result_accessors() {
        let swap = QuoteResult::Swap(SwapQuote::new(
            SwapDirection::BToA,
            Amount::new(10),
            Amount::new(9),
            Amount::new(1),
            Amount::new(8),
        ));
        assert_eq!(swap.amount(), Amount::new(9));
        assert_eq!(swap.min_acceptable(), Amount::new(8));

        let deposit = QuoteResult::Deposit(DepositQuote::new(
            Amount::new(10),
            Amount::new(20),
            Amount::new(9),
            Amount::new(19),
        ));
        assert_eq!(deposit.amount(), Amount::new(20));
        assert_eq!(deposit.min_acceptable(), Amount::new(19));

        let withdraw = QuoteResult::Withdraw(WithdrawQuote::new(
            Amount::new(100),
            Fraction::ONE,
            Amount::new(100),
        ));
        assert_eq!(withdraw.amount(), Amount::new(100));
        assert_eq!(withdraw.min_acceptable(), Amount::ZERO);
    }
}
