//! The two tokens of a pool, in contract order.

use super::{ContractPrincipal, SwapDirection};
use crate::error::{QuoteError, Result};

/// The two token contracts of a pool, as `(token-0, token-1)`.
///
/// Unlike address-sorted pairs, the order here is the order the AMM
/// contract was given at pool creation: it is part of the pool id, so it
/// is preserved exactly as supplied.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::{ContractPrincipal, SwapDirection, TokenPair};
///
/// let mt: ContractPrincipal = "STTGMHNSGEDHMK15KY3C4TAN5NDQ1Z8FJN1YV757.mock-token".parse().expect("valid");
/// let mt2: ContractPrincipal = "STTGMHNSGEDHMK15KY3C4TAN5NDQ1Z8FJN1YV757.mock-token-2".parse().expect("valid");
///
/// let pair = TokenPair::new(mt.clone(), mt2.clone()).expect("distinct");
/// assert_eq!(pair.direction_for(&mt2).expect("member"), SwapDirection::BToA);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenPair {
    token_a: ContractPrincipal,
    token_b: ContractPrincipal,
}

impl TokenPair {
    /// Creates a pair, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidToken`] if both tokens are the same
    /// contract.
    pub fn new(token_a: ContractPrincipal, token_b: ContractPrincipal) -> Result<Self> {
        if token_a == token_b {
            return Err(QuoteError::InvalidToken(
                "token pair requires two distinct contracts",
            ));
        }
        Ok(Self { token_a, token_b })
    }

    /// Returns token-0.
    #[must_use]
    pub const fn first(&self) -> &ContractPrincipal {
        &self.token_a
    }

    /// Returns token-1.
    #[must_use]
    pub const fn second(&self) -> &ContractPrincipal {
        &self.token_b
    }

    /// Returns `true` if `token` is one of the pair.
    #[must_use]
    pub fn contains(&self, token: &ContractPrincipal) -> bool {
        self.token_a == *token || self.token_b == *token
    }

    /// Returns the swap direction that sells `token_in`.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidToken`] if `token_in` is not in the pair.
    pub fn direction_for(&self, token_in: &ContractPrincipal) -> Result<SwapDirection> {
        if *token_in == self.token_a {
            Ok(SwapDirection::AToB)
        } else if *token_in == self.token_b {
            Ok(SwapDirection::BToA)
        } else {
            Err(QuoteError::InvalidToken("token is not part of this pair"))
        }
    }

    /// Returns `(token_in, token_out)` for a direction.
    #[must_use]
    pub const fn tokens_for(&self, direction: SwapDirection) -> (&ContractPrincipal, &ContractPrincipal) {
        match direction {
            SwapDirection::AToB => (&self.token_a, &self.token_b),
            SwapDirection::BToA => (&self.token_b, &self.token_a),
        }
    }
}
