//! Argument layouts for the AMM contract's entry points.

use super::{ClarityValue, ContractCall, ContractFunction};
use crate::domain::{
    ContractPrincipal, DepositQuote, FeeBasisPoints, StandardPrincipal, SwapQuote, TokenPair,
    WithdrawQuote,
};
use crate::error::Result;

/// Identifies one pool of one AMM deployment: the AMM contract plus the
/// `(token-0, token-1, fee-bps)` triple the contract keys pools by.
///
/// Every call builder here returns the arguments in exactly the order the
/// contract declares them.
///
/// # Examples
///
/// ```
/// use amm_quote::config::QuoteConfig;
///
/// let key = QuoteConfig::testnet().expect("valid").pool_key();
/// let call = key.get_pool_data();
/// assert_eq!(call.function_name(), "get-pool-data");
/// assert_eq!(call.args().len(), 3);
/// assert_eq!(
///     key.lp_token().expect("valid").name(),
///     "amm-lp-mock-token-mock-token-2-500",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoolKey {
    amm: ContractPrincipal,
    pair: TokenPair,
    fee: FeeBasisPoints,
}

impl PoolKey {
    /// Creates a pool key.
    #[must_use]
    pub const fn new(amm: ContractPrincipal, pair: TokenPair, fee: FeeBasisPoints) -> Self {
        Self { amm, pair, fee }
    }

    /// Returns the AMM contract.
    #[must_use]
    pub const fn amm(&self) -> &ContractPrincipal {
        &self.amm
    }

    /// Returns the token pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// Returns the pool fee.
    #[must_use]
    pub const fn fee(&self) -> FeeBasisPoints {
        self.fee
    }

    /// Returns `(token-0, token-1, fee-bps)`.
    #[must_use]
    pub fn pool_id_args(&self) -> Vec<ClarityValue> {
        vec![
            self.pair.first().clone().into(),
            self.pair.second().clone().into(),
            self.fee.into(),
        ]
    }

    /// Returns the LP token contract the AMM deploys for this pool,
    /// named `amm-lp-{token-0}-{token-1}-{fee-bps}`.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidPrincipal`](crate::error::QuoteError::InvalidPrincipal)
    /// if the derived name exceeds the contract-name limit.
    pub fn lp_token(&self) -> Result<ContractPrincipal> {
        let name = format!(
            "amm-lp-{}-{}-{}",
            self.pair.first().name(),
            self.pair.second().name(),
            self.fee.get()
        );
        ContractPrincipal::new(self.amm.deployer().clone(), name)
    }

    /// Read-only `get-pool-data`.
    #[must_use]
    pub fn get_pool_data(&self) -> ContractCall {
        ContractCall::new(
            self.amm.clone(),
            ContractFunction::GetPoolData,
            self.pool_id_args(),
        )
    }

    /// Read-only `get-balance` of `owner` on the pool's LP token.
    ///
    /// # Errors
    ///
    /// Propagates [`lp_token`](Self::lp_token) errors.
    pub fn get_lp_balance(&self, owner: &StandardPrincipal) -> Result<ContractCall> {
        Ok(ContractCall::new(
            self.lp_token()?,
            ContractFunction::GetBalance,
            vec![owner.clone().into()],
        ))
    }

    /// `create-pool (token-0 token-1 fee-bps)`.
    #[must_use]
    pub fn create_pool(&self) -> ContractCall {
        ContractCall::new(
            self.amm.clone(),
            ContractFunction::CreatePool,
            self.pool_id_args(),
        )
    }

    /// `swap (token-in token-out input-amount min-output-amount)`.
    #[must_use]
    pub fn swap(&self, quote: &SwapQuote) -> ContractCall {
        let (token_in, token_out) = self.pair.tokens_for(quote.direction());
        ContractCall::new(
            self.amm.clone(),
            ContractFunction::Swap,
            vec![
                token_in.clone().into(),
                token_out.clone().into(),
                quote.amount_in().into(),
                quote.min_amount_out().into(),
            ],
        )
    }

    /// `add-liquidity (token-0 token-1 fee-bps amount-0 amount-1 min-0 min-1)`.
    #[must_use]
    pub fn add_liquidity(&self, quote: &DepositQuote) -> ContractCall {
        let mut args = self.pool_id_args();
        args.extend([
            quote.amount_a().into(),
            quote.amount_b().into(),
            quote.min_amount_a().into(),
            quote.min_amount_b().into(),
        ]);
        ContractCall::new(self.amm.clone(), ContractFunction::AddLiquidity, args)
    }

    /// `remove-liquidity (token-0 token-1 fee-bps lp-amount min-0 min-1)`.
    #[must_use]
    pub fn remove_liquidity(&self, quote: &WithdrawQuote) -> ContractCall {
        let mut args = self.pool_id_args();
        args.extend([
            quote.lp_to_burn().into(),
            quote.min_amount_a().into(),
            quote.min_amount_b().into(),
        ]);
        ContractCall::new(self.amm.clone(), ContractFunction::RemoveLiquidity, args)
    }
}
