//! Fetch-then-quote orchestration and call submission.

use tracing::{debug, info, warn};

use crate::config::QuoteConfig;
use crate::contract::{ContractCall, PoolKey, TxId};
use crate::domain::{
    Amount, ContractPrincipal, DepositQuote, Fraction, PoolState, QuoteRequest, QuoteResult,
    StandardPrincipal, SwapQuote, WithdrawQuote,
};
use crate::error::{QuoteError, Result};
use crate::quote::evaluate;
use crate::traits::{ChainReader, TransactionSubmitter, WalletSession};

/// Front-end client for one configured pool.
///
/// Every quote is computed against a snapshot read immediately before, and
/// every state-changing call re-quotes rather than trusting a value the
/// user saw earlier. Minimum-output arguments always come from the
/// configured slippage tolerance.
///
/// # Examples
///
/// ```
/// use amm_quote::client::DexClient;
/// use amm_quote::config::QuoteConfig;
/// use amm_quote::contract::{ContractCall, PoolKey, TxId};
/// use amm_quote::domain::{Amount, ContractPrincipal, PoolState, StandardPrincipal};
/// use amm_quote::error::{QuoteError, Result};
/// use amm_quote::traits::{ChainReader, TransactionSubmitter, WalletSession};
///
/// struct Snapshot(PoolState);
/// impl ChainReader for Snapshot {
///     fn pool_state(&self, _: &PoolKey) -> Result<Option<PoolState>> {
///         Ok(Some(self.0))
///     }
///     fn lp_balance(&self, _: &ContractPrincipal, _: &StandardPrincipal) -> Result<Amount> {
///         Ok(Amount::ZERO)
///     }
/// }
///
/// struct ReadOnly;
/// impl TransactionSubmitter for ReadOnly {
///     fn submit(&self, _: &ContractCall) -> Result<TxId> {
///         Err(QuoteError::Submission("read-only".into()))
///     }
/// }
/// impl WalletSession for ReadOnly {
///     fn is_signed_in(&self) -> bool { false }
///     fn account(&self) -> Option<StandardPrincipal> { None }
/// }
///
/// let config = QuoteConfig::testnet().expect("valid");
/// let pool = PoolState::new(
///     Amount::new(1_000_000_000_000),
///     Amount::new(2_000_000_000_000),
///     config.fee(),
///     Amount::new(1_414_213_562_373),
/// );
/// let token_a = config.pair().first().clone();
/// let client = DexClient::new(config, Snapshot(pool), ReadOnly, ReadOnly);
///
/// let quote = client.quote_swap(&token_a, Amount::new(10_000_000_000)).expect("quoted");
/// assert_eq!(quote.amount_out(), Amount::new(18_811_881_188));
/// assert_eq!(client.create_pool(), Err(QuoteError::NotSignedIn));
/// ```
#[derive(Debug)]
pub struct DexClient<R, S, W> {
    config: QuoteConfig,
    pool_key: PoolKey,
    reader: R,
    submitter: S,
    wallet: W,
}

impl<R, S, W> DexClient<R, S, W>
where
    R: ChainReader,
    S: TransactionSubmitter,
    W: WalletSession,
{
    /// Creates a client for the pool described by `config`.
    #[must_use]
    pub fn new(config: QuoteConfig, reader: R, submitter: S, wallet: W) -> Self {
        let pool_key = config.pool_key();
        Self {
            config,
            pool_key,
            reader,
            submitter,
            wallet,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// Returns the key of the configured pool.
    #[must_use]
    pub const fn pool_key(&self) -> &PoolKey {
        &self.pool_key
    }

    /// Reads the pool without requiring it to exist.
    ///
    /// # Errors
    ///
    /// Propagates reader failures.
    pub fn pool_status(&self) -> Result<Option<PoolState>> {
        self.reader.pool_state(&self.pool_key)
    }

    /// Reads a fresh snapshot of an initialized pool.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::PoolNotInitialized`] if the pool does not exist or
    ///   either reserve is zero.
    /// - Reader failures.
    pub fn fetch_pool(&self) -> Result<PoolState> {
        let pool = self
            .pool_status()?
            .filter(PoolState::is_initialized)
            .ok_or(QuoteError::PoolNotInitialized)?;
        debug!(
            reserve_a = %pool.reserve_a(),
            reserve_b = %pool.reserve_b(),
            lp_supply = %pool.lp_supply(),
            fee = %pool.fee(),
            "fetched pool snapshot"
        );
        Ok(pool)
    }

    /// Evaluates `request` against a fresh snapshot with the configured
    /// slippage tolerance.
    ///
    /// # Errors
    ///
    /// Any error of [`fetch_pool`](Self::fetch_pool) or
    /// [`evaluate`](crate::quote::evaluate).
    pub fn quote(&self, request: &QuoteRequest) -> Result<QuoteResult> {
        let pool = self.fetch_pool()?;
        let result = evaluate(&pool, request, self.config.slippage())
            .inspect_err(|e| warn!(?request, error = %e, "quote rejected"))?;
        debug!(
            amount = %result.amount(),
            min_acceptable = %result.min_acceptable(),
            "quoted"
        );
        Ok(result)
    }

    /// Quotes a swap of `amount_in` units of `token_in`.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::InvalidToken`] if `token_in` is not in the pool.
    /// - Any error of [`quote`](Self::quote).
    pub fn quote_swap(&self, token_in: &ContractPrincipal, amount_in: Amount) -> Result<SwapQuote> {
        let direction = self.config.pair().direction_for(token_in)?;
        match self.quote(&QuoteRequest::Swap {
            amount_in,
            direction,
        })? {
            QuoteResult::Swap(quote) => Ok(quote),
            _ => Err(QuoteError::InvalidInput("expected a swap quote")),
        }
    }

    /// Quotes the token-B amount that must accompany `amount_a`.
    ///
    /// # Errors
    ///
    /// Any error of [`quote`](Self::quote).
    pub fn quote_deposit(&self, amount_a: Amount) -> Result<DepositQuote> {
        match self.quote(&QuoteRequest::Deposit { amount_a })? {
            QuoteResult::Deposit(quote) => Ok(quote),
            _ => Err(QuoteError::InvalidInput("expected a deposit quote")),
        }
    }

    /// Quotes the LP amount burned when withdrawing `lp_fraction` of the
    /// signed-in account's position.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::NotSignedIn`] without a wallet account.
    /// - Any error of [`quote`](Self::quote).
    pub fn quote_withdraw(&self, lp_fraction: Fraction) -> Result<WithdrawQuote> {
        let lp_balance = self.lp_balance()?;
        match self.quote(&QuoteRequest::Withdraw {
            lp_balance,
            lp_fraction,
        })? {
            QuoteResult::Withdraw(quote) => Ok(quote),
            _ => Err(QuoteError::InvalidInput("expected a withdraw quote")),
        }
    }

    /// Reads the signed-in account's LP-token balance.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::NotSignedIn`] without a wallet account.
    /// - Reader failures.
    pub fn lp_balance(&self) -> Result<Amount> {
        let owner = self.signed_in_account()?;
        let lp_token = self.pool_key.lp_token()?;
        let balance = self.reader.lp_balance(&lp_token, &owner)?;
        debug!(%owner, %balance, "fetched lp balance");
        Ok(balance)
    }

    /// Submits `create-pool` for the configured pair and fee.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::NotSignedIn`] without a wallet session.
    /// - [`QuoteError::PoolAlreadyExists`] if the pool is initialized.
    /// - Reader and submitter failures.
    pub fn create_pool(&self) -> Result<TxId> {
        self.signed_in_account()?;
        if self.pool_status()?.is_some_and(|pool| pool.is_initialized()) {
            warn!(pool = %self.pool_key.amm(), "pool already initialized");
            return Err(QuoteError::PoolAlreadyExists);
        }
        self.submit(&self.pool_key.create_pool())
    }

    /// Swaps `amount_in` units of `token_in` with a freshly quoted minimum
    /// output.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::NotSignedIn`] without a wallet session.
    /// - [`QuoteError::InvalidInput`] if the quoted output is zero.
    /// - Any error of [`quote_swap`](Self::quote_swap) or the submitter.
    pub fn swap(&self, token_in: &ContractPrincipal, amount_in: Amount) -> Result<TxId> {
        self.signed_in_account()?;
        let quote = self.quote_swap(token_in, amount_in)?;
        if quote.amount_out().is_zero() {
            warn!(%amount_in, "swap output rounds to zero");
            return Err(QuoteError::InvalidInput("swap output rounds to zero"));
        }
        self.submit(&self.pool_key.swap(&quote))
    }

    /// Adds `amount_a` of token A plus the proportional token-B amount.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::NotSignedIn`] without a wallet session.
    /// - [`QuoteError::InvalidInput`] if the token-B amount rounds to zero.
    /// - Any error of [`quote_deposit`](Self::quote_deposit) or the
    ///   submitter.
    pub fn add_liquidity(&self, amount_a: Amount) -> Result<TxId> {
        self.signed_in_account()?;
        let quote = self.quote_deposit(amount_a)?;
        if quote.amount_b().is_zero() {
            warn!(%amount_a, "deposit token-b amount rounds to zero");
            return Err(QuoteError::InvalidInput(
                "deposit requires a positive token-b amount",
            ));
        }
        self.submit(&self.pool_key.add_liquidity(&quote))
    }

    /// Burns `lp_fraction` of the signed-in account's LP tokens.
    ///
    /// The contract computes the payout, so both minimums are zero.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::NotSignedIn`] without a wallet session.
    /// - [`QuoteError::InvalidInput`] if nothing would be burned.
    /// - Any error of [`quote_withdraw`](Self::quote_withdraw) or the
    ///   submitter.
    pub fn remove_liquidity(&self, lp_fraction: Fraction) -> Result<TxId> {
        let quote = self.quote_withdraw(lp_fraction)?;
        if quote.lp_to_burn().is_zero() {
            warn!(lp_balance = %quote.lp_balance(), %lp_fraction, "nothing to withdraw");
            return Err(QuoteError::InvalidInput("withdrawal burns no lp tokens"));
        }
        self.submit(&self.pool_key.remove_liquidity(&quote))
    }

    fn signed_in_account(&self) -> Result<StandardPrincipal> {
        if !self.wallet.is_signed_in() {
            return Err(QuoteError::NotSignedIn);
        }
        self.wallet.account().ok_or(QuoteError::NotSignedIn)
    }

    fn submit(&self, call: &ContractCall) -> Result<TxId> {
        let tx_id = self
            .submitter
            .submit(call)
            .inspect_err(|e| warn!(function = call.function_name(), error = %e, "submission failed"))?;
        info!(function = call.function_name(), %tx_id, "submitted");
        Ok(tx_id)
    }
}
