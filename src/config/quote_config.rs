//! Deployment configuration for the quotation client.

use serde::Deserialize;

use crate::contract::PoolKey;
use crate::domain::{
    Amount, ContractPrincipal, Decimals, FeeBasisPoints, Fraction, StandardPrincipal, TokenPair,
};
use crate::error::{QuoteError, Result};

/// Deployer of the reference testnet contracts.
const TESTNET_DEPLOYER: &str = "STTGMHNSGEDHMK15KY3C4TAN5NDQ1Z8FJN1YV757";

/// Default AMM contract name.
const DEFAULT_AMM_CONTRACT: &str = "amm";

/// Default slippage tolerance, in basis points.
const DEFAULT_SLIPPAGE_BPS: u16 = 100;

/// Everything a [`DexClient`](crate::client::DexClient) needs to know about
/// one AMM deployment and the pool it trades.
///
/// The AMM and both tokens are deployed by the same account
/// (`contract_address`), so tokens are configured by contract name only.
///
/// # Recognised JSON fields
///
/// | Field | Type | Default |
/// |-------|------|---------|
/// | `contractAddress` | deployer principal | required |
/// | `feeBasisPoints` | `u16`, below 10 000 | required |
/// | `tokenDecimals` | `u8`, `0..=18` | `6` |
/// | `ammContract` | contract name | `"amm"` |
/// | `tokenA` | contract name | required |
/// | `tokenB` | contract name | required |
/// | `slippageBps` | `u16`, at most 10 000 | `100` |
///
/// # Validation
///
/// - The tokens must be distinct and differ from the AMM contract.
/// - Every principal, the fee, the precision and the slippage are checked
///   by their own newtypes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteConfig {
    contract_address: StandardPrincipal,
    amm: ContractPrincipal,
    pair: TokenPair,
    fee: FeeBasisPoints,
    token_decimals: Decimals,
    slippage: Fraction,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawQuoteConfig {
    contract_address: String,
    fee_basis_points: u16,
    #[serde(default = "default_token_decimals")]
    token_decimals: u8,
    #[serde(default = "default_amm_contract")]
    amm_contract: String,
    token_a: String,
    token_b: String,
    #[serde(default = "default_slippage_bps")]
    slippage_bps: u16,
}

fn default_token_decimals() -> u8 {
    Decimals::MICRO.get()
}

fn default_amm_contract() -> String {
    DEFAULT_AMM_CONTRACT.to_owned()
}

const fn default_slippage_bps() -> u16 {
    DEFAULT_SLIPPAGE_BPS
}

impl QuoteConfig {
    /// Creates a configuration from contract names deployed by
    /// `contract_address`.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::InvalidPrincipal`] if a contract name is malformed.
    /// - [`QuoteError::InvalidToken`] if the tokens coincide with each
    ///   other or with the AMM contract.
    pub fn new(
        contract_address: StandardPrincipal,
        amm_contract: &str,
        token_a: &str,
        token_b: &str,
        fee: FeeBasisPoints,
        token_decimals: Decimals,
        slippage: Fraction,
    ) -> Result<Self> {
        let amm = ContractPrincipal::new(contract_address.clone(), amm_contract)?;
        let pair = TokenPair::new(
            ContractPrincipal::new(contract_address.clone(), token_a)?,
            ContractPrincipal::new(contract_address.clone(), token_b)?,
        )?;
        let config = Self {
            contract_address,
            amm,
            pair,
            fee,
            token_decimals,
            slippage,
        };
        config.validate()?;
        Ok(config)
    }

    /// The reference testnet deployment: `mock-token` / `mock-token-2` at
    /// 500 bps, 6 decimals, 1% slippage.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the constants are valid.
    pub fn testnet() -> Result<Self> {
        Self::new(
            StandardPrincipal::new(TESTNET_DEPLOYER)?,
            DEFAULT_AMM_CONTRACT,
            "mock-token",
            "mock-token-2",
            FeeBasisPoints::new(500)?,
            Decimals::MICRO,
            Fraction::from_basis_points(DEFAULT_SLIPPAGE_BPS)?,
        )
    }

    /// Loads a configuration from its camelCase JSON document.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::InvalidConfiguration`] if the document is not valid
    ///   JSON, misses a required field or carries an unknown one.
    /// - Any validation error of [`new`](Self::new).
    ///
    /// # Examples
    ///
    /// ```
    /// use amm_quote::config::QuoteConfig;
    ///
    /// let config = QuoteConfig::from_json(r#"{
    ///     "contractAddress": "STTGMHNSGEDHMK15KY3C4TAN5NDQ1Z8FJN1YV757",
    ///     "feeBasisPoints": 500,
    ///     "tokenA": "mock-token",
    ///     "tokenB": "mock-token-2"
    /// }"#).expect("valid config");
    /// assert_eq!(config, QuoteConfig::testnet().expect("valid"));
    /// ```
    pub fn from_json(document: &str) -> Result<Self> {
        let raw: RawQuoteConfig = serde_json::from_str(document)
            .map_err(|e| QuoteError::InvalidConfiguration(e.to_string()))?;
        Self::new(
            StandardPrincipal::new(raw.contract_address)?,
            &raw.amm_contract,
            &raw.token_a,
            &raw.token_b,
            FeeBasisPoints::new(raw.fee_basis_points)?,
            Decimals::new(raw.token_decimals)?,
            Fraction::from_basis_points(raw.slippage_bps)?,
        )
    }

    /// Re-checks the cross-field invariants.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidToken`] if either token is the AMM
    /// contract itself.
    pub fn validate(&self) -> Result<()> {
        if self.pair.contains(&self.amm) {
            return Err(QuoteError::InvalidToken("token cannot be the amm contract"));
        }
        Ok(())
    }

    /// Returns the deployer principal.
    #[must_use]
    pub const fn contract_address(&self) -> &StandardPrincipal {
        &self.contract_address
    }

    /// Returns the AMM contract.
    #[must_use]
    pub const fn amm(&self) -> &ContractPrincipal {
        &self.amm
    }

    /// Returns the configured token pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// Returns the pool fee.
    #[must_use]
    pub const fn fee(&self) -> FeeBasisPoints {
        self.fee
    }

    /// Returns the token precision.
    #[must_use]
    pub const fn token_decimals(&self) -> Decimals {
        self.token_decimals
    }

    /// Returns the slippage tolerance applied to every submission.
    #[must_use]
    pub const fn slippage(&self) -> Fraction {
        self.slippage
    }

    /// Returns a copy with a different slippage tolerance.
    #[must_use]
    pub fn with_slippage(mut self, slippage: Fraction) -> Self {
        self.slippage = slippage;
        self
    }

    /// Returns the key of the configured pool.
    #[must_use]
    pub fn pool_key(&self) -> PoolKey {
        PoolKey::new(self.amm.clone(), self.pair.clone(), self.fee)
    }

    /// Parses user-entered text at the configured token precision.
    ///
    /// # Errors
    ///
    /// See [`Decimals::parse_amount`].
    pub fn parse_amount(&self, input: &str) -> Result<Amount> {
        self.token_decimals.parse_amount(input)
    }

    /// Formats a raw amount at the configured token precision.
    #[must_use]
    pub fn format_amount(&self, amount: Amount) -> String {
        self.token_decimals.format_amount(amount)
    }
}
