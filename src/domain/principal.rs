//! Stacks principals: account addresses and deployed contracts.

use core::fmt;
use core::str::FromStr;

use crate::error::{QuoteError, Result};

/// Crockford-style alphabet used by c32 addresses.
const C32_ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Longest contract name Clarity accepts.
const MAX_CONTRACT_NAME_LEN: usize = 128;

/// A standard (account) principal such as
/// `STTGMHNSGEDHMK15KY3C4TAN5NDQ1Z8FJN1YV757`.
///
/// Construction checks the shape of the address: a leading `S`, a length
/// of 28 to 41 characters, and c32 characters only. The checksum is not
/// verified; the chain rejects a bad one on submission.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::StandardPrincipal;
///
/// let deployer = StandardPrincipal::new("STTGMHNSGEDHMK15KY3C4TAN5NDQ1Z8FJN1YV757")
///     .expect("well-formed address");
/// assert!(deployer.as_str().starts_with("ST"));
/// assert!(StandardPrincipal::new("0xdeadbeef").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StandardPrincipal(String);

impl StandardPrincipal {
    /// Validates and wraps an address.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidPrincipal`] if the address is malformed.
    pub fn new(address: impl Into<String>) -> Result<Self> {
        let address = address.into();
        if !address.starts_with('S') {
            return Err(QuoteError::InvalidPrincipal("address must start with 'S'"));
        }
        if !(28..=41).contains(&address.len()) {
            return Err(QuoteError::InvalidPrincipal("address length out of range"));
        }
        if !address.chars().skip(1).all(|c| C32_ALPHABET.contains(c)) {
            return Err(QuoteError::InvalidPrincipal("address is not c32 encoded"));
        }
        Ok(Self(address))
    }

    /// Returns the address text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StandardPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StandardPrincipal {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// A deployed contract: the deployer's address plus a contract name, as in
/// `ST….mock-token`.
///
/// Tokens, the AMM itself, and LP tokens are all contract principals.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContractPrincipal {
    deployer: StandardPrincipal,
    name: String,
}

impl ContractPrincipal {
    /// Creates a contract principal after validating the name.
    ///
    /// A contract name starts with an ASCII letter, continues with ASCII
    /// letters, digits, `-` or `_`, and is at most 128 characters long.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidPrincipal`] if the name is malformed.
    pub fn new(deployer: StandardPrincipal, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Err(QuoteError::InvalidPrincipal("contract name is empty"));
        };
        if !first.is_ascii_alphabetic() {
            return Err(QuoteError::InvalidPrincipal(
                "contract name must start with a letter",
            ));
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(QuoteError::InvalidPrincipal(
                "contract name has invalid characters",
            ));
        }
        if name.len() > MAX_CONTRACT_NAME_LEN {
            return Err(QuoteError::InvalidPrincipal("contract name is too long"));
        }
        Ok(Self { deployer, name })
    }

    /// Returns the deploying account.
    #[must_use]
    pub const fn deployer(&self) -> &StandardPrincipal {
        &self.deployer
    }

    /// Returns the contract name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ContractPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.deployer, self.name)
    }
}

impl FromStr for ContractPrincipal {
    type Err = QuoteError;

    /// Parses `ADDRESS.contract-name`.
    fn from_str(s: &str) -> Result<Self> {
        let Some((address, name)) = s.split_once('.') else {
            return Err(QuoteError::InvalidPrincipal(
                "contract principal needs an address and a name",
            ));
        };
        Self::new(StandardPrincipal::new(address)?, name)
    }
}
