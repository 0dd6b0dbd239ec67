//! Clarity argument values.

use core::fmt;

use crate::domain::{Amount, ContractPrincipal, FeeBasisPoints, StandardPrincipal};

/// One positional argument of a contract call.
///
/// Only the three Clarity types the AMM's entry points take are modelled.
/// `Display` renders Clarity literal syntax, e.g. `u500` or
/// `'ST….mock-token`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClarityValue {
    /// `uint`.
    Uint(u128),
    /// A contract principal, used for `<ft-trait>` token arguments.
    Contract(ContractPrincipal),
    /// A standard principal.
    Standard(StandardPrincipal),
}

impl ClarityValue {
    /// Returns the `uint` payload, if this is one.
    #[must_use]
    pub const fn as_uint(&self) -> Option<u128> {
        match self {
            Self::Uint(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<Amount> for ClarityValue {
    fn from(amount: Amount) -> Self {
        Self::Uint(amount.get())
    }
}

impl From<FeeBasisPoints> for ClarityValue {
    fn from(fee: FeeBasisPoints) -> Self {
        Self::Uint(u128::from(fee.get()))
    }
}

impl From<ContractPrincipal> for ClarityValue {
    fn from(contract: ContractPrincipal) -> Self {
        Self::Contract(contract)
    }
}

impl From<StandardPrincipal> for ClarityValue {
    fn from(principal: StandardPrincipal) -> Self {
        Self::Standard(principal)
    }
}

impl fmt::Display for ClarityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uint(v) => write!(f, "u{v}"),
            Self::Contract(c) => write!(f, "'{c}"),
            Self::Standard(p) => write!(f, "'{p}"),
        }
    }
}
