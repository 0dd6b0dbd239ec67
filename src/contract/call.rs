//! Contract calls handed to the transaction submitter.

use core::fmt;

use super::ClarityValue;
use crate::domain::ContractPrincipal;

/// Entry points of the AMM and LP token contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractFunction {
    /// `get-pool-data (token-0 token-1 fee-bps)`, read-only.
    GetPoolData,
    /// `get-balance (owner)` on the LP token, read-only.
    GetBalance,
    /// `create-pool (token-0 token-1 fee-bps)`.
    CreatePool,
    /// `swap (token-in token-out input-amount min-output-amount)`.
    Swap,
    /// `add-liquidity (token-0 token-1 fee-bps amount-0 amount-1 min-0 min-1)`.
    AddLiquidity,
    /// `remove-liquidity (token-0 token-1 fee-bps lp-amount min-0 min-1)`.
    RemoveLiquidity,
}

impl ContractFunction {
    /// Returns the Clarity function name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetPoolData => "get-pool-data",
            Self::GetBalance => "get-balance",
            Self::CreatePool => "create-pool",
            Self::Swap => "swap",
            Self::AddLiquidity => "add-liquidity",
            Self::RemoveLiquidity => "remove-liquidity",
        }
    }

    /// Returns `true` for read-only functions, which need no signature.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        matches!(self, Self::GetPoolData | Self::GetBalance)
    }

    /// Returns the number of positional arguments the function takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::GetBalance => 1,
            Self::GetPoolData | Self::CreatePool => 3,
            Self::Swap => 4,
            Self::RemoveLiquidity => 6,
            Self::AddLiquidity => 7,
        }
    }
}

impl fmt::Display for ContractFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A function invocation on a deployed contract, with ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractCall {
    contract: ContractPrincipal,
    function: ContractFunction,
    args: Vec<ClarityValue>,
}

impl ContractCall {
    /// `args` must hold `function.arity()` values in contract order; only
    /// the [`PoolKey`](super::PoolKey) builders construct calls.
    pub(crate) fn new(
        contract: ContractPrincipal,
        function: ContractFunction,
        args: Vec<ClarityValue>,
    ) -> Self {
        Self {
            contract,
            function,
            args,
        }
    }

    /// Returns the target contract.
    #[must_use]
    pub const fn contract(&self) -> &ContractPrincipal {
        &self.contract
    }

    /// Returns the called function.
    #[must_use]
    pub const fn function(&self) -> ContractFunction {
        self.function
    }

    /// Returns the Clarity function name.
    #[must_use]
    pub const fn function_name(&self) -> &'static str {
        self.function.name()
    }

    /// Returns the positional arguments in call order.
    #[must_use]
    pub fn args(&self) -> &[ClarityValue] {
        &self.args
    }
}

impl fmt::Display for ContractCall {
    /// Renders `'ADDR.contract (function arg …)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{} ({}", self.contract, self.function)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        f.write_str(")")
    }
}

/// Identifier of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxId(String);

impl TxId {
    /// Wraps an identifier returned by the submitter.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
