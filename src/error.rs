//! Unified error type for the quotation engine and its client.
//!
//! Every fallible operation in the crate returns [`QuoteError`], so callers
//! can surface a rejected quotation with a single match.

use thiserror::Error;

/// Errors produced by quoting, validation, and call submission.
///
/// Arithmetic and validation failures carry a static description; failures
/// reported by external collaborators carry their own message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// A non-positive, malformed, or out-of-range amount was supplied.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The pool does not exist or one of its reserves is zero.
    #[error("pool not initialized")]
    PoolNotInitialized,

    /// The pool already holds liquidity, so it cannot be created again.
    #[error("pool already exists")]
    PoolAlreadyExists,

    /// A fixed-point value exceeded its representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A division by zero was attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// A fee outside `[0, 10000)` basis points.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A decimal precision outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A malformed standard or contract principal.
    #[error("invalid principal: {0}")]
    InvalidPrincipal(&'static str),

    /// A token that is not part of the configured pair.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A configuration document that failed to parse or validate.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A state-changing call was requested without a signed-in wallet.
    #[error("wallet not signed in")]
    NotSignedIn,

    /// The chain reader failed to answer a read-only query.
    #[error("chain read failed: {0}")]
    ChainRead(String),

    /// The transaction submitter rejected the call.
    #[error("submission failed: {0}")]
    Submission(String),
}

impl QuoteError {
    /// Returns `true` for errors caused by the caller's input rather than
    /// by pool state or a collaborator.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::InvalidFee(_)
                | Self::InvalidPrecision(_)
                | Self::InvalidPrincipal(_)
                | Self::InvalidToken(_)
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, QuoteError>;
