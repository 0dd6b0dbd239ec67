//! Value types of the quotation domain.
//!
//! Amounts, fees, fractions, principals, pool snapshots, and quote
//! requests/results. Every type with an invariant validates it in its
//! constructor, so a value that exists is a value that is valid.

mod amount;
mod decimals;
mod fee_basis_points;
mod fraction;
mod pool_state;
mod principal;
mod quote;
mod rounding;
mod swap_direction;
mod token_pair;

pub(crate) use fee_basis_points::BPS_DENOMINATOR;

pub use amount::Amount;
pub use decimals::Decimals;
pub use fee_basis_points::FeeBasisPoints;
pub use fraction::Fraction;
pub use pool_state::PoolState;
pub use principal::{ContractPrincipal, StandardPrincipal};
pub use quote::{DepositQuote, QuoteRequest, QuoteResult, SwapQuote, WithdrawQuote};
pub use rounding::Rounding;
pub use swap_direction::SwapDirection;
pub use token_pair::TokenPair;
