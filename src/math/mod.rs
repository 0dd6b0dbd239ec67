//! Fixed-point arithmetic helpers.
//!
//! - [`mul_div`] / [`div_wide`]: widening `a × b / c` on a 384-bit
//!   intermediate ([`U384`]) with explicit [`Rounding`](crate::domain::Rounding).
//! - [`CheckedArithmetic`]: `Result`-returning arithmetic on
//!   [`Amount`](crate::domain::Amount).

mod checked;
mod mul_div;

pub use checked::CheckedArithmetic;
pub use mul_div::{div_wide, mul_div, U384};
