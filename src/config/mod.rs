//! Deployment configuration.
//!
//! [`QuoteConfig`] is passed explicitly to
//! [`DexClient::new`](crate::client::DexClient::new); nothing is read from
//! globals or the environment.

mod quote_config;

pub use quote_config::QuoteConfig;
