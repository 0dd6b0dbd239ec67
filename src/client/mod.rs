//! Client orchestration over the collaborator traits.

mod dex_client;

pub use dex_client::DexClient;
