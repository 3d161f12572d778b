//! Simulated on-chain operations for Aethera.
//!
//! Nothing here touches a ledger. Each operation waits a fixed delay to
//! mimic confirmation time, logs what a real chain would have done, and
//! then applies the effect to the [`Store`](aethera_db::Store).

pub mod config;
pub mod error;
pub mod service;
pub mod wallet;

pub use config::ChainConfig;
pub use error::ChainError;
pub use service::MockChain;
