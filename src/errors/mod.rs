//! Error types for the faucet client.
//!
//! This module provides strongly-typed errors for the public APIs. It follows
//! a hybrid approach:
//!
//! - **Concern-specific errors** for fine-grained handling ([`ValidationError`],
//!   [`AmountError`], [`RpcError`], ...)
//! - **Unified error type** ([`FaucetError`]) for callers that don't need to
//!   distinguish between error sources
//!
//! Read failures (decimals, balances) never surface through these types to the
//! user: they are recovered where they happen. Only validation, amount
//! conversion and write failures reach the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use faucet_client::{SubmissionError, ValidationError};
//!
//! match session.mint().await {
//!     Ok(pending) => println!("submitted {}", pending.transaction().tx_hash),
//!     Err(SubmissionError::Validation(ValidationError::WalletNotConnected)) => {
//!         eprintln!("connect a wallet first");
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

mod config;
mod rpc;
mod submission;
mod validation;

pub use config::ConfigError;
pub use rpc::RpcError;
pub use submission::SubmissionError;
pub use validation::{AmountError, ValidationError};

/// Unified error type for all faucet client operations.
///
/// All concern-specific error types convert into `FaucetError` via `From`, so
/// `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum FaucetError {
    /// Error loading configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error talking to the chain.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Error submitting a faucet transaction.
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}
