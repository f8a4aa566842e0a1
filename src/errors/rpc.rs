//! Shared RPC error types for chain client operations.
//!
//! These errors are produced by the alloy-backed [`ChainReader`](crate::ChainReader)
//! and [`FaucetWriter`](crate::FaucetWriter) implementations and carry context
//! about which operation failed.

/// Errors that can occur while interacting with the chain.
///
/// # Examples
///
/// ```rust
/// use faucet_client::RpcError;
///
/// let error = RpcError::ProviderUrlInvalid("not a url".to_string());
/// assert!(error.to_string().contains("not a url"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// A view call against a contract failed.
    ///
    /// Covers reverts, missing functions and undecodable return data.
    #[error("Contract call failed: {operation}")]
    ContractCallFailed {
        /// Description of the call (e.g., "decimals() on 0x...")
        operation: String,
        /// The underlying contract error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to reach the chain or execute a plain RPC request.
    #[error("Chain connection failed during {operation}")]
    ChainConnectionFailed {
        /// Description of the operation that failed
        operation: String,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Sending a transaction failed, including a signer rejecting it.
    #[error("Transaction submission failed for {operation}")]
    SubmissionFailed {
        /// Description of the transaction (e.g., "mint")
        operation: String,
        /// The underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Waiting for a transaction receipt failed.
    #[error("Failed to confirm transaction {tx_hash}")]
    ConfirmationFailed {
        /// The transaction hash being awaited
        tx_hash: String,
        /// The underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The provider URL could not be parsed.
    #[error("Invalid provider URL: {0}")]
    ProviderUrlInvalid(String),
}

impl RpcError {
    /// Helper to create a `ContractCallFailed` error from any error type.
    pub fn contract_call_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::ContractCallFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `ChainConnectionFailed` error from any error type.
    pub fn chain_connection_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::ChainConnectionFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `SubmissionFailed` error from any error type.
    pub fn submission_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::SubmissionFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `ConfirmationFailed` error from any error type.
    pub fn confirmation_failed(
        tx_hash: impl std::fmt::Display,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::ConfirmationFailed {
            tx_hash: tx_hash.to_string(),
            source: Box::new(source),
        }
    }
}
