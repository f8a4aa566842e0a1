//! Error types for the mint and claim flows.

use super::{AmountError, RpcError, ValidationError};

/// Errors returned by a faucet submission.
///
/// Each variant maps to one user-visible outcome: a validation message, an
/// "invalid amount" marker, or a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// Input was rejected before any network call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The amount could not be converted to base units for the token's decimals.
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    /// The chain or the signer rejected the transaction.
    #[error("Transaction failed: {0}")]
    Rejected(#[from] RpcError),
}

impl SubmissionError {
    /// Message suitable for showing to the user.
    ///
    /// Rejections are reported generically; the details go to the logs.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Validation(e) => e.to_string(),
            SubmissionError::InvalidAmount(_) => "Invalid amount".to_string(),
            SubmissionError::Rejected(_) => "Transaction failed".to_string(),
        }
    }
}
