//! Error types for loading configuration.

/// Errors that can occur while assembling a [`FaucetConfig`](crate::FaucetConfig)
/// or the services built from it.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable {name}")]
    MissingVar {
        /// Name of the variable
        name: String,
    },

    /// An environment variable is set but its value is unusable.
    #[error("Invalid value for {name}: {reason}")]
    InvalidVar {
        /// Name of the variable
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The configured private key could not be turned into a signer.
    #[error("Invalid signer key: {0}")]
    InvalidSigner(String),
}

impl ConfigError {
    /// Create a `MissingVar` error.
    pub fn missing(name: impl Into<String>) -> Self {
        ConfigError::MissingVar { name: name.into() }
    }

    /// Create an `InvalidVar` error.
    pub fn invalid(name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        ConfigError::InvalidVar {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}
