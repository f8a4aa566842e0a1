// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider configuration options

/// Configuration for creating providers
///
/// # Example
///
/// ```rust
/// use faucet_client::provider::ProviderConfig;
///
/// let config = ProviderConfig::new("https://rpc.sepolia.org").with_verbose_logging();
/// assert!(config.logging_enabled);
/// ```
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// RPC endpoint URL
    pub url: String,
    /// Install the RPC [`LoggingLayer`](crate::transport::LoggingLayer)
    pub logging_enabled: bool,
    /// Log full request and response payloads
    pub verbose_logging: bool,
}

impl ProviderConfig {
    /// Create a new provider configuration with RPC logging enabled
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            logging_enabled: true,
            verbose_logging: false,
        }
    }

    /// Disable the RPC logging layer
    #[must_use]
    pub fn without_logging(mut self) -> Self {
        self.logging_enabled = false;
        self.verbose_logging = false;
        self
    }

    /// Log full request and response payloads at TRACE level
    #[must_use]
    pub fn with_verbose_logging(mut self) -> Self {
        self.logging_enabled = true;
        self.verbose_logging = true;
        self
    }
}

impl From<&crate::FaucetConfig> for ProviderConfig {
    fn from(config: &crate::FaucetConfig) -> Self {
        Self::new(config.rpc_url.clone())
    }
}
