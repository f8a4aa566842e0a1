// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the faucet client
//!
//! Controls which chain and faucet contract the client talks to, how the
//! explorer link is built, and the timing of debounced balance fetches.
//!
//! # Example: Builder
//!
//! ```rust
//! use alloy_chains::NamedChain;
//! use alloy_primitives::address;
//! use faucet_client::FaucetConfigBuilder;
//!
//! let config = FaucetConfigBuilder::new(address!("1111111111111111111111111111111111111111"))
//!     .chain(NamedChain::Sepolia)
//!     .rpc_url("https://rpc.sepolia.org")
//!     .build();
//!
//! assert_eq!(config.explorer_url, "https://sepolia.etherscan.io");
//! ```
//!
//! # Example: Environment
//!
//! ```rust,ignore
//! use faucet_client::FaucetConfig;
//!
//! // Reads FAUCET_ADDRESS, FAUCET_RPC_URL, FAUCET_CHAIN_ID, FAUCET_EXPLORER_URL
//! let config = FaucetConfig::from_env()?;
//! ```

use std::time::Duration;

use alloy_chains::NamedChain;
use alloy_primitives::{Address, TxHash};

use crate::errors::ConfigError;

pub mod constants;

use constants::{DEBOUNCE_WINDOW, DEFAULT_RPC_URL, MINT_GAS_PRICE};

/// Environment variable holding the faucet contract address (required)
pub const ENV_FAUCET_ADDRESS: &str = "FAUCET_ADDRESS";
/// Environment variable holding the RPC endpoint
pub const ENV_RPC_URL: &str = "FAUCET_RPC_URL";
/// Environment variable holding the numeric chain id
pub const ENV_CHAIN_ID: &str = "FAUCET_CHAIN_ID";
/// Environment variable overriding the block explorer base URL
pub const ENV_EXPLORER_URL: &str = "FAUCET_EXPLORER_URL";
/// Environment variable holding the signer's private key (optional)
pub const ENV_PRIVATE_KEY: &str = "FAUCET_PRIVATE_KEY";

/// Configuration for a faucet session
///
/// Use [`FaucetConfigBuilder`] to construct instances.
#[derive(Debug, Clone)]
pub struct FaucetConfig {
    /// The test network the faucet lives on
    /// Default: Sepolia
    pub chain: NamedChain,

    /// Address of the faucet contract
    pub faucet_address: Address,

    /// JSON-RPC endpoint
    /// Default: `http://localhost:8545`
    pub rpc_url: String,

    /// Block explorer base URL, without trailing slash
    /// Default: the chain's Etherscan URL
    pub explorer_url: String,

    /// Quiet period before a token-address edit triggers a balance fetch
    /// Default: 500ms
    pub debounce_window: Duration,

    /// Gas price pinned on mint transactions
    /// Default: 10 gwei
    pub mint_gas_price: u128,
}

impl FaucetConfig {
    /// Load configuration from the process environment (and `.env`, if the
    /// caller loaded one).
    pub fn from_env() -> Result<Self, ConfigError> {
        let faucet_address = dotenvy::var(ENV_FAUCET_ADDRESS)
            .map_err(|_| ConfigError::missing(ENV_FAUCET_ADDRESS))?
            .trim()
            .parse::<Address>()
            .map_err(|e| ConfigError::invalid(ENV_FAUCET_ADDRESS, e))?;

        let mut builder = FaucetConfigBuilder::new(faucet_address);

        if let Ok(chain_id) = dotenvy::var(ENV_CHAIN_ID) {
            let id = chain_id
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::invalid(ENV_CHAIN_ID, e))?;
            let chain = NamedChain::try_from(id)
                .map_err(|_| ConfigError::invalid(ENV_CHAIN_ID, format!("unknown chain id {id}")))?;
            builder = builder.chain(chain);
        }

        if let Ok(rpc_url) = dotenvy::var(ENV_RPC_URL) {
            builder = builder.rpc_url(rpc_url.trim());
        }

        if let Ok(explorer_url) = dotenvy::var(ENV_EXPLORER_URL) {
            builder = builder.explorer_url(explorer_url.trim());
        }

        Ok(builder.build())
    }

    /// Block explorer link for a transaction
    ///
    /// # Example
    ///
    /// ```rust
    /// use alloy_primitives::{Address, TxHash};
    /// use faucet_client::FaucetConfigBuilder;
    ///
    /// let config = FaucetConfigBuilder::new(Address::ZERO)
    ///     .explorer_url("https://explorer.example")
    ///     .build();
    /// let url = config.explorer_tx_url(TxHash::ZERO);
    /// assert!(url.starts_with("https://explorer.example/tx/0x"));
    /// ```
    pub fn explorer_tx_url(&self, tx_hash: TxHash) -> String {
        format!("{}/tx/{tx_hash}", self.explorer_url)
    }
}

/// Explorer base URL for a chain, falling back to Sepolia Etherscan
fn default_explorer_url(chain: NamedChain) -> String {
    chain
        .etherscan_urls()
        .map(|(_, base)| base)
        .unwrap_or("https://sepolia.etherscan.io")
        .trim_end_matches('/')
        .to_string()
}

/// Builder for [`FaucetConfig`]
#[derive(Debug, Clone)]
pub struct FaucetConfigBuilder {
    chain: NamedChain,
    faucet_address: Address,
    rpc_url: String,
    explorer_url: Option<String>,
    debounce_window: Duration,
    mint_gas_price: u128,
}

impl FaucetConfigBuilder {
    /// Start a builder for the given faucet contract with default settings
    pub fn new(faucet_address: Address) -> Self {
        Self {
            chain: NamedChain::Sepolia,
            faucet_address,
            rpc_url: DEFAULT_RPC_URL.to_string(),
            explorer_url: None,
            debounce_window: DEBOUNCE_WINDOW,
            mint_gas_price: MINT_GAS_PRICE,
        }
    }

    /// Set the chain
    pub fn chain(mut self, chain: NamedChain) -> Self {
        self.chain = chain;
        self
    }

    /// Set the RPC endpoint
    pub fn rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_url = url.into();
        self
    }

    /// Override the explorer base URL
    pub fn explorer_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.explorer_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    /// Override the debounce window
    pub fn debounce_window(mut self, window: Duration) -> Self {
        self.debounce_window = window;
        self
    }

    /// Override the gas price pinned on mint transactions
    pub fn mint_gas_price(mut self, gas_price: u128) -> Self {
        self.mint_gas_price = gas_price;
        self
    }

    /// Build the configuration
    pub fn build(self) -> FaucetConfig {
        let explorer_url = self
            .explorer_url
            .unwrap_or_else(|| default_explorer_url(self.chain));

        FaucetConfig {
            chain: self.chain,
            faucet_address: self.faucet_address,
            rpc_url: self.rpc_url,
            explorer_url,
            debounce_window: self.debounce_window,
            mint_gas_price: self.mint_gas_price,
        }
    }
}
