// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider factory functions for creating type-erased providers

use alloy_network::EthereumWallet;
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_rpc_client::{ClientBuilder, RpcClient};
use alloy_signer_local::PrivateKeySigner;

use crate::errors::RpcError;
use crate::transport::LoggingLayer;

use super::config::ProviderConfig;

/// Build the RPC client, with the logging layer when enabled
fn build_client(config: &ProviderConfig) -> Result<RpcClient, RpcError> {
    let url: url::Url = config
        .url
        .parse()
        .map_err(|e| RpcError::ProviderUrlInvalid(format!("{}: {e}", config.url)))?;

    let client = if config.logging_enabled {
        let layer = if config.verbose_logging {
            LoggingLayer::new().verbose()
        } else {
            LoggingLayer::new()
        };
        ClientBuilder::default().layer(layer).http(url)
    } else {
        ClientBuilder::default().http(url)
    };

    Ok(client)
}

/// Create a read-only HTTP provider
///
/// # Examples
///
/// ```rust,ignore
/// use faucet_client::provider::{create_read_provider, ProviderConfig};
///
/// let provider = create_read_provider(&ProviderConfig::new("https://rpc.sepolia.org"))?;
/// ```
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed.
pub fn create_read_provider(config: &ProviderConfig) -> Result<DynProvider, RpcError> {
    let client = build_client(config)?;
    Ok(ProviderBuilder::new().connect_client(client).erased())
}

/// Create an HTTP provider that signs transactions with `signer`
///
/// Nonce, gas limit and chain id are filled by alloy's recommended fillers.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed.
pub fn create_signing_provider(
    config: &ProviderConfig,
    signer: PrivateKeySigner,
) -> Result<DynProvider, RpcError> {
    let client = build_client(config)?;
    let wallet = EthereumWallet::from(signer);
    Ok(ProviderBuilder::new()
        .wallet(wallet)
        .connect_client(client)
        .erased())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_rejected() {
        let result = create_read_provider(&ProviderConfig::new("not a url"));
        assert!(matches!(result, Err(RpcError::ProviderUrlInvalid(_))));
    }

    #[test]
    fn test_read_provider_builds_without_connecting() {
        let result = create_read_provider(&ProviderConfig::new("http://localhost:8545"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_signing_provider_builds_without_connecting() {
        let signer = PrivateKeySigner::random();
        let config = ProviderConfig::new("http://localhost:8545").without_logging();
        assert!(create_signing_provider(&config, signer).is_ok());
    }
}
