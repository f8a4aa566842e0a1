// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider construction
//!
//! The faucet client works against a single test network, so providers are
//! built once at startup and type-erased into [`DynProvider`](alloy_provider::DynProvider):
//!
//! - [`create_read_provider`] - plain HTTP provider for balance and decimals reads
//! - [`create_signing_provider`] - HTTP provider with a wallet filler for mint/claim
//!
//! Both install the RPC [`LoggingLayer`](crate::transport::LoggingLayer) unless
//! [`ProviderConfig::without_logging`] is used.
//!
//! # Example
//!
//! ```rust,ignore
//! use faucet_client::provider::{create_read_provider, ProviderConfig};
//!
//! let provider = create_read_provider(&ProviderConfig::new("https://rpc.sepolia.org"))?;
//! let block_number = provider.get_block_number().await?;
//! ```

mod config;
mod factory;

pub use config::ProviderConfig;
pub use factory::{create_read_provider, create_signing_provider};
