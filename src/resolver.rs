// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal precision resolution
//!
//! Never fails: anything that prevents reading `decimals()` from the token
//! (bad input, the native sentinel, an RPC or decode error) yields
//! [`TokenDecimals::STANDARD`].

use std::sync::Arc;

use alloy_primitives::Address;
use tracing::{debug, warn, Instrument};

use crate::chain::ChainReader;
use crate::spans;
use crate::types::address::AddressInput;
use crate::types::tokens::TokenDecimals;

/// Resolves the decimal precision for a token address
#[derive(Clone)]
pub struct DecimalsResolver {
    reader: Arc<dyn ChainReader>,
}

impl DecimalsResolver {
    /// Create a resolver backed by a chain reader
    pub fn new(reader: Arc<dyn ChainReader>) -> Self {
        Self { reader }
    }

    /// Resolve decimals for a raw address input
    ///
    /// Invalid input and the native sentinel resolve to 18 without touching
    /// the network.
    pub async fn resolve(&self, input: &str) -> TokenDecimals {
        self.resolve_classified(AddressInput::classify(input)).await
    }

    /// Resolve decimals for an already-classified input
    pub async fn resolve_classified(&self, input: AddressInput) -> TokenDecimals {
        match input {
            AddressInput::Token(token) => self.resolve_token(token).await,
            AddressInput::Native | AddressInput::Empty | AddressInput::Invalid => {
                TokenDecimals::STANDARD
            }
        }
    }

    /// Query `decimals()` on a token contract, falling back to 18 on any failure
    pub async fn resolve_token(&self, token: Address) -> TokenDecimals {
        async move {
            match self.reader.token_decimals(token).await {
                Ok(decimals) => {
                    debug!(decimals, "Resolved token decimals");
                    TokenDecimals::new(decimals)
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        fallback = TokenDecimals::STANDARD.as_u8(),
                        "Failed to read token decimals, using default"
                    );
                    TokenDecimals::STANDARD
                }
            }
        }
        .instrument(spans::resolve_decimals(token))
        .await
    }
}
