// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Faucet balance fetching
//!
//! The balance shown next to the token field is always the **faucet
//! contract's** holdings, never the user's:
//!
//! - native sentinel: `eth_getBalance(faucet)`, 18 decimals
//! - token: resolve `decimals()`, then `faucet.getTokenBalance(token, faucet)`
//!
//! Empty or invalid input short-circuits to [`BalanceState::NotApplicable`]
//! without a network call. Read failures become [`BalanceState::Unavailable`].
//!
//! # Example
//!
//! ```rust,ignore
//! use faucet_client::{BalanceFetcher, BalanceState};
//!
//! let fetcher = BalanceFetcher::new(reader, faucet_address);
//! let outcome = fetcher.fetch("0x0000000000000000000000000000000000000000").await;
//! if let BalanceState::Available(reading) = outcome.balance {
//!     println!("faucet holds {} ETH", reading.formatted());
//! }
//! ```

use std::sync::Arc;

use alloy_primitives::Address;
use serde::Serialize;
use tracing::{debug, error};

use crate::chain::ChainReader;
use crate::resolver::DecimalsResolver;
use crate::types::address::AddressInput;
use crate::types::tokens::{BalanceReading, BalanceState, TokenAmount, TokenDescriptor};

/// Result of one balance fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceOutcome {
    /// The token the fetch was for, with the decimals it resolved to.
    /// `None` when the input was empty or invalid.
    pub descriptor: Option<TokenDescriptor>,
    /// What to display
    pub balance: BalanceState,
}

impl BalanceOutcome {
    /// Outcome for input that is not an address
    pub const fn not_applicable() -> Self {
        Self {
            descriptor: None,
            balance: BalanceState::NotApplicable,
        }
    }

    /// Whether the fetch would have touched the network
    pub fn is_applicable(&self) -> bool {
        self.descriptor.is_some()
    }
}

/// Fetches the faucet's balance of a token
#[derive(Clone)]
pub struct BalanceFetcher {
    reader: Arc<dyn ChainReader>,
    resolver: DecimalsResolver,
    faucet: Address,
}

impl BalanceFetcher {
    /// Create a fetcher for the given faucet contract
    pub fn new(reader: Arc<dyn ChainReader>, faucet: Address) -> Self {
        Self {
            resolver: DecimalsResolver::new(reader.clone()),
            reader,
            faucet,
        }
    }

    /// The decimals resolver this fetcher uses
    pub fn resolver(&self) -> &DecimalsResolver {
        &self.resolver
    }

    /// Faucet contract whose holdings are read
    pub fn faucet(&self) -> Address {
        self.faucet
    }

    /// Fetch the faucet balance for a raw address input
    pub async fn fetch(&self, input: &str) -> BalanceOutcome {
        self.fetch_classified(AddressInput::classify(input)).await
    }

    /// Fetch the faucet balance for an already-classified input
    pub async fn fetch_classified(&self, input: AddressInput) -> BalanceOutcome {
        let descriptor = match input {
            AddressInput::Empty | AddressInput::Invalid => {
                debug!("Skipping balance fetch for non-address input");
                return BalanceOutcome::not_applicable();
            }
            AddressInput::Native => TokenDescriptor::native(),
            AddressInput::Token(token) => {
                TokenDescriptor::token(token, self.resolver.resolve_token(token).await)
            }
        };

        let result = if descriptor.is_native {
            self.reader.native_balance(self.faucet).await
        } else {
            self.reader
                .faucet_token_balance(self.faucet, descriptor.address, self.faucet)
                .await
        };

        let balance = match result {
            Ok(amount) => BalanceState::Available(BalanceReading {
                amount: TokenAmount::new(amount),
                decimals: descriptor.decimals,
            }),
            Err(e) => {
                error!(
                    error = %e,
                    token = %descriptor.address,
                    faucet = %self.faucet,
                    "Failed to fetch faucet balance"
                );
                BalanceState::Unavailable
            }
        };

        BalanceOutcome {
            descriptor: Some(descriptor),
            balance,
        }
    }
}
