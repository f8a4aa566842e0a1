// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Client for an on-chain test-token faucet.
//!
//! Reads the faucet contract's holdings of a token (with debounced lookups
//! while an address is being typed) and submits `mint` / `claim` transactions.
//!
//! - [`FaucetSession`] - form state, debounced balance fetches, submission flows
//! - [`BalanceFetcher`] / [`DecimalsResolver`] - the read path
//! - [`ChainReader`] / [`FaucetWriter`] - seams to the chain client, with alloy
//!   implementations in [`chain::alloy_client`]
//! - [`TokenAmount`] - human decimal strings to and from base units

pub mod balance;
pub mod bootstrap;
pub mod chain;
pub mod config;
pub mod debounce;
pub mod errors;
pub mod provider;
pub mod resolver;
pub mod session;
mod spans;
pub mod submission;
pub mod transport;
pub mod types;

pub use balance::{BalanceFetcher, BalanceOutcome};
pub use chain::{ChainReader, ConfirmedTransaction, FaucetCall, FaucetWriter};
pub use config::constants::{DEBOUNCE_WINDOW, DEFAULT_DECIMALS, MINT_GAS_PRICE, NATIVE_ASSET};
pub use config::{FaucetConfig, FaucetConfigBuilder};
pub use debounce::Debouncer;
pub use errors::{
    AmountError, ConfigError, FaucetError, RpcError, SubmissionError, ValidationError,
};
pub use resolver::DecimalsResolver;
pub use session::{FaucetSession, SessionState, StatusMessage};
pub use submission::{
    validate_amount, validate_submission, AmountPreview, ConfirmationStatus,
    PendingConfirmation, SubmittedTransaction, ValidatedSubmission,
};
pub use types::action::FaucetAction;
pub use types::address::{parse_address, AddressInput};
pub use types::tokens::{BalanceReading, BalanceState, TokenAmount, TokenDecimals, TokenDescriptor};
