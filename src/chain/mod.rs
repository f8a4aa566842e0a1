// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain client seams
//!
//! The faucet client never talks to a provider directly. Reads go through
//! [`ChainReader`] and transactions through [`FaucetWriter`], so the session
//! logic can be driven by the alloy implementations in [`alloy_client`] or by a
//! scripted mock in tests.
//!
//! # Architecture
//!
//! ```text
//! FaucetSession
//!     ├── BalanceFetcher ── DecimalsResolver ──┐
//!     │                                        ├── Arc<dyn ChainReader>
//!     ├── confirmation watcher ────────────────┘
//!     └── submission flows ─────────────────────── Option<Arc<dyn FaucetWriter>>
//! ```
//!
//! A session without a writer behaves like a UI with no wallet connected.

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::RpcError;
use crate::types::action::FaucetAction;

pub mod alloy_client;

/// A faucet transaction ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaucetCall {
    /// Which faucet function to call
    pub action: FaucetAction,
    /// Token address, or the native-asset sentinel
    pub token: Address,
    /// Who receives the tokens
    pub receiver: Address,
    /// Amount in base units
    pub amount: U256,
    /// Pinned gas price, if any (mint only)
    pub gas_price: Option<u128>,
}

/// Receipt details the faucet client cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedTransaction {
    /// The confirmed transaction
    pub tx_hash: TxHash,
    /// Block the transaction was included in
    pub block_number: Option<u64>,
    /// Whether execution succeeded (false when the transaction reverted)
    pub success: bool,
}

/// Read access to the chain
///
/// Implementations must be cheap to share: the session holds one behind an
/// `Arc` for its whole lifetime.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// `decimals()` of an ERC-20 token
    async fn token_decimals(&self, token: Address) -> Result<u8, RpcError>;

    /// Native-asset balance of an account at the latest block
    async fn native_balance(&self, holder: Address) -> Result<U256, RpcError>;

    /// `getTokenBalance(token, holder)` on the faucet contract
    async fn faucet_token_balance(
        &self,
        faucet: Address,
        token: Address,
        holder: Address,
    ) -> Result<U256, RpcError>;

    /// Wait until a transaction is included and return its receipt summary
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<ConfirmedTransaction, RpcError>;
}

/// Transaction signing and submission
#[async_trait]
pub trait FaucetWriter: Send + Sync {
    /// Sign and broadcast a faucet call, returning the transaction hash
    async fn submit(&self, faucet: Address, call: &FaucetCall) -> Result<TxHash, RpcError>;
}
