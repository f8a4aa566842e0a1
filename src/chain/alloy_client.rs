// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! alloy-backed chain reader and faucet writer
//!
//! # Example
//!
//! ```rust,ignore
//! use faucet_client::chain::alloy_client::{AlloyChainReader, AlloyFaucetWriter};
//! use faucet_client::provider::{create_read_provider, create_signing_provider, ProviderConfig};
//!
//! let config = ProviderConfig::new("https://rpc.sepolia.org");
//! let reader = AlloyChainReader::new(create_read_provider(&config)?);
//! let writer = AlloyFaucetWriter::new(create_signing_provider(&config, signer)?);
//! ```

use alloy_network::ReceiptResponse;
use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::{DynProvider, PendingTransactionBuilder, Provider};
use alloy_sol_types::sol;
use async_trait::async_trait;
use tracing::debug;

use super::{ChainReader, ConfirmedTransaction, FaucetCall, FaucetWriter};
use crate::errors::RpcError;
use crate::types::action::FaucetAction;

sol! {
    #[sol(rpc)]
    interface IFaucet {
        function mint(address token, address receiver, uint256 amount) external;
        function claim(address token, address receiver, uint256 amount) external;
        function getTokenBalance(address token, address holder) external view returns (uint256);
    }

    #[sol(rpc)]
    interface IERC20Metadata {
        function decimals() external view returns (uint8);
    }
}

/// [`ChainReader`] over an alloy provider
#[derive(Clone)]
pub struct AlloyChainReader {
    provider: DynProvider,
}

impl AlloyChainReader {
    /// Wrap a provider
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ChainReader for AlloyChainReader {
    async fn token_decimals(&self, token: Address) -> Result<u8, RpcError> {
        let contract = IERC20Metadata::new(token, self.provider.clone());
        contract
            .decimals()
            .call()
            .await
            .map_err(|e| RpcError::contract_call_failed(format!("decimals() on {token}"), e))
    }

    async fn native_balance(&self, holder: Address) -> Result<U256, RpcError> {
        self.provider
            .get_balance(holder)
            .await
            .map_err(|e| RpcError::chain_connection_failed(format!("eth_getBalance({holder})"), e))
    }

    async fn faucet_token_balance(
        &self,
        faucet: Address,
        token: Address,
        holder: Address,
    ) -> Result<U256, RpcError> {
        let contract = IFaucet::new(faucet, self.provider.clone());
        contract
            .getTokenBalance(token, holder)
            .call()
            .await
            .map_err(|e| {
                RpcError::contract_call_failed(format!("getTokenBalance({token}, {holder})"), e)
            })
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<ConfirmedTransaction, RpcError> {
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .get_receipt()
            .await
            .map_err(|e| RpcError::confirmation_failed(tx_hash, e))?;

        debug!(%tx_hash, block_number = ?receipt.block_number(), "Receipt received");

        Ok(ConfirmedTransaction {
            tx_hash,
            block_number: receipt.block_number(),
            success: receipt.status(),
        })
    }
}

/// [`FaucetWriter`] over a wallet-enabled alloy provider
#[derive(Clone)]
pub struct AlloyFaucetWriter {
    provider: DynProvider,
}

impl AlloyFaucetWriter {
    /// Wrap a provider that has a wallet filler installed
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl FaucetWriter for AlloyFaucetWriter {
    async fn submit(&self, faucet: Address, call: &FaucetCall) -> Result<TxHash, RpcError> {
        let contract = IFaucet::new(faucet, self.provider.clone());

        let sent = match call.action {
            FaucetAction::Mint => {
                let mut builder = contract.mint(call.token, call.receiver, call.amount);
                if let Some(gas_price) = call.gas_price {
                    builder = builder.gas_price(gas_price);
                }
                builder.send().await
            }
            FaucetAction::Claim => {
                let mut builder = contract.claim(call.token, call.receiver, call.amount);
                if let Some(gas_price) = call.gas_price {
                    builder = builder.gas_price(gas_price);
                }
                builder.send().await
            }
        };

        let pending = sent.map_err(|e| RpcError::submission_failed(call.action.name(), e))?;
        Ok(*pending.tx_hash())
    }
}
