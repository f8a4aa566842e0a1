// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for faucet client integration tests
//!
//! Provides a scripted chain client so session behaviour can be tested
//! without a node.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy_primitives::{address, b256, Address, TxHash, U256};
use async_trait::async_trait;
use faucet_client::{
    ChainReader, ConfirmedTransaction, FaucetAction, FaucetCall, FaucetConfig,
    FaucetConfigBuilder, FaucetSession, FaucetWriter, RpcError,
};

pub const FAUCET: Address = address!("fa0ce7000000000000000000000000000000fa0c");
pub const RECEIVER: Address = address!("1111111111111111111111111111111111111111");
pub const TOKEN_A: Address = address!("2222222222222222222222222222222222222222");
pub const TOKEN_B: Address = address!("3333333333333333333333333333333333333333");
pub const NATIVE_INPUT: &str = "0x0000000000000000000000000000000000000000";
pub const TX_HASH: TxHash =
    b256!("abababababababababababababababababababababababababababababababab");
pub const EXPLORER: &str = "https://explorer.test";

/// A balance query the mock received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceCall {
    Native {
        holder: Address,
    },
    Token {
        faucet: Address,
        token: Address,
        holder: Address,
    },
}

/// Scripted [`ChainReader`] and [`FaucetWriter`]
///
/// Unscripted tokens report 18 decimals and a zero balance.
///
/// # Example
///
/// ```rust,ignore
/// let chain = MockChain::new()
///     .with_token(TOKEN_A, 6, U256::from(1_000_000u64))
///     .with_token_delay(TOKEN_A, Duration::from_millis(800));
/// let session = session_with(&chain);
/// ```
#[derive(Default)]
pub struct MockChain {
    decimals: HashMap<Address, u8>,
    token_balances: HashMap<Address, U256>,
    token_delays: HashMap<Address, Duration>,
    native_balance: U256,
    receipt_delay: Duration,
    submit_delays: HashMap<FaucetAction, Duration>,
    tx_hash: Option<TxHash>,

    fail_decimals: AtomicBool,
    fail_balance: AtomicBool,
    fail_submit: AtomicBool,
    fail_receipt: AtomicBool,

    decimals_calls: AtomicUsize,
    native_calls: AtomicUsize,
    token_calls: AtomicUsize,
    receipt_calls: AtomicUsize,
    submit_calls: AtomicUsize,

    decimals_requests: Mutex<Vec<Address>>,
    balance_requests: Mutex<Vec<BalanceCall>>,
    submissions: Mutex<Vec<(Address, FaucetCall)>>,
}

impl MockChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script decimals and the faucet's balance for a token
    pub fn with_token(mut self, token: Address, decimals: u8, balance: U256) -> Self {
        self.decimals.insert(token, decimals);
        self.token_balances.insert(token, balance);
        self
    }

    /// Delay balance responses for a token
    pub fn with_token_delay(mut self, token: Address, delay: Duration) -> Self {
        self.token_delays.insert(token, delay);
        self
    }

    /// Script the faucet's native balance
    pub fn with_native_balance(mut self, balance: U256) -> Self {
        self.native_balance = balance;
        self
    }

    /// Delay receipts
    pub fn with_receipt_delay(mut self, delay: Duration) -> Self {
        self.receipt_delay = delay;
        self
    }

    /// Delay the writer's answer for one kind of submission
    pub fn with_submit_delay(mut self, action: FaucetAction, delay: Duration) -> Self {
        self.submit_delays.insert(action, delay);
        self
    }

    /// Hash returned by successful submissions
    pub fn with_tx_hash(mut self, tx_hash: TxHash) -> Self {
        self.tx_hash = Some(tx_hash);
        self
    }

    pub fn fail_decimals(&self, fail: bool) {
        self.fail_decimals.store(fail, Ordering::SeqCst);
    }

    pub fn fail_balance(&self, fail: bool) {
        self.fail_balance.store(fail, Ordering::SeqCst);
    }

    pub fn fail_submit(&self, fail: bool) {
        self.fail_submit.store(fail, Ordering::SeqCst);
    }

    pub fn fail_receipt(&self, fail: bool) {
        self.fail_receipt.store(fail, Ordering::SeqCst);
    }

    pub fn decimals_calls(&self) -> usize {
        self.decimals_calls.load(Ordering::SeqCst)
    }

    pub fn native_calls(&self) -> usize {
        self.native_calls.load(Ordering::SeqCst)
    }

    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    /// Balance queries of either kind
    pub fn balance_calls(&self) -> usize {
        self.native_calls() + self.token_calls()
    }

    pub fn receipt_calls(&self) -> usize {
        self.receipt_calls.load(Ordering::SeqCst)
    }

    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    /// Total calls of any kind
    pub fn total_calls(&self) -> usize {
        self.decimals_calls() + self.balance_calls() + self.receipt_calls() + self.submit_calls()
    }

    pub fn decimals_requests(&self) -> Vec<Address> {
        self.decimals_requests.lock().unwrap().clone()
    }

    pub fn balance_requests(&self) -> Vec<BalanceCall> {
        self.balance_requests.lock().unwrap().clone()
    }

    pub fn submissions(&self) -> Vec<(Address, FaucetCall)> {
        self.submissions.lock().unwrap().clone()
    }

    fn scripted_failure(operation: &str) -> std::io::Error {
        std::io::Error::other(format!("scripted {operation} failure"))
    }
}

#[async_trait]
impl ChainReader for MockChain {
    async fn token_decimals(&self, token: Address) -> Result<u8, RpcError> {
        self.decimals_calls.fetch_add(1, Ordering::SeqCst);
        self.decimals_requests.lock().unwrap().push(token);

        if self.fail_decimals.load(Ordering::SeqCst) {
            return Err(RpcError::contract_call_failed(
                "decimals()",
                Self::scripted_failure("decimals"),
            ));
        }
        Ok(self.decimals.get(&token).copied().unwrap_or(18))
    }

    async fn native_balance(&self, holder: Address) -> Result<U256, RpcError> {
        self.native_calls.fetch_add(1, Ordering::SeqCst);
        self.balance_requests
            .lock()
            .unwrap()
            .push(BalanceCall::Native { holder });

        if self.fail_balance.load(Ordering::SeqCst) {
            return Err(RpcError::chain_connection_failed(
                "eth_getBalance",
                Self::scripted_failure("balance"),
            ));
        }
        Ok(self.native_balance)
    }

    async fn faucet_token_balance(
        &self,
        faucet: Address,
        token: Address,
        holder: Address,
    ) -> Result<U256, RpcError> {
        self.token_calls.fetch_add(1, Ordering::SeqCst);
        self.balance_requests.lock().unwrap().push(BalanceCall::Token {
            faucet,
            token,
            holder,
        });

        if let Some(delay) = self.token_delays.get(&token) {
            tokio::time::sleep(*delay).await;
        }

        if self.fail_balance.load(Ordering::SeqCst) {
            return Err(RpcError::contract_call_failed(
                "getTokenBalance()",
                Self::scripted_failure("balance"),
            ));
        }
        Ok(self.token_balances.get(&token).copied().unwrap_or_default())
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<ConfirmedTransaction, RpcError> {
        self.receipt_calls.fetch_add(1, Ordering::SeqCst);
        if !self.receipt_delay.is_zero() {
            tokio::time::sleep(self.receipt_delay).await;
        }

        if self.fail_receipt.load(Ordering::SeqCst) {
            return Err(RpcError::confirmation_failed(
                tx_hash,
                Self::scripted_failure("receipt"),
            ));
        }
        Ok(ConfirmedTransaction {
            tx_hash,
            block_number: Some(42),
            success: true,
        })
    }
}

#[async_trait]
impl FaucetWriter for MockChain {
    async fn submit(&self, faucet: Address, call: &FaucetCall) -> Result<TxHash, RpcError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        self.submissions.lock().unwrap().push((faucet, call.clone()));

        if let Some(delay) = self.submit_delays.get(&call.action) {
            tokio::time::sleep(*delay).await;
        }

        if self.fail_submit.load(Ordering::SeqCst) {
            return Err(RpcError::submission_failed(
                call.action.name(),
                Self::scripted_failure("submit"),
            ));
        }
        Ok(self.tx_hash.unwrap_or(TX_HASH))
    }
}

/// Config pointing at [`FAUCET`] with the default debounce window
pub fn test_config() -> FaucetConfig {
    FaucetConfigBuilder::new(FAUCET)
        .explorer_url(EXPLORER)
        .build()
}

/// Session reading from and writing through `chain`
pub fn session_with(chain: &Arc<MockChain>) -> FaucetSession {
    FaucetSession::new(test_config(), chain.clone(), Some(chain.clone()))
}

/// Session with no wallet connected
pub fn read_only_session(chain: &Arc<MockChain>) -> FaucetSession {
    FaucetSession::new(test_config(), chain.clone(), None)
}

/// Fill the receiver and amount fields and set the token without waiting for
/// the debounced fetch
pub fn fill_form(session: &FaucetSession, token: &str, amount: &str) {
    session.set_token_address(token);
    session.set_receiver_address(RECEIVER.to_string());
    session.set_amount(amount);
}
