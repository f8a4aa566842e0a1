// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Faucet session: the state behind the faucet form
//!
//! A [`FaucetSession`] owns the form inputs and everything displayed next to
//! them (balance, loading flag, status message, last transaction). Front ends
//! feed it edits and read back [`SessionState`] snapshots.
//!
//! # Concurrency
//!
//! - Token-address edits are debounced; only the last edit in a window fires.
//! - Every balance fetch takes a sequence number. A response is applied only if
//!   no newer fetch has been dispatched since, so overlapping fetches can
//!   finish in any order.
//! - Background tasks hold a weak reference and stop touching state after
//!   [`shutdown`](FaucetSession::shutdown).
//! - The state lock is never held across an `.await`.
//!
//! # Example
//!
//! ```rust,ignore
//! use faucet_client::{FaucetAction, FaucetSession};
//!
//! let session = FaucetSession::new(config, reader, Some(writer));
//! session.set_token_address("0x0000000000000000000000000000000000000000");
//! session.set_receiver_address(receiver);
//! session.set_amount("1.5");
//!
//! let pending = session.submit(FaucetAction::Mint).await?;
//! println!("{}", pending.transaction().explorer_url);
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use alloy_primitives::TxHash;
use serde::Serialize;
use tracing::{debug, error, info, warn, Instrument};

use crate::balance::{BalanceFetcher, BalanceOutcome};
use crate::chain::{ChainReader, FaucetCall, FaucetWriter};
use crate::config::FaucetConfig;
use crate::debounce::Debouncer;
use crate::errors::{SubmissionError, ValidationError};
use crate::spans;
use crate::submission::{
    validate_submission, AmountPreview, ConfirmationStatus, PendingConfirmation,
    SubmittedTransaction,
};
use crate::types::action::FaucetAction;
use crate::types::address::AddressInput;
use crate::types::tokens::{BalanceState, TokenAmount, TokenDecimals, TokenDescriptor};

/// User-visible status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum StatusMessage {
    /// Something went wrong
    Error(String),
    /// A transaction was submitted
    Success(String),
}

/// Snapshot of everything the faucet form displays
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// Token address field
    pub token_input: String,
    /// Receiver address field
    pub receiver_input: String,
    /// Amount field
    pub amount_input: String,
    /// Token resolved by the last applied balance fetch
    pub descriptor: Option<TokenDescriptor>,
    /// Faucet balance of the token
    pub balance: BalanceState,
    /// A balance fetch is in flight
    pub loading: bool,
    /// Submissions waiting on the chain client, in start order
    pub submitting: Vec<FaucetAction>,
    /// Status line
    pub status: Option<StatusMessage>,
    /// Most recent successful submission
    pub last_transaction: Option<SubmittedTransaction>,
}

impl SessionState {
    /// Decimals to convert amounts with for the current token input
    ///
    /// The native asset always uses 18. A token uses the decimals resolved for
    /// that same address; until those arrive the default of 18 is assumed.
    pub fn effective_decimals(&self) -> TokenDecimals {
        match AddressInput::classify(&self.token_input) {
            AddressInput::Native => TokenDecimals::STANDARD,
            AddressInput::Token(token) => self
                .descriptor
                .filter(|d| d.address == token)
                .map(|d| d.decimals)
                .unwrap_or_default(),
            AddressInput::Empty | AddressInput::Invalid => TokenDecimals::STANDARD,
        }
    }
}

struct Inner {
    config: FaucetConfig,
    reader: Arc<dyn ChainReader>,
    writer: Option<Arc<dyn FaucetWriter>>,
    fetcher: BalanceFetcher,
    state: Mutex<SessionState>,
    debouncer: Mutex<Debouncer>,
    latest_fetch: AtomicU64,
    closed: AtomicBool,
}

impl Inner {
    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, sequence: u64) -> bool {
        self.latest_fetch.load(Ordering::SeqCst) == sequence
    }

    /// Run one balance fetch for `input` and apply it if still current.
    async fn run_fetch(self: &Arc<Self>, input: String) -> BalanceOutcome {
        let sequence = self.latest_fetch.fetch_add(1, Ordering::SeqCst) + 1;
        let span = spans::fetch_balance(&input, sequence);

        async move {
            let classified = AddressInput::classify(&input);
            if !classified.is_valid() {
                let outcome = BalanceOutcome::not_applicable();
                self.apply_fetch(sequence, outcome);
                return outcome;
            }

            if !self.is_closed() && self.is_current(sequence) {
                self.state().loading = true;
            }

            let outcome = self.fetcher.fetch_classified(classified).await;
            self.apply_fetch(sequence, outcome);
            outcome
        }
        .instrument(span)
        .await
    }

    fn apply_fetch(&self, sequence: u64, outcome: BalanceOutcome) {
        if self.is_closed() {
            debug!("Session closed, dropping balance response");
            return;
        }

        let mut state = self.state();
        // checked under the lock so a newer fetch cannot slip in between
        if !self.is_current(sequence) {
            debug!(
                sequence,
                latest = self.latest_fetch.load(Ordering::SeqCst),
                "Discarding stale balance response"
            );
            return;
        }

        state.descriptor = outcome.descriptor;
        state.balance = outcome.balance;
        state.loading = false;
    }

    fn record_confirmation(&self, tx_hash: TxHash, status: ConfirmationStatus) {
        if self.is_closed() {
            return;
        }
        let mut state = self.state();
        if let Some(tx) = state
            .last_transaction
            .as_mut()
            .filter(|tx| tx.tx_hash == tx_hash)
        {
            tx.confirmation = status;
        }
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Marks one submission as in flight until dropped, including when the
/// submitting future is cancelled
struct SubmittingGuard<'a> {
    inner: &'a Inner,
    action: FaucetAction,
}

impl<'a> SubmittingGuard<'a> {
    fn enter(inner: &'a Inner, action: FaucetAction) -> Self {
        inner.state().submitting.push(action);
        Self { inner, action }
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.inner.state();
        if let Some(at) = state.submitting.iter().position(|a| *a == self.action) {
            state.submitting.remove(at);
        }
    }
}

/// State and flows behind the faucet form
///
/// Cheap to clone; clones share state. Chain services are injected once at
/// construction. A session without a writer reports
/// [`ValidationError::WalletNotConnected`] on submission.
#[derive(Clone)]
pub struct FaucetSession {
    inner: Arc<Inner>,
}

impl FaucetSession {
    /// Create a session
    pub fn new(
        config: FaucetConfig,
        reader: Arc<dyn ChainReader>,
        writer: Option<Arc<dyn FaucetWriter>>,
    ) -> Self {
        let fetcher = BalanceFetcher::new(reader.clone(), config.faucet_address);
        let debouncer = Debouncer::new(config.debounce_window);

        Self {
            inner: Arc::new(Inner {
                config,
                reader,
                writer,
                fetcher,
                state: Mutex::new(SessionState::default()),
                debouncer: Mutex::new(debouncer),
                latest_fetch: AtomicU64::new(0),
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// The session's configuration
    pub fn config(&self) -> &FaucetConfig {
        &self.inner.config
    }

    /// Whether a signing client is available
    pub fn wallet_connected(&self) -> bool {
        self.inner.writer.is_some()
    }

    /// Copy of the current display state
    pub fn snapshot(&self) -> SessionState {
        self.inner.state().clone()
    }

    /// Whether a submission is in flight
    ///
    /// Front ends use this to keep mint and claim mutually exclusive. The
    /// session itself does not refuse concurrent submissions.
    pub fn is_busy(&self) -> bool {
        !self.inner.state().submitting.is_empty()
    }

    /// Record a token-address edit and schedule a debounced balance fetch
    ///
    /// Any fetch scheduled by an earlier edit that has not fired yet is
    /// cancelled. The fetch uses the value given here, not whatever the field
    /// holds when the timer fires. Must be called within a tokio runtime.
    pub fn set_token_address(&self, input: impl Into<String>) {
        if self.inner.is_closed() {
            return;
        }

        let input = input.into();
        self.inner.state().token_input = input.clone();

        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        self.inner
            .debouncer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .schedule(async move {
                if let Some(inner) = weak.upgrade() {
                    inner.run_fetch(input).await;
                }
            });
    }

    /// Record a receiver-address edit
    pub fn set_receiver_address(&self, input: impl Into<String>) {
        self.inner.state().receiver_input = input.into();
    }

    /// Record an amount edit
    pub fn set_amount(&self, input: impl Into<String>) {
        self.inner.state().amount_input = input.into();
    }

    /// Preview of the amount field in base units
    pub fn amount_preview(&self) -> AmountPreview {
        let state = self.inner.state();
        AmountPreview::compute(&state.amount_input, state.effective_decimals())
    }

    /// Fetch the balance for the current token input right away
    pub async fn refresh_balance(&self) -> BalanceOutcome {
        let input = self.inner.state().token_input.clone();
        self.inner.run_fetch(input).await
    }

    /// Submit `mint(token, receiver, amount)` with the pinned gas price
    pub async fn mint(&self) -> Result<PendingConfirmation, SubmissionError> {
        self.submit(FaucetAction::Mint).await
    }

    /// Submit `claim(token, receiver, amount)`
    pub async fn claim(&self) -> Result<PendingConfirmation, SubmissionError> {
        self.submit(FaucetAction::Claim).await
    }

    /// Validate the form, convert the amount and submit a faucet transaction
    ///
    /// On success the transaction is recorded and a watcher awaits its receipt;
    /// once confirmed the balance is fetched again for the then-current token
    /// input. Every error is also reflected in the status line.
    pub async fn submit(
        &self,
        action: FaucetAction,
    ) -> Result<PendingConfirmation, SubmissionError> {
        let (token, receiver, amount) = {
            let state = self.inner.state();
            (
                state.token_input.clone(),
                state.receiver_input.clone(),
                state.amount_input.clone(),
            )
        };
        let span = spans::submit_transaction(action, &token, &receiver);

        let result = self
            .submit_inputs(action, &token, &receiver, &amount)
            .instrument(span)
            .await;

        if let Err(e) = &result {
            self.inner.state().status = Some(StatusMessage::Error(e.user_message()));
        }

        result
    }

    async fn submit_inputs(
        &self,
        action: FaucetAction,
        token: &str,
        receiver: &str,
        amount: &str,
    ) -> Result<PendingConfirmation, SubmissionError> {
        let validated = validate_submission(token, receiver, amount, self.wallet_connected())?;
        let writer = self
            .inner
            .writer
            .clone()
            .ok_or(ValidationError::WalletNotConnected)?;

        {
            let mut state = self.inner.state();
            state.status = None;
            state.last_transaction = None;
        }

        let decimals = self.decimals_for(validated.token).await;
        let amount = TokenAmount::parse_units(amount, decimals)?;

        let config = &self.inner.config;
        let call = FaucetCall {
            action,
            token: validated.token.address().unwrap_or_default(),
            receiver: validated.receiver,
            amount: amount.as_u256(),
            gas_price: (action == FaucetAction::Mint).then_some(config.mint_gas_price),
        };

        let sent = {
            let _submitting = SubmittingGuard::enter(&self.inner, action);
            writer.submit(config.faucet_address, &call).await
        };

        let tx_hash = sent.inspect_err(|e| {
            error!(error = %e, "Faucet transaction was not submitted");
        })?;

        info!(%tx_hash, amount = %amount, %decimals, "Faucet transaction submitted");

        let transaction =
            SubmittedTransaction::new(action, tx_hash, config.explorer_tx_url(tx_hash));
        {
            let mut state = self.inner.state();
            state.last_transaction = Some(transaction.clone());
            state.status = Some(StatusMessage::Success(format!(
                "{action} submitted: {}",
                transaction.explorer_url
            )));
        }

        let watcher = self.spawn_confirmation_watcher(action, tx_hash);
        Ok(PendingConfirmation::new(transaction, watcher))
    }

    /// Decimals to convert a submission's amount with
    ///
    /// Uses the decimals from the last fetch when they belong to the same
    /// token; otherwise resolves them now so display and conversion agree.
    async fn decimals_for(&self, token: AddressInput) -> TokenDecimals {
        let AddressInput::Token(address) = token else {
            return TokenDecimals::STANDARD;
        };

        let cached = self
            .inner
            .state()
            .descriptor
            .filter(|d| d.address == address)
            .map(|d| d.decimals);

        match cached {
            Some(decimals) => decimals,
            None => self.inner.fetcher.resolver().resolve_token(address).await,
        }
    }

    fn spawn_confirmation_watcher(
        &self,
        action: FaucetAction,
        tx_hash: TxHash,
    ) -> tokio::task::JoinHandle<ConfirmationStatus> {
        let reader = self.inner.reader.clone();
        let weak = Arc::downgrade(&self.inner);
        let span = spans::await_confirmation(action, tx_hash);

        tokio::spawn(
            async move {
                let status = match reader.wait_for_receipt(tx_hash).await {
                    Ok(receipt) => {
                        info!(
                            block_number = ?receipt.block_number,
                            success = receipt.success,
                            "Transaction confirmed"
                        );
                        ConfirmationStatus::Confirmed {
                            block_number: receipt.block_number,
                            success: receipt.success,
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Could not confirm transaction");
                        ConfirmationStatus::Unknown
                    }
                };

                if let Some(inner) = weak.upgrade() {
                    inner.record_confirmation(tx_hash, status);
                    if status.is_confirmed() && !inner.is_closed() {
                        let input = inner.state().token_input.clone();
                        inner.run_fetch(input).await;
                    }
                }

                status
            }
            .instrument(span),
        )
    }

    /// Tear the session down
    ///
    /// Cancels the pending debounce timer. Fetches and confirmation watchers
    /// already running finish, but no longer touch the session state.
    pub fn shutdown(&self) {
        self.inner.closed.store(true, Ordering::SeqCst);
        self.inner
            .debouncer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cancel();
        self.inner.state().loading = false;
    }
}
