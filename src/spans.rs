//! Tracing span helpers for faucet client operations.
//!
//! Telemetry is kept out of business logic: each instrumented operation has a
//! span helper here, attached at the call site with
//! [`Instrument`](tracing::Instrument).
//!
//! Usage pattern:
//! ```rust,ignore
//! use tracing::Instrument;
//!
//! async fn my_operation(&self, token: Address) -> T {
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(token))
//!     .await
//! }
//! ```

use alloy_primitives::{Address, TxHash};
use tracing::Span;

use crate::types::action::FaucetAction;

/// Create span for resolving a token's decimals.
///
/// Parent: fetch_balance or submit_transaction span
/// Children: `decimals()` RPC call
#[inline]
pub(crate) fn resolve_decimals(token: Address) -> Span {
    tracing::debug_span!("faucet.resolve_decimals", token = %token)
}

/// Create span for one balance fetch.
///
/// Parent: None (debounce timer or confirmation watcher)
/// Children: resolve_decimals, balance RPC call
#[inline]
pub(crate) fn fetch_balance(input: &str, sequence: u64) -> Span {
    tracing::info_span!("faucet.fetch_balance", input = %input, sequence = sequence)
}

/// Create span for a mint or claim submission.
///
/// Parent: None (root span for this operation)
/// Children: resolve_decimals (when decimals are stale), send RPC call
#[inline]
pub(crate) fn submit_transaction(action: FaucetAction, token: &str, receiver: &str) -> Span {
    tracing::info_span!(
        "faucet.submit_transaction",
        action = %action,
        token = %token,
        receiver = %receiver,
    )
}

/// Create span for waiting on a submitted transaction's receipt.
///
/// Parent: None (spawned after submission)
/// Children: receipt polling, fetch_balance on confirmation
#[inline]
pub(crate) fn await_confirmation(action: FaucetAction, tx_hash: TxHash) -> Span {
    tracing::info_span!(
        "faucet.await_confirmation",
        action = %action,
        tx_hash = %tx_hash,
    )
}
