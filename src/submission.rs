// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Mint and claim submission types
//!
//! The flows themselves live on [`FaucetSession`](crate::FaucetSession); this
//! module holds the pieces that don't need session state: input validation,
//! the amount preview and the record of a submitted transaction.
//!
//! # Workflow
//!
//! 1. [`validate_submission`] checks both addresses, the amount and the wallet
//! 2. The amount is converted with the token's effective decimals
//! 3. The call is sent through the [`FaucetWriter`](crate::FaucetWriter)
//! 4. A [`PendingConfirmation`] tracks the receipt and the follow-up balance fetch

use alloy_primitives::{Address, TxHash};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::errors::{AmountError, ValidationError};
use crate::types::action::FaucetAction;
use crate::types::address::{parse_address, AddressInput};
use crate::types::tokens::{parse_decimal, TokenAmount, TokenDecimals};

/// Inputs that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedSubmission {
    /// Token to request: [`AddressInput::Native`] or [`AddressInput::Token`]
    pub token: AddressInput,
    /// Receiver of the tokens
    pub receiver: Address,
}

/// Check the submission inputs before any network call.
///
/// Checks run in field order: token address, receiver address, amount,
/// then wallet availability.
///
/// # Examples
///
/// ```
/// use faucet_client::{validate_submission, ValidationError};
///
/// let token = "0x0000000000000000000000000000000000000000";
/// let receiver = "0x1111111111111111111111111111111111111111";
///
/// assert!(validate_submission(token, receiver, "1.5", true).is_ok());
/// assert_eq!(
///     validate_submission(token, receiver, "1.5", false),
///     Err(ValidationError::WalletNotConnected)
/// );
/// ```
pub fn validate_submission(
    token: &str,
    receiver: &str,
    amount: &str,
    wallet_connected: bool,
) -> Result<ValidatedSubmission, ValidationError> {
    let token = AddressInput::classify(token);
    if !token.is_valid() {
        return Err(ValidationError::InvalidTokenAddress);
    }

    let receiver =
        parse_address(receiver.trim()).ok_or(ValidationError::InvalidReceiverAddress)?;

    validate_amount(amount)?;

    if !wallet_connected {
        return Err(ValidationError::WalletNotConnected);
    }

    Ok(ValidatedSubmission { token, receiver })
}

/// Check that an amount is a positive finite decimal number.
pub fn validate_amount(amount: &str) -> Result<(), AmountError> {
    let value = parse_decimal(amount)?;
    if value <= BigDecimal::from(0) {
        return Err(AmountError::NonPositive);
    }
    Ok(())
}

/// What the amount field converts to, for display next to the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AmountPreview {
    /// Nothing entered
    Empty,
    /// The amount cannot be submitted as entered
    Invalid,
    /// The amount in base units
    BaseUnits {
        /// Converted amount
        amount: TokenAmount,
        /// Decimals used for the conversion
        decimals: TokenDecimals,
    },
}

impl AmountPreview {
    /// Preview `input` converted with `decimals`
    ///
    /// # Examples
    ///
    /// ```
    /// use faucet_client::{AmountPreview, TokenDecimals};
    ///
    /// assert_eq!(AmountPreview::compute("abc", TokenDecimals::STANDARD), AmountPreview::Invalid);
    /// assert_eq!(AmountPreview::compute("", TokenDecimals::STANDARD), AmountPreview::Empty);
    /// ```
    pub fn compute(input: &str, decimals: TokenDecimals) -> Self {
        if input.trim().is_empty() {
            return Self::Empty;
        }
        if validate_amount(input).is_err() {
            return Self::Invalid;
        }
        match TokenAmount::parse_units(input, decimals) {
            Ok(amount) => Self::BaseUnits { amount, decimals },
            Err(_) => Self::Invalid,
        }
    }
}

impl std::fmt::Display for AmountPreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmountPreview::Empty => f.write_str("-"),
            AmountPreview::Invalid => f.write_str("invalid amount"),
            AmountPreview::BaseUnits { amount, decimals } => {
                write!(f, "{amount} base units ({decimals})")
            }
        }
    }
}

/// Receipt state of a submitted transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConfirmationStatus {
    /// Waiting for the receipt
    Pending,
    /// The transaction was included in a block
    Confirmed {
        /// Inclusion block
        block_number: Option<u64>,
        /// Whether execution succeeded
        success: bool,
    },
    /// Waiting for the receipt failed; the transaction may or may not land
    Unknown,
}

impl ConfirmationStatus {
    /// Whether a receipt was obtained
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ConfirmationStatus::Confirmed { .. })
    }
}

/// A transaction accepted by the chain client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedTransaction {
    /// Mint or claim
    pub action: FaucetAction,
    /// Transaction hash
    pub tx_hash: TxHash,
    /// Block explorer link
    pub explorer_url: String,
    /// When the transaction was handed to the chain client
    pub submitted_at: DateTime<Utc>,
    /// Receipt state
    pub confirmation: ConfirmationStatus,
}

impl SubmittedTransaction {
    /// A freshly submitted, unconfirmed transaction
    pub fn new(action: FaucetAction, tx_hash: TxHash, explorer_url: String) -> Self {
        Self {
            action,
            tx_hash,
            explorer_url,
            submitted_at: Utc::now(),
            confirmation: ConfirmationStatus::Pending,
        }
    }
}

/// Handle on a submitted transaction whose receipt is being awaited
///
/// Dropping the handle does not stop the watcher: the session still records
/// the confirmation and refreshes the balance.
#[derive(Debug)]
pub struct PendingConfirmation {
    transaction: SubmittedTransaction,
    watcher: JoinHandle<ConfirmationStatus>,
}

impl PendingConfirmation {
    pub(crate) fn new(
        transaction: SubmittedTransaction,
        watcher: JoinHandle<ConfirmationStatus>,
    ) -> Self {
        Self {
            transaction,
            watcher,
        }
    }

    /// The transaction as recorded at submission time
    pub fn transaction(&self) -> &SubmittedTransaction {
        &self.transaction
    }

    /// Wait for the watcher to finish, including the follow-up balance fetch
    pub async fn wait(self) -> ConfirmationStatus {
        self.watcher.await.unwrap_or(ConfirmationStatus::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NATIVE: &str = "0x0000000000000000000000000000000000000000";
    const RECEIVER: &str = "0x1111111111111111111111111111111111111111";

    #[test]
    fn test_validation_order() {
        assert_eq!(
            validate_submission("bad", "bad", "bad", false),
            Err(ValidationError::InvalidTokenAddress)
        );
        assert_eq!(
            validate_submission(NATIVE, "bad", "bad", false),
            Err(ValidationError::InvalidReceiverAddress)
        );
        assert!(matches!(
            validate_submission(NATIVE, RECEIVER, "bad", false),
            Err(ValidationError::InvalidAmount(AmountError::Malformed { .. }))
        ));
        assert_eq!(
            validate_submission(NATIVE, RECEIVER, "1", false),
            Err(ValidationError::WalletNotConnected)
        );
    }

    #[test]
    fn test_empty_token_is_invalid() {
        assert_eq!(
            validate_submission("", RECEIVER, "1", true),
            Err(ValidationError::InvalidTokenAddress)
        );
    }

    #[test]
    fn test_validated_native_submission() {
        let validated = validate_submission(NATIVE, RECEIVER, "1.5", true).unwrap();
        assert!(validated.token.is_native());
        assert_eq!(validated.receiver, RECEIVER.parse::<Address>().unwrap());
    }

    #[test]
    fn test_validate_amount_rejects_zero_and_negative() {
        assert_eq!(validate_amount("0"), Err(AmountError::NonPositive));
        assert_eq!(validate_amount("0.000"), Err(AmountError::NonPositive));
        assert_eq!(validate_amount("-2"), Err(AmountError::NonPositive));
        assert!(validate_amount("0.1").is_ok());
    }

    #[test]
    fn test_preview_invalid_amount() {
        assert_eq!(
            AmountPreview::compute("abc", TokenDecimals::STANDARD),
            AmountPreview::Invalid
        );
        assert_eq!(
            AmountPreview::compute("abc", TokenDecimals::STANDARD).to_string(),
            "invalid amount"
        );
    }

    #[test]
    fn test_preview_too_precise_is_invalid() {
        assert_eq!(
            AmountPreview::compute("0.0000001", TokenDecimals::USDC),
            AmountPreview::Invalid
        );
    }

    #[test]
    fn test_preview_base_units() {
        assert_eq!(
            AmountPreview::compute("2.5", TokenDecimals::USDC),
            AmountPreview::BaseUnits {
                amount: TokenAmount::from(2_500_000u64),
                decimals: TokenDecimals::USDC,
            }
        );
    }

    #[test]
    fn test_new_transaction_is_pending() {
        let tx = SubmittedTransaction::new(FaucetAction::Mint, TxHash::ZERO, "url".into());
        assert_eq!(tx.confirmation, ConfirmationStatus::Pending);
        assert!(!tx.confirmation.is_confirmed());
    }
}
