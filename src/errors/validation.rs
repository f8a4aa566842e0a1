//! Error types for user input validation and amount conversion.

/// Errors converting a human-entered amount into base units.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// The input is not a decimal number.
    #[error("'{input}' is not a valid number")]
    Malformed {
        /// The rejected input
        input: String,
    },

    /// The amount is zero or negative.
    #[error("Amount must be greater than zero")]
    NonPositive,

    /// The input has more fractional digits than the token supports.
    #[error("Amount has more than {decimals} decimal places")]
    TooPrecise {
        /// Decimals of the token the amount was converted for
        decimals: u8,
    },

    /// The converted amount does not fit in 256 bits.
    #[error("Amount is too large")]
    Overflow,
}

impl AmountError {
    pub(crate) fn malformed(input: impl Into<String>) -> Self {
        AmountError::Malformed {
            input: input.into(),
        }
    }
}

/// Errors detected before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The token address field is empty or not a valid address.
    #[error("Invalid token address")]
    InvalidTokenAddress,

    /// The receiver address field is empty or not a valid address.
    #[error("Invalid receiver address")]
    InvalidReceiverAddress,

    /// The amount is not a positive finite number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    /// No signing client is configured.
    #[error("Wallet not connected")]
    WalletNotConnected,
}
