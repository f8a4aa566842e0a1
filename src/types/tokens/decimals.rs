//! Token decimal precision type

use serde::{Deserialize, Serialize};

use crate::config::constants::DEFAULT_DECIMALS;

/// ERC-20 token decimal precision
///
/// Represents the number of decimal places for a token. Most ERC-20 tokens
/// use 18 decimals (like ETH), but some use different values:
/// - USDC: 6 decimals
/// - WBTC: 8 decimals
/// - Standard: 18 decimals
///
/// The native asset always uses [`TokenDecimals::STANDARD`], and so does any
/// token whose `decimals()` could not be read.
///
/// # Examples
///
/// ```
/// use faucet_client::TokenDecimals;
///
/// assert_eq!(TokenDecimals::default(), TokenDecimals::STANDARD);
/// assert_eq!(TokenDecimals::USDC.as_u8(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Standard decimals for ETH-like tokens (18), also the fallback value
    pub const STANDARD: Self = Self(DEFAULT_DECIMALS);

    /// USDC decimals (6)
    pub const USDC: Self = Self(6);

    /// WBTC decimals (8)
    pub const WBTC: Self = Self(8);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for TokenDecimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
