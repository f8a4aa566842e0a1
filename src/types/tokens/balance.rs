//! Token descriptors and balance readings

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::{TokenAmount, TokenDecimals};
use crate::config::constants::NATIVE_ASSET;

/// A token as far as the faucet client knows it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    /// Token contract address, or the native-asset sentinel
    pub address: Address,
    /// Resolved decimal precision
    pub decimals: TokenDecimals,
    /// Whether this is the native asset
    pub is_native: bool,
}

impl TokenDescriptor {
    /// Descriptor for the native asset (always 18 decimals)
    pub const fn native() -> Self {
        Self {
            address: NATIVE_ASSET,
            decimals: TokenDecimals::STANDARD,
            is_native: true,
        }
    }

    /// Descriptor for an ERC-20 token
    pub const fn token(address: Address, decimals: TokenDecimals) -> Self {
        Self {
            address,
            decimals,
            is_native: false,
        }
    }
}

/// The faucet's holdings of a token at the latest block
///
/// The amount is always formatted with the decimals stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReading {
    /// Raw amount in base units
    pub amount: TokenAmount,
    /// Decimals the amount is expressed in
    pub decimals: TokenDecimals,
}

impl BalanceReading {
    /// Human-readable amount
    pub fn formatted(&self) -> String {
        self.amount.format_units(self.decimals)
    }
}

/// What the balance display shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BalanceState {
    /// No valid address entered: there is nothing to show
    #[default]
    NotApplicable,
    /// The balance query failed
    Unavailable,
    /// The balance was read successfully
    Available(BalanceReading),
}

impl BalanceState {
    /// The reading, if one is available
    pub fn reading(&self) -> Option<&BalanceReading> {
        match self {
            BalanceState::Available(reading) => Some(reading),
            _ => None,
        }
    }
}

impl std::fmt::Display for BalanceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BalanceState::NotApplicable => f.write_str("-"),
            BalanceState::Unavailable => f.write_str("unavailable"),
            BalanceState::Available(reading) => f.write_str(&reading.formatted()),
        }
    }
}
