//! Well-known addresses and constants
//!
//! This module centralizes the magic values the faucet client relies on.

use std::time::Duration;

use alloy_primitives::Address;

/// Sentinel address standing in for the chain's native asset
///
/// The faucet contract treats the all-zero address as "native currency"
/// rather than as an ERC-20 contract. Matched by exact equality.
pub const NATIVE_ASSET: Address = Address::ZERO;

/// Decimal precision used when a token's decimals are unknown, and always for
/// the native asset
pub const DEFAULT_DECIMALS: u8 = 18;

/// Quiet period after the last token-address edit before a balance fetch fires
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// Gas price pinned on every `mint` transaction (10 gwei)
pub const MINT_GAS_PRICE: u128 = 10_000_000_000;

/// RPC endpoint used when none is configured
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";
