// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Classification of user-entered address strings

use alloy_primitives::Address;

use crate::config::constants::NATIVE_ASSET;

/// What an address field currently holds
///
/// Distinguishes "nothing entered" from "garbage entered", and the native-asset
/// sentinel from ordinary token contracts. Every network-facing operation
/// starts by classifying its input.
///
/// # Examples
///
/// ```
/// use faucet_client::AddressInput;
///
/// assert_eq!(AddressInput::classify(""), AddressInput::Empty);
/// assert_eq!(AddressInput::classify("0x1234"), AddressInput::Invalid);
/// assert_eq!(
///     AddressInput::classify("0x0000000000000000000000000000000000000000"),
///     AddressInput::Native
/// );
/// assert!(AddressInput::classify("0x1111111111111111111111111111111111111111").is_token());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressInput {
    /// Empty or whitespace-only input
    Empty,
    /// Not a syntactically valid address
    Invalid,
    /// The native-asset sentinel
    Native,
    /// An ordinary contract address
    Token(Address),
}

impl AddressInput {
    /// Classify a raw input string
    pub fn classify(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Self::Empty;
        }
        match parse_address(input) {
            Some(address) if address == NATIVE_ASSET => Self::Native,
            Some(address) => Self::Token(address),
            None => Self::Invalid,
        }
    }

    /// The parsed address, if the input was valid
    pub fn address(&self) -> Option<Address> {
        match self {
            Self::Native => Some(NATIVE_ASSET),
            Self::Token(address) => Some(*address),
            Self::Empty | Self::Invalid => None,
        }
    }

    /// Whether the input is a syntactically valid address
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Native | Self::Token(_))
    }

    /// Whether the input is the native-asset sentinel
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }

    /// Whether the input is an ordinary token address
    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }
}

/// Parse a `0x`-prefixed 20-byte hex address.
///
/// All-lowercase and all-uppercase hex are accepted as-is; mixed-case input
/// must carry a valid EIP-55 checksum.
pub fn parse_address(input: &str) -> Option<Address> {
    let hex = input.strip_prefix("0x")?;
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Address::parse_checksummed(input, None).ok();
    }

    input.parse::<Address>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    // Vitalik's address, checksummed per EIP-55
    const CHECKSUMMED: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

    #[test]
    fn test_classify_empty() {
        assert_eq!(AddressInput::classify(""), AddressInput::Empty);
        assert_eq!(AddressInput::classify("   "), AddressInput::Empty);
    }

    #[test]
    fn test_classify_invalid() {
        for input in [
            "0x",
            "0x123",
            "1111111111111111111111111111111111111111",
            "0x11111111111111111111111111111111111111111",
            "0xgggggggggggggggggggggggggggggggggggggggg",
            "not an address",
        ] {
            assert_eq!(AddressInput::classify(input), AddressInput::Invalid, "{input}");
        }
    }

    #[test]
    fn test_classify_native() {
        let input = AddressInput::classify("0x0000000000000000000000000000000000000000");
        assert_eq!(input, AddressInput::Native);
        assert_eq!(input.address(), Some(Address::ZERO));
        assert!(input.is_valid());
    }

    #[test]
    fn test_classify_token_trims_whitespace() {
        let input = AddressInput::classify("  0x1111111111111111111111111111111111111111\n");
        assert_eq!(
            input,
            AddressInput::Token(address!("1111111111111111111111111111111111111111"))
        );
    }

    #[test]
    fn test_checksummed_mixed_case_accepted() {
        assert!(parse_address(CHECKSUMMED).is_some());
        assert!(parse_address(&CHECKSUMMED.to_lowercase()).is_some());
    }

    #[test]
    fn test_bad_checksum_rejected() {
        // flip the case of one letter
        let broken = CHECKSUMMED.replacen("dA", "Da", 1);
        assert!(parse_address(&broken).is_none());
        assert_eq!(AddressInput::classify(&broken), AddressInput::Invalid);
    }

    #[test]
    fn test_all_uppercase_hex_accepted() {
        let upper = format!("0x{}", CHECKSUMMED[2..].to_uppercase());
        assert!(parse_address(&upper).is_some());
    }
}
