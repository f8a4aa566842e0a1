// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for amount conversion
//!
//! Base units are what gets signed into a transaction, so conversion must be
//! exact for every precision a faucet token can have.

use alloy_primitives::U256;
use faucet_client::{AmountError, AmountPreview, TokenAmount, TokenDecimals};
use proptest::prelude::*;

fn arb_decimals() -> impl Strategy<Value = TokenDecimals> {
    prop_oneof![
        Just(TokenDecimals::new(0)),
        Just(TokenDecimals::USDC),
        Just(TokenDecimals::STANDARD),
    ]
}

// Human-readable amount with at most `decimals` fractional digits
fn arb_amount_for(decimals: TokenDecimals) -> impl Strategy<Value = (u64, String)> {
    let max_fraction = u32::from(decimals.as_u8()).min(9);
    (0u64..1_000_000_000, 0u32..=max_fraction, any::<u32>()).prop_map(
        move |(whole, fraction_digits, seed)| {
            if fraction_digits == 0 {
                return (whole, whole.to_string());
            }
            let fraction = u64::from(seed) % 10u64.pow(fraction_digits);
            (
                whole,
                format!("{whole}.{fraction:0width$}", width = fraction_digits as usize),
            )
        },
    )
}

fn arb_decimals_and_amount() -> impl Strategy<Value = (TokenDecimals, String)> {
    arb_decimals().prop_flat_map(|decimals| {
        arb_amount_for(decimals).prop_map(move |(_, amount)| (decimals, amount))
    })
}

proptest! {
    /// Property: formatting the parsed base units gives back the same number
    #[test]
    fn prop_parse_then_format_preserves_value(
        (decimals, input) in arb_decimals_and_amount(),
    ) {
        let amount = TokenAmount::parse_units(&input, decimals).unwrap();
        let formatted = amount.format_units(decimals);

        let reparsed = TokenAmount::parse_units(&formatted, decimals).unwrap();
        prop_assert_eq!(reparsed, amount);

        // formatting never leaves trailing zeros behind a decimal point
        prop_assert!(!formatted.contains('.') || !formatted.ends_with('0'));
    }

    /// Property: whole numbers scale by exactly 10^decimals
    #[test]
    fn prop_whole_amounts_scale_by_decimals(
        whole in 0u64..1_000_000_000,
        decimals in arb_decimals(),
    ) {
        let amount = TokenAmount::parse_units(&whole.to_string(), decimals).unwrap();
        let expected = U256::from(whole) * U256::from(10u64).pow(U256::from(decimals.as_u8()));
        prop_assert_eq!(amount.as_u256(), expected);
    }

    /// Property: formatting then parsing base units is the identity
    #[test]
    fn prop_format_then_parse_is_identity(
        raw in any::<u128>(),
        decimals in arb_decimals(),
    ) {
        let amount = TokenAmount::from(U256::from(raw));
        let parsed = TokenAmount::parse_units(&amount.format_units(decimals), decimals).unwrap();
        prop_assert_eq!(parsed, amount);
    }

    /// Property: one digit past the token's precision is rejected, never rounded
    #[test]
    fn prop_excess_precision_is_rejected(
        whole in 0u64..1_000,
        last_digit in 1u8..=9,
        decimals in arb_decimals(),
    ) {
        let zeros = "0".repeat(usize::from(decimals.as_u8()));
        let input = format!("{whole}.{zeros}{last_digit}");

        prop_assert_eq!(
            TokenAmount::parse_units(&input, decimals),
            Err(AmountError::TooPrecise { decimals: decimals.as_u8() })
        );
        prop_assert_eq!(AmountPreview::compute(&input, decimals), AmountPreview::Invalid);
    }

    /// Property: negative amounts never convert
    #[test]
    fn prop_negative_amounts_are_rejected(
        value in 1u64..1_000_000,
        decimals in arb_decimals(),
    ) {
        prop_assert_eq!(
            TokenAmount::parse_units(&format!("-{value}"), decimals),
            Err(AmountError::NonPositive)
        );
    }
}

#[test]
fn test_known_conversions() {
    assert_eq!(
        TokenAmount::parse_units("1.5", TokenDecimals::STANDARD)
            .unwrap()
            .as_u256(),
        U256::from(1_500_000_000_000_000_000u64)
    );
    assert_eq!(
        TokenAmount::parse_units("2.5", TokenDecimals::USDC)
            .unwrap()
            .as_u256(),
        U256::from(2_500_000u64)
    );
    assert_eq!(
        TokenAmount::parse_units("7", TokenDecimals::new(0))
            .unwrap()
            .as_u256(),
        U256::from(7u64)
    );
}

#[test]
fn test_overflow_is_reported() {
    let huge = format!("1{}", "0".repeat(80));
    assert_eq!(
        TokenAmount::parse_units(&huge, TokenDecimals::STANDARD),
        Err(AmountError::Overflow)
    );
}
