// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type and human-decimal conversion

use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::decimals::TokenDecimals;
use crate::errors::AmountError;

/// Largest power of ten that still fits in a U256 (10^77)
const MAX_U256_DIGITS: i64 = 78;

/// Raw token amount in base units
///
/// This represents the amount as stored on-chain in the smallest unit (e.g.,
/// wei for ETH). Convert from and to human-readable strings with
/// [`parse_units`](Self::parse_units) and [`format_units`](Self::format_units),
/// always using the same [`TokenDecimals`] for both directions.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use faucet_client::{TokenAmount, TokenDecimals};
///
/// let amount = TokenAmount::parse_units("1.5", TokenDecimals::STANDARD).unwrap();
/// assert_eq!(amount.as_u256(), U256::from(1_500_000_000_000_000_000u64));
/// assert_eq!(amount.format_units(TokenDecimals::STANDARD), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Parse a human decimal string into base units: `input * 10^decimals`
    ///
    /// Zero is accepted; negative values are not. Inputs with more fractional
    /// digits than `decimals` are rejected rather than rounded.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use faucet_client::{AmountError, TokenAmount, TokenDecimals};
    ///
    /// let usdc = TokenAmount::parse_units("2.5", TokenDecimals::USDC).unwrap();
    /// assert_eq!(usdc.as_u256(), U256::from(2_500_000u64));
    ///
    /// assert!(matches!(
    ///     TokenAmount::parse_units("abc", TokenDecimals::USDC),
    ///     Err(AmountError::Malformed { .. })
    /// ));
    /// ```
    pub fn parse_units(input: &str, decimals: TokenDecimals) -> Result<Self, AmountError> {
        let value = parse_decimal(input)?;
        if value < BigDecimal::from(0) {
            return Err(AmountError::NonPositive);
        }

        let (_, exponent) = value.as_bigint_and_exponent();
        let scale = i64::from(decimals.as_u8());
        if exponent > scale {
            return Err(AmountError::TooPrecise {
                decimals: decimals.as_u8(),
            });
        }
        if exponent < -MAX_U256_DIGITS {
            return Err(AmountError::Overflow);
        }

        let (digits, _) = value.with_scale(scale).into_bigint_and_exponent();
        U256::from_str_radix(&digits.to_string(), 10)
            .map(Self)
            .map_err(|_| AmountError::Overflow)
    }

    /// Render base units as a human decimal string: `amount / 10^decimals`
    ///
    /// Trailing fractional zeros are trimmed, so `1500000` with 6 decimals
    /// renders as `"1.5"` and `1000000` as `"1"`.
    pub fn format_units(&self, decimals: TokenDecimals) -> String {
        let digits = self.0.to_string();
        let scale = usize::from(decimals.as_u8());
        if scale == 0 {
            return digits;
        }

        let padded = if digits.len() <= scale {
            format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
        } else {
            digits
        };

        let (whole, fraction) = padded.split_at(padded.len() - scale);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{fraction}")
        }
    }
}

/// Parse a decimal string, normalized so its exponent reflects the
/// significant fractional digits only.
///
/// Only `[sign] digits [. digits] [e|E [sign] digits]` is accepted; anything
/// `BigDecimal` would tolerate beyond that (digit separators such as `1_000`)
/// is malformed.
pub(crate) fn parse_decimal(input: &str) -> Result<BigDecimal, AmountError> {
    let trimmed = input.trim();
    if !is_plain_decimal(trimmed) {
        return Err(AmountError::malformed(trimmed));
    }
    BigDecimal::from_str(trimmed)
        .map(|value| value.normalized())
        .map_err(|_| AmountError::malformed(trimmed))
}

fn is_plain_decimal(input: &str) -> bool {
    let (mantissa, exponent) = match input.find(['e', 'E']) {
        Some(at) => (&input[..at], Some(&input[at + 1..])),
        None => (input, None),
    };

    let unsigned = mantissa.strip_prefix(['+', '-']).unwrap_or(mantissa);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let mantissa_ok = !(whole.is_empty() && fraction.is_empty())
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit());

    let exponent_ok = exponent.is_none_or(|exp| {
        let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    });

    mantissa_ok && exponent_ok
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
