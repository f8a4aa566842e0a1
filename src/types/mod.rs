// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across the faucet client.
//!
//! This module provides newtype wrappers and small enums for:
//! - Address input classification (empty, invalid, native, token)
//! - Token amounts and decimals
//! - Balance readings and their display states
//! - Faucet actions (mint, claim)

pub mod action;
pub mod address;
pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
