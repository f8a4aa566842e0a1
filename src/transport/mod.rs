// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transport layer utilities for alloy providers.
//!
//! Tower middleware installed on the RPC client by the
//! [`provider`](crate::provider) factory functions.

mod logging;

pub use logging::{LoggingLayer, LoggingService};
