//! Strong types for token-related values
//!
//! This module provides newtype wrappers for token operations
//! to add type safety and prevent mixing incompatible units.
//!
//! # Type Relationships
//!
//! ```text
//! "1.5" (human input)
//!     |
//!     | TokenAmount::parse_units(TokenDecimals)
//!     ↓
//! TokenAmount (U256, base units)
//!     |
//!     | BalanceReading { amount, decimals }
//!     ↓
//! BalanceState (display)
//! ```

mod amount;
mod balance;
mod decimals;

pub(crate) use amount::parse_decimal;
pub use amount::TokenAmount;
pub use balance::{BalanceReading, BalanceState, TokenDescriptor};
pub use decimals::TokenDecimals;
