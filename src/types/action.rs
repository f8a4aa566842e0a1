//! Faucet actions

use serde::{Deserialize, Serialize};

/// The two faucet entry points a user can trigger
///
/// Both take `(token, receiver, amount)`; they differ only in the contract
/// function invoked and in mint pinning a gas price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaucetAction {
    /// `mint(token, receiver, amount)`
    Mint,
    /// `claim(token, receiver, amount)`
    Claim,
}

impl FaucetAction {
    /// Contract function name
    pub const fn name(&self) -> &'static str {
        match self {
            FaucetAction::Mint => "mint",
            FaucetAction::Claim => "claim",
        }
    }
}

impl std::fmt::Display for FaucetAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
