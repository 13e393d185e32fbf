//! Typed error handling for the market contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(MarketError::Xxx)`, the SDK calls `env::panic_str()` with the
//! Display message — same on-wire behaviour as raw panics, but with
//! structured, testable codes. A failing method reverts every state write
//! of the call and refunds the attached deposit in full.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum MarketError {
    /// Caller is not the required owner/seller.
    Unauthorized(String),
    /// Invalid parameters from the caller.
    InvalidInput(String),
    /// Requested token does not exist.
    NotFound(String),
    /// Operation not allowed given current sale state.
    InvalidState(String),
    /// Attached deposit differs from the listed price, in either direction.
    PaymentMismatch(String),
    /// Value attached outside the purchase path; never retained.
    Rejected(String),
    /// Internal invariant violation (should never happen).
    InternalError(String),
}

impl std::fmt::Display for MarketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::PaymentMismatch(msg) => write!(f, "Payment mismatch: {}", msg),
            Self::Rejected(msg) => write!(f, "Rejected: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl MarketError {
    pub fn token_not_found() -> Self {
        Self::NotFound("Token not found".into())
    }
    pub fn not_the_owner() -> Self {
        Self::Unauthorized("You are not the owner of this NFT".into())
    }
    pub fn not_listed() -> Self {
        Self::InvalidState("Token is not listed for sale".into())
    }
    pub fn wrong_payment(price: u128, sent: u128) -> Self {
        Self::PaymentMismatch(format!(
            "Incorrect value sent: price is {}, got {}",
            price, sent
        ))
    }
    pub fn unsolicited_deposit() -> Self {
        Self::Rejected("This method does not accept an attached deposit".into())
    }
    pub fn only_contract_owner() -> Self {
        Self::Unauthorized("Only the contract owner can perform this action".into())
    }
}
