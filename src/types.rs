//! Core types and data structures for the token ledger

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, globally unique identifier for a token holder
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a fresh account id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an account id from a known UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Token amount in base units
///
/// Unsigned, so no balance can ever go negative; every subtraction in
/// the ledger is guarded by a precondition check, so arithmetic never
/// wraps.
pub type Balance = u128;

/// Ordered (owner, spender) pair keying the allowance table
///
/// Both components participate in `Hash` independently and in order,
/// so (A, B) and (B, A) are always distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllowanceKey {
    /// Account whose balance the allowance draws from
    pub owner: AccountId,
    /// Account permitted to move the owner's tokens
    pub spender: AccountId,
}

/// Record of value moving between accounts
///
/// `from` is absent for the construction-time mint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: Option<AccountId>,
    pub to: AccountId,
    pub value: Balance,
}

/// Record of an owner delegating spending rights to a spender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub owner: AccountId,
    pub spender: AccountId,
    pub value: Balance,
}

/// Notification delivered to an event sink after a state change commits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEvent {
    Transfer(Transfer),
    Approval(Approval),
}

/// Errors an event sink may report
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Event delivery failed: {0}")]
    Delivery(String),
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;
