//! Allowance bookkeeping for delegated spending

use std::collections::HashMap;

use crate::types::*;

/// Sparse allowance table keyed by ordered (owner, spender) pairs
///
/// Pairs that have never been approved hold no entry and read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowanceTable {
    allowances: HashMap<AllowanceKey, Balance>,
}

impl AllowanceTable {
    /// Create an empty allowance table
    pub fn new() -> Self {
        Self {
            allowances: HashMap::new(),
        }
    }

    /// Allowance for the pair, zero if never approved
    pub fn get(&self, owner: &AccountId, spender: &AccountId) -> Balance {
        let key = AllowanceKey {
            owner: *owner,
            spender: *spender,
        };
        self.allowances.get(&key).copied().unwrap_or(0)
    }

    /// Overwrite the allowance for the pair
    ///
    /// Any prior value for the same pair is discarded.
    pub fn set(&mut self, owner: AccountId, spender: AccountId, value: Balance) {
        self.allowances.insert(AllowanceKey { owner, spender }, value);
    }
}
