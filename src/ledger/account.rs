//! Balance bookkeeping for token holders

use std::collections::HashMap;

use crate::types::*;

/// Sparse balance table
///
/// Accounts that have never been credited hold no entry and read as
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceTable {
    balances: HashMap<AccountId, Balance>,
}

impl BalanceTable {
    /// Create an empty balance table
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
        }
    }

    /// Balance of `owner`, zero if never credited
    pub fn get(&self, owner: &AccountId) -> Balance {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    /// Credit `value` to `owner`
    pub fn credit(&mut self, owner: AccountId, value: Balance) {
        let balance = self.get(&owner);
        self.balances.insert(owner, balance + value);
    }

    /// Debit `value` from `owner`
    ///
    /// Returns false and leaves the table untouched when the balance
    /// is short.
    pub fn debit(&mut self, owner: AccountId, value: Balance) -> bool {
        let balance = self.get(&owner);
        if balance < value {
            return false;
        }
        self.balances.insert(owner, balance - value);
        true
    }

    /// Sum of every stored balance
    pub fn total(&self) -> Balance {
        self.balances.values().sum()
    }
}
