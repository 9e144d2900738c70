//! Shared, lock-serialized ledger handle

use std::sync::{Arc, Mutex};

use crate::ledger::TokenLedger;
use crate::traits::EventSink;
use crate::types::*;

/// Cloneable handle serializing all ledger access behind one lock
///
/// Every operation holds the lock for its whole read-check-write-emit
/// sequence, so no caller ever observes a partially applied mutation.
pub struct SharedLedger<E: EventSink> {
    inner: Arc<Mutex<TokenLedger<E>>>,
}

impl<E: EventSink> Clone for SharedLedger<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: EventSink> SharedLedger<E> {
    /// Wrap a ledger for use from multiple threads
    pub fn new(ledger: TokenLedger<E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Fixed total supply
    pub fn total_supply(&self) -> Balance {
        self.inner.lock().unwrap().total_supply()
    }

    /// Balance of `owner`, zero for accounts never credited
    pub fn balance_of(&self, owner: &AccountId) -> Balance {
        self.inner.lock().unwrap().balance_of(owner)
    }

    /// Remaining amount `spender` may move out of `owner`'s balance
    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Balance {
        self.inner.lock().unwrap().allowance(owner, spender)
    }

    /// Set the allowance for (`caller`, `spender`) to exactly `value`
    pub fn approve(&self, caller: AccountId, spender: AccountId, value: Balance) -> bool {
        self.inner.lock().unwrap().approve(caller, spender, value)
    }

    /// Move `value` from the caller's own balance to `to`
    pub fn transfer(&self, caller: AccountId, to: AccountId, value: Balance) -> bool {
        self.inner.lock().unwrap().transfer(caller, to, value)
    }

    /// Move `value` from `from` to `to` on behalf of `caller`
    pub fn transfer_from(
        &self,
        caller: AccountId,
        from: AccountId,
        to: AccountId,
        value: Balance,
    ) -> bool {
        self.inner
            .lock()
            .unwrap()
            .transfer_from(caller, from, to, value)
    }
}
