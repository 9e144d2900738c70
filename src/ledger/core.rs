//! Token ledger aggregate coordinating balances, allowances, and events

use log::{debug, warn};

use crate::ledger::{AllowanceTable, BalanceTable};
use crate::traits::EventSink;
use crate::types::*;

/// Fungible-token ledger with a fixed total supply
///
/// Owns every balance and allowance entry; all mutation of either goes
/// through the operations below. The acting account is an explicit
/// `caller` parameter on each mutating operation, and the sink
/// injected at construction is notified after each committed state
/// change. Every operation is a single atomic read-check-write-emit
/// sequence: a failed precondition returns false before any mutation
/// and before any event.
pub struct TokenLedger<E: EventSink> {
    total_supply: Balance,
    balances: BalanceTable,
    allowances: AllowanceTable,
    sink: E,
}

impl<E: EventSink> TokenLedger<E> {
    /// Create a ledger, crediting the whole supply to `deployer`
    ///
    /// Emits the mint transfer (`from` absent). Any supply is valid,
    /// including zero.
    pub fn new(initial_supply: Balance, deployer: AccountId, sink: E) -> Self {
        let mut balances = BalanceTable::new();
        balances.credit(deployer, initial_supply);

        let ledger = Self {
            total_supply: initial_supply,
            balances,
            allowances: AllowanceTable::new(),
            sink,
        };
        ledger.emit(TokenEvent::Transfer(Transfer {
            from: None,
            to: deployer,
            value: initial_supply,
        }));
        ledger
    }

    // Read operations

    /// Fixed total supply
    pub fn total_supply(&self) -> Balance {
        self.total_supply
    }

    /// Balance of `owner`, zero for accounts never credited
    pub fn balance_of(&self, owner: &AccountId) -> Balance {
        self.balances.get(owner)
    }

    /// Remaining amount `spender` may move out of `owner`'s balance
    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Balance {
        self.allowances.get(owner, spender)
    }

    // Mutating operations

    /// Set the allowance for (`caller`, `spender`) to exactly `value`
    ///
    /// Overwrites any prior allowance for the pair and is not capped
    /// by the caller's balance. Always succeeds. Emits an approval
    /// event.
    pub fn approve(&mut self, caller: AccountId, spender: AccountId, value: Balance) -> bool {
        self.allowances.set(caller, spender, value);
        self.emit(TokenEvent::Approval(Approval {
            owner: caller,
            spender,
            value,
        }));
        true
    }

    /// Move `value` from `from` to `to` on behalf of `caller`
    ///
    /// Returns false with no state change and no event when the
    /// (`from`, `caller`) allowance is below `value`. On success the
    /// allowance is set to the transferred value, not decremented.
    pub fn transfer_from(
        &mut self,
        caller: AccountId,
        from: AccountId,
        to: AccountId,
        value: Balance,
    ) -> bool {
        let current_allowance = self.allowances.get(&from, &caller);
        if current_allowance < value {
            debug!(
                "transfer_from rejected: allowance of {caller} for {from} is \
                 {current_allowance}, needed {value}"
            );
            return false;
        }
        self.allowances.set(from, caller, value);
        self.transfer_from_to(from, to, value)
    }

    /// Move `value` from the caller's own balance to `to`
    pub fn transfer(&mut self, caller: AccountId, to: AccountId, value: Balance) -> bool {
        self.transfer_from_to(caller, to, value)
    }

    /// Sole path moving value between accounts
    ///
    /// The destination balance is read after the source is debited, so
    /// `from == to` debits and credits the same entry and leaves it
    /// unchanged. Value is only ever moved, never created or
    /// destroyed, which keeps the sum of all balances equal to the
    /// total supply.
    fn transfer_from_to(&mut self, from: AccountId, to: AccountId, value: Balance) -> bool {
        if !self.balances.debit(from, value) {
            debug!("transfer rejected: balance of {from} is short of {value}");
            return false;
        }
        self.balances.credit(to, value);
        debug_assert_eq!(self.balances.total(), self.total_supply);
        self.emit(TokenEvent::Transfer(Transfer {
            from: Some(from),
            to,
            value,
        }));
        true
    }

    /// Notify the sink; a delivery failure never rolls back state
    fn emit(&self, event: TokenEvent) {
        if let Err(err) = self.sink.emit(&event) {
            warn!("event sink failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::NullSink;

    #[test]
    fn construction_credits_deployer() {
        let deployer = AccountId::new();
        let ledger = TokenLedger::new(100, deployer, NullSink);

        assert_eq!(ledger.total_supply(), 100);
        assert_eq!(ledger.balance_of(&deployer), 100);
        assert_eq!(ledger.balance_of(&AccountId::new()), 0);
    }

    #[test]
    fn zero_supply_is_valid() {
        let deployer = AccountId::new();
        let ledger = TokenLedger::new(0, deployer, NullSink);

        assert_eq!(ledger.total_supply(), 0);
        assert_eq!(ledger.balance_of(&deployer), 0);
    }

    #[test]
    fn transfer_moves_value() {
        let alice = AccountId::new();
        let bob = AccountId::new();
        let mut ledger = TokenLedger::new(100, alice, NullSink);

        assert!(ledger.transfer(alice, bob, 40));
        assert_eq!(ledger.balance_of(&alice), 60);
        assert_eq!(ledger.balance_of(&bob), 40);
    }

    #[test]
    fn transfer_rejects_insufficient_balance() {
        let alice = AccountId::new();
        let bob = AccountId::new();
        let mut ledger = TokenLedger::new(100, alice, NullSink);

        assert!(!ledger.transfer(alice, bob, 101));
        assert_eq!(ledger.balance_of(&alice), 100);
        assert_eq!(ledger.balance_of(&bob), 0);
    }

    #[test]
    fn transfer_from_unknown_account_fails() {
        let alice = AccountId::new();
        let stranger = AccountId::new();
        let mut ledger = TokenLedger::new(100, alice, NullSink);

        assert!(!ledger.transfer(stranger, alice, 1));
        assert_eq!(ledger.balance_of(&alice), 100);
    }

    #[test]
    fn self_transfer_preserves_balance() {
        let alice = AccountId::new();
        let mut ledger = TokenLedger::new(100, alice, NullSink);

        assert!(ledger.transfer(alice, alice, 30));
        assert_eq!(ledger.balance_of(&alice), 100);
    }

    #[test]
    fn approve_overwrites_prior_allowance() {
        let alice = AccountId::new();
        let bob = AccountId::new();
        let mut ledger = TokenLedger::new(100, alice, NullSink);

        assert!(ledger.approve(alice, bob, 10));
        assert!(ledger.approve(alice, bob, 3));
        assert_eq!(ledger.allowance(&alice, &bob), 3);
    }

    #[test]
    fn approve_is_not_capped_by_balance() {
        let alice = AccountId::new();
        let bob = AccountId::new();
        let mut ledger = TokenLedger::new(100, alice, NullSink);

        assert!(ledger.approve(alice, bob, 1_000_000));
        assert_eq!(ledger.allowance(&alice, &bob), 1_000_000);
    }

    #[test]
    fn allowance_pairs_are_directional() {
        let alice = AccountId::new();
        let bob = AccountId::new();
        let mut ledger = TokenLedger::new(100, alice, NullSink);

        ledger.approve(alice, bob, 10);
        assert_eq!(ledger.allowance(&alice, &bob), 10);
        assert_eq!(ledger.allowance(&bob, &alice), 0);
    }

    #[test]
    fn transfer_from_requires_allowance() {
        let alice = AccountId::new();
        let bob = AccountId::new();
        let chris = AccountId::new();
        let mut ledger = TokenLedger::new(100, alice, NullSink);

        assert!(!ledger.transfer_from(bob, alice, chris, 5));
        assert_eq!(ledger.balance_of(&alice), 100);
        assert_eq!(ledger.balance_of(&chris), 0);
    }

    #[test]
    fn transfer_from_moves_within_allowance() {
        let alice = AccountId::new();
        let bob = AccountId::new();
        let chris = AccountId::new();
        let mut ledger = TokenLedger::new(100, alice, NullSink);

        ledger.approve(alice, bob, 10);
        assert!(ledger.transfer_from(bob, alice, chris, 9));
        assert_eq!(ledger.balance_of(&alice), 91);
        assert_eq!(ledger.balance_of(&chris), 9);
        assert_eq!(ledger.balance_of(&bob), 0);
    }
}
