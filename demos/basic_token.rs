//! Basic token ledger usage example

use token_ledger::{AccountId, LogSink, TokenLedger};
use uuid::Uuid;

fn main() {
    env_logger::init();

    println!("🪙 Token Ledger - Basic Example\n");

    let alice = AccountId::from_uuid(Uuid::from_u128(1));
    let bob = AccountId::from_uuid(Uuid::from_u128(2));
    let chris = AccountId::from_uuid(Uuid::from_u128(3));

    // Deploy with the whole supply credited to Alice
    let mut ledger = TokenLedger::new(100, alice, LogSink);
    println!("✓ Deployed with total supply {}", ledger.total_supply());

    // Alice lets Bob spend up to 10 on her behalf
    ledger.approve(alice, bob, 10);
    println!(
        "✓ Alice approved Bob for {}",
        ledger.allowance(&alice, &bob)
    );

    // Bob moves 9 of Alice's tokens to Chris
    if ledger.transfer_from(bob, alice, chris, 9) {
        println!("✓ Bob moved 9 from Alice to Chris");
    } else {
        println!("✗ Delegated transfer rejected");
    }

    println!("\n📊 Final balances:");
    println!("  Alice: {}", ledger.balance_of(&alice));
    println!("  Bob:   {}", ledger.balance_of(&bob));
    println!("  Chris: {}", ledger.balance_of(&chris));
    println!(
        "  Remaining allowance for Bob: {}",
        ledger.allowance(&alice, &bob)
    );
}
