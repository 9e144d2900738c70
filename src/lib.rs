//! # Token Ledger
//!
//! A fungible-token ledger providing balance tracking, delegated
//! spending allowances, and pluggable event notification.
//!
//! ## Features
//!
//! - **Fixed-supply accounting**: the whole supply is credited to the
//!   deployer at construction and only ever moves between accounts
//! - **Explicit caller identity**: every mutating operation takes the
//!   acting account as a parameter
//! - **Delegated spending**: owner-to-spender allowances with
//!   overwrite-on-approve semantics
//! - **Event notification**: transfers and approvals are delivered to
//!   an [`EventSink`] injected at construction
//! - **Serialized shared access**: `SharedLedger` wraps the ledger in
//!   a single lock for concurrent callers
//!
//! ## Quick Start
//!
//! ```rust
//! use token_ledger::{AccountId, NullSink, TokenLedger};
//!
//! let alice = AccountId::new();
//! let bob = AccountId::new();
//!
//! let mut ledger = TokenLedger::new(100, alice, NullSink);
//! assert!(ledger.transfer(alice, bob, 40));
//! assert_eq!(ledger.balance_of(&bob), 40);
//! ```

pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use ledger::*;
pub use traits::*;
pub use types::*;
