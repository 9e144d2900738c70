//! Ledger module containing balance, allowance, and transfer logic

pub mod account;
pub mod allowance;
pub mod core;

pub use account::*;
pub use allowance::*;
pub use self::core::*;
