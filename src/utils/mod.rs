//! Utility modules

pub mod capture;
pub mod shared;

pub use capture::*;
pub use shared::*;
