//! `atm-auth` — card authentication policy.
//!
//! This crate is intentionally decoupled from the account directory: it holds
//! the lockout rule as a value and the session a caller keeps after a
//! successful authentication.

pub mod lockout;
pub mod session;

pub use lockout::{LockoutDecision, LockoutPolicy};
pub use session::Session;
