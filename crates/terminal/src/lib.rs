//! `atm-terminal` — the teller terminal.
//!
//! Authenticates card/PIN pairs against an [`AccountDirectory`] under a
//! bounded-attempt lockout policy, then validates balance inquiries, deposits
//! and withdrawals before forwarding them to the directory.
//!
//! No console, no menu, no persistence: a front end translates user input
//! into calls on [`Terminal`] and renders the results.

pub mod config;
pub mod error;
pub mod receipt;
pub mod terminal;

pub use atm_directory::AccountDirectory;
pub use config::TerminalConfig;
pub use error::{TerminalError, TerminalResult};
pub use receipt::{Receipt, TransactionKind};
pub use terminal::Terminal;
