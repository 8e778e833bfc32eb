//! Account directory boundary.
//!
//! This crate defines the collaborator the terminal talks to: a store that
//! resolves card ids to account records and owns every mutation of those
//! records (lock flag, failed-attempt counter, balance). It makes no storage
//! assumptions; `InMemoryAccountDirectory` is the reference implementation.

pub mod account;
pub mod config;
pub mod directory;
pub mod in_memory;

pub use account::Account;
pub use config::DirectoryConfig;
pub use directory::{AccountDirectory, DirectoryError, DirectoryResult};
pub use in_memory::InMemoryAccountDirectory;
