use std::sync::Arc;

use atm_core::{CardId, DomainError, Money};
use thiserror::Error;

use crate::account::Account;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Account directory operation error.
///
/// These are **collaborator errors** (unknown records, refused mutations,
/// unavailable backend) as opposed to the terminal's validation failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("no account for card {0}")]
    UnknownCard(CardId),

    #[error("an account for card {0} already exists")]
    DuplicateCard(CardId),

    #[error("directory rejected the operation: {0}")]
    Rejected(#[from] DomainError),

    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

/// Store of account records keyed by card id.
///
/// The directory is the **only** owner of account state. Callers read through
/// it and request mutations through it; they never hold a mutable copy of a
/// record.
///
/// ## Operation semantics
///
/// - `lookup` returns `Ok(None)` for an unknown card; every other per-card
///   operation fails with [`DirectoryError::UnknownCard`] instead.
/// - `lock` is idempotent.
/// - `increment_failed_attempts` adds exactly one.
/// - `deposit`/`withdraw` apply the amount as given; validation of the amount
///   is the caller's job, but implementations must keep balances non-negative.
pub trait AccountDirectory: Send + Sync {
    fn lookup(&self, card_id: CardId) -> DirectoryResult<Option<Account>>;

    fn is_locked(&self, card_id: CardId) -> DirectoryResult<bool>;

    fn lock(&self, card_id: CardId) -> DirectoryResult<()>;

    fn failed_attempts(&self, card_id: CardId) -> DirectoryResult<u32>;

    fn increment_failed_attempts(&self, card_id: CardId) -> DirectoryResult<()>;

    fn balance(&self, card_id: CardId) -> DirectoryResult<Money>;

    fn deposit(&self, card_id: CardId, amount: Money) -> DirectoryResult<()>;

    fn withdraw(&self, card_id: CardId, amount: Money) -> DirectoryResult<()>;

    /// Human-readable label of the backing directory (e.g. the bank's name).
    fn name(&self) -> &str;
}

macro_rules! forward_account_directory {
    ($($ptr:tt)*) => {
        fn lookup(&self, card_id: CardId) -> DirectoryResult<Option<Account>> {
            ($($ptr)* self).lookup(card_id)
        }

        fn is_locked(&self, card_id: CardId) -> DirectoryResult<bool> {
            ($($ptr)* self).is_locked(card_id)
        }

        fn lock(&self, card_id: CardId) -> DirectoryResult<()> {
            ($($ptr)* self).lock(card_id)
        }

        fn failed_attempts(&self, card_id: CardId) -> DirectoryResult<u32> {
            ($($ptr)* self).failed_attempts(card_id)
        }

        fn increment_failed_attempts(&self, card_id: CardId) -> DirectoryResult<()> {
            ($($ptr)* self).increment_failed_attempts(card_id)
        }

        fn balance(&self, card_id: CardId) -> DirectoryResult<Money> {
            ($($ptr)* self).balance(card_id)
        }

        fn deposit(&self, card_id: CardId, amount: Money) -> DirectoryResult<()> {
            ($($ptr)* self).deposit(card_id, amount)
        }

        fn withdraw(&self, card_id: CardId, amount: Money) -> DirectoryResult<()> {
            ($($ptr)* self).withdraw(card_id, amount)
        }

        fn name(&self) -> &str {
            ($($ptr)* self).name()
        }
    };
}

impl<D> AccountDirectory for Arc<D>
where
    D: AccountDirectory + ?Sized,
{
    forward_account_directory!(**);
}

impl<D> AccountDirectory for &D
where
    D: AccountDirectory + ?Sized,
{
    forward_account_directory!(**);
}
