//! Terminal error model.

use thiserror::Error;

use atm_core::{CardId, DomainError, Money};
use atm_directory::DirectoryError;

pub type TerminalResult<T> = Result<T, TerminalError>;

/// Every way a terminal request can fail.
///
/// Variants carry structured data so front ends branch on the kind (and read
/// e.g. the remaining attempts) instead of parsing the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TerminalError {
    /// Malformed PIN (wrong length or a negative digit).
    #[error("invalid input: {0}")]
    InvalidInput(DomainError),

    #[error("account not found for card {0}")]
    AccountNotFound(CardId),

    /// Authentication attempted against a locked card.
    #[error("card {0} is locked")]
    AccountLocked(CardId),

    /// PIN mismatch; the card is still usable.
    #[error("incorrect PIN, attempts left: {attempts_remaining}")]
    InvalidPin { attempts_remaining: u32 },

    /// PIN mismatch that locked the card.
    #[error("card {0} is locked due to too many failed attempts")]
    TooManyAttempts(CardId),

    /// Non-positive deposit or withdrawal amount.
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Money),

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// The account directory failed or refused the request.
    #[error("account directory error: {0}")]
    Directory(#[from] DirectoryError),
}
