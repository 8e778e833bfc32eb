//! Authentication and transaction validation.
//!
//! ```text
//! authenticate(card, pin)
//!   ↓
//! 1. pin shape (4 digits, none negative)      → InvalidInput
//! 2. directory lookup                         → AccountNotFound
//! 3. lock flag on the record                  → AccountLocked
//! 4. pin match                                → Session
//! 5. mismatch: read failed attempts
//!      ≥ threshold → lock                     → TooManyAttempts
//!      otherwise   → increment, re-read       → InvalidPin { attempts_remaining }
//! ```
//!
//! The terminal keeps no per-card state: counters and lock flags are read from
//! and written through the directory on every call.

use chrono::Utc;

use atm_auth::{LockoutDecision, LockoutPolicy, Session};
use atm_core::{CardId, Money, Pin};
use atm_directory::AccountDirectory;

use crate::config::TerminalConfig;
use crate::error::{TerminalError, TerminalResult};
use crate::receipt::{Receipt, TransactionKind};

/// Teller terminal bound to one account directory.
#[derive(Debug)]
pub struct Terminal<D> {
    directory: D,
    policy: LockoutPolicy,
}

impl<D> Terminal<D>
where
    D: AccountDirectory,
{
    pub fn new(directory: D) -> Self {
        Self::with_config(directory, &TerminalConfig::default())
    }

    pub fn with_config(directory: D, config: &TerminalConfig) -> Self {
        Self {
            directory,
            policy: config.lockout_policy(),
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn policy(&self) -> LockoutPolicy {
        self.policy
    }

    /// Label of the backing directory, for display.
    pub fn directory_name(&self) -> &str {
        self.directory.name()
    }

    /// Check a card/PIN pair.
    ///
    /// A successful authentication does not reset the card's failed-attempt
    /// counter.
    pub fn authenticate(&self, card_id: CardId, pin: &[i32]) -> TerminalResult<Session> {
        let pin = Pin::new(pin).map_err(|err| {
            tracing::debug!(card_id = %card_id, error = %err, "rejected malformed pin");
            TerminalError::InvalidInput(err)
        })?;

        let account = self
            .directory
            .lookup(card_id)?
            .ok_or(TerminalError::AccountNotFound(card_id))?;

        if account.is_locked() {
            tracing::warn!(card_id = %card_id, "authentication attempted on locked card");
            return Err(TerminalError::AccountLocked(card_id));
        }

        if account.pin().matches(&pin) {
            tracing::info!(card_id = %card_id, "card authenticated");
            return Ok(Session::new(card_id, Utc::now()));
        }

        Err(self.reject_pin(card_id)?)
    }

    /// Apply the lockout policy after a mismatch and build the error to report.
    fn reject_pin(&self, card_id: CardId) -> TerminalResult<TerminalError> {
        let failed_attempts = self.directory.failed_attempts(card_id)?;

        match self.policy.on_mismatch(failed_attempts) {
            LockoutDecision::Lock => {
                self.directory.lock(card_id)?;
                tracing::warn!(card_id = %card_id, failed_attempts, "card locked after too many failed attempts");
                Ok(TerminalError::TooManyAttempts(card_id))
            }
            LockoutDecision::Increment => {
                self.directory.increment_failed_attempts(card_id)?;
                let attempts_remaining = self
                    .policy
                    .attempts_remaining(self.directory.failed_attempts(card_id)?);
                tracing::warn!(card_id = %card_id, attempts_remaining, "incorrect pin");
                Ok(TerminalError::InvalidPin { attempts_remaining })
            }
        }
    }

    pub fn balance(&self, card_id: CardId) -> TerminalResult<Money> {
        Ok(self.directory.balance(card_id)?)
    }

    /// Credit `amount` to the card's account. Amounts must be strictly positive.
    pub fn deposit(&self, card_id: CardId, amount: Money) -> TerminalResult<Receipt> {
        if !amount.is_positive() {
            tracing::debug!(card_id = %card_id, %amount, "rejected non-positive deposit");
            return Err(TerminalError::InvalidAmount(amount));
        }

        self.directory.deposit(card_id, amount)?;
        tracing::info!(card_id = %card_id, %amount, "deposit accepted");
        Ok(Receipt::new(card_id, TransactionKind::Deposit, amount))
    }

    /// Debit `amount` from the card's account.
    ///
    /// The balance is read once. The funds check runs before the sign check.
    pub fn withdraw(&self, card_id: CardId, amount: Money) -> TerminalResult<Receipt> {
        let available = self.directory.balance(card_id)?;

        if amount > available {
            tracing::debug!(card_id = %card_id, %amount, %available, "rejected withdrawal over balance");
            return Err(TerminalError::InsufficientFunds {
                requested: amount,
                available,
            });
        }
        if !amount.is_positive() {
            tracing::debug!(card_id = %card_id, %amount, "rejected non-positive withdrawal");
            return Err(TerminalError::InvalidAmount(amount));
        }

        self.directory.withdraw(card_id, amount)?;
        tracing::info!(card_id = %card_id, %amount, "withdrawal accepted");
        Ok(Receipt::new(card_id, TransactionKind::Withdrawal, amount))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use atm_directory::{Account, InMemoryAccountDirectory};

    use super::*;

    const CARD: CardId = CardId::new(1234);
    const PIN: [i32; 4] = [5, 6, 7, 8];
    const WRONG: [i32; 4] = [0, 0, 0, 0];

    fn terminal_with(balance: i64) -> Terminal<Arc<InMemoryAccountDirectory>> {
        let account = Account::new(CARD, Pin::new(&PIN).unwrap(), Money::from_minor(balance)).unwrap();
        let directory = InMemoryAccountDirectory::new("Test Bank Name")
            .with_account(account)
            .unwrap();
        Terminal::new(Arc::new(directory))
    }

    #[test]
    fn three_wrong_pins_walk_the_lockout_state_machine() {
        let terminal = terminal_with(0);
        let dir = terminal.directory();

        assert_eq!(
            terminal.authenticate(CARD, &WRONG),
            Err(TerminalError::InvalidPin { attempts_remaining: 1 })
        );
        assert_eq!(dir.failed_attempts(CARD).unwrap(), 1);

        assert_eq!(
            terminal.authenticate(CARD, &WRONG),
            Err(TerminalError::InvalidPin { attempts_remaining: 0 })
        );
        assert_eq!(dir.failed_attempts(CARD).unwrap(), 2);

        assert_eq!(
            terminal.authenticate(CARD, &WRONG),
            Err(TerminalError::TooManyAttempts(CARD))
        );
        assert_eq!(dir.failed_attempts(CARD).unwrap(), 2);
        assert!(dir.is_locked(CARD).unwrap());

        // Locked is terminal, even for the right PIN.
        assert_eq!(
            terminal.authenticate(CARD, &PIN),
            Err(TerminalError::AccountLocked(CARD))
        );
    }

    #[test]
    fn correct_pin_after_a_miss_does_not_reset_counter() {
        let terminal = terminal_with(0);
        let _ = terminal.authenticate(CARD, &WRONG);

        let session = terminal.authenticate(CARD, &PIN).unwrap();
        assert_eq!(session.card_id(), CARD);
        assert_eq!(terminal.directory().failed_attempts(CARD).unwrap(), 1);
    }

    #[test]
    fn custom_threshold_allows_more_attempts() {
        let account = Account::new(CARD, Pin::new(&PIN).unwrap(), Money::ZERO).unwrap();
        let directory = InMemoryAccountDirectory::new("Test Bank Name")
            .with_account(account)
            .unwrap();
        let terminal = Terminal::with_config(directory, &TerminalConfig { lockout_threshold: 3 });

        for expected_remaining in [2, 1, 0] {
            assert_eq!(
                terminal.authenticate(CARD, &WRONG),
                Err(TerminalError::InvalidPin {
                    attempts_remaining: expected_remaining
                })
            );
        }
        assert_eq!(
            terminal.authenticate(CARD, &WRONG),
            Err(TerminalError::TooManyAttempts(CARD))
        );
    }

    #[test]
    fn deposit_then_withdraw_round_trips_balance() {
        let terminal = terminal_with(0);

        let receipt = terminal.deposit(CARD, Money::from_minor(15_000)).unwrap();
        assert_eq!(receipt.kind, TransactionKind::Deposit);
        assert_eq!(terminal.balance(CARD).unwrap(), Money::from_minor(15_000));

        let receipt = terminal.withdraw(CARD, Money::from_minor(15_000)).unwrap();
        assert_eq!(receipt.amount, Money::from_minor(15_000));
        assert_eq!(terminal.balance(CARD).unwrap(), Money::ZERO);
    }

    #[test]
    fn unknown_card_transactions_surface_directory_error() {
        let terminal = terminal_with(0);
        let unknown = CardId::new(42);
        assert!(matches!(
            terminal.balance(unknown),
            Err(TerminalError::Directory(_))
        ));
        assert!(matches!(
            terminal.deposit(unknown, Money::from_minor(1)),
            Err(TerminalError::Directory(_))
        ));
    }

    #[test]
    fn exposes_directory_name() {
        assert_eq!(terminal_with(0).directory_name(), "Test Bank Name");
    }
}
