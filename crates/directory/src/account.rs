use atm_core::{CardId, DomainError, Entity, Money, Pin};

/// Account record owned by an [`AccountDirectory`](crate::AccountDirectory).
///
/// # Invariants
/// - `pin` is immutable after creation.
/// - `locked` only ever goes from `false` to `true`.
/// - `balance` is never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    card_id: CardId,
    pin: Pin,
    locked: bool,
    balance: Money,
    failed_attempts: u32,
}

impl Account {
    /// Open an unlocked account with no failed attempts.
    pub fn new(card_id: CardId, pin: Pin, balance: Money) -> Result<Self, DomainError> {
        if balance.is_negative() {
            return Err(DomainError::validation("opening balance must not be negative"));
        }

        Ok(Self {
            card_id,
            pin,
            locked: false,
            balance,
            failed_attempts: 0,
        })
    }

    pub fn card_id(&self) -> CardId {
        self.card_id
    }

    pub fn pin(&self) -> &Pin {
        &self.pin
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Mark the card locked. Idempotent; there is no way back.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn record_failed_attempt(&mut self) {
        self.failed_attempts = self.failed_attempts.saturating_add(1);
    }

    pub fn credit(&mut self, amount: Money) -> Result<(), DomainError> {
        self.balance = self.balance.checked_add(amount)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: Money) -> Result<(), DomainError> {
        let next = self.balance.checked_sub(amount)?;
        if next.is_negative() {
            return Err(DomainError::invariant(format!(
                "balance {} cannot cover {amount}",
                self.balance
            )));
        }
        self.balance = next;
        Ok(())
    }
}

impl Entity for Account {
    type Id = CardId;

    fn id(&self) -> &Self::Id {
        &self.card_id
    }
}
