use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atm_core::{CardId, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// Confirmation of an accepted deposit or withdrawal.
///
/// Returned to the caller for display only; nothing keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub card_id: CardId,
    pub kind: TransactionKind,
    pub amount: Money,
    pub occurred_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(card_id: CardId, kind: TransactionKind, amount: Money) -> Self {
        Self {
            card_id,
            kind,
            amount,
            occurred_at: Utc::now(),
        }
    }
}

impl core::fmt::Display for Receipt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            TransactionKind::Deposit => {
                write!(f, "Deposited {} to account {}", self.amount, self.card_id)
            }
            TransactionKind::Withdrawal => {
                write!(f, "Withdrawn {} from account {}", self.amount, self.card_id)
            }
        }
    }
}
