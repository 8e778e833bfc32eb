use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atm_core::CardId;

/// Proof that a card/PIN pair was accepted.
///
/// Held by the caller; the terminal keeps no copy and the directory never
/// sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    card_id: CardId,
    authenticated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(card_id: CardId, authenticated_at: DateTime<Utc>) -> Self {
        Self {
            card_id,
            authenticated_at,
        }
    }

    pub fn card_id(&self) -> CardId {
        self.card_id
    }

    pub fn authenticated_at(&self) -> DateTime<Utc> {
        self.authenticated_at
    }
}
