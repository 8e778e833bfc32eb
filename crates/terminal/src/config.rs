//! Terminal configuration.

use serde::{Deserialize, Serialize};

use atm_auth::LockoutPolicy;
use atm_core::{DomainError, DomainResult};

/// Environment variable overriding [`TerminalConfig::lockout_threshold`].
pub const LOCKOUT_THRESHOLD_ENV: &str = "ATM_LOCKOUT_THRESHOLD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Failed attempts a card may accumulate before the next mismatch locks it.
    pub lockout_threshold: u32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            lockout_threshold: LockoutPolicy::DEFAULT_THRESHOLD,
        }
    }
}

impl TerminalConfig {
    /// Defaults, overridden by `ATM_LOCKOUT_THRESHOLD` when set.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(LOCKOUT_THRESHOLD_ENV) {
            config.lockout_threshold = raw.trim().parse().map_err(|e| {
                DomainError::validation(format!("{LOCKOUT_THRESHOLD_ENV}={raw:?}: {e}"))
            })?;
        }
        Ok(config)
    }

    pub fn lockout_policy(&self) -> LockoutPolicy {
        LockoutPolicy::new(self.lockout_threshold)
    }
}
