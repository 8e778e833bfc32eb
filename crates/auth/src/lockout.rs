use serde::{Deserialize, Serialize};

/// What to do with a card after a PIN mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockoutDecision {
    /// The threshold has been reached: lock the card.
    Lock,
    /// Record one more failed attempt.
    Increment,
}

/// Bounded-attempt lockout rule.
///
/// A mismatch on a card whose failed-attempt counter has already reached
/// `threshold` locks the card; any earlier mismatch only increments the
/// counter. With the default threshold of 2 the third consecutive wrong PIN
/// locks the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockoutPolicy {
    threshold: u32,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl LockoutPolicy {
    pub const DEFAULT_THRESHOLD: u32 = 2;

    pub const fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    pub const fn threshold(self) -> u32 {
        self.threshold
    }

    pub fn on_mismatch(self, failed_attempts: u32) -> LockoutDecision {
        if failed_attempts >= self.threshold {
            LockoutDecision::Lock
        } else {
            LockoutDecision::Increment
        }
    }

    /// Attempts left before the next mismatch locks the card.
    pub fn attempts_remaining(self, failed_attempts: u32) -> u32 {
        self.threshold.saturating_sub(failed_attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_policy_locks_on_third_mismatch() {
        let policy = LockoutPolicy::default();
        assert_eq!(policy.on_mismatch(0), LockoutDecision::Increment);
        assert_eq!(policy.on_mismatch(1), LockoutDecision::Increment);
        assert_eq!(policy.on_mismatch(2), LockoutDecision::Lock);
        assert_eq!(policy.on_mismatch(3), LockoutDecision::Lock);
    }

    #[test]
    fn remaining_attempts_count_down_to_zero() {
        let policy = LockoutPolicy::default();
        assert_eq!(policy.attempts_remaining(1), 1);
        assert_eq!(policy.attempts_remaining(2), 0);
        assert_eq!(policy.attempts_remaining(7), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the decision flips to Lock exactly at the threshold.
        #[test]
        fn lock_exactly_from_threshold(threshold in 0u32..20, attempts in 0u32..40) {
            let policy = LockoutPolicy::new(threshold);
            let expected = if attempts >= threshold {
                LockoutDecision::Lock
            } else {
                LockoutDecision::Increment
            };
            prop_assert_eq!(policy.on_mismatch(attempts), expected);
        }
    }
}
