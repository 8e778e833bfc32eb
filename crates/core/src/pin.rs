//! Personal identification number.

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Number of digits in a PIN.
pub const PIN_LENGTH: usize = 4;

/// A validated 4-digit PIN.
///
/// Only constructible through [`Pin::new`], so a `Pin` always has exactly
/// [`PIN_LENGTH`] non-negative digits. `Debug` never prints the digits.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Pin([u32; PIN_LENGTH]);

impl Pin {
    /// Validate raw digits entered at the keypad.
    ///
    /// Fails with [`DomainError::Validation`] when the input does not have
    /// exactly four entries or any entry is negative.
    pub fn new(digits: &[i32]) -> DomainResult<Self> {
        if digits.len() != PIN_LENGTH {
            return Err(DomainError::validation(format!(
                "pin must have exactly {PIN_LENGTH} digits, got {}",
                digits.len()
            )));
        }

        let mut out = [0u32; PIN_LENGTH];
        for (slot, &digit) in out.iter_mut().zip(digits) {
            *slot = u32::try_from(digit)
                .map_err(|_| DomainError::validation("pin must not contain negative digits"))?;
        }

        Ok(Self(out))
    }

    /// Element-wise comparison of two PINs.
    pub fn matches(&self, other: &Pin) -> bool {
        self.0 == other.0
    }
}

impl ValueObject for Pin {}

impl core::fmt::Debug for Pin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Pin(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_four_non_negative_digits() {
        let pin = Pin::new(&[5, 6, 7, 8]).unwrap();
        assert!(pin.matches(&Pin::new(&[5, 6, 7, 8]).unwrap()));
        assert!(!pin.matches(&Pin::new(&[0, 0, 0, 0]).unwrap()));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(Pin::new(&[5, 6, 7, 8, 9]), Err(DomainError::Validation(_))));
        assert!(matches!(Pin::new(&[5, 6, 7]), Err(DomainError::Validation(_))));
        assert!(matches!(Pin::new(&[]), Err(DomainError::Validation(_))));
    }

    #[test]
    fn rejects_a_single_negative_digit() {
        let err = Pin::new(&[5, -6, 7, 8]).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("pin must not contain negative digits")
        );
    }

    #[test]
    fn debug_is_redacted() {
        let pin = Pin::new(&[1, 2, 3, 4]).unwrap();
        assert_eq!(format!("{pin:?}"), "Pin(****)");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: any input whose length is not 4 is rejected.
        #[test]
        fn wrong_length_is_always_rejected(
            digits in prop::collection::vec(0i32..10, 0..12)
                .prop_filter("length must differ from 4", |d| d.len() != PIN_LENGTH)
        ) {
            prop_assert!(Pin::new(&digits).is_err());
        }

        /// Property: a 4-entry input with any negative entry is rejected.
        #[test]
        fn negative_entry_is_always_rejected(
            mut digits in prop::array::uniform4(0i32..10),
            index in 0usize..PIN_LENGTH,
            negative in i32::MIN..0,
        ) {
            digits[index] = negative;
            prop_assert!(Pin::new(&digits).is_err());
        }
    }
}
