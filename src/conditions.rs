//! Live condition evaluation - the five independent checks behind the hint.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{code_units, has_lower, has_number, has_symbol, has_upper, MIN_LENGTH};

/// The five conditions tracked while the user types.
///
/// Always computed in full from one candidate; never patched field by field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConditionStatus {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_number: bool,
    pub has_symbol: bool,
    pub has_min_length: bool,
}

impl ConditionStatus {
    /// Evaluates all conditions against a plain candidate string.
    pub fn of(candidate: &str) -> Self {
        Self {
            has_upper: has_upper(candidate),
            has_lower: has_lower(candidate),
            has_number: has_number(candidate),
            has_symbol: has_symbol(candidate),
            has_min_length: code_units(candidate) >= MIN_LENGTH,
        }
    }

    /// Conditions in declaration order.
    pub fn as_array(&self) -> [bool; 5] {
        [
            self.has_upper,
            self.has_lower,
            self.has_number,
            self.has_symbol,
            self.has_min_length,
        ]
    }

    /// Number of satisfied conditions, 0 to 5.
    pub fn met_count(&self) -> usize {
        self.as_array().iter().filter(|&&met| met).count()
    }
}

/// Evaluates the live conditions for a password.
///
/// Total over every input, including the empty string.
pub fn evaluate_conditions(password: &SecretString) -> ConditionStatus {
    ConditionStatus::of(password.expose_secret())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_conditions_empty() {
        let pwd = SecretString::new("".to_string().into());
        let status = evaluate_conditions(&pwd);
        assert_eq!(status, ConditionStatus::default());
        assert_eq!(status.met_count(), 0);
    }

    #[test]
    fn test_conditions_all_met() {
        let pwd = SecretString::new("Pass1!".to_string().into());
        let status = evaluate_conditions(&pwd);
        assert_eq!(status.as_array(), [true; 5]);
        assert_eq!(status.met_count(), 5);
    }

    #[test]
    fn test_conditions_lowercase_word() {
        let status = ConditionStatus::of("password");
        assert_eq!(
            status,
            ConditionStatus {
                has_upper: false,
                has_lower: true,
                has_number: false,
                has_symbol: false,
                has_min_length: true,
            }
        );
    }

    #[test]
    fn test_conditions_no_alphabetic_characters() {
        let status = ConditionStatus::of("123456");
        assert!(status.has_number);
        assert!(status.has_min_length);
        assert!(!status.has_upper && !status.has_lower && !status.has_symbol);
    }

    #[test]
    fn test_min_length_threshold_up_to_10000() {
        let mut candidate = String::with_capacity(10_000);
        for len in 0..=10_000 {
            assert_eq!(ConditionStatus::of(&candidate).has_min_length, len >= 6);
            candidate.push('x');
        }
    }

    proptest! {
        #[test]
        fn evaluation_is_idempotent(candidate in any::<String>()) {
            prop_assert_eq!(ConditionStatus::of(&candidate), ConditionStatus::of(&candidate));
        }

        #[test]
        fn min_length_tracks_code_units(candidate in any::<String>()) {
            let status = ConditionStatus::of(&candidate);
            prop_assert_eq!(status.has_min_length, candidate.encode_utf16().count() >= 6);
        }

        #[test]
        fn met_count_never_exceeds_five(candidate in ".{0,64}") {
            prop_assert!(ConditionStatus::of(&candidate).met_count() <= 5);
        }
    }
}
