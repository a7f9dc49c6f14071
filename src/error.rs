//! Rule violations reported by the submission validator.

use thiserror::Error;

use crate::sections::MIN_LENGTH;

/// A single failed submission rule.
///
/// The `Display` output is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleViolation {
    #[error("Password must be at least {} characters", MIN_LENGTH)]
    TooShort,
    #[error("Include lowercase letter")]
    MissingLowercase,
    #[error("Include uppercase letter")]
    MissingUppercase,
    #[error("Include number")]
    MissingNumber,
    #[error("Include symbol")]
    MissingSymbol,
}

impl RuleViolation {
    /// Returns the user-facing message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
