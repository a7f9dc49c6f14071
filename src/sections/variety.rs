//! Character variety sections - lowercase, uppercase and digit checks.

use secrecy::{ExposeSecret, SecretString};
use super::{has_lower, has_number, has_upper, SectionResult};
use crate::error::RuleViolation;

/// Checks that the password contains an ASCII lowercase letter.
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    if !has_lower(password.expose_secret()) {
        return Err(RuleViolation::MissingLowercase);
    }
    Ok(())
}

/// Checks that the password contains an ASCII uppercase letter.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if !has_upper(password.expose_secret()) {
        return Err(RuleViolation::MissingUppercase);
    }
    Ok(())
}

/// Checks that the password contains a decimal digit.
pub fn number_section(password: &SecretString) -> SectionResult {
    if !has_number(password.expose_secret()) {
        return Err(RuleViolation::MissingNumber);
    }
    Ok(())
}
