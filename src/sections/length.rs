//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::{code_units, SectionResult, MIN_LENGTH};
use crate::error::RuleViolation;

/// Checks if the password meets the minimum length.
///
/// # Returns
/// - `Err(RuleViolation::TooShort)` if password is too short
/// - `Ok(())` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if code_units(password.expose_secret()) < MIN_LENGTH {
        return Err(RuleViolation::TooShort);
    }
    Ok(())
}
