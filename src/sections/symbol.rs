//! Symbol section - checks for a character from the symbol set.

use secrecy::{ExposeSecret, SecretString};
use super::{has_symbol, SectionResult};
use crate::error::RuleViolation;

/// Checks if the password contains at least one symbol from [`super::SYMBOLS`].
///
/// # Returns
/// - `Err(RuleViolation::MissingSymbol)` if no symbol is present
/// - `Ok(())` otherwise
pub fn symbol_section(password: &SecretString) -> SectionResult {
    if !has_symbol(password.expose_secret()) {
        return Err(RuleViolation::MissingSymbol);
    }
    Ok(())
}
