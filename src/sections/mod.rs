//! Submission validation sections
//!
//! Each section checks one rule of the submission chain. The character
//! predicates here are shared with the live condition evaluator so both
//! agree on what counts as an uppercase letter, a digit or a symbol.

mod length;
mod symbol;
mod variety;

pub use length::length_section;
pub use symbol::symbol_section;
pub use variety::{lowercase_section, number_section, uppercase_section};

use crate::error::RuleViolation;

/// Minimum candidate length, in UTF-16 code units.
pub const MIN_LENGTH: usize = 6;

/// Characters accepted as symbols.
pub const SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Result type for section check functions.
/// - `Ok(())` - Section passed
/// - `Err(violation)` - Section failed with the given rule violation
pub type SectionResult = Result<(), RuleViolation>;

/// Length as counted by the browser: UTF-16 code units, no normalization.
pub(crate) fn code_units(candidate: &str) -> usize {
    candidate.encode_utf16().count()
}

pub(crate) fn has_upper(candidate: &str) -> bool {
    candidate.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_lower(candidate: &str) -> bool {
    candidate.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_number(candidate: &str) -> bool {
    candidate.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn has_symbol(candidate: &str) -> bool {
    candidate.chars().any(|c| SYMBOLS.contains(c))
}
