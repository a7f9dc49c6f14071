//! Submission validator - runs the full rule chain at submit time.

use secrecy::SecretString;

use crate::error::RuleViolation;
use crate::sections::{
    length_section, lowercase_section, number_section, symbol_section, uppercase_section,
    SectionResult,
};

/// Result of validating a candidate on submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    /// Every failed rule, in chain order.
    Rejected(Vec<RuleViolation>),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }

    /// Violations in chain order; empty when accepted.
    pub fn violations(&self) -> &[RuleViolation] {
        match self {
            ValidationOutcome::Accepted => &[],
            ValidationOutcome::Rejected(violations) => violations,
        }
    }

    /// User-facing messages in chain order; empty when accepted.
    pub fn messages(&self) -> Vec<String> {
        self.violations().iter().map(RuleViolation::message).collect()
    }
}

/// Validates a password against the submission chain.
///
/// Every section runs, even after a failure, so the outcome lists all
/// violations: length, lowercase, uppercase, number, symbol.
pub fn validate_password(password: &SecretString) -> ValidationOutcome {
    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionResult); 5] = [
        ("length", length_section),
        ("lowercase", lowercase_section),
        ("uppercase", uppercase_section),
        ("number", number_section),
        ("symbol", symbol_section),
    ];

    let mut violations = Vec::new();
    for (_section_name, section_fn) in sections {
        if let Err(violation) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Validation section failed: {}", _section_name);
            violations.push(violation);
        }
    }

    if violations.is_empty() {
        ValidationOutcome::Accepted
    } else {
        #[cfg(feature = "tracing")]
        tracing::info!("Password rejected with {} violation(s)", violations.len());
        ValidationOutcome::Rejected(violations)
    }
}
