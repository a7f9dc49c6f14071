//! Password form state - keeps the candidate, its conditions, focus and errors in sync.

use secrecy::{ExposeSecret, SecretString};

use crate::conditions::{evaluate_conditions, ConditionStatus};
use crate::hint::Hint;
use crate::sections::code_units;
use crate::strength::{score, StrengthLevel};
use crate::validator::{validate_password, ValidationOutcome};

/// Whoever owns input focus. Asked to refocus the field on a rejected submit.
pub trait FocusTarget {
    fn focus(&mut self);
}

/// Whether rejected submissions publish their messages to [`PasswordForm::errors`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorReporting {
    #[default]
    Publish,
    /// Keep the error list empty; a rejected submit only moves focus.
    Suppress,
}

/// State holder for a single password field.
///
/// Each UI event has one entry point; the condition record is recomputed in
/// full on every change so it always matches the current candidate.
#[derive(Debug)]
pub struct PasswordForm {
    candidate: SecretString,
    conditions: ConditionStatus,
    focused: bool,
    errors: Vec<String>,
    reporting: ErrorReporting,
}

impl Default for PasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordForm {
    pub fn new() -> Self {
        Self {
            candidate: SecretString::new(String::new().into()),
            conditions: ConditionStatus::default(),
            focused: false,
            errors: Vec::new(),
            reporting: ErrorReporting::default(),
        }
    }

    pub fn with_error_reporting(mut self, reporting: ErrorReporting) -> Self {
        self.reporting = reporting;
        self
    }

    /// Value-changed event: replaces the candidate and re-evaluates.
    pub fn on_change(&mut self, value: String) {
        self.candidate = SecretString::new(value.into());
        self.conditions = evaluate_conditions(&self.candidate);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            "Candidate changed: {} of 5 conditions met",
            self.conditions.met_count()
        );
    }

    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    pub fn on_blur(&mut self) {
        self.focused = false;
    }

    /// Submit event: validates the current candidate.
    ///
    /// On rejection `focus` is asked to refocus the field and, unless
    /// reporting is suppressed, the messages become the visible error list.
    /// On acceptance the error list is cleared; the candidate is left in
    /// place for the caller to hand on.
    pub fn on_submit<F: FocusTarget + ?Sized>(&mut self, focus: &mut F) -> ValidationOutcome {
        let outcome = validate_password(&self.candidate);

        match &outcome {
            ValidationOutcome::Accepted => {
                #[cfg(feature = "tracing")]
                tracing::info!("Password submission accepted");
                self.errors.clear();
            }
            ValidationOutcome::Rejected(_) => {
                focus.focus();
                if self.reporting == ErrorReporting::Publish {
                    self.errors = outcome.messages();
                }
            }
        }

        outcome
    }

    pub fn candidate(&self) -> &SecretString {
        &self.candidate
    }

    pub fn conditions(&self) -> ConditionStatus {
        self.conditions
    }

    pub fn strength(&self) -> StrengthLevel {
        score(&self.conditions)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Messages from the last rejected submit, in chain order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Hint panel contents, visible only while the field has focus.
    pub fn hint(&self) -> Option<Hint> {
        self.focused.then(|| Hint::from_conditions(&self.conditions))
    }

    /// Length of the current candidate in UTF-16 code units.
    pub fn candidate_len(&self) -> usize {
        code_units(self.candidate.expose_secret())
    }
}
