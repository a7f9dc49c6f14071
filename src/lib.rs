//! Live password strength hints and submit-time validation
//!
//! This library drives a password field: while the user types it derives
//! five conditions and a strength level for the hint panel, and on submit
//! it runs a stricter rule chain that either accepts the password or lists
//! every violated rule.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced hint feed with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_hint::{FocusTarget, PasswordForm};
//!
//! struct Field;
//! impl FocusTarget for Field {
//!     fn focus(&mut self) {}
//! }
//!
//! let mut form = PasswordForm::new();
//! form.on_focus();
//! form.on_change("password".to_string());
//!
//! let hint = form.hint().expect("hint is shown while focused");
//! assert_eq!(hint.label, "Weak password");
//!
//! let outcome = form.on_submit(&mut Field);
//! assert!(!outcome.is_accepted());
//! assert_eq!(form.errors().len(), 3);
//! ```

// Internal modules
mod conditions;
mod error;
mod form;
mod hint;
mod sections;
mod strength;
mod validator;

// Public API
pub use conditions::{evaluate_conditions, ConditionStatus};
pub use error::RuleViolation;
pub use form::{ErrorReporting, FocusTarget, PasswordForm};
pub use hint::{build_hint, ConditionMark, Hint};
pub use sections::{MIN_LENGTH, SYMBOLS};
pub use strength::{
    score, strength_label, Segment, StrengthLevel, StrengthMeter, MAX_LEVEL, METER_SEGMENTS,
};
pub use validator::{validate_password, ValidationOutcome};

#[cfg(feature = "async")]
pub use hint::evaluate_hint_tx;
