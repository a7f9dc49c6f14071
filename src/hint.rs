//! Hint panel data - label, meter and condition marks for the latest input.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::conditions::{evaluate_conditions, ConditionStatus};
use crate::strength::{score, StrengthLevel, StrengthMeter};

/// A checklist line under the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionMark {
    pub label: &'static str,
    pub met: bool,
}

/// Everything the hint panel shows for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub conditions: ConditionStatus,
    pub level: StrengthLevel,
    pub label: &'static str,
    pub meter: StrengthMeter,
    pub marks: [ConditionMark; 3],
}

impl Hint {
    pub fn from_conditions(conditions: &ConditionStatus) -> Self {
        let level = score(conditions);
        Self {
            conditions: *conditions,
            level,
            label: level.label(),
            meter: level.meter(),
            marks: [
                ConditionMark {
                    label: "Upper & lower case letters",
                    met: conditions.has_upper && conditions.has_lower,
                },
                ConditionMark {
                    label: "Symbol characters",
                    met: conditions.has_symbol,
                },
                ConditionMark {
                    label: "Number characters",
                    met: conditions.has_number,
                },
            ],
        }
    }
}

/// Builds the hint for a password.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// `None` only if the token was cancelled before evaluation.
pub fn build_hint(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Option<Hint> {
    #[cfg(feature = "async")]
    {
        if let Some(ref t) = token {
            if t.is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!("Hint evaluation cancelled");
                return None;
            }
        }
    }

    Some(Hint::from_conditions(&evaluate_conditions(password)))
}

/// Debounced hint feed: waits for typing to settle, then sends the hint.
///
/// Cancel `token` when a newer keystroke arrives so only the latest
/// candidate reaches the receiver.
#[cfg(feature = "async")]
pub async fn evaluate_hint_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Hint>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::debug!("hint evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let Some(hint) = build_hint(password, Some(token)) else {
        return;
    };

    if let Err(e) = tx.send(hint).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password hint: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
