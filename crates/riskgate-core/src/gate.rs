//! Execution gate verdicts.

use serde::{Deserialize, Serialize};

/// What the external executor should do next.
///
/// `Kill` is the only action that requires manual intervention before any
/// further automated cycle may re-enable `Proceed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateAction {
    /// Auth/contract failure. Freeze until a human intervenes.
    Kill,
    /// Transient failure. Safe to retry after a delay.
    Retry,
    /// Environment block or unknown state. Do not trade this cycle.
    Stop,
    /// Probe passed and is fresh. Orders may be submitted.
    Proceed,
}

/// The authorization verdict for one evaluation cycle.
///
/// Never persisted independently of the parent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateVerdict {
    pub action: GateAction,
    /// True iff `action == Proceed`.
    pub allow_orders: bool,
    /// Machine-readable reason, e.g. `smoke_ok` or `smoke_failed:1/2`.
    pub reason: String,
    /// Hint for Retry verdicts; zero otherwise.
    pub retry_after_sec: u32,
}

impl GateVerdict {
    pub fn kill(reason: impl Into<String>) -> Self {
        Self {
            action: GateAction::Kill,
            allow_orders: false,
            reason: reason.into(),
            retry_after_sec: 0,
        }
    }

    pub fn retry(reason: impl Into<String>, retry_after_sec: u32) -> Self {
        Self {
            action: GateAction::Retry,
            allow_orders: false,
            reason: reason.into(),
            retry_after_sec,
        }
    }

    pub fn stop(reason: impl Into<String>) -> Self {
        Self {
            action: GateAction::Stop,
            allow_orders: false,
            reason: reason.into(),
            retry_after_sec: 0,
        }
    }

    pub fn proceed(reason: impl Into<String>) -> Self {
        Self {
            action: GateAction::Proceed,
            allow_orders: true,
            reason: reason.into(),
            retry_after_sec: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_orders_only_on_proceed() {
        assert!(!GateVerdict::kill("x").allow_orders);
        assert!(!GateVerdict::retry("x", 60).allow_orders);
        assert!(!GateVerdict::stop("x").allow_orders);
        assert!(GateVerdict::proceed("smoke_ok").allow_orders);
    }

    #[test]
    fn test_action_serializes_uppercase() {
        let verdict = GateVerdict::stop("no_smoke_result");
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["action"], "STOP");
        assert_eq!(json["allow_orders"], false);
        assert_eq!(json["retry_after_sec"], 0);
    }

    #[test]
    fn test_retry_carries_hint() {
        let verdict = GateVerdict::retry("transient_error:429:rate limit", 60);
        assert_eq!(verdict.retry_after_sec, 60);
    }
}
