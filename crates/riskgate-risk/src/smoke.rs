//! Canary-probe ingestion and the execution gate decision.
//!
//! Fail-closed: an absent or stale probe record is never treated as safe.
//! The unknown state maps to STOP, not PROCEED.

use crate::taxonomy::matches_tier;
use riskgate_core::{CanaryResult, ErrorRecord, GateAction, GateVerdict};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reason strings longer than this are truncated in the verdict.
const REASON_MESSAGE_MAX_CHARS: usize = 120;

/// Retry hint attached to transient-error verdicts.
const RETRY_AFTER_SEC: u32 = 60;

/// Smoke gate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokeGateConfig {
    /// Maximum probe age in seconds before it is treated as absent.
    #[serde(default = "default_ttl_sec")]
    pub ttl_sec: u64,
}

fn default_ttl_sec() -> u64 {
    300 // 5 minutes
}

impl Default for SmokeGateConfig {
    fn default() -> Self {
        Self {
            ttl_sec: default_ttl_sec(),
        }
    }
}

/// The execution gate.
///
/// Combines probe freshness, the error taxonomy, and aggregate pass/fail
/// counts into one authorization verdict.
pub struct SmokeGate {
    config: SmokeGateConfig,
}

impl SmokeGate {
    pub fn new(config: SmokeGateConfig) -> Self {
        Self { config }
    }

    /// Validate presence and freshness of the probe record.
    ///
    /// The returned `Err` is itself a fully-formed STOP verdict, not an
    /// abort: the cycle still produces a snapshot carrying it.
    pub fn validate<'a>(
        &self,
        smoke: Option<&'a CanaryResult>,
        now_ms: i64,
    ) -> Result<&'a CanaryResult, GateVerdict> {
        let smoke = match smoke {
            Some(s) => s,
            None => return Err(GateVerdict::stop("no_smoke_result")),
        };

        let ttl_ms = self.config.ttl_sec as i64 * 1000;
        if smoke.ts <= 0 || now_ms - smoke.ts > ttl_ms {
            debug!(ts = smoke.ts, now_ms, ttl_sec = self.config.ttl_sec, "stale smoke record");
            return Err(GateVerdict::stop(format!(
                "smoke_stale(ttl={}s)",
                self.config.ttl_sec
            )));
        }

        Ok(smoke)
    }

    /// Decide the gate verdict for the given probe record.
    ///
    /// Severity tiers are checked exhaustively across all records before
    /// falling through: a single KILL-classified record anywhere in the
    /// list overrides any number of earlier RETRY-classified ones. Within
    /// a tier, the first matching record supplies the reason string.
    pub fn decide(&self, smoke: Option<&CanaryResult>, now_ms: i64) -> GateVerdict {
        let smoke = match self.validate(smoke, now_ms) {
            Ok(s) => s,
            Err(verdict) => return verdict,
        };

        if let Some(rec) = first_match(&smoke.errors, GateAction::Kill) {
            return GateVerdict::kill(format!(
                "auth_or_contract_error:{}:{}",
                code_label(rec),
                truncated_message(rec)
            ));
        }

        if let Some(rec) = first_match(&smoke.errors, GateAction::Retry) {
            return GateVerdict::retry(
                format!(
                    "transient_error:{}:{}",
                    code_label(rec),
                    truncated_message(rec)
                ),
                RETRY_AFTER_SEC,
            );
        }

        if let Some(rec) = first_match(&smoke.errors, GateAction::Stop) {
            return GateVerdict::stop(format!("environment_block:{}", truncated_message(rec)));
        }

        let total = smoke.summary.total;
        let ok = smoke.summary.ok;
        if total > 0 && smoke.summary.effective_ng() > 0 {
            return GateVerdict::stop(format!("smoke_failed:{ok}/{total}"));
        }

        GateVerdict::proceed("smoke_ok")
    }
}

fn first_match(errors: &[ErrorRecord], action: GateAction) -> Option<&ErrorRecord> {
    errors.iter().find(|rec| matches_tier(rec, action))
}

fn code_label(rec: &ErrorRecord) -> String {
    match rec.code {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}

fn truncated_message(rec: &ErrorRecord) -> String {
    rec.message
        .to_lowercase()
        .chars()
        .take(REASON_MESSAGE_MAX_CHARS)
        .collect()
}
