//! Canary (order-smoke) probe records.
//!
//! These records are written by an external executor that performs a
//! round-trip create-then-cancel order probe. They are read-only to this
//! crate and deliberately lenient to deserialize: the writer may be an
//! older version, may have crashed mid-run, or may omit fields entirely.
//! A missing field is the documented default, never a parse failure.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One failed order-related call, as recorded by the probe executor.
///
/// Append-only within one canary run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Failure kind as tagged by the writer (e.g. "EXCEPTION", "FATAL").
    #[serde(default)]
    pub kind: String,
    /// Operation that failed (e.g. "place_limit_order").
    #[serde(default)]
    pub op: String,
    /// Free-text error message from the exchange or transport.
    #[serde(default)]
    pub message: String,
    /// Numeric error code when the writer had one (HTTP status or venue code).
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub code: Option<i64>,
}

/// Pass/fail counts for one canary run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanarySummary {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub total: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub ok: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub ng: i64,
}

impl CanarySummary {
    /// Failure count, reconstructed from `total - ok` when the writer left
    /// `ng` unset. `total == ok + ng` is expected but not trusted.
    pub fn effective_ng(&self) -> i64 {
        if self.ng != 0 {
            self.ng
        } else {
            (self.total - self.ok).max(0)
        }
    }
}

/// The most recent canary probe result for one exchange.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanaryResult {
    /// Probe start time in epoch milliseconds. Zero when missing or
    /// malformed, which always fails the freshness check downstream.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub ts: i64,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub live: bool,
    #[serde(default)]
    pub summary: CanarySummary,
    /// Ordered as they occurred; order matters for reason selection.
    #[serde(default)]
    pub errors: Vec<ErrorRecord>,
    #[serde(default)]
    pub notes: Vec<String>,
    /// Probe end time, when the run completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_ts: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<i64>,
}

/// Accept integers, floats, and numeric strings; anything else maps to 0.
fn lenient_i64<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_i64(&value).unwrap_or(0))
}

/// Accept integers, floats, and numeric strings; anything else maps to None.
fn lenient_opt_i64<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_i64(&value))
}

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
