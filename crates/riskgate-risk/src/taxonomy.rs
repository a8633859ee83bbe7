//! Error taxonomy: map raw probe errors to gate severities.
//!
//! The classification is an ordered table of `(severity, markers, codes)`
//! evaluated first-match-wins, KILL before RETRY before STOP, regardless of
//! where a record sits in the input list. Auth/contract failures are
//! irreversible without human intervention and must never be downgraded to
//! a transient retry even when the same message also contains a retry-like
//! word. That precedence is a safety invariant.

use riskgate_core::{ErrorRecord, GateAction};

/// Auth/signature/contract failures. Human intervention required.
const KILL_MARKERS: &[&str] = &[
    "invalid api key",
    "signature",
    "timestamp",
    "unauthorized",
    "permission",
];
const KILL_CODES: &[i64] = &[401, 403];

/// Transient failures: rate limits, 5xx, timeouts.
const RETRY_MARKERS: &[&str] = &[
    "timeout",
    "rate limit",
    "too many requests",
    "temporarily",
    "overloaded",
];
const RETRY_CODES: &[i64] = &[429, 500, 502, 503, 504];

/// Environment blocks: balance, margin mode, exchange maintenance.
const STOP_MARKERS: &[&str] = &[
    "insufficient",
    "balance",
    "margin",
    "close-only",
    "close only",
    "reduce only",
    "maintenance",
];
const STOP_CODES: &[i64] = &[];

/// Severity tiers in precedence order. KILL outranks RETRY outranks STOP.
const TIERS: &[(GateAction, &[&str], &[i64])] = &[
    (GateAction::Kill, KILL_MARKERS, KILL_CODES),
    (GateAction::Retry, RETRY_MARKERS, RETRY_CODES),
    (GateAction::Stop, STOP_MARKERS, STOP_CODES),
];

/// Classify one error record.
///
/// Returns `None` when no tier matches; the caller treats unmatched errors
/// as non-fatal. Matching is a case-insensitive substring check on the
/// message, or an exact numeric-code match.
pub fn classify_error(record: &ErrorRecord) -> Option<GateAction> {
    let message = record.message.to_lowercase();

    for &(action, markers, codes) in TIERS {
        if markers.iter().any(|m| message.contains(m)) {
            return Some(action);
        }
        if let Some(code) = record.code {
            if codes.contains(&code) {
                return Some(action);
            }
        }
    }
    None
}

/// Check whether a record matches one specific severity tier.
///
/// Used by the gate decision to scan all records exhaustively per tier
/// before falling through to the next one.
pub fn matches_tier(record: &ErrorRecord, action: GateAction) -> bool {
    classify_error(record) == Some(action)
}
