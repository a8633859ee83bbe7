//! The persisted per-cycle risk snapshot.

use crate::canary::CanaryResult;
use crate::gate::GateVerdict;
use crate::regime::RegimeResult;
use serde::{Deserialize, Serialize};

/// The top-level record written once per evaluation cycle.
///
/// Immutable after construction. Each cycle fully overwrites the prior
/// snapshot; no history is retained by the gate itself. This is the sole
/// interface executors use to decide whether to submit orders and at what
/// size multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSnapshot {
    /// Assembly time in epoch milliseconds.
    pub ts: i64,
    pub regime: RegimeResult,
    pub exec_gate: GateVerdict,
    /// The raw canary record the gate was derived from, when one existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canary: Option<CanaryResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regime::MarketTier;
    use rust_decimal_macros::dec;

    #[test]
    fn test_snapshot_serializes_without_absent_canary() {
        let snapshot = RiskSnapshot {
            ts: 1_700_000_000_000,
            regime: RegimeResult {
                abs_daily_return_pct: dec!(0),
                bb_width_pct: dec!(0.02),
                breadth_oversold: 0,
                breadth_total: 0,
                breadth_ratio: dec!(0),
                market: MarketTier::Normal,
                size_multiplier: dec!(1.0),
            },
            exec_gate: GateVerdict::stop("no_smoke_result"),
            canary: None,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("canary").is_none());
        assert_eq!(json["exec_gate"]["action"], "STOP");
        assert_eq!(json["regime"]["market"], "normal");
    }
}
