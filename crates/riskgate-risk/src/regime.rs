//! Market-regime classification.
//!
//! Fuses three signals for a reference instrument: absolute daily return,
//! relative bid/ask spread width, and the breadth-oversold ratio. Any one
//! signal crossing its panic threshold forces the panic tier; the caution
//! thresholds work the same way one tier down.

use crate::error::{RiskError, RiskResult};
use riskgate_core::{MarketTier, RegimeResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Regime thresholds and per-tier size multipliers.
///
/// Immutable once constructed; defaults below are the documented contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeConfig {
    /// Absolute daily return (%) at or above which the market is panic.
    #[serde(default = "default_panic_ret")]
    pub panic_ret_pct: Decimal,
    /// Absolute daily return (%) at or above which the market is caution.
    #[serde(default = "default_caution_ret")]
    pub caution_ret_pct: Decimal,
    /// Spread width (%) panic threshold.
    #[serde(default = "default_panic_bb")]
    pub panic_bb_pct: Decimal,
    /// Spread width (%) caution threshold.
    #[serde(default = "default_caution_bb")]
    pub caution_bb_pct: Decimal,
    /// Breadth-oversold ratio panic threshold.
    #[serde(default = "default_panic_breadth")]
    pub panic_breadth: Decimal,
    /// Breadth-oversold ratio caution threshold.
    #[serde(default = "default_caution_breadth")]
    pub caution_breadth: Decimal,
    /// Size multiplier in the normal tier.
    #[serde(default = "default_size_normal")]
    pub size_normal: Decimal,
    /// Size multiplier in the caution tier.
    #[serde(default = "default_size_caution")]
    pub size_caution: Decimal,
    /// Size multiplier in the panic tier.
    #[serde(default = "default_size_panic")]
    pub size_panic: Decimal,
}

fn default_panic_ret() -> Decimal {
    Decimal::new(20, 1) // 2.0%
}
fn default_caution_ret() -> Decimal {
    Decimal::new(12, 1) // 1.2%
}
fn default_panic_bb() -> Decimal {
    Decimal::new(220, 1) // 22.0%
}
fn default_caution_bb() -> Decimal {
    Decimal::new(160, 1) // 16.0%
}
fn default_panic_breadth() -> Decimal {
    Decimal::new(40, 2) // 0.40
}
fn default_caution_breadth() -> Decimal {
    Decimal::new(25, 2) // 0.25
}
fn default_size_normal() -> Decimal {
    Decimal::ONE
}
fn default_size_caution() -> Decimal {
    Decimal::new(5, 1) // 0.5
}
fn default_size_panic() -> Decimal {
    Decimal::ZERO
}

impl Default for RegimeConfig {
    fn default() -> Self {
        Self {
            panic_ret_pct: default_panic_ret(),
            caution_ret_pct: default_caution_ret(),
            panic_bb_pct: default_panic_bb(),
            caution_bb_pct: default_caution_bb(),
            panic_breadth: default_panic_breadth(),
            caution_breadth: default_caution_breadth(),
            size_normal: default_size_normal(),
            size_caution: default_size_caution(),
            size_panic: default_size_panic(),
        }
    }
}

/// Market-regime classifier for one reference instrument.
pub struct RegimeClassifier {
    config: RegimeConfig,
}

impl RegimeClassifier {
    pub fn new(config: RegimeConfig) -> Self {
        Self { config }
    }

    /// Classify the market from a live quote, recent daily closes
    /// (ascending by time, possibly short), and breadth counts.
    ///
    /// A non-positive midpoint is a bad-quote fault, fatal to the cycle.
    /// Missing close history degrades the return signal to zero instead;
    /// its absence does not by itself imply danger.
    pub fn classify(
        &self,
        bid: Decimal,
        ask: Decimal,
        daily_closes: &[Decimal],
        breadth_oversold: u32,
        breadth_total: u32,
    ) -> RiskResult<RegimeResult> {
        let mid = (bid + ask) / Decimal::TWO;
        if mid <= Decimal::ZERO {
            return Err(RiskError::BadQuote { bid, ask, mid });
        }

        let hundred = Decimal::ONE_HUNDRED;
        let bb_width_pct = (ask - bid) / mid * hundred;

        // The last element is the still-forming daily candle; the previous
        // one is yesterday's close.
        let abs_daily_return_pct = match daily_closes.len().checked_sub(2) {
            Some(idx) if daily_closes[idx] > Decimal::ZERO => {
                let prev_close = daily_closes[idx];
                (mid - prev_close).abs() / prev_close * hundred
            }
            _ => {
                debug!(
                    closes = daily_closes.len(),
                    "insufficient daily history, return signal degraded to zero"
                );
                Decimal::ZERO
            }
        };

        let breadth_ratio = if breadth_total > 0 {
            Decimal::from(breadth_oversold) / Decimal::from(breadth_total)
        } else {
            Decimal::ZERO
        };

        // Thresholds compare the unrounded metrics; rounding below is for
        // the persisted record only.
        let c = &self.config;
        let market = if abs_daily_return_pct >= c.panic_ret_pct
            || bb_width_pct >= c.panic_bb_pct
            || breadth_ratio >= c.panic_breadth
        {
            MarketTier::Panic
        } else if abs_daily_return_pct >= c.caution_ret_pct
            || bb_width_pct >= c.caution_bb_pct
            || breadth_ratio >= c.caution_breadth
        {
            MarketTier::Caution
        } else {
            MarketTier::Normal
        };

        let size_multiplier = match market {
            MarketTier::Normal => c.size_normal,
            MarketTier::Caution => c.size_caution,
            MarketTier::Panic => c.size_panic,
        };

        Ok(RegimeResult {
            abs_daily_return_pct: abs_daily_return_pct.round_dp(6),
            bb_width_pct,
            breadth_oversold,
            breadth_total,
            breadth_ratio: breadth_ratio.round_dp(4),
            market,
            size_multiplier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn classifier() -> RegimeClassifier {
        RegimeClassifier::new(RegimeConfig::default())
    }

    #[test]
    fn test_default_thresholds_contract() {
        let c = RegimeConfig::default();
        assert_eq!(c.panic_ret_pct, dec!(2.0));
        assert_eq!(c.caution_ret_pct, dec!(1.2));
        assert_eq!(c.panic_bb_pct, dec!(22.0));
        assert_eq!(c.caution_bb_pct, dec!(16.0));
        assert_eq!(c.panic_breadth, dec!(0.40));
        assert_eq!(c.caution_breadth, dec!(0.25));
        assert_eq!(c.size_normal, dec!(1.0));
        assert_eq!(c.size_caution, dec!(0.5));
        assert_eq!(c.size_panic, dec!(0.0));
    }

    #[test]
    fn test_scenario_a_quiet_market() {
        // bid=100.00, ask=100.02, prior close 99.00 -> normal, full size.
        let closes = vec![dec!(99.00), dec!(100.05)];
        let result = classifier()
            .classify(dec!(100.00), dec!(100.02), &closes, 0, 0)
            .unwrap();

        assert!(result.bb_width_pct > dec!(0.019) && result.bb_width_pct < dec!(0.021));
        assert!(
            result.abs_daily_return_pct > dec!(1.01) && result.abs_daily_return_pct < dec!(1.03)
        );
        assert_eq!(result.breadth_total, 0);
        assert_eq!(result.breadth_ratio, dec!(0));
        assert_eq!(result.market, MarketTier::Normal);
        assert_eq!(result.size_multiplier, dec!(1.0));
    }

    #[test]
    fn test_bad_quote_faults() {
        let err = classifier()
            .classify(dec!(-1), dec!(1), &[], 0, 0)
            .unwrap_err();
        assert!(matches!(err, RiskError::BadQuote { .. }));

        let err = classifier()
            .classify(dec!(0), dec!(0), &[], 0, 0)
            .unwrap_err();
        assert!(matches!(err, RiskError::BadQuote { .. }));
    }

    #[test]
    fn test_missing_history_degrades_to_zero() {
        let result = classifier()
            .classify(dec!(100), dec!(100.02), &[dec!(99.0)], 0, 0)
            .unwrap();
        assert_eq!(result.abs_daily_return_pct, dec!(0));
        assert_eq!(result.market, MarketTier::Normal);
    }

    #[test]
    fn test_zero_prev_close_degrades_to_zero() {
        let result = classifier()
            .classify(dec!(100), dec!(100.02), &[dec!(0), dec!(100)], 0, 0)
            .unwrap();
        assert_eq!(result.abs_daily_return_pct, dec!(0));
    }

    #[test]
    fn test_caution_on_return_threshold() {
        // prev close 100, mid 101.3 -> 1.3% >= 1.2%.
        let result = classifier()
            .classify(dec!(101.29), dec!(101.31), &[dec!(100), dec!(101)], 0, 0)
            .unwrap();
        assert_eq!(result.market, MarketTier::Caution);
        assert_eq!(result.size_multiplier, dec!(0.5));
    }

    #[test]
    fn test_panic_on_return_threshold() {
        let result = classifier()
            .classify(dec!(102.99), dec!(103.01), &[dec!(100), dec!(101)], 0, 0)
            .unwrap();
        assert_eq!(result.market, MarketTier::Panic);
        assert_eq!(result.size_multiplier, dec!(0.0));
    }

    #[test]
    fn test_panic_on_spread_width() {
        // bid=80, ask=100 -> mid=90, width = 20/90*100 = 22.2% >= 22.
        let result = classifier()
            .classify(dec!(80), dec!(100), &[], 0, 0)
            .unwrap();
        assert_eq!(result.market, MarketTier::Panic);
    }

    #[test]
    fn test_caution_on_breadth_ratio() {
        // 3/10 = 0.30 >= 0.25 but < 0.40.
        let result = classifier()
            .classify(dec!(100), dec!(100.02), &[], 3, 10)
            .unwrap();
        assert_eq!(result.breadth_ratio, dec!(0.3));
        assert_eq!(result.market, MarketTier::Caution);
    }

    #[test]
    fn test_panic_on_breadth_ratio() {
        let result = classifier()
            .classify(dec!(100), dec!(100.02), &[], 4, 10)
            .unwrap();
        assert_eq!(result.market, MarketTier::Panic);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        // Exactly 1.2% return is caution, exactly 2.0% is panic.
        let result = classifier()
            .classify(dec!(101.19), dec!(101.21), &[dec!(100), dec!(0)], 0, 0)
            .unwrap();
        assert_eq!(result.abs_daily_return_pct, dec!(1.2));
        assert_eq!(result.market, MarketTier::Caution);

        let result = classifier()
            .classify(dec!(101.99), dec!(102.01), &[dec!(100), dec!(0)], 0, 0)
            .unwrap();
        assert_eq!(result.abs_daily_return_pct, dec!(2.0));
        assert_eq!(result.market, MarketTier::Panic);
    }

    #[test]
    fn test_return_classified_before_rounding() {
        // Return of exactly 1.1999999% reports as 1.2 after rounding but
        // sits below the caution cut, so the tier stays normal.
        let result = classifier()
            .classify(
                dec!(101.1999998),
                dec!(101.2000000),
                &[dec!(100), dec!(0)],
                0,
                0,
            )
            .unwrap();
        assert_eq!(result.abs_daily_return_pct, dec!(1.2));
        assert_eq!(result.market, MarketTier::Normal);
    }

    #[test]
    fn test_breadth_ratio_classified_before_rounding() {
        // 9999/40000 = 0.2499975 reports as 0.25 but is below 0.25.
        let result = classifier()
            .classify(dec!(100), dec!(100.02), &[], 9999, 40000)
            .unwrap();
        assert_eq!(result.breadth_ratio, dec!(0.25));
        assert_eq!(result.market, MarketTier::Normal);
    }

    #[test]
    fn test_severity_monotone_in_each_signal() {
        let c = classifier();
        let quiet = c.classify(dec!(100), dec!(100.02), &[], 0, 0).unwrap();
        assert_eq!(quiet.market, MarketTier::Normal);

        // Push each signal past its panic threshold, holding others fixed:
        // the tier never decreases, the multiplier never increases.
        let by_return = c
            .classify(dec!(104.99), dec!(105.01), &[dec!(100), dec!(0)], 0, 0)
            .unwrap();
        let by_spread = c.classify(dec!(75), dec!(100), &[], 0, 0).unwrap();
        let by_breadth = c.classify(dec!(100), dec!(100.02), &[], 5, 10).unwrap();

        for escalated in [by_return, by_spread, by_breadth] {
            assert!(escalated.market >= quiet.market);
            assert!(escalated.size_multiplier <= quiet.size_multiplier);
            assert_eq!(escalated.market, MarketTier::Panic);
        }
    }

    #[test]
    fn test_custom_multipliers() {
        let config = RegimeConfig {
            size_caution: dec!(0.25),
            ..Default::default()
        };
        let result = RegimeClassifier::new(config)
            .classify(dec!(100), dec!(100.02), &[], 3, 10)
            .unwrap();
        assert_eq!(result.size_multiplier, dec!(0.25));
    }
}
