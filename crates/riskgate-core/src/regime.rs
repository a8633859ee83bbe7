//! Market-regime classification output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Discrete market-risk tier driving position-size scaling.
///
/// Ordered by severity: `Normal < Caution < Panic`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MarketTier {
    #[default]
    Normal,
    Caution,
    Panic,
}

/// Computed volatility/liquidity/breadth metrics plus the resulting tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeResult {
    /// |mid - previous daily close| / previous close, in percent.
    /// Zero when insufficient history is available.
    pub abs_daily_return_pct: Decimal,
    /// Best bid/ask spread relative to mid, in percent.
    pub bb_width_pct: Decimal,
    /// Symbols currently oversold out of the watch-set.
    pub breadth_oversold: u32,
    /// Symbols with usable indicator snapshots.
    pub breadth_total: u32,
    /// `breadth_oversold / breadth_total`, zero when the set is empty.
    pub breadth_ratio: Decimal,
    pub market: MarketTier,
    /// Position-size multiplier the executor must apply (0.0 in panic).
    pub size_multiplier: Decimal,
}
