//! Boundary documents consumed by the breadth scanner.
//!
//! Both documents are written by external pipelines and parsed leniently:
//! any unexpected shape is treated as absent by the reader, never raised.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The configured watch-set, split into two categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchList {
    #[serde(default)]
    pub categories: WatchCategories,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchCategories {
    #[serde(default)]
    pub focus: Vec<String>,
    #[serde(default)]
    pub whitelist: Vec<String>,
}

/// Per-symbol technical snapshot written by the signal pipeline.
///
/// Only the 1-hour timeframe is consulted by the breadth scanner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolSignals {
    #[serde(rename = "1h", default)]
    pub hourly: Option<HourlyIndicators>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlyIndicators {
    #[serde(default)]
    pub rsi14: Option<Decimal>,
    #[serde(default)]
    pub bb: Option<BollingerBands>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BollingerBands {
    #[serde(default)]
    pub percent_b: Option<Decimal>,
}

impl SymbolSignals {
    /// Extract `(rsi14, percent_b)` when both are present.
    pub fn hourly_pair(&self) -> Option<(Decimal, Decimal)> {
        let hourly = self.hourly.as_ref()?;
        let rsi = hourly.rsi14?;
        let pb = hourly.bb.as_ref()?.percent_b?;
        Some((rsi, pb))
    }
}
