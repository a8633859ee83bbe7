//! The market-data adapter trait.

use crate::error::AdapterResult;
use async_trait::async_trait;
use riskgate_core::Capabilities;
use rust_decimal::Decimal;

/// Read-only market-data provider for one venue.
///
/// The gate only consumes quotes, daily closes, and the capability record;
/// it never calls capability-gated operations itself. Downstream executors
/// consult `capabilities()` before acting on a PROCEED verdict.
#[async_trait]
pub trait MarketDataAdapter: Send + Sync {
    /// Venue name, lowercase (e.g. "bybit").
    fn name(&self) -> &str;

    /// What this venue reliably supports. Authoritative; no feature may be
    /// assumed beyond these flags.
    fn capabilities(&self) -> Capabilities;

    /// Best bid and ask for the given symbol.
    ///
    /// Faults when no liquidity is quoted.
    async fn best_bid_ask(&self, symbol: &str) -> AdapterResult<(Decimal, Decimal)>;

    /// Up to `n` daily closes, ascending by time.
    ///
    /// May return fewer than `n`; a short or empty history is a valid
    /// response, not a fault.
    async fn daily_closes(&self, symbol: &str, n: usize) -> AdapterResult<Vec<Decimal>>;
}

/// Convert an arbitrary symbol spelling to the venue form, e.g.
/// "btc/usdt" -> "BTCUSDT".
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase().replace(['/', '-'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol("btc/usdt"), "BTCUSDT");
        assert_eq!(normalize_symbol(" BTC-USDT "), "BTCUSDT");
        assert_eq!(normalize_symbol("BTCUSDT"), "BTCUSDT");
    }
}
