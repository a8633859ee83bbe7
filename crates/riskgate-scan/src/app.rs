//! The evaluation-cycle orchestrator.

use crate::config::AppConfig;
use crate::error::AppResult;
use chrono::Utc;
use riskgate_adapter::{BybitAdapter, BybitConfig, MarketDataAdapter};
use riskgate_core::RiskSnapshot;
use riskgate_risk::{scan_breadth, watch_set, RegimeClassifier, SmokeGate};
use riskgate_store::StateStore;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// The assembler for one evaluation cycle.
///
/// A cycle is synchronous and side-effect-free on its inputs: it reads one
/// canary blob, one watch-list, zero-or-more signal blobs, and one live
/// quote, then atomically overwrites the output snapshot. A regime fault
/// (bad quote, network failure) aborts the cycle with nothing written;
/// gate faults are themselves valid STOP/KILL verdicts and still produce a
/// snapshot.
pub struct Application {
    config: AppConfig,
    adapter: Arc<dyn MarketDataAdapter>,
    store: StateStore,
    regime: RegimeClassifier,
    gate: SmokeGate,
}

impl Application {
    /// Create an application with the Bybit public-data adapter.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let adapter = BybitAdapter::new(BybitConfig {
            base_url: config.base_url.clone(),
            ..Default::default()
        })?;
        Ok(Self::with_adapter(config, Arc::new(adapter)))
    }

    /// Create an application with an explicit adapter.
    pub fn with_adapter(config: AppConfig, adapter: Arc<dyn MarketDataAdapter>) -> Self {
        let store = StateStore::new(&config.state_dir, &config.exchange);
        let regime = RegimeClassifier::new(config.regime.clone());
        let gate = SmokeGate::new(config.smoke.clone());
        Self {
            config,
            adapter,
            store,
            regime,
            gate,
        }
    }

    /// Run one evaluation cycle and return the persisted snapshot.
    ///
    /// All inputs are gathered before anything is written, so an abort at
    /// any point leaves the previously persisted snapshot untouched.
    pub async fn run_cycle(&self) -> AppResult<RiskSnapshot> {
        let symbol = &self.config.reference_symbol;

        // Breadth first: purely local reads, lenient throughout.
        let watchlist = self
            .store
            .load_watch_list(Path::new(&self.config.watchlist_path));
        let symbols = watch_set(&watchlist);
        let (oversold, total) = scan_breadth(&symbols, |sym| self.store.load_symbol_signals(sym));
        debug!(
            watch_set = symbols.len(),
            oversold, considered = total, "breadth scan complete"
        );

        // Live market data for the reference instrument. Any failure here
        // aborts the cycle; downstream readers keep the prior snapshot.
        let (bid, ask) = self.adapter.best_bid_ask(symbol).await?;
        let closes = self.adapter.daily_closes(symbol, 2).await?;
        let regime = self.regime.classify(bid, ask, &closes, oversold, total)?;

        // Canary probe ingestion and the gate verdict. Absence or
        // staleness is a verdict (STOP), not an abort.
        let canary = self.store.load_canary();
        let now_ms = Utc::now().timestamp_millis();
        let exec_gate = self.gate.decide(canary.as_ref(), now_ms);

        let snapshot = RiskSnapshot {
            ts: now_ms,
            regime,
            exec_gate,
            canary,
        };
        self.store.write_snapshot(&snapshot)?;

        info!(
            market = ?snapshot.regime.market,
            size_multiplier = %snapshot.regime.size_multiplier,
            action = ?snapshot.exec_gate.action,
            reason = %snapshot.exec_gate.reason,
            "evaluation cycle complete"
        );
        Ok(snapshot)
    }

    /// The store backing this application (for diagnostics).
    pub fn store(&self) -> &StateStore {
        &self.store
    }
}
