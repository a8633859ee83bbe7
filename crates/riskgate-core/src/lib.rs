//! Core domain types for the riskgate survivability gate.
//!
//! This crate provides the types shared across the gate pipeline:
//! - `CanaryResult`, `ErrorRecord`: the round-trip order probe record
//! - `GateAction`, `GateVerdict`: the execution authorization verdict
//! - `MarketTier`, `RegimeResult`: market-regime classification output
//! - `RiskSnapshot`: the persisted per-cycle output record
//! - `Capabilities`, `ErrorClass`: the adapter boundary vocabulary

pub mod canary;
pub mod capabilities;
pub mod gate;
pub mod regime;
pub mod signals;
pub mod snapshot;

pub use canary::{CanaryResult, CanarySummary, ErrorRecord};
pub use capabilities::{Capabilities, ErrorClass};
pub use gate::{GateAction, GateVerdict};
pub use regime::{MarketTier, RegimeResult};
pub use signals::{BollingerBands, HourlyIndicators, SymbolSignals, WatchList};
pub use snapshot::RiskSnapshot;
