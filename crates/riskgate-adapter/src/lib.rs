//! Market-data adapter boundary.
//!
//! Any provider must expose, per symbol: the best bid/ask (faulting when no
//! liquidity is quoted), a short ascending daily-close history (short or
//! empty is a valid response), and an authoritative `Capabilities` record.
//! Errors carry the adapter's own `ErrorClass`, which takes precedence over
//! downstream message matching when present.

pub mod bybit;
pub mod error;
pub mod market_data;

pub use bybit::{BybitAdapter, BybitConfig};
pub use error::{AdapterError, AdapterResult};
pub use market_data::MarketDataAdapter;
