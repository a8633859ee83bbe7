//! Survivability-gate classifiers.
//!
//! The decision pipeline that runs before any autonomous trading action:
//! - `taxonomy`: maps raw probe errors to KILL/RETRY/STOP severities
//! - `smoke`: validates canary-probe freshness and derives the gate verdict
//! - `regime`: classifies the market into normal/caution/panic tiers
//! - `breadth`: counts oversold symbols across the watch-set
//!
//! Two error policies coexist by design. The smoke gate and quote handling
//! are fail-closed: missing or stale safety-relevant input becomes the most
//! conservative non-PROCEED verdict. Breadth and trailing-return history are
//! lenient-degrade: absence of auxiliary signal degrades to neutral zero.

pub mod breadth;
pub mod error;
pub mod regime;
pub mod smoke;
pub mod taxonomy;

pub use breadth::{scan_breadth, watch_set};
pub use error::{RiskError, RiskResult};
pub use regime::{RegimeClassifier, RegimeConfig};
pub use smoke::{SmokeGate, SmokeGateConfig};
pub use taxonomy::classify_error;
