//! Survivability-gate scanner application.
//!
//! One evaluation cycle reads the canary probe record, the watch-list, and
//! the per-symbol signal snapshots, fetches a live quote for the reference
//! instrument, and persists a single `RiskSnapshot` that downstream
//! executors consult before submitting orders.

pub mod app;
pub mod config;
pub mod error;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
