//! Application configuration.

use crate::error::{AppError, AppResult};
use riskgate_risk::{RegimeConfig, SmokeGateConfig};
use riskgate_telemetry::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration.
///
/// Every threshold the classifiers consume lives here, immutable after
/// load. No component reads the environment at evaluation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Exchange key; selects the state directory and the adapter.
    #[serde(default = "default_exchange")]
    pub exchange: String,
    /// Reference instrument for regime metrics.
    #[serde(default = "default_reference_symbol")]
    pub reference_symbol: String,
    /// REST base URL for the market-data adapter.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Root of the per-exchange state directories.
    #[serde(default = "default_state_dir")]
    pub state_dir: String,
    /// Watch-list document path.
    #[serde(default = "default_watchlist_path")]
    pub watchlist_path: String,
    /// Regime thresholds and size multipliers.
    #[serde(default)]
    pub regime: RegimeConfig,
    /// Smoke gate (canary freshness) configuration.
    #[serde(default)]
    pub smoke: SmokeGateConfig,
    /// Telemetry configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

fn default_exchange() -> String {
    "bybit".to_string()
}

fn default_reference_symbol() -> String {
    "BTCUSDT".to_string()
}

fn default_base_url() -> String {
    "https://api.bybit.com".to_string()
}

fn default_state_dir() -> String {
    "./state".to_string()
}

fn default_watchlist_path() -> String {
    "config/public/watchlist.json".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            exchange: default_exchange(),
            reference_symbol: default_reference_symbol(),
            base_url: default_base_url(),
            state_dir: default_state_dir(),
            watchlist_path: default_watchlist_path(),
            regime: RegimeConfig::default(),
            smoke: SmokeGateConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// Runs before the tracing subscriber exists, so the caller is
    /// responsible for reporting the fallback once logging is up.
    pub fn load(path: &str) -> AppResult<Self> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Default log level when RUST_LOG is unset.
    pub log_level: String,
    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
        }
    }
}
