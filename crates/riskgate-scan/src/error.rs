//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Adapter error: {0}")]
    Adapter(#[from] riskgate_adapter::AdapterError),

    #[error("Risk error: {0}")]
    Risk(#[from] riskgate_risk::RiskError),

    #[error("Store error: {0}")]
    Store(#[from] riskgate_store::StoreError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] riskgate_telemetry::TelemetryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
