//! Adapter error types.

use riskgate_core::ErrorClass;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// Network or HTTP transport failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The venue quoted no liquidity for the requested symbol.
    #[error("no liquidity quoted for {0}")]
    NoLiquidity(String),

    /// Response arrived but did not have the expected shape.
    #[error("malformed payload: {0}")]
    Payload(String),

    /// The venue returned an explicit error code.
    #[error("exchange error {code}: {message}")]
    Exchange { code: i64, message: String },
}

impl AdapterError {
    /// The adapter's own best classification of this failure.
    ///
    /// Transport problems and empty books are transient; malformed payloads
    /// and auth-class venue codes are structural; messages hinting at
    /// account lockout are dangerous.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Transport(_) | Self::NoLiquidity(_) => ErrorClass::Retry,
            Self::Payload(_) => ErrorClass::Stop,
            Self::Exchange { code, message } => {
                let msg = message.to_lowercase();
                if ["suspicious", "account frozen", "risk control"]
                    .iter()
                    .any(|m| msg.contains(m))
                {
                    ErrorClass::Kill
                } else if matches!(code, 401 | 403) {
                    ErrorClass::Stop
                } else {
                    ErrorClass::Retry
                }
            }
        }
    }
}

pub type AdapterResult<T> = Result<T, AdapterError>;
