//! Risk error types.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiskError {
    /// Quote midpoint is zero or negative; fatal to the evaluation cycle.
    #[error("bad quote: mid={mid} computed from bid={bid}, ask={ask}")]
    BadQuote {
        bid: Decimal,
        ask: Decimal,
        mid: Decimal,
    },
}

pub type RiskResult<T> = Result<T, RiskError>;
