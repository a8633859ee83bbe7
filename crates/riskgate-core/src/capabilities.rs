//! Adapter capability declarations and error classification.

use serde::{Deserialize, Serialize};

/// What an exchange adapter can reliably do.
///
/// Callers must treat this record as authoritative: no feature may be
/// assumed beyond what is declared here. The gate itself never calls
/// capability-gated operations, but downstream executors consult these
/// flags before acting on a `Proceed` verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub spot: bool,
    pub futures: bool,
    pub margin: bool,
    pub supports_reduce_only: bool,
    pub supports_post_only: bool,
    pub supports_oco: bool,
    pub supports_client_order_id: bool,
    pub supports_orders: bool,
    pub supports_withdraw: bool,
    pub supports_ip_allowlist: bool,
    pub has_testnet: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        // Conservative baseline: spot-only, no order placement.
        Self {
            spot: true,
            futures: false,
            margin: false,
            supports_reduce_only: false,
            supports_post_only: false,
            supports_oco: false,
            supports_client_order_id: true,
            supports_orders: false,
            supports_withdraw: false,
            supports_ip_allowlist: false,
            has_testnet: false,
        }
    }
}

/// The adapter's own best classification of a failure.
///
/// Independent of the gate's marker taxonomy; when an adapter error carries
/// one of these it takes precedence over message matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorClass {
    /// Transient issue (network, rate limit).
    Retry,
    /// Structural issue (auth, permissions, region restriction).
    Stop,
    /// Dangerous account state (suspicious activity, unexpected lockout).
    Kill,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capabilities_conservative() {
        let caps = Capabilities::default();
        assert!(caps.spot);
        assert!(!caps.supports_orders);
        assert!(!caps.supports_withdraw);
    }

    #[test]
    fn test_error_class_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ErrorClass::Kill).unwrap(), "\"kill\"");
    }
}
