//! Bybit v5 public REST adapter.
//!
//! Read-only market data from the public endpoints: `/v5/market/orderbook`
//! for the best bid/ask and `/v5/market/kline` (interval `D`) for daily
//! closes. No credentials, no order placement.

use crate::error::{AdapterError, AdapterResult};
use crate::market_data::{normalize_symbol, MarketDataAdapter};
use async_trait::async_trait;
use reqwest::Client;
use riskgate_core::Capabilities;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Bybit adapter configuration.
#[derive(Debug, Clone)]
pub struct BybitConfig {
    /// REST base URL, e.g. "https://api.bybit.com".
    pub base_url: String,
    /// Product category: "linear" | "spot" | "inverse".
    pub category: String,
    pub timeout: Duration,
}

impl Default for BybitConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.bybit.com".to_string(),
            category: "linear".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct BybitAdapter {
    client: Client,
    config: BybitConfig,
}

impl BybitAdapter {
    pub fn new(config: BybitConfig) -> AdapterResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AdapterError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> AdapterResult<Value> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| AdapterError::Transport(format!("request failed: {e} url={url}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdapterError::Exchange {
                code: status.as_u16() as i64,
                message: body.chars().take(200).collect(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AdapterError::Payload(format!("invalid json: {e} url={url}")))?;

        // Bybit wraps everything in {retCode, retMsg, result}.
        let ret_code = body.get("retCode").and_then(Value::as_i64).unwrap_or(0);
        if ret_code != 0 {
            let message = body
                .get("retMsg")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();
            return Err(AdapterError::Exchange {
                code: ret_code,
                message,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl MarketDataAdapter for BybitAdapter {
    fn name(&self) -> &str {
        "bybit"
    }

    fn capabilities(&self) -> Capabilities {
        // Conservative: read-only public adapter, no withdrawal surface.
        Capabilities {
            spot: true,
            futures: true,
            margin: false,
            supports_reduce_only: true,
            supports_post_only: true,
            supports_oco: false,
            supports_client_order_id: true,
            supports_orders: false,
            supports_withdraw: false,
            supports_ip_allowlist: false,
            has_testnet: true,
        }
    }

    async fn best_bid_ask(&self, symbol: &str) -> AdapterResult<(Decimal, Decimal)> {
        let sym = normalize_symbol(symbol);
        let body = self
            .get_json(
                "/v5/market/orderbook",
                &[
                    ("category", self.config.category.as_str()),
                    ("symbol", sym.as_str()),
                    ("limit", "1"),
                ],
            )
            .await?;

        let (bid, ask) = parse_orderbook_top(&body, &sym)?;
        debug!(%sym, %bid, %ask, "bybit best bid/ask");
        Ok((bid, ask))
    }

    async fn daily_closes(&self, symbol: &str, n: usize) -> AdapterResult<Vec<Decimal>> {
        let sym = normalize_symbol(symbol);
        let limit = n.to_string();
        let body = self
            .get_json(
                "/v5/market/kline",
                &[
                    ("category", self.config.category.as_str()),
                    ("symbol", sym.as_str()),
                    ("interval", "D"),
                    ("limit", limit.as_str()),
                ],
            )
            .await?;

        parse_kline_closes(&body)
    }
}

/// Extract the top-of-book prices from an orderbook payload.
///
/// Shape: `result.b` / `result.a` are arrays of `["price", "size"]` string
/// pairs, best level first.
fn parse_orderbook_top(body: &Value, symbol: &str) -> AdapterResult<(Decimal, Decimal)> {
    let result = body.get("result").unwrap_or(&Value::Null);
    let bid = top_price(result.get("b"));
    let ask = top_price(result.get("a"));

    match (bid, ask) {
        (Some(bid), Some(ask)) => Ok((bid, ask)),
        _ => Err(AdapterError::NoLiquidity(symbol.to_string())),
    }
}

fn top_price(levels: Option<&Value>) -> Option<Decimal> {
    let price = levels?.as_array()?.first()?.as_array()?.first()?.as_str()?;
    Decimal::from_str(price).ok()
}

/// Extract daily closes from a kline payload, ascending by time.
///
/// Entries are `[start_ms, open, high, low, close, volume, turnover]` with
/// numeric strings; Bybit returns them newest first. An empty list is a
/// valid short-history response, not a fault.
fn parse_kline_closes(body: &Value) -> AdapterResult<Vec<Decimal>> {
    let list = body
        .get("result")
        .and_then(|r| r.get("list"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut candles: Vec<(i64, Decimal)> = Vec::with_capacity(list.len());
    for entry in &list {
        let Some(fields) = entry.as_array() else {
            return Err(AdapterError::Payload("kline entry is not an array".into()));
        };
        let start_ms = fields
            .first()
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(0);
        let close = fields
            .get(4)
            .and_then(Value::as_str)
            .and_then(|s| Decimal::from_str(s).ok())
            .ok_or_else(|| AdapterError::Payload("kline close not parseable".into()))?;
        candles.push((start_ms, close));
    }

    candles.sort_by_key(|(start_ms, _)| *start_ms);
    Ok(candles.into_iter().map(|(_, close)| close).collect())
}
