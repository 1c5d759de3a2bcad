//! Payment gateway HTTP client.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GatewayConfig;
use crate::error::GatewayError;

/// Ceiling on outbound gateway calls. A gateway that hangs past this is
/// reported as a `GatewayError` instead of stalling the caller.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Order-creation request body.
#[derive(Debug, Serialize)]
struct CreateOrderRequest<'a> {
    /// Amount in minor units (e.g. paise).
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
}

/// An order handle as returned by the gateway.
///
/// Fields beyond the ones this backend reads are preserved in `extra` so
/// the order object reaches the client verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Gateway order identifier (e.g. "order_Nx3...").
    pub id: String,
    /// Amount in minor units.
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
    /// Receipt reference passed at creation (the visit id, when known).
    #[serde(default)]
    pub receipt: Option<String>,
    /// Remaining gateway fields, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Client for the external payment gateway.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: Client,
    config: GatewayConfig,
}

impl GatewayClient {
    /// Create a new gateway client.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(GatewayError::Http)?;

        info!(base_url = %config.base_url, "Created payment gateway client");

        Ok(Self { http, config })
    }

    /// The key secret shared with the gateway, used for callback
    /// signature verification.
    pub fn key_secret(&self) -> &str {
        &self.config.key_secret
    }

    /// Create an order with the gateway.
    ///
    /// `receipt` is an opaque reference echoed back on the order; this
    /// backend passes the visit id through it for correlation.
    pub async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<Order, GatewayError> {
        let url = self.config.orders_url();
        debug!(%url, amount_minor, currency, receipt, "Creating gateway order");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&CreateOrderRequest {
                amount: amount_minor,
                currency,
                receipt,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let order: Order = response.json().await?;
        info!(order_id = %order.id, amount = order.amount, "Gateway order created");

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_preserves_unknown_fields() {
        let raw = serde_json::json!({
            "id": "order_abc123",
            "amount": 50000,
            "currency": "INR",
            "receipt": "v-1",
            "status": "created",
            "attempts": 0
        });

        let order: Order = serde_json::from_value(raw).unwrap();
        assert_eq!(order.id, "order_abc123");
        assert_eq!(order.receipt.as_deref(), Some("v-1"));
        assert_eq!(order.extra["status"], "created");

        // Round-trips back out with the gateway's fields intact.
        let out = serde_json::to_value(&order).unwrap();
        assert_eq!(out["attempts"], 0);
    }
}
