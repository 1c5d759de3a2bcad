//! Gateway client configuration.

/// Configuration for the payment gateway client.
///
/// `key_secret` doubles as the HMAC key for callback signature
/// verification; it is shared with the gateway and never transmitted.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Gateway API base URL, e.g. `https://api.razorpay.com`.
    pub base_url: String,
    /// API key id, sent as the basic-auth username.
    pub key_id: String,
    /// API key secret, sent as the basic-auth password.
    pub key_secret: String,
}

impl GatewayConfig {
    /// Create a new configuration. A trailing slash on the base URL is
    /// stripped so endpoint paths can be appended directly.
    pub fn new(base_url: &str, key_id: &str, key_secret: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            key_id: key_id.to_string(),
            key_secret: key_secret.to_string(),
        }
    }

    /// Full URL of the order-creation endpoint.
    pub fn orders_url(&self) -> String {
        format!("{}/v1/orders", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_url_strips_trailing_slash() {
        let config = GatewayConfig::new("https://api.razorpay.com/", "key", "secret");
        assert_eq!(config.orders_url(), "https://api.razorpay.com/v1/orders");
    }
}
