//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Payment gateway base URL.
    pub gateway_url: String,
    /// Payment gateway API key id.
    pub gateway_key_id: String,
    /// Payment gateway API key secret (also the callback HMAC key).
    pub gateway_key_secret: String,
    /// Visit booking fee in minor units.
    pub visit_fee_minor: i64,
    /// Visit booking fee currency.
    pub visit_fee_currency: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `BIND_ADDR` | Server bind address | `127.0.0.1:5000` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:estate.db?mode=rwc` |
    /// | `GATEWAY_URL` | Payment gateway base URL | `https://api.razorpay.com` |
    /// | `GATEWAY_KEY_ID` | Gateway API key id | (required) |
    /// | `GATEWAY_KEY_SECRET` | Gateway API key secret | (required) |
    /// | `VISIT_FEE_MINOR` | Visit fee in minor units | `50000` |
    /// | `VISIT_FEE_CURRENCY` | Visit fee currency | `INR` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("SQLITE_PATH")
            .unwrap_or_else(|_| "sqlite:estate.db?mode=rwc".to_string());

        let gateway_url = env::var("GATEWAY_URL")
            .unwrap_or_else(|_| "https://api.razorpay.com".to_string());

        let gateway_key_id =
            env::var("GATEWAY_KEY_ID").map_err(|_| ConfigError::MissingKeyId)?;

        let gateway_key_secret =
            env::var("GATEWAY_KEY_SECRET").map_err(|_| ConfigError::MissingKeySecret)?;

        let visit_fee_minor = env::var("VISIT_FEE_MINOR")
            .unwrap_or_else(|_| "50000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidVisitFee)?;

        let visit_fee_currency =
            env::var("VISIT_FEE_CURRENCY").unwrap_or_else(|_| "INR".to_string());

        Ok(Self {
            addr,
            database_url,
            gateway_url,
            gateway_key_id,
            gateway_key_secret,
            visit_fee_minor,
            visit_fee_currency,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR format")]
    InvalidAddr,

    #[error("GATEWAY_KEY_ID environment variable is required")]
    MissingKeyId,

    #[error("GATEWAY_KEY_SECRET environment variable is required")]
    MissingKeySecret,

    #[error("VISIT_FEE_MINOR must be an integer amount in minor units")]
    InvalidVisitFee,
}
