//! Payment gateway integration.
//!
//! Two concerns live here: creating orders with the external gateway over
//! HTTPS, and verifying the HMAC-SHA256 signature the gateway attaches to
//! payment-completion callbacks.

pub mod client;
pub mod config;
pub mod error;
pub mod signature;

pub use client::{GatewayClient, Order};
pub use config::GatewayConfig;
pub use error::{GatewayError, SignatureMismatch};
pub use signature::{compute_signature, verify_signature};
