//! Gateway error types.

use thiserror::Error;

/// Errors from the payment gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport failure, including the 20-second request timeout.
    #[error("gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("gateway returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// A payment callback whose signature did not match the recomputed HMAC.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("payment signature mismatch")]
pub struct SignatureMismatch;
