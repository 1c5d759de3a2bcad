//! Error types for the HTTP API.
//!
//! Service operations return typed error kinds; this module is the single
//! place they are mapped to HTTP statuses. Downstream failures (database,
//! gateway) are logged server-side and surface as a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use database::ValidationError;

/// Errors that can occur while serving a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed required field.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Signup with an email that already has an account.
    #[error("Email already registered")]
    AlreadyRegistered,

    /// Login failure. Unknown email and wrong password share this kind so
    /// the response does not reveal which emails are registered.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Lookup miss surfaced to the caller.
    #[error("{0}")]
    NotFound(&'static str),

    /// Payment callback signature did not verify.
    #[error("Payment verification failed")]
    SignatureMismatch,

    /// Gateway payment id already recorded in the ledger.
    #[error("Payment already recorded")]
    DuplicatePayment,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] database::DatabaseError),

    /// Payment gateway error.
    #[error("Gateway error: {0}")]
    Gateway(#[from] payment_gateway::GatewayError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::AlreadyRegistered
            | ApiError::InvalidCredentials
            | ApiError::SignatureMismatch => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            ApiError::DuplicatePayment => (StatusCode::CONFLICT, self.to_string()),
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
            ApiError::Gateway(err) => {
                tracing::error!("Gateway error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        let body = serde_json::json!({
            "message": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
