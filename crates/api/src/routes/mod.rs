//! Route handlers for the HTTP API.

pub mod auth;
pub mod health;
pub mod payment;
pub mod visit;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Accounts
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/user/profile", get(auth::profile))
        // Visit booking and payment
        .route("/submit-visit", post(visit::submit_visit))
        .route("/create-order", post(payment::create_order))
        .route("/verify-payment", post(payment::verify_payment))
        // Health check
        .route("/health", get(health::health))
}

#[cfg(test)]
pub(crate) mod testing {
    use database::Database;
    use payment_gateway::{GatewayClient, GatewayConfig};

    use crate::state::{AppState, VisitFee};

    /// Test key secret shared by handler tests for signature computation.
    pub const TEST_KEY_SECRET: &str = "test_key_secret";

    /// Build an [`AppState`] over an in-memory database. The gateway
    /// client points at an unroutable address; tests never call out.
    pub async fn test_state() -> AppState {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();

        let gateway = GatewayClient::new(GatewayConfig::new(
            "http://127.0.0.1:9",
            "test_key_id",
            TEST_KEY_SECRET,
        ))
        .unwrap();

        AppState::new(
            db,
            gateway,
            VisitFee {
                amount_minor: 50_000,
                currency: "INR".to_string(),
            },
        )
    }
}
