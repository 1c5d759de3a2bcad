//! HTTP API for the estate marketing site.
//!
//! Accounts (signup/login/profile), visit booking, and payment-gateway
//! integration over a SQLite store.

mod config;
mod error;
mod routes;
mod state;

use database::Database;
use payment_gateway::{GatewayClient, GatewayConfig};
use tracing::info;

use crate::config::Config;
use crate::state::{AppState, VisitFee};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting API server");

    // Connect to the database. Startup is fail-fast: an unreachable
    // store aborts here instead of serving with a broken dependency.
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Build the payment gateway client
    let gateway = GatewayClient::new(GatewayConfig::new(
        &config.gateway_url,
        &config.gateway_key_id,
        &config.gateway_key_secret,
    ))?;

    // Build application state
    let state = AppState::new(
        db,
        gateway,
        VisitFee {
            amount_minor: config.visit_fee_minor,
            currency: config.visit_fee_currency.clone(),
        },
    );

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "API server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
