//! Application state shared across handlers.

use database::Database;
use payment_gateway::GatewayClient;

/// Fee charged for booking a property visit.
#[derive(Debug, Clone)]
pub struct VisitFee {
    /// Amount in minor units.
    pub amount_minor: i64,
    /// ISO currency code.
    pub currency: String,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Payment gateway client.
    pub gateway: GatewayClient,
    /// Server-side visit fee; clients never choose the amount.
    pub visit_fee: VisitFee,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, gateway: GatewayClient, visit_fee: VisitFee) -> Self {
        Self {
            db,
            gateway,
            visit_fee,
        }
    }
}
