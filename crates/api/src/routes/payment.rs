//! Payment routes: order creation and callback verification.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use database::ledger::{self, NewLedgerEntry};
use database::{visit, DatabaseError};
use payment_gateway::{verify_signature, Order};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Order-creation request body. The amount comes from server config, so
/// an empty body is valid; a visit id correlates the order to a booking.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub visit_id: Option<String>,
}

/// Order-creation response, carrying the gateway's order verbatim.
#[derive(Serialize)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order: Order,
}

/// Payment callback body, using the gateway's field names.
#[derive(Deserialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// Payment verification response.
#[derive(Serialize)]
pub struct VerifyPaymentResponse {
    pub success: bool,
}

/// Create a payment order with the gateway for the configured visit fee.
///
/// When a visit id is supplied, the visit id rides along as the order
/// receipt and the returned order id is stored on the visit so the
/// callback can be correlated back to it.
pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>> {
    let receipt = req
        .visit_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let order = state
        .gateway
        .create_order(
            state.visit_fee.amount_minor,
            &state.visit_fee.currency,
            &receipt,
        )
        .await?;

    if let Some(visit_id) = &req.visit_id {
        visit::attach_order(state.db.pool(), visit_id, &order.id)
            .await
            .map_err(|e| match e {
                DatabaseError::NotFound { .. } => ApiError::NotFound("Visit not found"),
                other => other.into(),
            })?;
    }

    Ok(Json(CreateOrderResponse {
        success: true,
        order,
    }))
}

/// Verify a payment-completion callback.
///
/// The signature is recomputed over `"{order_id}|{payment_id}"` with the
/// shared key secret; a mismatch rejects the request with no state
/// change. On a match the ledger entry and the visit's PENDING -> PAID
/// transition commit in one transaction. A replayed payment id fails the
/// ledger's uniqueness constraint and surfaces as a duplicate.
pub async fn verify_payment(
    State(state): State<AppState>,
    Json(req): Json<VerifyPaymentRequest>,
) -> Result<Json<VerifyPaymentResponse>> {
    if verify_signature(
        state.gateway.key_secret(),
        &req.razorpay_order_id,
        &req.razorpay_payment_id,
        &req.razorpay_signature,
    )
    .is_err()
    {
        warn!(order_id = %req.razorpay_order_id, "Payment signature mismatch");
        return Err(ApiError::SignatureMismatch);
    }

    let entry = NewLedgerEntry {
        amount: state.visit_fee.amount_minor,
        payment_id: req.razorpay_payment_id.clone(),
        order_id: req.razorpay_order_id.clone(),
        method: "UPI".to_string(),
    };

    ledger::record_payment(state.db.pool(), &entry)
        .await
        .map_err(|e| match e {
            DatabaseError::AlreadyExists { .. } => ApiError::DuplicatePayment,
            other => other.into(),
        })?;

    info!(
        order_id = %req.razorpay_order_id,
        payment_id = %req.razorpay_payment_id,
        "Payment verified and recorded"
    );

    Ok(Json(VerifyPaymentResponse { success: true }))
}
