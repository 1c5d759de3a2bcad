//! Visit booking route.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use database::validation::require_non_empty;
use database::visit::{self, NewVisit};

use crate::error::Result;
use crate::state::AppState;

/// Visit booking request body.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitVisitRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time_slot: String,
    #[serde(default)]
    pub contact_methods: Vec<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub property_id: Option<String>,
}

/// Visit booking response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitVisitResponse {
    pub success: bool,
    pub visit_id: String,
}

/// Book a property visit. The request starts PENDING and is returned an
/// id to correlate the later payment steps.
///
/// Nothing checks the requested slot against other bookings; two visits
/// for the same date and time both succeed.
pub async fn submit_visit(
    State(state): State<AppState>,
    Json(req): Json<SubmitVisitRequest>,
) -> Result<Json<SubmitVisitResponse>> {
    require_non_empty("name", &req.name)?;
    require_non_empty("email", &req.email)?;
    require_non_empty("phone", &req.phone)?;
    require_non_empty("date", &req.date)?;
    require_non_empty("timeSlot", &req.time_slot)?;

    let new = NewVisit {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        email: req.email,
        phone: req.phone,
        date: req.date,
        time_slot: req.time_slot,
        contact_methods: req.contact_methods,
        message: req.message,
        property_id: req.property_id,
    };

    visit::create_visit(state.db.pool(), &new).await?;

    info!(visit_id = %new.id, date = %new.date, slot = %new.time_slot, "Visit booked");

    Ok(Json(SubmitVisitResponse {
        success: true,
        visit_id: new.id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::routes::testing::test_state;
    use database::PAYMENT_PENDING;

    fn request() -> SubmitVisitRequest {
        SubmitVisitRequest {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "555".to_string(),
            date: "2024-01-01".to_string(),
            time_slot: "10:00".to_string(),
            contact_methods: vec!["email".to_string()],
            message: String::new(),
            property_id: Some("prop-7".to_string()),
        }
    }

    #[tokio::test]
    async fn test_booking_stores_pending_visit() {
        let state = test_state().await;

        let resp = submit_visit(State(state.clone()), Json(request()))
            .await
            .unwrap();
        assert!(resp.0.success);

        let stored = database::visit::get_visit(state.db.pool(), &resp.0.visit_id)
            .await
            .unwrap();
        assert_eq!(stored.payment_status, PAYMENT_PENDING);
        assert_eq!(stored.property_id.as_deref(), Some("prop-7"));
    }

    #[tokio::test]
    async fn test_missing_required_field_writes_nothing() {
        let state = test_state().await;

        for blank in ["name", "email", "phone", "date", "timeSlot"] {
            let mut req = request();
            match blank {
                "name" => req.name = String::new(),
                "email" => req.email = String::new(),
                "phone" => req.phone = "  ".to_string(),
                "date" => req.date = String::new(),
                _ => req.time_slot = String::new(),
            }

            let result = submit_visit(State(state.clone()), Json(req)).await;
            assert!(matches!(result, Err(ApiError::Validation(_))));
        }

        assert_eq!(
            database::visit::count_visits(state.db.pool()).await.unwrap(),
            0
        );
    }
}
