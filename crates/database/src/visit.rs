//! Visit request persistence.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Visit;

/// Fields required to book a visit. The id is generated by the caller so
/// it can be returned to the client for later correlation.
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time_slot: String,
    pub contact_methods: Vec<String>,
    pub message: String,
    pub property_id: Option<String>,
}

/// Create a new visit request with payment status PENDING.
pub async fn create_visit(pool: &SqlitePool, visit: &NewVisit) -> Result<()> {
    let contact_methods = serde_json::to_string(&visit.contact_methods)?;

    sqlx::query(
        r#"
        INSERT INTO visits (id, name, email, phone, date, time_slot,
                            contact_methods, message, property_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&visit.id)
    .bind(&visit.name)
    .bind(&visit.email)
    .bind(&visit.phone)
    .bind(&visit.date)
    .bind(&visit.time_slot)
    .bind(&contact_methods)
    .bind(&visit.message)
    .bind(&visit.property_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get a visit by id.
pub async fn get_visit(pool: &SqlitePool, id: &str) -> Result<Visit> {
    sqlx::query_as::<_, Visit>(
        r#"
        SELECT id, name, email, phone, date, time_slot, contact_methods,
               message, property_id, payment_status, payment_id, order_id,
               created_at
        FROM visits
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Visit",
        id: id.to_string(),
    })
}

/// Record the gateway order created for a visit, so the payment callback
/// can be correlated back to it.
pub async fn attach_order(pool: &SqlitePool, visit_id: &str, order_id: &str) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE visits
        SET order_id = ?
        WHERE id = ?
        "#,
    )
    .bind(order_id)
    .bind(visit_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Visit",
            id: visit_id.to_string(),
        });
    }

    Ok(())
}

/// Count total visit requests.
pub async fn count_visits(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM visits
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
