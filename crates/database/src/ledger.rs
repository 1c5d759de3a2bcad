//! Payment ledger persistence.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{LedgerEntry, PAYMENT_PAID, PAYMENT_PENDING};

/// Fields recorded when a payment callback is verified.
#[derive(Debug, Clone)]
pub struct NewLedgerEntry {
    pub amount: i64,
    pub payment_id: String,
    pub order_id: String,
    pub method: String,
}

/// Record a verified payment: insert the ledger entry and mark the visit
/// carrying the same order id as PAID, in a single transaction.
///
/// The UNIQUE constraint on `payment_id` rejects a replayed callback as
/// [`DatabaseError::AlreadyExists`] with nothing committed. A payment
/// whose order was never attached to a visit updates no visit row; the
/// ledger entry is still recorded.
pub async fn record_payment(pool: &SqlitePool, entry: &NewLedgerEntry) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO payment_ledger (amount, payment_id, order_id, method, status)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(entry.amount)
    .bind(&entry.payment_id)
    .bind(&entry.order_id)
    .bind(&entry.method)
    .bind(PAYMENT_PAID)
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Payment",
                    id: entry.payment_id.clone(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    // Guarded transition: PENDING -> PAID happens at most once and never
    // reverts, even if a second callback somehow reaches this point.
    sqlx::query(
        r#"
        UPDATE visits
        SET payment_status = ?, payment_id = ?
        WHERE order_id = ? AND payment_status = ?
        "#,
    )
    .bind(PAYMENT_PAID)
    .bind(&entry.payment_id)
    .bind(&entry.order_id)
    .bind(PAYMENT_PENDING)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(())
}

/// Get a ledger entry by gateway payment id.
pub async fn get_entry(pool: &SqlitePool, payment_id: &str) -> Result<LedgerEntry> {
    sqlx::query_as::<_, LedgerEntry>(
        r#"
        SELECT id, amount, payment_id, order_id, method, status, created_at
        FROM payment_ledger
        WHERE payment_id = ?
        "#,
    )
    .bind(payment_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Payment",
        id: payment_id.to_string(),
    })
}

/// Count total ledger entries.
pub async fn count_entries(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM payment_ledger
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
