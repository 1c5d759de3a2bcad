//! Account persistence.
//!
//! Emails are compared with SQLite's default BINARY collation, so lookups
//! are case-sensitive exact matches.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Account;

/// Fields required to create an account. The password must already be
/// hashed (see [`crate::password`]).
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Create a new account.
///
/// Fails with [`DatabaseError::AlreadyExists`] if the email is taken.
pub async fn create_account(pool: &SqlitePool, account: &NewAccount) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO accounts (email, password_hash, name, phone, address)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&account.email)
    .bind(&account.password_hash)
    .bind(&account.name)
    .bind(&account.phone)
    .bind(&account.address)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Account",
                    id: account.email.clone(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    Ok(())
}

/// Get an account by email.
pub async fn get_account(pool: &SqlitePool, email: &str) -> Result<Account> {
    sqlx::query_as::<_, Account>(
        r#"
        SELECT email, password_hash, name, phone, address, created_at
        FROM accounts
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Account",
        id: email.to_string(),
    })
}

/// Count total accounts.
pub async fn count_accounts(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM accounts
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
