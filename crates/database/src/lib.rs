//! SQLite persistence layer for the estate marketing backend.
//!
//! This crate provides async database operations for accounts, visit
//! requests, and the payment ledger using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{account, password, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:estate.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Register an account
//!     let new = account::NewAccount {
//!         email: "bob@example.com".to_string(),
//!         password_hash: password::hash_password("secret")?,
//!         name: "Bob".to_string(),
//!         phone: "555-0100".to_string(),
//!         address: "12 Hill Rd".to_string(),
//!     };
//!     account::create_account(db.pool(), &new).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod account;
pub mod error;
pub mod ledger;
pub mod models;
pub mod password;
pub mod validation;
pub mod visit;

pub use error::{DatabaseError, Result};
pub use models::{Account, LedgerEntry, Visit, PAYMENT_PAID, PAYMENT_PENDING};
pub use validation::ValidationError;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 20;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/estate.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::NewAccount;
    use crate::ledger::NewLedgerEntry;
    use crate::visit::NewVisit;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    fn sample_visit(id: &str) -> NewVisit {
        NewVisit {
            id: id.to_string(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "555".to_string(),
            date: "2024-01-01".to_string(),
            time_slot: "10:00".to_string(),
            contact_methods: vec!["email".to_string(), "phone".to_string()],
            message: String::new(),
            property_id: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let db = test_db().await;

        let first = NewAccount {
            email: "alice@example.com".to_string(),
            password_hash: "$2b$10$fakefakefakefakefakefake".to_string(),
            name: "Alice".to_string(),
            phone: "555-0101".to_string(),
            address: "1 Main St".to_string(),
        };
        account::create_account(db.pool(), &first).await.unwrap();

        // Same email, all other fields different.
        let second = NewAccount {
            email: "alice@example.com".to_string(),
            password_hash: "$2b$10$otherotherotherotherothe".to_string(),
            name: "Someone Else".to_string(),
            phone: "555-0202".to_string(),
            address: "2 Side St".to_string(),
        };
        let result = account::create_account(db.pool(), &second).await;
        assert!(matches!(
            result,
            Err(DatabaseError::AlreadyExists { entity: "Account", .. })
        ));
        assert_eq!(account::count_accounts(db.pool()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let db = test_db().await;

        let new = NewAccount {
            email: "Bob@example.com".to_string(),
            password_hash: "$2b$10$fakefakefakefakefakefake".to_string(),
            name: "Bob".to_string(),
            phone: "555-0100".to_string(),
            address: "12 Hill Rd".to_string(),
        };
        account::create_account(db.pool(), &new).await.unwrap();

        assert!(account::get_account(db.pool(), "Bob@example.com").await.is_ok());
        assert!(matches!(
            account::get_account(db.pool(), "bob@example.com").await,
            Err(DatabaseError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_visit_payment_flow() {
        let db = test_db().await;

        visit::create_visit(db.pool(), &sample_visit("v-1")).await.unwrap();

        let stored = visit::get_visit(db.pool(), "v-1").await.unwrap();
        assert_eq!(stored.payment_status, PAYMENT_PENDING);
        assert_eq!(stored.contact_methods, r#"["email","phone"]"#);
        assert!(stored.order_id.is_none());

        visit::attach_order(db.pool(), "v-1", "order_123").await.unwrap();

        let entry = NewLedgerEntry {
            amount: 50_000,
            payment_id: "pay_abc".to_string(),
            order_id: "order_123".to_string(),
            method: "UPI".to_string(),
        };
        ledger::record_payment(db.pool(), &entry).await.unwrap();

        // Ledger row exists and the visit transitioned in the same step.
        let recorded = ledger::get_entry(db.pool(), "pay_abc").await.unwrap();
        assert_eq!(recorded.status, PAYMENT_PAID);
        assert_eq!(recorded.order_id, "order_123");

        let paid = visit::get_visit(db.pool(), "v-1").await.unwrap();
        assert_eq!(paid.payment_status, PAYMENT_PAID);
        assert_eq!(paid.payment_id.as_deref(), Some("pay_abc"));
    }

    #[tokio::test]
    async fn test_duplicate_payment_rejected() {
        let db = test_db().await;

        visit::create_visit(db.pool(), &sample_visit("v-2")).await.unwrap();
        visit::attach_order(db.pool(), "v-2", "order_456").await.unwrap();

        let entry = NewLedgerEntry {
            amount: 50_000,
            payment_id: "pay_dup".to_string(),
            order_id: "order_456".to_string(),
            method: "UPI".to_string(),
        };
        ledger::record_payment(db.pool(), &entry).await.unwrap();

        let replay = ledger::record_payment(db.pool(), &entry).await;
        assert!(matches!(
            replay,
            Err(DatabaseError::AlreadyExists { entity: "Payment", .. })
        ));
        assert_eq!(ledger::count_entries(db.pool()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_paid_visit_never_reverts() {
        let db = test_db().await;

        visit::create_visit(db.pool(), &sample_visit("v-3")).await.unwrap();
        visit::attach_order(db.pool(), "v-3", "order_789").await.unwrap();

        let first = NewLedgerEntry {
            amount: 50_000,
            payment_id: "pay_one".to_string(),
            order_id: "order_789".to_string(),
            method: "UPI".to_string(),
        };
        ledger::record_payment(db.pool(), &first).await.unwrap();

        // Different payment id against the same order: ledger accepts it,
        // but the visit keeps its original payment.
        let second = NewLedgerEntry {
            payment_id: "pay_two".to_string(),
            ..first.clone()
        };
        ledger::record_payment(db.pool(), &second).await.unwrap();

        let paid = visit::get_visit(db.pool(), "v-3").await.unwrap();
        assert_eq!(paid.payment_status, PAYMENT_PAID);
        assert_eq!(paid.payment_id.as_deref(), Some("pay_one"));
    }

    #[tokio::test]
    async fn test_same_slot_double_booking_succeeds() {
        // Known gap: nothing serializes concurrent bookings for the same
        // date/time slot. Both writes succeed independently.
        let db = test_db().await;

        visit::create_visit(db.pool(), &sample_visit("v-4")).await.unwrap();
        visit::create_visit(db.pool(), &sample_visit("v-5")).await.unwrap();

        assert_eq!(visit::count_visits(db.pool()).await.unwrap(), 2);
    }
}
