//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A visit request that has not yet been paid for.
pub const PAYMENT_PENDING: &str = "PENDING";

/// A visit request whose payment callback has been verified.
pub const PAYMENT_PAID: &str = "PAID";

/// A registered account, keyed by email (case-sensitive exact match).
///
/// `password_hash` is a bcrypt hash; the raw password is never stored.
/// The hash is deliberately not serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Email address, unique across all accounts.
    pub email: String,
    /// Bcrypt hash of the password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Postal address.
    pub address: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// A property-visit booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Visit {
    /// UUID generated at booking time.
    pub id: String,
    /// Requester name.
    pub name: String,
    /// Requester email.
    pub email: String,
    /// Requester phone number.
    pub phone: String,
    /// Requested date (as submitted, e.g. "2024-01-01").
    pub date: String,
    /// Requested time slot (e.g. "10:00").
    pub time_slot: String,
    /// Preferred contact methods, stored as a JSON array of labels.
    pub contact_methods: String,
    /// Optional free-text message.
    pub message: String,
    /// Optional property identifier.
    pub property_id: Option<String>,
    /// "PENDING" until a verified payment callback, then "PAID".
    pub payment_status: String,
    /// Gateway payment identifier, set when paid.
    pub payment_id: Option<String>,
    /// Gateway order identifier, set when an order is created for this visit.
    pub order_id: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

/// An immutable record of a confirmed payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LedgerEntry {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Amount in minor units (e.g. paise).
    pub amount: i64,
    /// Gateway payment identifier, unique across the ledger.
    pub payment_id: String,
    /// Gateway order identifier.
    pub order_id: String,
    /// Payment method label.
    pub method: String,
    /// Fixed "PAID" in this flow.
    pub status: String,
    /// Creation timestamp.
    pub created_at: String,
}
