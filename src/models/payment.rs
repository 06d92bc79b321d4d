//! Payment records.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment made to a member. Payments are append-only; several on the same
/// day are all counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Generated identifier.
    pub id: String,
    /// The member who was paid.
    pub member_id: String,
    /// The calendar day of the payment.
    pub date: NaiveDate,
    /// The amount paid.
    pub amount: Decimal,
    /// The user who recorded the payment.
    pub recorded_by_id: String,
    /// When the payment was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Fields for appending a payment. The store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayment {
    /// The member who was paid.
    pub member_id: String,
    /// The calendar day of the payment.
    pub date: NaiveDate,
    /// The amount paid; must be positive.
    pub amount: Decimal,
    /// The user who recorded the payment.
    pub recorded_by_id: String,
}
