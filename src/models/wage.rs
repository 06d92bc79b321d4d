//! Wage change records.
//!
//! A member's wage records form a piecewise-constant step function over time:
//! each record sets the daily wage from its effective date until a later
//! record supersedes it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Builds the identity key of a wage record: one per member per effective date.
pub fn wage_id(member_id: &str, effective_date: NaiveDate) -> String {
    format!("wage-{}-{}", member_id, effective_date.format("%Y-%m-%d"))
}

/// A change to a member's daily wage.
///
/// # Example
///
/// ```
/// use wage_tracker::models::WageRecord;
/// use rust_decimal::Decimal;
/// use chrono::NaiveDate;
///
/// let record = WageRecord::new("m1", Decimal::from(500), NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
/// assert_eq!(record.id, "wage-m1-2023-01-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageRecord {
    /// `wage-{member_id}-{YYYY-MM-DD}`.
    pub id: String,
    /// The member whose wage changes.
    pub member_id: String,
    /// The daily wage from `effective_date` onward.
    pub wage: Decimal,
    /// The first day this wage applies.
    pub effective_date: NaiveDate,
}

impl WageRecord {
    /// Creates a record with its identity key derived from member and date.
    pub fn new(member_id: impl Into<String>, wage: Decimal, effective_date: NaiveDate) -> Self {
        let member_id = member_id.into();
        Self {
            id: wage_id(&member_id, effective_date),
            member_id,
            wage,
            effective_date,
        }
    }
}
