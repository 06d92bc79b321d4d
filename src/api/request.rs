//! Request types for the wage tracker API.
//!
//! This module defines the JSON bodies and query strings the endpoints accept
//! and their conversions into domain types.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{AttendanceEntry, Member, PaymentRecord, SummaryPeriod, WageRecord};

/// Request body for the stateless `/calculate` endpoint.
///
/// Carries everything the calculator needs. Attendance statuses are raw
/// strings; unknown values are reported as warnings rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The member the summary is for.
    pub member: Member,
    /// The period the records were scoped to, if the caller knows it.
    #[serde(default)]
    pub period: Option<PeriodRequest>,
    /// Attendance entries, already scoped to the member and period.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
    /// Payments, already scoped to the member and period.
    #[serde(default)]
    pub payments: Vec<PaymentRequest>,
    /// The member's full wage history, in any order.
    #[serde(default)]
    pub wage_history: Vec<WageRequest>,
}

/// An explicit date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// First day (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
}

impl PeriodRequest {
    /// Validates the range.
    pub fn into_period(self) -> TrackerResult<SummaryPeriod> {
        SummaryPeriod::new(self.start_date, self.end_date)
    }
}

/// A payment inside a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Optional caller-side id.
    #[serde(default)]
    pub id: Option<String>,
    /// Day of the payment.
    pub date: NaiveDate,
    /// Amount paid.
    pub amount: Decimal,
    /// Who recorded it.
    #[serde(default)]
    pub recorded_by_id: String,
}

impl PaymentRequest {
    /// Converts into a payment record for `member_id`.
    pub fn into_record(self, member_id: &str) -> PaymentRecord {
        PaymentRecord {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            member_id: member_id.to_string(),
            date: self.date,
            amount: self.amount,
            recorded_by_id: self.recorded_by_id,
            recorded_at: Utc::now(),
        }
    }
}

/// A wage change, used both in calculation requests and `PUT .../wages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WageRequest {
    /// Daily wage.
    pub wage: Decimal,
    /// First day the wage applies.
    pub effective_date: NaiveDate,
}

impl WageRequest {
    /// Converts into a wage record for `member_id`.
    pub fn into_record(self, member_id: &str) -> WageRecord {
        WageRecord::new(member_id, self.wage, self.effective_date)
    }
}

/// Body of `PUT /members/{id}/attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// Day of attendance; today when omitted.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Raw status; must be one of the fixed values.
    pub status: String,
}

/// Body of `POST /members/{id}/payments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentEntryRequest {
    /// Day of the payment; today when omitted.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Amount paid.
    pub amount: Decimal,
}

/// Body of `POST /groups` and `PATCH /groups/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRequest {
    /// Group name.
    pub name: String,
}

/// Returns the trimmed name, or `InvalidField` when it is blank.
pub fn require_name(name: &str) -> TrackerResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::InvalidField {
            field: "name".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// `?year=YYYY&month=M` query string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonthQuery {
    /// Calendar year.
    pub year: i32,
    /// Month, 1 to 12.
    pub month: u32,
}

impl MonthQuery {
    /// Returns the period covering the month.
    pub fn period(self) -> TrackerResult<SummaryPeriod> {
        SummaryPeriod::month(self.year, self.month)
    }
}

/// `?date=YYYY-MM-DD` query string; today when omitted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DateQuery {
    /// The reference day.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Returns the given date, or today in UTC.
pub fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Utc::now().date_naive())
}
