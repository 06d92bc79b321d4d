//! Summary result models.
//!
//! This module contains the [`MemberSummary`] produced by the calculator and
//! the larger views built around it: per-day [`SummaryLine`]s, the
//! [`SummaryReport`] returned by the API, period-wide [`PeriodTotals`], and
//! the [`DayOverview`] of who worked on a given day.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttendanceRecord, AttendanceStatus, Member, SummaryPeriod};

/// Earned, paid and outstanding amounts for one member over one period.
///
/// `balance` is `total_earned - total_paid`. Positive means money is owed to
/// the member; negative means the member was overpaid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    /// The member the summary is for.
    pub member: Member,
    /// Days worked, weighted by attendance status.
    pub total_days: Decimal,
    /// Sum of day multiplier times wage in effect for each attendance record.
    pub total_earned: Decimal,
    /// Sum of all payments.
    pub total_paid: Decimal,
    /// `total_earned - total_paid`, unclamped.
    pub balance: Decimal,
    /// Attendance entries dropped at intake because their status was unknown.
    #[serde(default)]
    pub skipped_records: u32,
}

/// One attendance day's contribution to a summary.
///
/// # Example
///
/// ```
/// use wage_tracker::models::{AttendanceStatus, SummaryLine};
/// use rust_decimal::Decimal;
/// use chrono::NaiveDate;
///
/// let line = SummaryLine {
///     date: NaiveDate::from_ymd_opt(2023, 1, 11).unwrap(),
///     status: AttendanceStatus::Half,
///     label: AttendanceStatus::Half.label().to_string(),
///     multiplier: Decimal::new(5, 1),
///     daily_wage: Decimal::from(500),
///     amount: Decimal::from(250),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    /// The attendance day.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
    /// Badge label for the status.
    pub label: String,
    /// Days counted for the status.
    pub multiplier: Decimal,
    /// Wage in effect on `date`; zero when no wage was set yet.
    pub daily_wage: Decimal,
    /// `multiplier * daily_wage`.
    pub amount: Decimal,
}

/// A warning raised while building a summary.
///
/// Warnings never stop a summary from being produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryWarning {
    /// A code identifying the kind of warning.
    pub code: String,
    /// A human-readable description.
    pub message: String,
}

/// The complete answer to a summary request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// The version of the tracker that produced the report.
    pub engine_version: String,
    /// The period the inputs were scoped to, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<SummaryPeriod>,
    /// The calculated summary.
    pub summary: MemberSummary,
    /// Per-day breakdown, sorted by date.
    pub lines: Vec<SummaryLine>,
    /// Warnings about the inputs.
    #[serde(default)]
    pub warnings: Vec<SummaryWarning>,
}

/// Totals across every member's summary for one period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Number of member summaries aggregated.
    pub member_count: usize,
    /// Sum of `total_days`.
    pub total_days: Decimal,
    /// Sum of `total_earned`.
    pub total_earned: Decimal,
    /// Sum of `total_paid`.
    pub total_paid: Decimal,
    /// Sum of `balance`; the amount due across the workforce.
    pub total_balance: Decimal,
}

/// All member summaries for a period plus their totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The period summarised.
    pub period: SummaryPeriod,
    /// One summary per member.
    pub summaries: Vec<MemberSummary>,
    /// Aggregated totals.
    pub totals: PeriodTotals,
}

/// A member's entries for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDayEntry {
    /// The member.
    pub member: Member,
    /// The attendance recorded for the day, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<AttendanceRecord>,
    /// Sum of payments made that day.
    pub paid_today: Decimal,
}

/// Who worked and who was paid on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOverview {
    /// The day described.
    pub date: NaiveDate,
    /// Members with any status other than absent.
    pub present: usize,
    /// Members recorded as absent.
    pub absent: usize,
    /// Members with no attendance recorded.
    pub unrecorded: usize,
    /// All members.
    pub total: usize,
    /// Sum of payments made that day across all members.
    pub paid_total: Decimal,
    /// Per-member entries, in member order.
    pub members: Vec<MemberDayEntry>,
}

/// A member together with the wage in effect on a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberWithWage {
    /// The member.
    pub member: Member,
    /// The daily wage in effect, zero when none is set.
    pub current_wage: Decimal,
    /// Effective date of the wage record in force, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
}
