//! Monthly summary calculation.
//!
//! This module rolls a member's attendance and payments for a period up into
//! days worked, amount earned, amount paid and outstanding balance.

use rust_decimal::Decimal;

use crate::error::TrackerError;
use crate::models::{
    AttendanceEntry, AttendanceRecord, Member, MemberSummary, PaymentRecord, SummaryLine,
    WageRecord,
};

use super::intake::validate_attendance;
use super::wage_lookup::{sort_descending, wage_on};

/// A summary together with its per-day lines and any dropped entries.
#[derive(Debug)]
pub struct SummaryBreakdown {
    /// The calculated summary.
    pub summary: MemberSummary,
    /// One line per attendance record, sorted by date.
    pub lines: Vec<SummaryLine>,
    /// Attendance entries dropped at intake.
    pub skipped: Vec<TrackerError>,
}

/// Computes a member's summary for a period.
///
/// `attendance` and `payments` must already be scoped by the caller to the
/// member and period of interest; no filtering happens here. `wage_history` is
/// the member's entire history in any order, since a wage that took effect
/// before the period can still govern days inside it.
///
/// Each attendance record adds its status multiplier to `total_days`, and
/// multiplier times the wage in effect on its date to `total_earned`. Days
/// before the first wage record count as worked but earn nothing. The
/// function holds no state and never fails: sums that would overflow
/// saturate at `Decimal::MAX` or `Decimal::MIN`.
///
/// # Examples
///
/// ```
/// use wage_tracker::calculation::compute_summary;
/// use wage_tracker::models::{AttendanceRecord, AttendanceStatus, Member, WageRecord};
/// use rust_decimal::Decimal;
/// use chrono::NaiveDate;
///
/// let member = Member { id: "m1".into(), name: "Rajesh".into(), group_id: None, avatar_url: None };
/// let day = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();
/// let attendance = vec![AttendanceRecord::new("m1", day, AttendanceStatus::Full, "staff1")];
/// let wages = vec![WageRecord::new("m1", Decimal::from(500), NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())];
///
/// let summary = compute_summary(&member, &attendance, &[], &wages);
/// assert_eq!(summary.total_earned, Decimal::from(500));
/// assert_eq!(summary.balance, Decimal::from(500));
/// ```
pub fn compute_summary(
    member: &Member,
    attendance: &[AttendanceRecord],
    payments: &[PaymentRecord],
    wage_history: &[WageRecord],
) -> MemberSummary {
    let sorted_wages = sort_descending(wage_history);

    let mut total_days = Decimal::ZERO;
    let mut total_earned = Decimal::ZERO;

    for record in attendance {
        let multiplier = record.status.multiplier();
        total_days = total_days.saturating_add(multiplier);
        if let Some(daily_wage) = wage_on(&sorted_wages, record.date) {
            total_earned = total_earned.saturating_add(daily_wage.saturating_mul(multiplier));
        }
    }

    let total_paid = payments
        .iter()
        .fold(Decimal::ZERO, |sum, p| sum.saturating_add(p.amount));

    MemberSummary {
        member: member.clone(),
        total_days,
        total_earned,
        total_paid,
        balance: total_earned.saturating_sub(total_paid),
        skipped_records: 0,
    }
}

/// Builds the per-day breakdown of a summary, sorted by date.
pub fn summary_lines(
    attendance: &[AttendanceRecord],
    wage_history: &[WageRecord],
) -> Vec<SummaryLine> {
    let sorted_wages = sort_descending(wage_history);

    let mut lines: Vec<SummaryLine> = attendance
        .iter()
        .map(|record| {
            let multiplier = record.status.multiplier();
            let daily_wage = wage_on(&sorted_wages, record.date).unwrap_or(Decimal::ZERO);
            SummaryLine {
                date: record.date,
                status: record.status,
                label: record.status.label().to_string(),
                multiplier,
                daily_wage,
                amount: daily_wage.saturating_mul(multiplier),
            }
        })
        .collect();

    lines.sort_by_key(|line| line.date);
    lines
}

/// Computes a summary and its per-day lines from typed records.
pub fn compute_summary_with_lines(
    member: &Member,
    attendance: &[AttendanceRecord],
    payments: &[PaymentRecord],
    wage_history: &[WageRecord],
) -> SummaryBreakdown {
    SummaryBreakdown {
        summary: compute_summary(member, attendance, payments, wage_history),
        lines: summary_lines(attendance, wage_history),
        skipped: Vec::new(),
    }
}

/// Computes a summary from raw attendance entries.
///
/// Entries whose status is outside the fixed enumeration contribute zero days
/// and zero earnings. They are reported in [`SummaryBreakdown::skipped`] and
/// counted in [`MemberSummary::skipped_records`].
pub fn compute_summary_from_entries(
    member: &Member,
    entries: Vec<AttendanceEntry>,
    payments: &[PaymentRecord],
    wage_history: &[WageRecord],
) -> SummaryBreakdown {
    let intake = validate_attendance(entries);
    let skipped_records = intake.skipped_count();

    let mut breakdown = compute_summary_with_lines(member, &intake.records, payments, wage_history);
    breakdown.summary.skipped_records = skipped_records;
    breakdown.skipped = intake.skipped;
    breakdown
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::models::AttendanceStatus;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use proptest::prelude::*;

    fn status_strategy() -> impl Strategy<Value = AttendanceStatus> {
        prop_oneof![
            Just(AttendanceStatus::Full),
            Just(AttendanceStatus::Half),
            Just(AttendanceStatus::OneAndAHalf),
            Just(AttendanceStatus::Absent),
        ]
    }

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
    }

    proptest! {
        #[test]
        fn balance_is_earned_minus_paid(
            days in prop::collection::vec((0i64..365, status_strategy()), 0..40),
            wages in prop::collection::vec((0i64..365, 0i64..200_000), 0..6),
            paid in prop::collection::vec(1i64..500_000, 0..10),
        ) {
            let member = Member {
                id: "m1".to_string(),
                name: "Prop".to_string(),
                group_id: None,
                avatar_url: None,
            };
            let attendance: Vec<AttendanceRecord> = days
                .iter()
                .map(|(offset, status)| {
                    AttendanceRecord::new("m1", base_date() + Duration::days(*offset), *status, "s1")
                })
                .collect();
            let wage_history: Vec<WageRecord> = wages
                .iter()
                .map(|(offset, paise)| {
                    WageRecord::new("m1", Decimal::new(*paise, 2), base_date() + Duration::days(*offset))
                })
                .collect();
            let payments: Vec<PaymentRecord> = paid
                .iter()
                .enumerate()
                .map(|(i, paise)| PaymentRecord {
                    id: format!("p{}", i),
                    member_id: "m1".to_string(),
                    date: base_date(),
                    amount: Decimal::new(*paise, 2),
                    recorded_by_id: "s1".to_string(),
                    recorded_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
                })
                .collect();

            let summary = compute_summary(&member, &attendance, &payments, &wage_history);

            prop_assert_eq!(summary.balance, summary.total_earned - summary.total_paid);
            prop_assert!(summary.total_days >= Decimal::ZERO);
            prop_assert!(summary.total_earned >= Decimal::ZERO);
        }
    }
}
