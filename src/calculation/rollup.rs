//! Rollups across members.
//!
//! Aggregates member summaries into period totals and builds the per-day
//! overview of who was present and how much was paid.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    AttendanceRecord, DayOverview, Member, MemberDayEntry, MemberSummary, PaymentRecord,
    PeriodTotals,
};

/// Sums a set of member summaries into period-wide totals.
pub fn summarize_period(summaries: &[MemberSummary]) -> PeriodTotals {
    summaries
        .iter()
        .fold(PeriodTotals::default(), |mut totals, summary| {
            totals.member_count += 1;
            totals.total_days = totals.total_days.saturating_add(summary.total_days);
            totals.total_earned = totals.total_earned.saturating_add(summary.total_earned);
            totals.total_paid = totals.total_paid.saturating_add(summary.total_paid);
            totals.total_balance = totals.total_balance.saturating_add(summary.balance);
            totals
        })
}

/// Builds the overview of a single day.
///
/// `attendance` and `payments` are the records dated `date`, for any member.
/// A member counts as present when their recorded status is anything but
/// absent; members with no record are counted separately.
pub fn day_overview(
    members: &[Member],
    attendance: &[AttendanceRecord],
    payments: &[PaymentRecord],
    date: NaiveDate,
) -> DayOverview {
    let by_member: HashMap<&str, &AttendanceRecord> = attendance
        .iter()
        .filter(|a| a.date == date)
        .map(|a| (a.member_id.as_str(), a))
        .collect();

    let mut paid_by_member: HashMap<&str, Decimal> = HashMap::new();
    for payment in payments.iter().filter(|p| p.date == date) {
        let paid = paid_by_member
            .entry(payment.member_id.as_str())
            .or_insert(Decimal::ZERO);
        *paid = paid.saturating_add(payment.amount);
    }

    let mut present = 0;
    let mut absent = 0;
    let mut unrecorded = 0;

    let entries: Vec<MemberDayEntry> = members
        .iter()
        .map(|member| {
            let record = by_member.get(member.id.as_str()).copied();
            match record {
                Some(r) if r.status.is_present() => present += 1,
                Some(_) => absent += 1,
                None => unrecorded += 1,
            }
            MemberDayEntry {
                member: member.clone(),
                attendance: record.cloned(),
                paid_today: paid_by_member
                    .get(member.id.as_str())
                    .copied()
                    .unwrap_or(Decimal::ZERO),
            }
        })
        .collect();

    let paid_total = entries
        .iter()
        .fold(Decimal::ZERO, |sum, e| sum.saturating_add(e.paid_today));

    DayOverview {
        date,
        present,
        absent,
        unrecorded,
        total: members.len(),
        paid_total,
        members: entries,
    }
}
