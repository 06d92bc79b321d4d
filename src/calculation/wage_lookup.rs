//! Wage step-function lookup.
//!
//! A member's wage history is a set of effective-dated changes. The wage in
//! effect on a date is the one with the latest effective date on or before
//! that date; before the first record the wage is unset.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::WageRecord;

/// Returns the wage history ordered most recent effective date first.
///
/// The input is not assumed to be sorted.
pub fn sort_descending(history: &[WageRecord]) -> Vec<&WageRecord> {
    let mut sorted: Vec<&WageRecord> = history.iter().collect();
    sorted.sort_by(|a, b| b.effective_date.cmp(&a.effective_date));
    sorted
}

/// Finds the wage record in effect on `date` in a history sorted by
/// [`sort_descending`].
///
/// Never selects a record whose effective date is after `date`.
pub fn record_on<'a>(sorted: &[&'a WageRecord], date: NaiveDate) -> Option<&'a WageRecord> {
    sorted.iter().copied().find(|w| w.effective_date <= date)
}

/// Returns the daily wage in effect on `date`, or `None` if no wage was set yet.
///
/// # Examples
///
/// ```
/// use wage_tracker::calculation::{sort_descending, wage_on};
/// use wage_tracker::models::WageRecord;
/// use rust_decimal::Decimal;
/// use chrono::NaiveDate;
///
/// let history = vec![
///     WageRecord::new("m1", Decimal::from(600), NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()),
///     WageRecord::new("m1", Decimal::from(500), NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
/// ];
/// let sorted = sort_descending(&history);
///
/// let march = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
/// assert_eq!(wage_on(&sorted, march), Some(Decimal::from(500)));
/// ```
pub fn wage_on(sorted: &[&WageRecord], date: NaiveDate) -> Option<Decimal> {
    record_on(sorted, date).map(|w| w.wage)
}

/// Returns the wage in effect on `today` for an unsorted history, or zero.
///
/// Records effective after `today` are scheduled changes, not the current wage.
pub fn current_wage(history: &[WageRecord], today: NaiveDate) -> Decimal {
    current_record(history, today)
        .map(|w| w.wage)
        .unwrap_or(Decimal::ZERO)
}

/// Returns the wage record in effect on `today` for an unsorted history.
pub fn current_record(history: &[WageRecord], today: NaiveDate) -> Option<&WageRecord> {
    history
        .iter()
        .filter(|w| w.effective_date <= today)
        .max_by_key(|w| w.effective_date)
}
