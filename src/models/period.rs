//! Summary period model.
//!
//! This module contains the [`SummaryPeriod`] type used to scope attendance
//! and payment lookups for a summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// An inclusive range of calendar days over which attendance and payments are
/// aggregated. Usually a calendar month.
///
/// # Example
///
/// ```
/// use wage_tracker::models::SummaryPeriod;
/// use chrono::NaiveDate;
///
/// let period = SummaryPeriod::month(2024, 2).unwrap();
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryPeriod {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl SummaryPeriod {
    /// Creates a period from explicit bounds.
    ///
    /// Returns `InvalidPeriod` if `start_date` is after `end_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> TrackerResult<Self> {
        if start_date > end_date {
            return Err(TrackerError::InvalidPeriod {
                message: format!("start date {} is after end date {}", start_date, end_date),
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Creates the period covering a whole calendar month.
    ///
    /// Returns `InvalidPeriod` if the month is not in `1..=12` or the year is
    /// out of range.
    pub fn month(year: i32, month: u32) -> TrackerResult<Self> {
        let invalid = || TrackerError::InvalidPeriod {
            message: format!("no such month: {}-{:02}", year, month),
        };

        let start_date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let end_date = next_month
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let period = SummaryPeriod::month(2023, 1).unwrap();
        assert_eq!(period.start_date, date(2023, 1, 1));
        assert_eq!(period.end_date, date(2023, 1, 31));
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let period = SummaryPeriod::month(2023, 12).unwrap();
        assert_eq!(period.end_date, date(2023, 12, 31));
    }

    #[test]
    fn test_february_non_leap_year() {
        let period = SummaryPeriod::month(2023, 2).unwrap();
        assert_eq!(period.end_date, date(2023, 2, 28));
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        assert!(matches!(
            SummaryPeriod::month(2023, 13),
            Err(TrackerError::InvalidPeriod { .. })
        ));
        assert!(matches!(
            SummaryPeriod::month(2023, 0),
            Err(TrackerError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_reversed_bounds_are_rejected() {
        let result = SummaryPeriod::new(date(2023, 2, 1), date(2023, 1, 1));
        assert!(matches!(result, Err(TrackerError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_single_day_period() {
        let period = SummaryPeriod::new(date(2023, 5, 5), date(2023, 5, 5)).unwrap();
        assert_eq!(period.start_date, period.end_date);
        assert!(period.contains_date(date(2023, 5, 5)));
    }

    #[test]
    fn test_contains_date_edges() {
        let period = SummaryPeriod::month(2023, 3).unwrap();
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
        assert!(!period.contains_date(date(2023, 2, 28)));
        assert!(!period.contains_date(date(2023, 4, 1)));
    }

    #[test]
    fn test_serialize_period() {
        let period = SummaryPeriod::month(2023, 1).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start_date\":\"2023-01-01\""));
        assert!(json.contains("\"end_date\":\"2023-01-31\""));
    }
}
