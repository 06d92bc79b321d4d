//! Attendance intake.
//!
//! Raw attendance entries carry their status as a string. Intake parses them
//! into typed records before anything reaches the calculator, so the
//! arithmetic only ever sees the closed [`AttendanceStatus`] enum. Entries
//! with a status outside the enumeration are dropped, logged and counted;
//! they contribute nothing to a summary and never fail it.
//!
//! [`AttendanceStatus`]: crate::models::AttendanceStatus

use tracing::warn;

use crate::error::TrackerError;
use crate::models::{AttendanceEntry, AttendanceRecord};

/// The outcome of validating a batch of raw attendance entries.
#[derive(Debug, Default)]
pub struct AttendanceIntake {
    /// Entries whose status parsed.
    pub records: Vec<AttendanceRecord>,
    /// One error per dropped entry, in input order.
    pub skipped: Vec<TrackerError>,
}

impl AttendanceIntake {
    /// Number of dropped entries.
    pub fn skipped_count(&self) -> u32 {
        u32::try_from(self.skipped.len()).unwrap_or(u32::MAX)
    }
}

/// Parses raw entries into typed records, dropping unknown statuses.
///
/// # Examples
///
/// ```
/// use wage_tracker::calculation::validate_attendance;
/// use wage_tracker::models::AttendanceEntry;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();
/// let entries = vec![
///     AttendanceEntry { member_id: "m1".into(), date, status: "full".into(), recorded_by_id: "s1".into() },
///     AttendanceEntry { member_id: "m1".into(), date, status: "triple".into(), recorded_by_id: "s1".into() },
/// ];
/// let intake = validate_attendance(entries);
/// assert_eq!(intake.records.len(), 1);
/// assert_eq!(intake.skipped_count(), 1);
/// ```
pub fn validate_attendance<I>(entries: I) -> AttendanceIntake
where
    I: IntoIterator<Item = AttendanceEntry>,
{
    let mut intake = AttendanceIntake::default();

    for entry in entries {
        let member_id = entry.member_id.clone();
        let date = entry.date;
        match entry.parse() {
            Ok(record) => intake.records.push(record),
            Err(unknown) => {
                warn!(
                    member_id = %member_id,
                    date = %date,
                    status = %unknown.0,
                    "Skipping attendance entry with unknown status"
                );
                intake.skipped.push(TrackerError::UnknownAttendanceStatus {
                    status: unknown.0,
                    member_id,
                    date,
                });
            }
        }
    }

    intake
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use chrono::NaiveDate;

    fn entry(day: u32, status: &str) -> AttendanceEntry {
        AttendanceEntry {
            member_id: "m1".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            status: status.to_string(),
            recorded_by_id: "staff1".to_string(),
        }
    }

    #[test]
    fn test_all_known_statuses_pass() {
        let intake = validate_attendance(vec![
            entry(1, "full"),
            entry(2, "half"),
            entry(3, "one_and_a_half"),
            entry(4, "absent"),
        ]);
        assert_eq!(intake.records.len(), 4);
        assert!(intake.skipped.is_empty());
        assert_eq!(intake.records[2].status, AttendanceStatus::OneAndAHalf);
    }

    #[test]
    fn test_unknown_status_is_skipped_with_context() {
        let intake = validate_attendance(vec![entry(1, "full"), entry(2, "overtime")]);
        assert_eq!(intake.records.len(), 1);
        assert_eq!(intake.skipped_count(), 1);
        match &intake.skipped[0] {
            TrackerError::UnknownAttendanceStatus {
                status,
                member_id,
                date,
            } => {
                assert_eq!(status, "overtime");
                assert_eq!(member_id, "m1");
                assert_eq!(*date, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
            }
            other => panic!("Expected UnknownAttendanceStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let intake = validate_attendance(Vec::new());
        assert!(intake.records.is_empty());
        assert_eq!(intake.skipped_count(), 0);
    }
}
