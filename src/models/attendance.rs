//! Attendance models.
//!
//! This module defines the closed [`AttendanceStatus`] enumeration, the typed
//! [`AttendanceRecord`] used by the store and the calculator, and the raw
//! [`AttendanceEntry`] wire form whose status has not been validated yet.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How much of a working day a member was present for.
///
/// The day multiplier is a fixed table, never stored per record.
///
/// # Example
///
/// ```
/// use wage_tracker::models::AttendanceStatus;
/// use rust_decimal::Decimal;
///
/// assert_eq!(AttendanceStatus::Half.multiplier(), Decimal::new(5, 1));
/// assert_eq!("one_and_a_half".parse::<AttendanceStatus>(), Ok(AttendanceStatus::OneAndAHalf));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// A full day (1.0).
    Full,
    /// Half a day (0.5).
    Half,
    /// A day and a half (1.5).
    OneAndAHalf,
    /// Not present (0).
    Absent,
}

impl AttendanceStatus {
    /// Every status, in display order.
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Full,
        AttendanceStatus::Half,
        AttendanceStatus::OneAndAHalf,
        AttendanceStatus::Absent,
    ];

    /// Returns the number of days this status counts for.
    pub fn multiplier(self) -> Decimal {
        match self {
            AttendanceStatus::Full => Decimal::ONE,
            AttendanceStatus::Half => Decimal::new(5, 1),
            AttendanceStatus::OneAndAHalf => Decimal::new(15, 1),
            AttendanceStatus::Absent => Decimal::ZERO,
        }
    }

    /// Returns the label shown on attendance badges.
    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Full => "1 Day",
            AttendanceStatus::Half => "0.5 Day",
            AttendanceStatus::OneAndAHalf => "1.5 Day",
            AttendanceStatus::Absent => "Absent",
        }
    }

    /// Returns the wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Full => "full",
            AttendanceStatus::Half => "half",
            AttendanceStatus::OneAndAHalf => "one_and_a_half",
            AttendanceStatus::Absent => "absent",
        }
    }

    /// Returns true for every status except [`AttendanceStatus::Absent`].
    pub fn is_present(self) -> bool {
        self != AttendanceStatus::Absent
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a raw status is outside the fixed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown attendance status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for AttendanceStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttendanceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Builds the identity key of an attendance record: one per member per day.
pub fn attendance_id(date: NaiveDate, member_id: &str) -> String {
    format!("{}-{}", date.format("%Y-%m-%d"), member_id)
}

/// A typed attendance record.
///
/// The `id` is derived from the date and member, so writing another status for
/// the same member and day replaces the earlier record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// `YYYY-MM-DD-{member_id}`.
    pub id: String,
    /// The member this record belongs to.
    pub member_id: String,
    /// The calendar day.
    pub date: NaiveDate,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
    /// The user who recorded the entry.
    pub recorded_by_id: String,
}

impl AttendanceRecord {
    /// Creates a record with its identity key derived from date and member.
    pub fn new(
        member_id: impl Into<String>,
        date: NaiveDate,
        status: AttendanceStatus,
        recorded_by_id: impl Into<String>,
    ) -> Self {
        let member_id = member_id.into();
        Self {
            id: attendance_id(date, &member_id),
            member_id,
            date,
            status,
            recorded_by_id: recorded_by_id.into(),
        }
    }
}

/// An attendance entry as it arrives from outside, before status validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The member this entry belongs to.
    pub member_id: String,
    /// The calendar day.
    pub date: NaiveDate,
    /// The raw status value.
    pub status: String,
    /// The user who recorded the entry.
    #[serde(default)]
    pub recorded_by_id: String,
}

impl AttendanceEntry {
    /// Parses the raw status into a typed [`AttendanceRecord`].
    pub fn parse(self) -> Result<AttendanceRecord, UnknownStatus> {
        let status = self.status.parse::<AttendanceStatus>()?;
        Ok(AttendanceRecord::new(
            self.member_id,
            self.date,
            status,
            self.recorded_by_id,
        ))
    }
}
