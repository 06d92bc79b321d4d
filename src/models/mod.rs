//! Core data models for the wage tracker.
//!
//! This module contains all the domain models used throughout the crate.

mod attendance;
mod member;
mod money;
mod payment;
mod period;
mod summary;
mod user;
mod wage;

pub use attendance::{
    AttendanceEntry, AttendanceRecord, AttendanceStatus, UnknownStatus, attendance_id,
};
pub use member::{Group, Member, MemberUpdate, NewMember};
pub use money::{MAX_AMOUNT, validate_payment, validate_wage};
pub use payment::{NewPayment, PaymentRecord};
pub use period::SummaryPeriod;
pub use summary::{
    DayOverview, MemberDayEntry, MemberSummary, MemberWithWage, PeriodSummary, PeriodTotals,
    SummaryLine, SummaryReport, SummaryWarning,
};
pub use user::{User, UserRole};
pub use wage::{WageRecord, wage_id};
