//! Calculation logic for the wage tracker.
//!
//! This module contains the monthly summary calculator, the wage step-function
//! lookup it relies on, attendance intake that turns raw statuses into typed
//! records, and rollups across members and days.

mod intake;
mod rollup;
mod summary;
mod wage_lookup;

pub use intake::{AttendanceIntake, validate_attendance};
pub use rollup::{day_overview, summarize_period};
pub use summary::{
    SummaryBreakdown, compute_summary, compute_summary_from_entries, compute_summary_with_lines,
    summary_lines,
};
pub use wage_lookup::{current_record, current_wage, record_on, sort_descending, wage_on};
