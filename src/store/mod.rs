//! Storage capability for members, groups, users and ledger records.
//!
//! The calculator never touches storage. Callers fetch records through a
//! [`LedgerStore`] and hand them over in memory. [`InMemoryStore`] is the
//! bundled implementation; any persistence engine can stand in for it by
//! implementing the trait.

mod memory;

pub use memory::InMemoryStore;

use chrono::NaiveDate;

use crate::error::TrackerResult;
use crate::models::{
    AttendanceRecord, Group, Member, MemberUpdate, NewMember, NewPayment, PaymentRecord,
    SummaryPeriod, User, WageRecord,
};

/// CRUD contract the rest of the crate relies on.
///
/// Lookups by id fail with the matching `*NotFound` error. Attendance and
/// wages are upserts keyed by (member, day) and (member, effective date);
/// payments are append-only.
pub trait LedgerStore: Send + Sync {
    /// Returns every member in creation order.
    fn list_members(&self) -> TrackerResult<Vec<Member>>;

    /// Returns a member by id.
    fn get_member(&self, id: &str) -> TrackerResult<Member>;

    /// Creates a member with a generated id.
    fn create_member(&self, new_member: NewMember) -> TrackerResult<Member>;

    /// Inserts or replaces a member with a caller-chosen id.
    fn insert_member(&self, member: Member) -> TrackerResult<Member>;

    /// Applies a partial update to a member.
    fn update_member(&self, id: &str, update: MemberUpdate) -> TrackerResult<Member>;

    /// Returns every group in creation order.
    fn list_groups(&self) -> TrackerResult<Vec<Group>>;

    /// Creates a group with a generated id.
    fn create_group(&self, name: &str) -> TrackerResult<Group>;

    /// Inserts or replaces a group with a caller-chosen id.
    fn insert_group(&self, group: Group) -> TrackerResult<Group>;

    /// Renames a group.
    fn update_group(&self, id: &str, name: &str) -> TrackerResult<Group>;

    /// Deletes a group and unsets it on every member assigned to it.
    ///
    /// Returns the number of members that were unassigned.
    fn delete_group(&self, id: &str) -> TrackerResult<usize>;

    /// Returns a member's attendance within a period, sorted by date.
    fn list_attendance(
        &self,
        member_id: &str,
        period: &SummaryPeriod,
    ) -> TrackerResult<Vec<AttendanceRecord>>;

    /// Returns every member's attendance for one day.
    fn list_attendance_on(&self, date: NaiveDate) -> TrackerResult<Vec<AttendanceRecord>>;

    /// Returns a member's payments within a period, sorted by date.
    fn list_payments(
        &self,
        member_id: &str,
        period: &SummaryPeriod,
    ) -> TrackerResult<Vec<PaymentRecord>>;

    /// Returns every member's payments for one day.
    fn list_payments_on(&self, date: NaiveDate) -> TrackerResult<Vec<PaymentRecord>>;

    /// Returns a member's full wage history, most recent effective date first.
    ///
    /// Never filtered by period.
    fn list_wage_history(&self, member_id: &str) -> TrackerResult<Vec<WageRecord>>;

    /// Writes attendance for a member and day, replacing any earlier status.
    fn upsert_attendance(&self, record: AttendanceRecord) -> TrackerResult<AttendanceRecord>;

    /// Appends a payment.
    fn append_payment(&self, payment: NewPayment) -> TrackerResult<PaymentRecord>;

    /// Writes a wage change, replacing any record with the same effective date.
    fn upsert_wage(&self, record: WageRecord) -> TrackerResult<WageRecord>;

    /// Returns a user by id.
    fn get_user(&self, id: &str) -> TrackerResult<User>;

    /// Inserts or replaces a user.
    fn insert_user(&self, user: User) -> TrackerResult<User>;
}
