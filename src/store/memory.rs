//! In-memory [`LedgerStore`].
//!
//! All tables live behind one lock so that every mutation, including the
//! group-delete cascade, is applied atomically.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    AttendanceRecord, Group, Member, MemberUpdate, NewMember, NewPayment, PaymentRecord,
    SummaryPeriod, User, WageRecord, validate_payment, validate_wage,
};

use super::LedgerStore;

type MemberDay = (String, NaiveDate);

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<String, User>,
    members: Vec<Member>,
    groups: Vec<Group>,
    attendance: BTreeMap<MemberDay, AttendanceRecord>,
    payments: Vec<PaymentRecord>,
    // Keyed by effective date so each member's history stays ordered at write time.
    wages: BTreeMap<MemberDay, WageRecord>,
}

impl Tables {
    fn member_index(&self, id: &str) -> TrackerResult<usize> {
        self.members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| TrackerError::MemberNotFound { id: id.to_string() })
    }

    fn group_index(&self, id: &str) -> TrackerResult<usize> {
        self.groups
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| TrackerError::GroupNotFound { id: id.to_string() })
    }

    fn ensure_group(&self, group_id: Option<&str>) -> TrackerResult<()> {
        match group_id {
            Some(id) => self.group_index(id).map(|_| ()),
            None => Ok(()),
        }
    }
}

fn member_range(member_id: &str) -> std::ops::RangeInclusive<MemberDay> {
    (member_id.to_string(), NaiveDate::MIN)..=(member_id.to_string(), NaiveDate::MAX)
}

/// A [`LedgerStore`] that keeps everything in process memory.
///
/// # Example
///
/// ```
/// use wage_tracker::models::NewMember;
/// use wage_tracker::store::{InMemoryStore, LedgerStore};
///
/// let store = InMemoryStore::new();
/// let member = store
///     .create_member(NewMember { name: "Amit Patel".into(), group_id: None, avatar_url: None })
///     .unwrap();
/// assert_eq!(store.get_member(&member.id).unwrap().name, "Amit Patel");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for InMemoryStore {
    fn list_members(&self) -> TrackerResult<Vec<Member>> {
        Ok(self.tables.read().members.clone())
    }

    fn get_member(&self, id: &str) -> TrackerResult<Member> {
        let tables = self.tables.read();
        let index = tables.member_index(id)?;
        Ok(tables.members[index].clone())
    }

    fn create_member(&self, new_member: NewMember) -> TrackerResult<Member> {
        let mut tables = self.tables.write();
        tables.ensure_group(new_member.group_id.as_deref())?;

        let member = Member {
            id: Uuid::new_v4().to_string(),
            name: new_member.name,
            group_id: new_member.group_id,
            avatar_url: new_member.avatar_url,
        };
        tables.members.push(member.clone());
        Ok(member)
    }

    fn insert_member(&self, member: Member) -> TrackerResult<Member> {
        let mut tables = self.tables.write();
        tables.ensure_group(member.group_id.as_deref())?;

        match tables.members.iter().position(|m| m.id == member.id) {
            Some(index) => tables.members[index] = member.clone(),
            None => tables.members.push(member.clone()),
        }
        Ok(member)
    }

    fn update_member(&self, id: &str, update: MemberUpdate) -> TrackerResult<Member> {
        let mut tables = self.tables.write();
        let index = tables.member_index(id)?;
        if let Some(Some(group_id)) = &update.group_id {
            tables.ensure_group(Some(group_id))?;
        }

        let member = &mut tables.members[index];
        update.apply_to(member);
        Ok(member.clone())
    }

    fn list_groups(&self) -> TrackerResult<Vec<Group>> {
        Ok(self.tables.read().groups.clone())
    }

    fn create_group(&self, name: &str) -> TrackerResult<Group> {
        let group = Group {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        };
        self.tables.write().groups.push(group.clone());
        Ok(group)
    }

    fn insert_group(&self, group: Group) -> TrackerResult<Group> {
        let mut tables = self.tables.write();
        match tables.groups.iter().position(|g| g.id == group.id) {
            Some(index) => tables.groups[index] = group.clone(),
            None => tables.groups.push(group.clone()),
        }
        Ok(group)
    }

    fn update_group(&self, id: &str, name: &str) -> TrackerResult<Group> {
        let mut tables = self.tables.write();
        let index = tables.group_index(id)?;
        let group = &mut tables.groups[index];
        group.name = name.to_string();
        Ok(group.clone())
    }

    fn delete_group(&self, id: &str) -> TrackerResult<usize> {
        let mut tables = self.tables.write();
        let index = tables.group_index(id)?;
        tables.groups.remove(index);

        let mut unassigned = 0;
        for member in tables.members.iter_mut().filter(|m| m.is_in_group(id)) {
            member.group_id = None;
            unassigned += 1;
        }

        debug!(group_id = %id, unassigned, "Deleted group");
        Ok(unassigned)
    }

    fn list_attendance(
        &self,
        member_id: &str,
        period: &SummaryPeriod,
    ) -> TrackerResult<Vec<AttendanceRecord>> {
        let range = (member_id.to_string(), period.start_date)
            ..=(member_id.to_string(), period.end_date);
        Ok(self
            .tables
            .read()
            .attendance
            .range(range)
            .map(|(_, record)| record.clone())
            .collect())
    }

    fn list_attendance_on(&self, date: NaiveDate) -> TrackerResult<Vec<AttendanceRecord>> {
        Ok(self
            .tables
            .read()
            .attendance
            .values()
            .filter(|a| a.date == date)
            .cloned()
            .collect())
    }

    fn list_payments(
        &self,
        member_id: &str,
        period: &SummaryPeriod,
    ) -> TrackerResult<Vec<PaymentRecord>> {
        let mut payments: Vec<PaymentRecord> = self
            .tables
            .read()
            .payments
            .iter()
            .filter(|p| p.member_id == member_id && period.contains_date(p.date))
            .cloned()
            .collect();
        payments.sort_by_key(|p| p.date);
        Ok(payments)
    }

    fn list_payments_on(&self, date: NaiveDate) -> TrackerResult<Vec<PaymentRecord>> {
        Ok(self
            .tables
            .read()
            .payments
            .iter()
            .filter(|p| p.date == date)
            .cloned()
            .collect())
    }

    fn list_wage_history(&self, member_id: &str) -> TrackerResult<Vec<WageRecord>> {
        Ok(self
            .tables
            .read()
            .wages
            .range(member_range(member_id))
            .rev()
            .map(|(_, record)| record.clone())
            .collect())
    }

    fn upsert_attendance(&self, record: AttendanceRecord) -> TrackerResult<AttendanceRecord> {
        let mut tables = self.tables.write();
        tables.member_index(&record.member_id)?;

        // Rebuild so the id always matches the (member, day) key.
        let record = AttendanceRecord::new(
            record.member_id,
            record.date,
            record.status,
            record.recorded_by_id,
        );
        tables
            .attendance
            .insert((record.member_id.clone(), record.date), record.clone());
        Ok(record)
    }

    fn append_payment(&self, payment: NewPayment) -> TrackerResult<PaymentRecord> {
        validate_payment(payment.amount)?;

        let mut tables = self.tables.write();
        tables.member_index(&payment.member_id)?;

        let record = PaymentRecord {
            id: Uuid::new_v4().to_string(),
            member_id: payment.member_id,
            date: payment.date,
            amount: payment.amount,
            recorded_by_id: payment.recorded_by_id,
            recorded_at: Utc::now(),
        };
        tables.payments.push(record.clone());
        Ok(record)
    }

    fn upsert_wage(&self, record: WageRecord) -> TrackerResult<WageRecord> {
        validate_wage(record.wage)?;

        let mut tables = self.tables.write();
        tables.member_index(&record.member_id)?;

        let record = WageRecord::new(record.member_id, record.wage, record.effective_date);
        tables
            .wages
            .insert((record.member_id.clone(), record.effective_date), record.clone());
        Ok(record)
    }

    fn get_user(&self, id: &str) -> TrackerResult<User> {
        self.tables
            .read()
            .users
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::UserNotFound { id: id.to_string() })
    }

    fn insert_user(&self, user: User) -> TrackerResult<User> {
        self.tables
            .write()
            .users
            .insert(user.id.clone(), user.clone());
        Ok(user)
    }
}
