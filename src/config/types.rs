//! Configuration types.
//!
//! This module contains the strongly-typed structures deserialized from the
//! tracker's YAML configuration and seed files.

use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{AttendanceEntry, Group, Member, NewPayment, User};

/// Server configuration from `tracker.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Currency symbol shown next to amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Directory of seed YAML files loaded into the store at startup.
    #[serde(default)]
    pub seed_dir: Option<PathBuf>,
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            log_level: default_log_level(),
            currency_symbol: default_currency_symbol(),
            seed_dir: None,
        }
    }
}

/// `users.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersFile {
    /// Users allowed to operate the tracker.
    pub users: Vec<User>,
}

/// `groups.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupsFile {
    /// Member groups.
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// `members.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MembersFile {
    /// Tracked members.
    pub members: Vec<Member>,
}

/// A wage change as written in `wages.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedWage {
    /// The member whose wage changes.
    pub member_id: String,
    /// The daily wage.
    pub wage: Decimal,
    /// The first day the wage applies.
    pub effective_date: NaiveDate,
}

/// `wages.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct WagesFile {
    /// Wage history entries for any member.
    #[serde(default)]
    pub wages: Vec<SeedWage>,
}

/// `attendance.yaml`. Statuses are raw and validated on load.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceFile {
    /// Attendance entries for any member.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
}

/// `payments.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentsFile {
    /// Payments for any member.
    #[serde(default)]
    pub payments: Vec<NewPayment>,
}
