//! Configuration loading functionality.
//!
//! This module loads the server configuration from `tracker.yaml` and the seed
//! data that populates a store at startup.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::calculation::validate_attendance;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{AttendanceEntry, Group, Member, NewPayment, User, WageRecord};
use crate::store::LedgerStore;

use super::types::{
    AttendanceFile, GroupsFile, MembersFile, PaymentsFile, SeedWage, TrackerConfig, UsersFile,
    WagesFile,
};

/// Loads and parses a YAML file.
fn load_yaml<T: DeserializeOwned>(path: &Path) -> TrackerResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| TrackerError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| TrackerError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}

/// Loads a YAML file if it exists.
fn load_optional_yaml<T: DeserializeOwned>(path: &Path) -> TrackerResult<Option<T>> {
    if path.exists() {
        load_yaml(path).map(Some)
    } else {
        Ok(None)
    }
}

impl TrackerConfig {
    /// Loads the server configuration from a YAML file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wage_tracker::config::TrackerConfig;
    ///
    /// let config = TrackerConfig::load("./config/tracker.yaml")?;
    /// println!("Listening on {}", config.bind_address);
    /// # Ok::<(), wage_tracker::error::TrackerError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        load_yaml(path.as_ref())
    }
}

/// What a [`SeedLoader`] wrote into a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Users inserted.
    pub users: usize,
    /// Groups inserted.
    pub groups: usize,
    /// Members inserted.
    pub members: usize,
    /// Wage records written.
    pub wages: usize,
    /// Attendance records written.
    pub attendance: usize,
    /// Payments appended.
    pub payments: usize,
    /// Attendance entries dropped for an unknown status.
    pub skipped_attendance: usize,
}

/// Seed data read from a directory of YAML files.
///
/// # Directory Structure
///
/// ```text
/// config/seed/
/// ├── users.yaml       # Admin and staff users
/// ├── groups.yaml      # Member groups
/// ├── members.yaml     # Tracked members
/// ├── wages.yaml       # Wage history
/// ├── attendance.yaml  # Optional attendance entries
/// └── payments.yaml    # Optional payments
/// ```
///
/// # Example
///
/// ```no_run
/// use wage_tracker::config::SeedLoader;
/// use wage_tracker::store::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let report = SeedLoader::load("./config/seed")?.apply(&store)?;
/// println!("Seeded {} members", report.members);
/// # Ok::<(), wage_tracker::error::TrackerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SeedLoader {
    users: Vec<User>,
    groups: Vec<Group>,
    members: Vec<Member>,
    wages: Vec<SeedWage>,
    attendance: Vec<AttendanceEntry>,
    payments: Vec<NewPayment>,
}

impl SeedLoader {
    /// Reads seed files from the given directory.
    ///
    /// Returns `ConfigNotFound` if a required file is missing and
    /// `ConfigParseError` if any file is not valid YAML for its shape.
    pub fn load<P: AsRef<Path>>(dir: P) -> TrackerResult<Self> {
        let dir = dir.as_ref();

        let users = load_yaml::<UsersFile>(&dir.join("users.yaml"))?.users;
        let groups = load_yaml::<GroupsFile>(&dir.join("groups.yaml"))?.groups;
        let members = load_yaml::<MembersFile>(&dir.join("members.yaml"))?.members;
        let wages = load_yaml::<WagesFile>(&dir.join("wages.yaml"))?.wages;
        let attendance = load_optional_yaml::<AttendanceFile>(&dir.join("attendance.yaml"))?
            .map(|f| f.attendance)
            .unwrap_or_default();
        let payments = load_optional_yaml::<PaymentsFile>(&dir.join("payments.yaml"))?
            .map(|f| f.payments)
            .unwrap_or_default();

        Ok(Self {
            users,
            groups,
            members,
            wages,
            attendance,
            payments,
        })
    }

    /// Writes the seed data into a store.
    ///
    /// Groups are written before members so group references resolve.
    /// Attendance entries with an unknown status are skipped and counted.
    pub fn apply(self, store: &dyn LedgerStore) -> TrackerResult<SeedReport> {
        let mut report = SeedReport::default();

        for user in self.users {
            store.insert_user(user)?;
            report.users += 1;
        }
        for group in self.groups {
            store.insert_group(group)?;
            report.groups += 1;
        }
        for member in self.members {
            store.insert_member(member)?;
            report.members += 1;
        }
        for wage in self.wages {
            store.upsert_wage(WageRecord::new(wage.member_id, wage.wage, wage.effective_date))?;
            report.wages += 1;
        }

        let intake = validate_attendance(self.attendance);
        report.skipped_attendance = intake.skipped.len();
        for record in intake.records {
            store.upsert_attendance(record)?;
            report.attendance += 1;
        }

        for payment in self.payments {
            store.append_payment(payment)?;
            report.payments += 1;
        }

        if report.skipped_attendance > 0 {
            warn!(
                skipped = report.skipped_attendance,
                "Seed attendance contained unknown statuses"
            );
        }
        info!(
            users = report.users,
            groups = report.groups,
            members = report.members,
            wages = report.wages,
            attendance = report.attendance,
            payments = report.payments,
            "Seed data applied"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, SummaryPeriod};
    use crate::store::InMemoryStore;
    use rust_decimal::Decimal;

    fn seed_path() -> &'static str {
        "./config/seed"
    }

    #[test]
    fn test_load_tracker_config() {
        let config = TrackerConfig::load("./config/tracker.yaml").unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(
            config.seed_dir.as_deref(),
            Some(Path::new("./config/seed"))
        );
    }

    #[test]
    fn test_tracker_config_defaults() {
        let config: TrackerConfig = serde_yaml::from_str("seed_dir: ./seed").unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match SeedLoader::load("/nonexistent/path") {
            Err(TrackerError::ConfigNotFound { path }) => {
                assert!(path.contains("users.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_seed_applies_to_store() {
        let store = InMemoryStore::new();
        let report = SeedLoader::load(seed_path()).unwrap().apply(&store).unwrap();

        assert_eq!(report.users, 3);
        assert_eq!(report.groups, 2);
        assert_eq!(report.members, 4);
        assert_eq!(report.skipped_attendance, 0);

        let m1 = store.get_member("m1").unwrap();
        assert_eq!(m1.name, "Rajesh Kumar");
        assert_eq!(m1.group_id.as_deref(), Some("g1"));
        assert!(store.get_member("m4").unwrap().group_id.is_none());

        let history = store.list_wage_history("m1").unwrap();
        assert_eq!(history[0].wage, Decimal::from(600));

        let period = SummaryPeriod::month(2023, 1).unwrap();
        let attendance = store.list_attendance("m1", &period).unwrap();
        assert_eq!(attendance.len(), 3);
        assert_eq!(attendance[1].status, AttendanceStatus::Half);
    }

    #[test]
    fn test_seed_skips_unknown_statuses() {
        let store = InMemoryStore::new();
        let report = SeedLoader::load("./tests/fixtures/legacy_seed")
            .unwrap()
            .apply(&store)
            .unwrap();

        assert_eq!(report.attendance, 2);
        assert_eq!(report.skipped_attendance, 1);
        assert_eq!(report.payments, 0);
    }
}
