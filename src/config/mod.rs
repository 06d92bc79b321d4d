//! Configuration loading for the wage tracker.
//!
//! This module loads the server configuration and the seed data that
//! populates the store, both from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use wage_tracker::config::{SeedLoader, TrackerConfig};
//! use wage_tracker::store::InMemoryStore;
//!
//! let config = TrackerConfig::load("./config/tracker.yaml").unwrap();
//! let store = InMemoryStore::new();
//! if let Some(dir) = &config.seed_dir {
//!     SeedLoader::load(dir).unwrap().apply(&store).unwrap();
//! }
//! ```

mod loader;
mod types;

pub use loader::{SeedLoader, SeedReport};
pub use types::{
    AttendanceFile, GroupsFile, MembersFile, PaymentsFile, SeedWage, TrackerConfig, UsersFile,
    WagesFile,
};
