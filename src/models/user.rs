//! Users who record entries, and their roles.

use serde::{Deserialize, Serialize};

/// What a user may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Manages members, groups and wages, and views summaries.
    Admin,
    /// Records daily attendance and payments.
    Staff,
}

/// A person operating the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier, stamped on recorded entries.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// The user's role.
    pub role: UserRole,
    /// Inactive users cannot record anything.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl User {
    /// Returns true if the user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
