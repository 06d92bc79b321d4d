//! Member and group models.

use serde::{Deserialize, Deserializer, Serialize};

/// A tracked worker whose attendance, pay and wage rate are recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Opaque identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The group this member belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Optional avatar image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Member {
    /// Returns true if the member is assigned to the given group.
    pub fn is_in_group(&self, group_id: &str) -> bool {
        self.group_id.as_deref() == Some(group_id)
    }
}

/// A named collection of members, used for display grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Opaque identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Fields for creating a member. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMember {
    /// Display name.
    pub name: String,
    /// Optional initial group.
    #[serde(default)]
    pub group_id: Option<String>,
    /// Optional avatar image.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A partial update of a member.
///
/// Absent fields are left untouched. For `group_id` and `avatar_url` an
/// explicit `null` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberUpdate {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New group assignment; `Some(None)` removes the member from its group.
    #[serde(default, deserialize_with = "present_or_null")]
    pub group_id: Option<Option<String>>,
    /// New avatar; `Some(None)` clears it.
    #[serde(default, deserialize_with = "present_or_null")]
    pub avatar_url: Option<Option<String>>,
}

impl MemberUpdate {
    /// Applies the update to a member in place.
    pub fn apply_to(self, member: &mut Member) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(group_id) = self.group_id {
            member.group_id = group_id;
        }
        if let Some(avatar_url) = self.avatar_url {
            member.avatar_url = avatar_url;
        }
    }
}

// Distinguishes a missing field (outer None via `default`) from an explicit null.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
