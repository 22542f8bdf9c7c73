use serde::Deserialize;
use serde::Serialize;

/// Demo user record.
///
/// Carries both the new simplified authorization format (`auto_join_admin`)
/// and the legacy format (`role`, `groups`) on one record. Consumers choose
/// which fields to read; both may be present simultaneously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Opaque stable identifier, unique within the store.
    pub id: String,
    /// Unique email address. Lookups are exact, case-sensitive matches.
    pub email: String,
    /// Opaque password digest as produced by a `PasswordHasher`.
    pub password_hash: String,
    /// New simplified authorization flag (preferred).
    pub auto_join_admin: bool,
    /// Legacy role label, e.g. "admin" or "user".
    pub role: Option<String>,
    /// Legacy group memberships, owned by this record.
    pub groups: Option<Vec<UserGroup>>,
}

/// Group membership entry on a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    /// Category label, e.g. "team" or "organization".
    #[serde(rename = "type")]
    pub group_type: String,
    pub id: String,
    pub name: String,
}

impl UserGroup {
    pub fn new(
        group_type: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            group_type: group_type.into(),
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Hash-free projection of a user record for API responses and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub auto_join_admin: bool,
    pub role: Option<String>,
    pub groups: Option<Vec<UserGroup>>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            auto_join_admin: user.auto_join_admin,
            role: user.role.clone(),
            groups: user.groups.clone(),
        }
    }
}
