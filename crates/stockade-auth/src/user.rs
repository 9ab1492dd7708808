//! User account types.

use serde::{Deserialize, Serialize};

/// Access role attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including account management.
    Admin,
    /// Read-only access to inventory pages.
    Viewer,
}

impl Role {
    /// Get the display name for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Viewer => "viewer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered account.
///
/// Records are immutable once created; there are no update or delete
/// operations. The plaintext password never appears here, only its digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Opaque unique id.
    pub id: String,
    /// Username, unique under case-insensitive comparison.
    pub username: String,
    /// Hex digest of the password.
    pub password_hash: String,
    /// Access role.
    pub role: Role,
}

impl UserRecord {
    /// Creates a record with a fresh unique id.
    pub fn new(username: String, password_hash: String, role: Role) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            username,
            password_hash,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = UserRecord::new("alice".into(), "digest".into(), Role::Admin);
        let b = UserRecord::new("alice".into(), "digest".into(), Role::Admin);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_record_json_shape() {
        let record = UserRecord {
            id: "abc".into(),
            username: "alice".into(),
            password_hash: "00ff".into(),
            role: Role::Viewer,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"passwordHash\":\"00ff\""));
        assert!(json.contains("\"role\":\"viewer\""));

        let back: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Viewer.to_string(), "viewer");
    }
}
