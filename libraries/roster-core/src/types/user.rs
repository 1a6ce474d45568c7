//! User domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identifier, assigned by the storage layer
pub type UserId = i64;

/// User account as exposed to clients
///
/// Carries no password field; the hash lives only in [`UserCredentials`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Login key, unique across users
    pub username: String,

    /// Contact address, unique across users
    pub email: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Login key
    pub username: String,
    /// Contact address
    pub email: String,
    /// Salted password hash, never plaintext
    pub password_hash: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Full replacement of the mutable user fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUser {
    /// Display name
    pub name: String,
    /// Login key
    pub username: String,
    /// Contact address
    pub email: String,
}

/// Stored login material for a single user
#[derive(Debug, Clone)]
pub struct UserCredentials {
    /// Owning user
    pub user_id: UserId,
    /// Login key
    pub username: String,
    /// bcrypt hash of the password
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_user_serializes_camel_case_without_password() {
        let user = User {
            id: 1,
            name: "Ann".to_string(),
            username: "ann1".to_string(),
            email: "ann@x.com".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["createdAt"], "2024-05-01T12:00:00Z");
        assert!(value.get("created_at").is_none());
        assert!(value.get("password").is_none());
        assert_eq!(value["username"], "ann1");
    }
}
