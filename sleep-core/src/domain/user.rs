//! User domain model

use serde::{Deserialize, Serialize};

/// Represents an authenticated user
///
/// Wire format matches the mock json-server (`displayName`, `avatarUri`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub avatar_uri: Option<String>,
}

impl User {
    pub fn new(id: u64, email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            display_name: display_name.into(),
            avatar_uri: None,
        }
    }
}

/// Payload for creating a user via `POST /users`
///
/// The password travels to the mock server only; it is never persisted locally.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub display_name: String,
    pub password: String,
    pub avatar_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(3, "test@example.com", "Test");
        assert_eq!(user.id, 3);
        assert_eq!(user.email, "test@example.com");
        assert!(user.avatar_uri.is_none());
    }

    #[test]
    fn test_user_wire_format() {
        let json = r#"{"id":1,"email":"a@b.com","displayName":"Ana","avatarUri":null}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name, "Ana");
    }
}
