//! User domain model

use serde::{Deserialize, Serialize};

/// Built-in account that always exists outside the registry
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "123";

/// A registered username/password pair, stored as-is in `registeredUsers`
///
/// Passwords are kept in plaintext; this is a local convenience login,
/// not a security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn admin() -> Self {
        Self::new(ADMIN_USERNAME, ADMIN_PASSWORD)
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// The authenticated identity, persisted under `currentUser`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Session state as seen by front-ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "username", rename_all = "snake_case")]
pub enum SessionState {
    Unauthenticated,
    Authenticated(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_match_is_case_sensitive() {
        let creds = Credentials::new("Alice", "pw");
        assert!(creds.matches("Alice", "pw"));
        assert!(!creds.matches("alice", "pw"));
        assert!(!creds.matches("Alice", "PW"));
    }

    #[test]
    fn test_user_json_shape() {
        let json = serde_json::to_string(&User::new("admin")).unwrap();
        assert_eq!(json, r#"{"username":"admin"}"#);
    }
}
