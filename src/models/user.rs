//! User credential model
//!
//! Credentials are kept in memory only. The password is stored as entered
//! and wiped when the credential is dropped.

use std::fmt;

use zeroize::Zeroize;

use super::ids::UserId;

/// A login id / password pair
#[derive(Clone)]
pub struct User {
    /// Sequential identifier
    pub id: UserId,

    /// Login id (the prompt calls it "email id")
    pub login_id: String,

    password: String,
}

impl User {
    /// Create a new credential
    pub fn new(id: UserId, login_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            login_id: login_id.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive match on both login id and password
    pub fn matches(&self, login_id: &str, password: &str) -> bool {
        self.login_id == login_id && self.password == password
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("login_id", &self.login_id)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Drop for User {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_exact() {
        let user = User::new(UserId::FIRST, "test", "test");
        assert!(user.matches("test", "test"));
        assert!(!user.matches("Test", "test"));
        assert!(!user.matches("test", "TEST"));
        assert!(!user.matches("test ", "test"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let user = User::new(UserId::FIRST, "alice", "hunter2");
        let debug = format!("{:?}", user);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }
}
