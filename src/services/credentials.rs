//! Credential store
//!
//! Holds login id / password pairs and answers exact-match authentication
//! checks. There is no hashing, lockout or rate limiting.

use crate::models::{User, UserId};

/// In-memory store of user credentials
#[derive(Debug, Default)]
pub struct CredentialStore {
    users: Vec<User>,
}

impl CredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a credential with the next sequential id
    ///
    /// Duplicate login ids are not checked.
    pub fn add_user(&mut self, login_id: impl Into<String>, password: impl Into<String>) -> UserId {
        let id = UserId::new(self.users.len() as u32 + 1);
        let user = User::new(id, login_id, password);
        tracing::debug!(user_id = %id, login_id = %user.login_id, "added user");
        self.users.push(user);
        id
    }

    /// True iff some stored credential matches both fields exactly
    pub fn authenticate(&self, login_id: &str, password: &str) -> bool {
        self.users.iter().any(|u| u.matches(login_id, password))
    }
}
