use std::fmt;

use serde::{Deserialize, Serialize};

/// An authenticated user session returned by login.
///
/// Pass it to operations that can scope results to a user. The user hash is
/// not printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    username: String,
    user_hash: String,
}

impl Session {
    pub fn new(username: impl Into<String>, user_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            user_hash: user_hash.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn user_hash(&self) -> &str {
        &self.user_hash
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("user_hash", &"<redacted>")
            .finish()
    }
}
