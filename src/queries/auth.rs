//! API key validation and user login.

use tracing::info;

use crate::config;
use crate::error::{BricksetError, Result};
use crate::gateway::Gateway;
use crate::models::Session;

const KEY_OK: &str = "OK";
const LOGIN_INVALID: &str = "INVALID";
const LOGIN_ERROR_PREFIX: &str = "ERROR";

/// Query interface for the `checkKey` and `login` endpoints.
pub struct AuthQuery<'a> {
    gw: &'a Gateway,
}

impl<'a> AuthQuery<'a> {
    pub fn new(gw: &'a Gateway) -> Self {
        Self { gw }
    }

    /// Check that the configured API key is accepted by the service.
    pub fn validate_key(&self) -> Result<()> {
        let answer = self.gw.get_string(config::CHECK_KEY, Vec::new())?;
        if answer == KEY_OK {
            Ok(())
        } else {
            Err(BricksetError::InvalidApiKey)
        }
    }

    /// Log in and return a session holding the user hash.
    pub fn login(&self, username: &str, password: &str) -> Result<Session> {
        let params = vec![
            ("username", username.to_string()),
            ("password", password.to_string()),
        ];
        let hash = self.gw.get_string(config::LOGIN, params)?;
        if hash.is_empty() || hash == LOGIN_INVALID || hash.starts_with(LOGIN_ERROR_PREFIX) {
            return Err(BricksetError::InvalidLogin);
        }
        info!(username, "Logged in to Brickset");
        Ok(Session::new(username, hash))
    }
}
