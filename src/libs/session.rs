//! Login handling for an interactive session.

use super::error::TaskError;
use super::messages::Message;
use crate::db::users::Users;
use crate::{msg_error, msg_success, msg_warning};
use anyhow::Result;

/// Default number of failed logins before the session is terminated.
pub const DEFAULT_LOGIN_ATTEMPTS: u32 = 5;

/// Countdown of the failed logins still allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginAttempts {
    limit: u32,
    remaining: u32,
}

impl LoginAttempts {
    pub fn new(limit: u32) -> Self {
        LoginAttempts { limit, remaining: limit }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Records one failed login and returns how many are left.
    pub fn fail(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn exhausted(&self) -> bool {
        self.remaining == 0
    }
}

impl Default for LoginAttempts {
    fn default() -> Self {
        LoginAttempts::new(DEFAULT_LOGIN_ATTEMPTS)
    }
}

/// Asks for credentials until they match a registered user.
///
/// `ask` supplies one `(username, password)` pair per attempt. Every failure
/// reports the remaining attempts; once none are left the login fails with
/// [`TaskError::LoginAttemptsExceeded`]. Returns the logged-in username.
pub fn login<F>(users: &Users, attempts: &mut LoginAttempts, mut ask: F) -> Result<String>
where
    F: FnMut() -> Result<(String, String)>,
{
    while !attempts.exhausted() {
        let (username, password) = ask()?;

        if users.authenticate(&username, &password) {
            tracing::info!(username = %username, "login succeeded");
            msg_success!(Message::LoginSuccessful);
            return Ok(username);
        }

        tracing::debug!(username = %username, "login failed");
        msg_error!(Message::LoginFailed);
        let remaining = attempts.fail();
        if remaining > 0 {
            msg_warning!(Message::LoginAttemptsRemaining(remaining));
        }
    }

    Err(TaskError::LoginAttemptsExceeded(attempts.limit()).into())
}
