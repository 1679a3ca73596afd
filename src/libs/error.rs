//! Domain errors raised by the record model, the stores and the session.
//!
//! Every variant except [`TaskError::ResourceUnavailable`],
//! [`TaskError::StoreFormat`] and [`TaskError::LoginAttemptsExceeded`] is
//! recoverable: the interactive layer reports it and prompts again.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Date '{0}' is not valid, expected format YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Username '{0}' does not exist")]
    UnknownUser(String),

    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    #[error("Task number {index} is out of range, choose between 1 and {len}")]
    SelectionOutOfRange { index: String, len: usize },

    #[error("Cannot access {}: {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record in {} at line {line}: {reason}", .path.display())]
    StoreFormat { path: PathBuf, line: usize, reason: String },

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Login failed {0} times in a row, session terminated")]
    LoginAttemptsExceeded(u32),
}

impl TaskError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TaskError::ResourceUnavailable { path: path.into(), source }
    }

    /// Whether an interactive prompt should simply ask again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            TaskError::ResourceUnavailable { .. } | TaskError::StoreFormat { .. } | TaskError::LoginAttemptsExceeded(_)
        )
    }
}
