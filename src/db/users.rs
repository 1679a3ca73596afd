use super::store::Store;
use crate::libs::credential::Credential;
use crate::libs::error::TaskError;
use std::path::PathBuf;

pub const USERS_FILE_NAME: &str = "user.txt";

/// Registered credentials, in file order.
#[derive(Debug, Clone)]
pub struct Users {
    store: Store,
    credentials: Vec<Credential>,
}

impl Users {
    /// Loads the credential store. A missing file yields no users.
    pub fn open(path: impl Into<PathBuf>) -> Result<Users, TaskError> {
        let store = Store::new(path);
        let mut credentials: Vec<Credential> = Vec::new();

        for line in store.read()? {
            if line.fields.len() != 2 {
                return Err(store.format_error(
                    line.number,
                    format!("expected 'username;password', found {} field(s)", line.fields.len()),
                ));
            }

            let credential = Credential::new(&line.fields[0], &line.fields[1]);
            if credentials.iter().any(|c| c.username == credential.username) {
                tracing::warn!(username = %credential.username, line = line.number, "duplicate username ignored");
                continue;
            }
            credentials.push(credential);
        }

        Ok(Users { store, credentials })
    }

    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    pub fn get(&self, username: &str) -> Option<&Credential> {
        self.credentials.iter().find(|c| c.username == username)
    }

    pub fn exists(&self, username: &str) -> bool {
        self.get(username).is_some()
    }

    pub fn ensure_exists(&self, username: &str) -> Result<(), TaskError> {
        if self.exists(username) {
            Ok(())
        } else {
            Err(TaskError::UnknownUser(username.to_string()))
        }
    }

    /// Checks the password of this particular user.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.get(username).is_some_and(|c| c.verify(password))
    }

    /// Adds a new user and appends it to the credential file.
    pub fn register(&mut self, username: &str, password: &str, confirmation: &str) -> Result<(), TaskError> {
        if self.exists(username) {
            return Err(TaskError::UsernameTaken(username.to_string()));
        }
        if password != confirmation {
            return Err(TaskError::PasswordMismatch);
        }

        self.store.append([username, password])?;
        self.credentials.push(Credential::new(username, password));

        tracing::info!(username, "user registered");
        Ok(())
    }
}
