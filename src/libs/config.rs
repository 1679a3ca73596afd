//! Configuration management for the taskr application.
//!
//! Settings live in `config.json` inside the platform application directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\taskr\taskr\config.json`
//! - **macOS**: `~/Library/Application Support/taskr/taskr/config.json`
//! - **Linux**: `~/.local/share/taskr/taskr/config.json`
//!
//! A missing file is not an error; every setting has a default. `taskr init`
//! runs [`Config::init`] to edit the values interactively.
//!
//! ```rust,no_run
//! use taskr::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.login_attempts = 3;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::{DataStorage, DOCUMENTS_DIR_NAME};
use super::messages::Message;
use super::session::DEFAULT_LOGIN_ATTEMPTS;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

fn default_login_attempts() -> u32 {
    DEFAULT_LOGIN_ATTEMPTS
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Directory holding `user.txt`, `tasks.txt` and the report files.
    /// Defaults to `documents` inside the application directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_dir: Option<PathBuf>,

    /// Failed logins allowed before an interactive session is terminated.
    #[serde(default = "default_login_attempts")]
    pub login_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            documents_dir: None,
            login_attempts: DEFAULT_LOGIN_ATTEMPTS,
        }
    }
}

impl Config {
    /// Reads the configuration from the application directory, falling back
    /// to defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Storage for the user, task and report files.
    ///
    /// `override_dir` (the `--data-dir` flag) wins over the configured
    /// directory, which wins over the default.
    pub fn documents(&self, override_dir: Option<&Path>) -> DataStorage {
        match override_dir.or(self.documents_dir.as_deref()) {
            Some(dir) => DataStorage::at(dir),
            None => DataStorage::at(DataStorage::new().base_path().join(DOCUMENTS_DIR_NAME)),
        }
    }

    /// Runs the interactive configuration wizard, starting from the current
    /// values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let default_dir = current.documents(None).base_path().display().to_string();

        msg_print!(Message::ConfigModuleStorage, true);
        let documents_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDocumentsDir.to_string())
            .default(default_dir)
            .interact_text()?;

        msg_print!(Message::ConfigModuleSession, true);
        let range_msg = Message::LoginAttemptsRange.to_string();
        let login_attempts: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLoginAttempts.to_string())
            .default(current.login_attempts)
            .validate_with(|input: &u32| -> Result<(), &str> {
                if *input >= 1 {
                    Ok(())
                } else {
                    Err(range_msg.as_str())
                }
            })
            .interact_text()?;

        Ok(Config {
            documents_dir: Some(PathBuf::from(documents_dir.trim())),
            login_attempts,
        })
    }
}
