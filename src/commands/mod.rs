pub mod init;
pub mod report;
pub mod session;
pub mod tasks;

use crate::db::tasks::{Tasks, TASKS_FILE_NAME};
use crate::db::users::{Users, USERS_FILE_NAME};
use crate::libs::config::Config;
use crate::libs::report::Reports;
use crate::libs::session::LoginAttempts;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Log in and open the interactive menu (default)")]
    Session,
    #[command(about = "Generate the report files")]
    Report(report::ReportArgs),
    #[command(about = "Display the task list")]
    Tasks(tasks::TasksArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the user, task and report files
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Init) => init::cmd(),
            Some(Commands::Report(args)) => report::cmd(args, &Workspace::resolve(cli.data_dir.as_deref())?),
            Some(Commands::Tasks(args)) => tasks::cmd(args, &Workspace::resolve(cli.data_dir.as_deref())?),
            Some(Commands::Session) | None => session::cmd(&Workspace::resolve(cli.data_dir.as_deref())?),
        }
    }
}

/// File locations and limits for one run, resolved from the configuration.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub users_path: PathBuf,
    pub tasks_path: PathBuf,
    pub reports_dir: PathBuf,
    pub login_attempts: u32,
}

impl Workspace {
    pub fn resolve(data_dir: Option<&Path>) -> Result<Workspace> {
        let config = Config::read()?;
        Self::from_config(&config, data_dir)
    }

    pub fn from_config(config: &Config, data_dir: Option<&Path>) -> Result<Workspace> {
        let documents = config.documents(data_dir);
        let resolve = |name: &str| {
            documents
                .get_path(name)
                .with_context(|| format!("Cannot create directory {}", documents.base_path().display()))
        };

        let workspace = Workspace {
            users_path: resolve(USERS_FILE_NAME)?,
            tasks_path: resolve(TASKS_FILE_NAME)?,
            reports_dir: documents.base_path().to_path_buf(),
            login_attempts: config.login_attempts.max(1),
        };
        tracing::debug!(?workspace, "workspace resolved");
        Ok(workspace)
    }

    pub fn users(&self) -> Result<Users> {
        Ok(Users::open(&self.users_path)?)
    }

    pub fn tasks(&self) -> Tasks {
        Tasks::new(&self.tasks_path)
    }

    pub fn reports(&self) -> Reports {
        Reports::new(&self.reports_dir)
    }

    pub fn login_attempts(&self) -> LoginAttempts {
        LoginAttempts::new(self.login_attempts)
    }
}
