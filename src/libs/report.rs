//! Report generation: renders overviews into the fixed text format and keeps
//! the report files in the documents directory.
//!
//! The text files are derived artifacts. Nothing reads them back; display
//! code works from [`ReportSnapshot`] records computed from the live
//! collection.

use super::credential::Credential;
use super::error::TaskError;
use super::stats::{TaskOverview, UserOverview};
use super::task::Task;
use crate::db::store::write_atomically;
use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};

pub const TASKS_OVERVIEW_FILE_NAME: &str = "tasks_overview.txt";
pub const USER_OVERVIEW_FILE_NAME: &str = "user_overview.txt";

const RULE: &str = "==================================================";

/// Both overviews computed at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSnapshot {
    pub tasks: TaskOverview,
    pub users: Vec<UserOverview>,
}

impl ReportSnapshot {
    pub fn compute(tasks: &[Task], credentials: &[Credential], today: NaiveDate) -> ReportSnapshot {
        ReportSnapshot {
            tasks: TaskOverview::compute(tasks, today),
            users: UserOverview::compute_all(credentials, tasks, today),
        }
    }
}

/// Text form of the overall overview, as written to `tasks_overview.txt`.
struct TaskOverviewText<'a>(&'a TaskOverview);

impl fmt::Display for TaskOverviewText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let overview = self.0;
        writeln!(f, "*** TASKS OVERVIEW ***")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "TOTAL_TASKS: {}", overview.total)?;
        writeln!(f, "COMPLETED_TASKS: {}", overview.completed)?;
        writeln!(f, "ONGOING_TASKS: {}", overview.ongoing)?;
        writeln!(f, "OVERDUE_TASKS: {}", overview.overdue)?;
        writeln!(f, "PERCENTAGE_ONGOING_TASKS: {}%", overview.percentage_ongoing)?;
        writeln!(f, "PERCENTAGE_OVERDUE_TASKS: {}%", overview.percentage_overdue)
    }
}

/// Text form of the per-user overviews, as written to `user_overview.txt`.
struct UserOverviewText<'a>(&'a [UserOverview]);

impl fmt::Display for UserOverviewText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*** USER OVERVIEW ***")?;
        writeln!(f, "{}", RULE)?;

        for (i, user) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", RULE)?;
            writeln!(f, "STATISTICS_FOR {}", user.username.to_uppercase())?;
            writeln!(f, "{}", RULE)?;
            writeln!(f, "TOTAL_TASKS_ASSIGNED: {}", user.total_assigned)?;
            writeln!(f, "PERCENTAGE_OF_TASKS_ASSIGNED: {}%", user.percentage_assigned)?;
            writeln!(f, "PERCENTAGE_OF_TASKS_COMPLETE: {}%", user.percentage_complete)?;
            writeln!(f, "PERCENTAGE_OF_TASKS_ONGOING: {}%", user.percentage_ongoing)?;
            writeln!(f, "PERCENTAGE_OF_TASKS_OVERDUE: {}%", user.percentage_overdue)?;
        }

        Ok(())
    }
}

pub fn render_task_overview(overview: &TaskOverview) -> String {
    TaskOverviewText(overview).to_string()
}

/// Renders one block per user, in the given order.
pub fn render_user_overview(overviews: &[UserOverview]) -> String {
    UserOverviewText(overviews).to_string()
}

/// Which report files a call to [`Reports::ensure`] had to create.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Generated {
    pub tasks: bool,
    pub users: bool,
}

/// Location of the report files.
#[derive(Debug, Clone)]
pub struct Reports {
    dir: PathBuf,
}

impl Reports {
    pub fn new(dir: impl Into<PathBuf>) -> Reports {
        Reports { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.dir.join(TASKS_OVERVIEW_FILE_NAME)
    }

    pub fn users_path(&self) -> PathBuf {
        self.dir.join(USER_OVERVIEW_FILE_NAME)
    }

    /// Writes both report files, replacing previous versions.
    pub fn generate(&self, snapshot: &ReportSnapshot) -> Result<(), TaskError> {
        self.write_tasks(snapshot)?;
        self.write_users(snapshot)?;
        tracing::info!(dir = %self.dir.display(), "reports generated");
        Ok(())
    }

    /// Writes only the report files that do not exist yet.
    pub fn ensure(&self, snapshot: &ReportSnapshot) -> Result<Generated, TaskError> {
        let mut generated = Generated::default();
        if !self.tasks_path().exists() {
            self.write_tasks(snapshot)?;
            generated.tasks = true;
        }
        if !self.users_path().exists() {
            self.write_users(snapshot)?;
            generated.users = true;
        }
        tracing::debug!(?generated, "report cache checked");
        Ok(generated)
    }

    fn write_tasks(&self, snapshot: &ReportSnapshot) -> Result<(), TaskError> {
        write_report(&self.tasks_path(), &render_task_overview(&snapshot.tasks))
    }

    fn write_users(&self, snapshot: &ReportSnapshot) -> Result<(), TaskError> {
        write_report(&self.users_path(), &render_user_overview(&snapshot.users))
    }
}

fn write_report(path: &Path, text: &str) -> Result<(), TaskError> {
    write_atomically(path, text.as_bytes())
}
