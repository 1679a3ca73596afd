use super::store::{Line, Store};
use crate::libs::error::TaskError;
use crate::libs::task::{format_date, parse_date, Task, STATUS_COMPLETE, STATUS_ONGOING};
use std::path::{Path, PathBuf};

pub const TASKS_FILE_NAME: &str = "tasks.txt";

const FIELD_COUNT: usize = 6;

/// The task file: `owner;heading;description;start_date;due_date;status`.
#[derive(Debug, Clone)]
pub struct Tasks {
    store: Store,
}

impl Tasks {
    pub fn new(path: impl Into<PathBuf>) -> Tasks {
        Tasks { store: Store::new(path) }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Loads the whole collection in file order.
    ///
    /// A missing or empty file is an empty collection. The status must be
    /// exactly `Complete` or `Ongoing`.
    pub fn load(&self) -> Result<Vec<Task>, TaskError> {
        self.store.read()?.iter().map(|line| self.parse(line)).collect()
    }

    /// Overwrites the file with `tasks`.
    pub fn save(&self, tasks: &[Task]) -> Result<(), TaskError> {
        self.store.overwrite(tasks.iter().map(|task| {
            [
                task.owner.clone(),
                task.heading.clone(),
                task.description.clone(),
                format_date(&task.start_date),
                format_date(&task.due_date),
                task.status().to_string(),
            ]
        }))?;

        tracing::info!(path = %self.path().display(), tasks = tasks.len(), "tasks saved");
        Ok(())
    }

    fn parse(&self, line: &Line) -> Result<Task, TaskError> {
        let fields = &line.fields;
        if fields.len() != FIELD_COUNT {
            return Err(self.store.format_error(
                line.number,
                format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            ));
        }

        let date = |index: usize, name: &str| {
            parse_date(&fields[index]).map_err(|_| {
                self.store.format_error(line.number, format!("invalid {} '{}'", name, &fields[index]))
            })
        };
        let start_date = date(3, "start date")?;
        let due_date = date(4, "due date")?;

        let completed = match &fields[5] {
            STATUS_COMPLETE => true,
            STATUS_ONGOING => false,
            other => {
                return Err(self.store.format_error(
                    line.number,
                    format!("unknown status '{}', expected '{}' or '{}'", other, STATUS_COMPLETE, STATUS_ONGOING),
                ))
            }
        };

        Ok(Task {
            owner: fields[0].to_string(),
            heading: fields[1].to_string(),
            description: fields[2].to_string(),
            start_date,
            due_date,
            completed,
        })
    }
}
