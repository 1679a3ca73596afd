//! Task record model and the operations performed on the task collection.
//!
//! The collection itself is a plain `Vec<Task>` owned by the session. The
//! functions here borrow it for the duration of one operation and never
//! persist anything; callers save through [`crate::db::tasks::Tasks`].

use super::error::TaskError;
use crate::db::users::Users;
use chrono::NaiveDate;
use std::num::IntErrorKind;

/// Status token written for a finalized task.
pub const STATUS_COMPLETE: &str = "Complete";
/// Status token written for a task that is still open.
pub const STATUS_ONGOING: &str = "Ongoing";
/// Canonical date rendering used by the task store and the views.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A unit of tracked work assigned to one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub owner: String,
    pub heading: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub completed: bool,
}

impl Task {
    pub fn new(owner: &str, heading: &str, description: &str, start_date: NaiveDate, due_date: NaiveDate) -> Self {
        Task {
            owner: owner.to_string(),
            heading: heading.to_string(),
            description: description.to_string(),
            start_date,
            due_date,
            completed: false,
        }
    }

    /// Marks the task as complete. Calling it again changes nothing.
    pub fn finalize(&mut self) {
        self.completed = true;
    }

    /// Hands the task over to another registered user.
    ///
    /// Reassigning to the current owner is allowed. The previous owner is
    /// not recorded anywhere.
    pub fn reassign(&mut self, owner: &str, users: &Users) -> Result<(), TaskError> {
        users.ensure_exists(owner)?;
        self.owner = owner.to_string();
        Ok(())
    }

    /// Moves the due date. A due date before the start date is accepted.
    pub fn reschedule(&mut self, due_date: NaiveDate) {
        self.due_date = due_date;
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }

    pub fn status(&self) -> &'static str {
        if self.completed {
            STATUS_COMPLETE
        } else {
            STATUS_ONGOING
        }
    }
}

/// Parses a `Y-M-D` date where every part is an integer.
///
/// Unpadded parts such as `2024-1-5` are accepted; the day must exist in the
/// given month.
pub fn parse_date(input: &str) -> Result<NaiveDate, TaskError> {
    let invalid = || TaskError::InvalidDateFormat(input.trim().to_string());

    let mut parts = input.trim().split('-');
    let (Some(year), Some(month), Some(day), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let year: i32 = year.trim().parse().map_err(|_| invalid())?;
    let month: u32 = month.trim().parse().map_err(|_| invalid())?;
    let day: u32 = day.trim().parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Creates an ongoing task started today and appends it to the collection.
///
/// Returns the position of the new task. Heading and description may be
/// empty and the due date may lie in the past.
pub fn create_task(
    tasks: &mut Vec<Task>,
    users: &Users,
    owner: &str,
    heading: &str,
    description: &str,
    due_date: NaiveDate,
    today: NaiveDate,
) -> Result<usize, TaskError> {
    users.ensure_exists(owner)?;
    tasks.push(Task::new(owner, heading, description, today, due_date));
    Ok(tasks.len() - 1)
}

/// Tasks owned by `owner`, in collection order.
pub fn filter_by_owner<'a>(tasks: &'a [Task], owner: &'a str) -> impl Iterator<Item = &'a Task> + 'a {
    tasks.iter().filter(move |task| task.owner == owner)
}

/// Positions in `tasks` of the tasks owned by `owner`, in collection order.
///
/// This is the backing list of the "my tasks" view: displayed number `n`
/// refers to `tasks[positions[n - 1]]`.
pub fn owned_positions(tasks: &[Task], owner: &str) -> Vec<usize> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| task.owner == owner)
        .map(|(position, _)| position)
        .collect()
}

/// Outcome of choosing an entry from a numbered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Back,
    Task(usize),
}

/// Token that leaves the selection prompt without choosing a task.
pub const SELECTION_BACK: &str = "b";

/// Resolves a 1-based displayed number into a position of the source
/// collection.
pub fn select(view: &[usize], token: &str) -> Result<Selection, TaskError> {
    let token = token.trim();
    if token.eq_ignore_ascii_case(SELECTION_BACK) {
        return Ok(Selection::Back);
    }

    let out_of_range = || TaskError::SelectionOutOfRange { index: token.to_string(), len: view.len() };
    let index: i64 = match token.parse() {
        Ok(index) => index,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => return Err(out_of_range()),
        Err(_) => return Err(TaskError::NotANumber(token.to_string())),
    };

    let offset = usize::try_from(index).ok().and_then(|n| n.checked_sub(1)).ok_or_else(out_of_range)?;
    view.get(offset).map(|&position| Selection::Task(position)).ok_or_else(out_of_range)
}
