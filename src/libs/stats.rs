//! Aggregate statistics over the task collection.
//!
//! ## Definitions
//!
//! ```text
//! ongoing  = tasks not yet completed
//! overdue  = ongoing tasks whose due date precedes the reference date
//! percent  = floor(100 * part / whole), or 0 when whole is 0
//! ```
//!
//! Overviews are plain records; [`crate::libs::report`] turns them into the
//! persisted text form and [`crate::libs::view`] into tables.

use super::credential::Credential;
use super::task::Task;
use chrono::NaiveDate;

/// Integer percentage of `part` in `whole`, rounded down.
///
/// Returns 0 for an empty `whole` instead of dividing by zero.
pub fn get_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as u128 * 100 / whole as u128) as u32
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    total: usize,
    completed: usize,
    ongoing: usize,
    overdue: usize,
}

impl Tally {
    fn count<'a>(tasks: impl IntoIterator<Item = &'a Task>, today: NaiveDate) -> Tally {
        tasks.into_iter().fold(Tally::default(), |mut tally, task| {
            tally.total += 1;
            if task.completed {
                tally.completed += 1;
            } else {
                tally.ongoing += 1;
                if task.is_overdue(today) {
                    tally.overdue += 1;
                }
            }
            tally
        })
    }
}

/// Counts over the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOverview {
    pub total: usize,
    pub completed: usize,
    pub ongoing: usize,
    pub overdue: usize,
    pub percentage_ongoing: u32,
    pub percentage_overdue: u32,
}

impl TaskOverview {
    pub fn compute(tasks: &[Task], today: NaiveDate) -> TaskOverview {
        let tally = Tally::count(tasks, today);
        TaskOverview {
            total: tally.total,
            completed: tally.completed,
            ongoing: tally.ongoing,
            overdue: tally.overdue,
            percentage_ongoing: get_percentage(tally.ongoing, tally.total),
            percentage_overdue: get_percentage(tally.overdue, tally.total),
        }
    }
}

/// Counts for the tasks assigned to one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOverview {
    pub username: String,
    pub total_assigned: usize,
    /// Share of all tasks in the collection.
    pub percentage_assigned: u32,
    /// The remaining percentages are relative to `total_assigned`.
    pub percentage_complete: u32,
    pub percentage_ongoing: u32,
    pub percentage_overdue: u32,
}

impl UserOverview {
    pub fn compute(username: &str, tasks: &[Task], today: NaiveDate) -> UserOverview {
        let tally = Tally::count(tasks.iter().filter(|task| task.owner == username), today);
        UserOverview {
            username: username.to_string(),
            total_assigned: tally.total,
            percentage_assigned: get_percentage(tally.total, tasks.len()),
            percentage_complete: get_percentage(tally.completed, tally.total),
            percentage_ongoing: get_percentage(tally.ongoing, tally.total),
            percentage_overdue: get_percentage(tally.overdue, tally.total),
        }
    }

    /// One overview per registered user, in credential order, including
    /// users without tasks.
    pub fn compute_all(credentials: &[Credential], tasks: &[Task], today: NaiveDate) -> Vec<UserOverview> {
        credentials
            .iter()
            .map(|credential| UserOverview::compute(&credential.username, tasks, today))
            .collect()
    }
}
