use super::stats::{TaskOverview, UserOverview};
use super::task::{format_date, Task};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Numbered task table. Numbers start at 1 and follow the given order.
    pub fn tasks_table<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["NO", "USER", "HEADING", "DESCRIPTION", "START DATE", "DUE DATE", "STATUS"]);
        for (number, task) in tasks.into_iter().enumerate() {
            table.add_row(row![
                number + 1,
                task.owner,
                task.heading,
                task.description,
                format_date(&task.start_date),
                format_date(&task.due_date),
                task.status()
            ]);
        }

        table
    }

    pub fn tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) {
        Self::tasks_table(tasks).printstd();
    }

    pub fn task_overview_table(overview: &TaskOverview) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["NO OF TASKS", "COMPLETED TASKS", "ONGOING TASKS", "OVERDUE TASKS", "% ONGOING", "% OVERDUE"]);
        table.add_row(row![
            overview.total,
            overview.completed,
            overview.ongoing,
            overview.overdue,
            format!("{}%", overview.percentage_ongoing),
            format!("{}%", overview.percentage_overdue)
        ]);

        table
    }

    pub fn user_overview_table(overviews: &[UserOverview]) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["USER", "NO OF TASKS", "% OF TASKS", "% COMPLETE", "% ONGOING", "% OVERDUE"]);
        for user in overviews {
            table.add_row(row![
                user.username,
                user.total_assigned,
                format!("{}%", user.percentage_assigned),
                format!("{}%", user.percentage_complete),
                format!("{}%", user.percentage_ongoing),
                format!("{}%", user.percentage_overdue)
            ]);
        }

        table
    }

    pub fn task_overview(overview: &TaskOverview) {
        Self::task_overview_table(overview).printstd();
    }

    pub fn user_overview(overviews: &[UserOverview]) {
        Self::user_overview_table(overviews).printstd();
    }
}
