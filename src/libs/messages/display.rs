//! Display implementation for taskr application messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent between the interactive session and the one-shot commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::Welcome(version) => format!("*** WELCOME TO TASKR {} ***", version),
            Message::LoginHeader => "*** LOGIN ***".to_string(),
            Message::LoginSuccessful => "Login successful".to_string(),
            Message::LoginFailed => "Username or password incorrect".to_string(),
            Message::LoginAttemptsRemaining(count) => format!("{} attempts remaining...", count),
            Message::SessionEnded => "Goodbye!".to_string(),
            Message::NoUsersRegistered(path) => format!("No users are registered yet. Add a 'username;password' line to {}", path),

            // === MENU MESSAGES ===
            Message::MainMenuHeader => "*** MAIN MENU ***".to_string(),
            Message::MenuRegisterUser => "Register new user".to_string(),
            Message::MenuAddTask => "Add new task".to_string(),
            Message::MenuViewAll => "View all tasks".to_string(),
            Message::MenuViewMine => "View and edit my tasks".to_string(),
            Message::MenuGenerateReports => "Generate reports".to_string(),
            Message::MenuDisplayReports => "Display current reports".to_string(),
            Message::MenuExit => "Exit".to_string(),
            Message::EditMenuHeader => "*** EDIT MENU ***".to_string(),
            Message::EditMenuFinalize => "Mark the task as complete".to_string(),
            Message::EditMenuReassign => "Change the assigned user".to_string(),
            Message::EditMenuReschedule => "Change the due date".to_string(),
            Message::EditMenuBack => "Back".to_string(),

            // === USER MESSAGES ===
            Message::UserCreated(username) => format!("User '{}' created", username),

            // === TASK MESSAGES ===
            Message::TaskCreated => "Task created".to_string(),
            Message::TaskFinalized => "Task finalized".to_string(),
            Message::TaskReassigned(username) => format!("Task reassigned to '{}'", username),
            Message::TaskRescheduled(date) => format!("Task is now due on {}", date),
            Message::TaskAlreadyComplete => "This task is already complete".to_string(),
            Message::TasksHeader => "All tasks:".to_string(),
            Message::MyTasksHeader(username) => format!("Tasks assigned to {}:", username),
            Message::TasksNotFound => "No tasks found".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportsGenerated(dir) => format!("Reports written to {}", dir),
            Message::ReportFileGenerated(path) => format!("Report file was missing and has been generated: {}", path),
            Message::TaskOverviewHeader => "Tasks overview".to_string(),
            Message::UserOverviewHeader => "User overview".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleSession => "Session settings".to_string(),
            Message::LoginAttemptsRange => "Login attempts must be at least 1".to_string(),

            // === PROMPTS ===
            Message::PromptUsername => "Username".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptNewUsername => "Enter new username".to_string(),
            Message::PromptNewPassword => "Enter new password".to_string(),
            Message::PromptConfirmPassword => "Re-enter password".to_string(),
            Message::PromptAssignee => "Assign to username".to_string(),
            Message::PromptNewAssignee => "New assignee username".to_string(),
            Message::PromptHeading => "Task heading".to_string(),
            Message::PromptDescription => "Task description".to_string(),
            Message::PromptDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::PromptNewDueDate => "New due date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskSelection => "Task number to edit, or \"b\" to return to the main menu".to_string(),
            Message::PromptDocumentsDir => "Directory holding user, task and report files".to_string(),
            Message::PromptLoginAttempts => "Failed logins allowed before the session ends".to_string(),
        };
        write!(f, "{}", text)
    }
}
