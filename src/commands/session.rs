use super::report;
use super::Workspace;
use crate::db::tasks::Tasks;
use crate::db::users::Users;
use crate::libs::data_storage::APP_VERSION;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::report::{ReportSnapshot, Reports};
use crate::libs::session::login;
use crate::libs::task::{create_task, format_date, owned_positions, parse_date, select, Selection, Task};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainMenu {
    RegisterUser,
    AddTask,
    ViewAll,
    ViewMine,
    GenerateReports,
    DisplayReports,
    Exit,
}

impl MainMenu {
    const ITEMS: [MainMenu; 7] = [
        MainMenu::RegisterUser,
        MainMenu::AddTask,
        MainMenu::ViewAll,
        MainMenu::ViewMine,
        MainMenu::GenerateReports,
        MainMenu::DisplayReports,
        MainMenu::Exit,
    ];

    fn label(&self) -> Message {
        match self {
            MainMenu::RegisterUser => Message::MenuRegisterUser,
            MainMenu::AddTask => Message::MenuAddTask,
            MainMenu::ViewAll => Message::MenuViewAll,
            MainMenu::ViewMine => Message::MenuViewMine,
            MainMenu::GenerateReports => Message::MenuGenerateReports,
            MainMenu::DisplayReports => Message::MenuDisplayReports,
            MainMenu::Exit => Message::MenuExit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditMenu {
    Finalize,
    Reassign,
    Reschedule,
    Back,
}

impl EditMenu {
    const ITEMS: [EditMenu; 4] = [EditMenu::Finalize, EditMenu::Reassign, EditMenu::Reschedule, EditMenu::Back];

    fn label(&self) -> Message {
        match self {
            EditMenu::Finalize => Message::EditMenuFinalize,
            EditMenu::Reassign => Message::EditMenuReassign,
            EditMenu::Reschedule => Message::EditMenuReschedule,
            EditMenu::Back => Message::EditMenuBack,
        }
    }
}

/// State of one logged-in session. Owns the task collection until exit.
struct Session {
    user: String,
    users: Users,
    store: Tasks,
    tasks: Vec<Task>,
    reports: Reports,
    today: NaiveDate,
    theme: ColorfulTheme,
}

pub fn cmd(workspace: &Workspace) -> Result<()> {
    let users = workspace.users()?;
    if users.credentials().is_empty() {
        msg_bail_anyhow!(Message::NoUsersRegistered(workspace.users_path.display().to_string()));
    }

    let store = workspace.tasks();
    let tasks = store.load()?;
    let theme = ColorfulTheme::default();

    msg_print!(Message::LoginHeader, true);
    let mut attempts = workspace.login_attempts();
    let user = login(&users, &mut attempts, || {
        let username: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptUsername.to_string())
            .interact_text()?;
        let password = Password::with_theme(&theme)
            .with_prompt(Message::PromptPassword.to_string())
            .allow_empty_password(true)
            .interact()?;
        Ok((username.trim().to_string(), password))
    })?;

    let mut session = Session {
        user,
        users,
        store,
        tasks,
        reports: workspace.reports(),
        today: Local::now().date_naive(),
        theme,
    };
    session.run()
}

impl Session {
    fn run(&mut self) -> Result<()> {
        msg_print!(Message::Welcome(APP_VERSION.to_string()), true);
        let items: Vec<String> = MainMenu::ITEMS.iter().map(|item| item.label().to_string()).collect();

        loop {
            let choice = Select::with_theme(&self.theme)
                .with_prompt(Message::MainMenuHeader.to_string())
                .items(&items)
                .default(0)
                .interact()?;

            match MainMenu::ITEMS[choice] {
                MainMenu::RegisterUser => self.register_user()?,
                MainMenu::AddTask => self.add_task()?,
                MainMenu::ViewAll => self.view_all(),
                MainMenu::ViewMine => self.edit_mine()?,
                MainMenu::GenerateReports => self.generate_reports()?,
                MainMenu::DisplayReports => self.display_reports()?,
                MainMenu::Exit => {
                    msg_print!(Message::SessionEnded);
                    return Ok(());
                }
            }
        }
    }

    fn register_user(&mut self) -> Result<()> {
        let username = loop {
            let username: String = Input::with_theme(&self.theme)
                .with_prompt(Message::PromptNewUsername.to_string())
                .interact_text()?;
            let username = username.trim().to_string();
            if self.users.exists(&username) {
                msg_error!(TaskError::UsernameTaken(username));
                continue;
            }
            break username;
        };

        loop {
            let password = Password::with_theme(&self.theme)
                .with_prompt(Message::PromptNewPassword.to_string())
                .interact()?;
            let confirmation = Password::with_theme(&self.theme)
                .with_prompt(Message::PromptConfirmPassword.to_string())
                .interact()?;

            match self.users.register(&username, &password, &confirmation) {
                Ok(()) => break,
                Err(e) if e.is_recoverable() => msg_error!(e),
                Err(e) => return Err(e.into()),
            }
        }

        msg_success!(Message::UserCreated(username));
        Ok(())
    }

    fn add_task(&mut self) -> Result<()> {
        let owner = self.prompt_username(Message::PromptAssignee)?;
        let heading: String = Input::with_theme(&self.theme)
            .with_prompt(Message::PromptHeading.to_string())
            .allow_empty(true)
            .interact_text()?;
        let description: String = Input::with_theme(&self.theme)
            .with_prompt(Message::PromptDescription.to_string())
            .allow_empty(true)
            .interact_text()?;
        let due_date = self.prompt_date(Message::PromptDueDate)?;

        create_task(&mut self.tasks, &self.users, &owner, &heading, &description, due_date, self.today)?;
        self.save()?;
        msg_success!(Message::TaskCreated);
        Ok(())
    }

    fn view_all(&self) {
        if self.tasks.is_empty() {
            msg_info!(Message::TasksNotFound);
            return;
        }
        msg_print!(Message::TasksHeader, true);
        View::tasks(&self.tasks);
    }

    fn show_mine(&self, view: &[usize]) {
        msg_print!(Message::MyTasksHeader(self.user.clone()), true);
        View::tasks(view.iter().map(|&position| &self.tasks[position]));
    }

    fn edit_mine(&mut self) -> Result<()> {
        let view = owned_positions(&self.tasks, &self.user);
        if view.is_empty() {
            msg_info!(Message::TasksNotFound);
            return Ok(());
        }
        self.show_mine(&view);

        let position = loop {
            let token: String = Input::with_theme(&self.theme)
                .with_prompt(Message::PromptTaskSelection.to_string())
                .interact_text()?;

            match select(&view, &token) {
                Ok(Selection::Back) => return Ok(()),
                Ok(Selection::Task(position)) => break position,
                Err(e) => {
                    msg_error!(e);
                    self.show_mine(&view);
                }
            }
        };

        let items: Vec<String> = EditMenu::ITEMS.iter().map(|item| item.label().to_string()).collect();
        let choice = Select::with_theme(&self.theme)
            .with_prompt(Message::EditMenuHeader.to_string())
            .items(&items)
            .default(0)
            .interact()?;

        match EditMenu::ITEMS[choice] {
            EditMenu::Finalize if self.tasks[position].completed => {
                msg_info!(Message::TaskAlreadyComplete);
                return Ok(());
            }
            EditMenu::Finalize => {
                self.tasks[position].finalize();
                msg_success!(Message::TaskFinalized);
            }
            EditMenu::Reassign => loop {
                let owner: String = Input::with_theme(&self.theme)
                    .with_prompt(Message::PromptNewAssignee.to_string())
                    .interact_text()?;
                let owner = owner.trim();
                match self.tasks[position].reassign(owner, &self.users) {
                    Ok(()) => {
                        msg_success!(Message::TaskReassigned(owner.to_string()));
                        break;
                    }
                    Err(e) if e.is_recoverable() => msg_error!(e),
                    Err(e) => return Err(e.into()),
                }
            },
            EditMenu::Reschedule => {
                let due_date = self.prompt_date(Message::PromptNewDueDate)?;
                self.tasks[position].reschedule(due_date);
                msg_success!(Message::TaskRescheduled(format_date(&due_date)));
            }
            EditMenu::Back => return Ok(()),
        }

        self.save()
    }

    fn generate_reports(&self) -> Result<()> {
        self.reports.generate(&self.snapshot())?;
        msg_success!(Message::ReportsGenerated(self.reports.dir().display().to_string()));
        Ok(())
    }

    fn display_reports(&self) -> Result<()> {
        let snapshot = self.snapshot();
        let generated = self.reports.ensure(&snapshot)?;
        if generated.tasks {
            msg_info!(Message::ReportFileGenerated(self.reports.tasks_path().display().to_string()));
        }
        if generated.users {
            msg_info!(Message::ReportFileGenerated(self.reports.users_path().display().to_string()));
        }
        report::show(&snapshot);
        Ok(())
    }

    fn snapshot(&self) -> ReportSnapshot {
        ReportSnapshot::compute(&self.tasks, self.users.credentials(), self.today)
    }

    fn save(&self) -> Result<()> {
        self.store.save(&self.tasks)?;
        tracing::debug!(user = %self.user, tasks = self.tasks.len(), "session saved task list");
        Ok(())
    }

    /// Asks for a username until a registered one is given.
    fn prompt_username(&self, prompt: Message) -> Result<String> {
        loop {
            let username: String = Input::with_theme(&self.theme)
                .with_prompt(prompt.to_string())
                .interact_text()?;
            let username = username.trim().to_string();
            match self.users.ensure_exists(&username) {
                Ok(()) => return Ok(username),
                Err(e) => msg_error!(e),
            }
        }
    }

    /// Asks for a date until it parses.
    fn prompt_date(&self, prompt: Message) -> Result<NaiveDate> {
        loop {
            let input: String = Input::with_theme(&self.theme)
                .with_prompt(prompt.to_string())
                .interact_text()?;
            match parse_date(&input) {
                Ok(date) => return Ok(date),
                Err(e) => msg_error!(e),
            }
        }
    }
}
