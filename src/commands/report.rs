use super::Workspace;
use crate::libs::messages::Message;
use crate::libs::report::ReportSnapshot;
use crate::libs::view::View;
use crate::{msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Print the overviews after writing the files
    #[arg(short, long)]
    show: bool,
}

pub fn cmd(args: ReportArgs, workspace: &Workspace) -> Result<()> {
    let users = workspace.users()?;
    let tasks = workspace.tasks().load()?;
    let snapshot = ReportSnapshot::compute(&tasks, users.credentials(), Local::now().date_naive());

    workspace.reports().generate(&snapshot)?;
    msg_success!(Message::ReportsGenerated(workspace.reports_dir.display().to_string()));

    if args.show {
        show(&snapshot);
    }

    Ok(())
}

pub fn show(snapshot: &ReportSnapshot) {
    msg_print!(Message::TaskOverviewHeader, true);
    View::task_overview(&snapshot.tasks);
    msg_print!(Message::UserOverviewHeader, true);
    View::user_overview(&snapshot.users);
}
