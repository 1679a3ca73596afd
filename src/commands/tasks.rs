use super::Workspace;
use crate::libs::messages::Message;
use crate::libs::task::filter_by_owner;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TasksArgs {
    /// Only show tasks assigned to this user
    #[arg(short, long)]
    owner: Option<String>,
}

pub fn cmd(args: TasksArgs, workspace: &Workspace) -> Result<()> {
    let tasks = workspace.tasks().load()?;

    match &args.owner {
        Some(owner) => {
            let owned: Vec<_> = filter_by_owner(&tasks, owner).collect();
            if owned.is_empty() {
                msg_info!(Message::TasksNotFound);
                return Ok(());
            }
            msg_print!(Message::MyTasksHeader(owner.clone()), true);
            View::tasks(owned);
        }
        None => {
            if tasks.is_empty() {
                msg_info!(Message::TasksNotFound);
                return Ok(());
            }
            msg_print!(Message::TasksHeader, true);
            View::tasks(&tasks);
        }
    }

    Ok(())
}
