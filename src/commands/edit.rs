use super::task_usecases;
use crate::{
    libs::{
        config::Config,
        messages::Message,
        task::{Task, TaskId, TaskPatch},
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    id: TaskId,
    /// New title
    #[arg(short, long)]
    title: Option<String>,
    /// New memo
    #[arg(short, long, conflicts_with = "clear_memo")]
    memo: Option<String>,
    /// New deadline (HH:MM)
    #[arg(long, conflicts_with = "clear_deadline")]
    deadline: Option<String>,
    /// Remove the memo
    #[arg(long)]
    clear_memo: bool,
    /// Remove the deadline
    #[arg(long)]
    clear_deadline: bool,
}

impl EditArgs {
    fn is_interactive(&self) -> bool {
        self.title.is_none() && self.memo.is_none() && self.deadline.is_none() && !self.clear_memo && !self.clear_deadline
    }
}

pub async fn cmd(args: EditArgs) -> Result<()> {
    let config = Config::read()?;
    let usecases = task_usecases(&config)?;

    let patch = if args.is_interactive() {
        let task = usecases.get_task(args.id).await?;
        msg_print!(Message::EditingTask(task.title.clone()), true);
        prompt_patch(&task)?
    } else {
        patch_from_args(&args)?
    };

    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let task = usecases.update_task(args.id, &patch).await?;
    msg_success!(Message::TaskUpdated(task.title));
    Ok(())
}

fn patch_from_args(args: &EditArgs) -> Result<TaskPatch> {
    let mut patch = TaskPatch::default();
    if let Some(title) = &args.title {
        patch = patch.title(title)?;
    }
    if let Some(memo) = &args.memo {
        patch = patch.memo(memo);
    }
    if args.clear_memo {
        patch = patch.clear_memo();
    }
    if let Some(deadline) = &args.deadline {
        patch = patch.deadline(deadline)?;
    }
    if args.clear_deadline {
        patch = patch.clear_deadline();
    }
    Ok(patch)
}

/// Asks for every editable field and keeps only what changed.
fn prompt_patch(task: &Task) -> Result<TaskPatch> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(task.title.clone())
        .interact_text()?;
    let memo: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskMemo.to_string())
        .default(task.memo.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    let deadline: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDeadline.to_string())
        .default(task.deadline.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let mut patch = TaskPatch::default();
    if title.trim() != task.title {
        patch = patch.title(&title)?;
    }

    let memo = memo.trim();
    match (memo.is_empty(), task.memo.as_deref()) {
        (true, Some(_)) => patch = patch.clear_memo(),
        (false, current) if current != Some(memo) => patch = patch.memo(memo),
        _ => {}
    }

    let deadline = deadline.trim();
    match (deadline.is_empty(), task.deadline.as_deref()) {
        (true, Some(_)) => patch = patch.clear_deadline(),
        (false, current) if current != Some(deadline) => patch = patch.deadline(deadline)?,
        _ => {}
    }

    Ok(patch)
}
