use super::{list::print_board, list::visibility, open_board, task_usecases};
use crate::{
    libs::{
        board::ReorderOutcome, calendar::parse_date, config::Config, messages::Message, reorder::MoveRequest,
        task::TaskId,
    },
    msg_bail_anyhow, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Task to move
    id: TaskId,
    /// Visible position to move to, as shown in the `#` column of `list`
    #[arg(long, conflicts_with = "onto")]
    to: Option<usize>,
    /// Drop the task onto the position of this task
    #[arg(long)]
    onto: Option<TaskId>,
    /// Day of the list (YYYY-MM-DD), defaults to the task's own day
    #[arg(short, long)]
    date: Option<String>,
    /// Hide completed tasks while moving
    #[arg(long)]
    hide_completed: bool,
}

pub async fn cmd(args: MoveArgs) -> Result<()> {
    if args.to.is_none() && args.onto.is_none() {
        msg_bail_anyhow!(Message::MoveTargetRequired);
    }

    let config = Config::read()?;
    let usecases = task_usecases(&config)?;

    let date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => usecases.get_task(args.id).await?.date,
    };
    let show_completed = visibility(config.display().show_completed, false, args.hide_completed);
    let mut board = open_board(usecases, date, show_completed).await?;

    let over_id = match (args.onto, args.to) {
        (Some(over_id), _) => over_id,
        (None, Some(position)) => match board.task_at(position) {
            Some(task) => task.id,
            None => msg_bail_anyhow!(Message::MovePositionOutOfRange(position, board.visible_tasks().len())),
        },
        (None, None) => msg_bail_anyhow!(Message::MoveTargetRequired),
    };

    match board.reorder(MoveRequest::new(args.id, over_id)).await? {
        ReorderOutcome::Applied(plan) => {
            let title = board.find(args.id).map(|t| t.title.clone()).unwrap_or_default();
            msg_success!(Message::TaskMoved(title, plan.to));
        }
        ReorderOutcome::Rejected(rejection) => {
            msg_warning!(Message::MoveRejected(rejection.to_string()));
        }
    }

    print_board(&board)
}
