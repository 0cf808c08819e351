use super::{read_task_id, view, Outcome};
use crate::libs::messages::Message;
use crate::libs::prompt::Prompt;
use crate::libs::storage::Storage;
use crate::libs::task::TaskList;
use crate::{msg_error, msg_print};
use anyhow::Result;

/// Shows the list, asks for an id and marks that task as done.
pub fn cmd(tasks: &mut TaskList, storage: &Storage, prompt: &mut dyn Prompt) -> Result<Outcome> {
    if view::cmd(tasks)? == Outcome::Empty {
        return Ok(Outcome::Empty);
    }

    let Some(id) = read_task_id(prompt, Message::PromptTaskIdDone)? else {
        return Ok(Outcome::InvalidInput);
    };

    let marked = u32::try_from(id)
        .ok()
        .and_then(|id| tasks.mark_done(id))
        .map(|task| (task.id, task.description.clone()));
    let Some((task_id, description)) = marked else {
        msg_error!(Message::TaskNotFoundWithId(id), true);
        return Ok(Outcome::NotFound(id));
    };

    storage.save(tasks);
    msg_print!(Message::TaskMarkedDone(task_id, description), true);
    Ok(Outcome::MarkedDone(task_id))
}
