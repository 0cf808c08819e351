use super::{read_task_id, view, Outcome};
use crate::libs::messages::Message;
use crate::libs::prompt::Prompt;
use crate::libs::storage::Storage;
use crate::libs::task::TaskList;
use crate::{msg_error, msg_print};
use anyhow::Result;

/// Shows the list, asks for an id and removes that task.
///
/// The remaining tasks are renumbered, so ids shown afterwards differ from
/// the ones shown before the deletion.
pub fn cmd(tasks: &mut TaskList, storage: &Storage, prompt: &mut dyn Prompt) -> Result<Outcome> {
    if view::cmd(tasks)? == Outcome::Empty {
        return Ok(Outcome::Empty);
    }

    let Some(id) = read_task_id(prompt, Message::PromptTaskIdDelete)? else {
        return Ok(Outcome::InvalidInput);
    };

    let deleted = u32::try_from(id).ok().filter(|&task_id| tasks.delete(task_id));
    let Some(task_id) = deleted else {
        msg_error!(Message::TaskNotFoundWithId(id), true);
        return Ok(Outcome::NotFound(id));
    };

    storage.save(tasks);
    msg_print!(Message::TaskDeleted(task_id), true);
    Ok(Outcome::Deleted(task_id))
}
