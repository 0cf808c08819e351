use super::Outcome;
use crate::libs::messages::Message;
use crate::libs::prompt::Prompt;
use crate::libs::storage::Storage;
use crate::libs::task::TaskList;
use crate::{msg_error, msg_success};
use anyhow::Result;

/// Asks for a description and appends a new pending task.
///
/// Blank input is rejected without touching the list or the file.
pub fn cmd(tasks: &mut TaskList, storage: &Storage, prompt: &mut dyn Prompt) -> Result<Outcome> {
    let description = prompt.read_line(&Message::PromptTaskDescription.to_string())?;

    let (id, description) = match tasks.add(&description) {
        Ok(task) => (task.id, task.description.clone()),
        Err(_) => {
            msg_error!(Message::TaskDescriptionEmpty, true);
            return Ok(Outcome::InvalidInput);
        }
    };

    storage.save(tasks);
    msg_success!(Message::TaskAdded(description), true);
    Ok(Outcome::Added(id))
}
