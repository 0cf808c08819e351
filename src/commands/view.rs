use super::Outcome;
use crate::libs::task::TaskList;
use crate::libs::view::View;
use anyhow::Result;

/// Prints the current list. Never mutates or saves.
pub fn cmd(tasks: &TaskList) -> Result<Outcome> {
    View::tasks(tasks);

    Ok(if tasks.is_empty() { Outcome::Empty } else { Outcome::Listed })
}
