//! Display formatting for tasks.
//!
//! Converts stored tasks into pre-formatted string rows for the table view.
//! Descriptions are cut to [`DESCRIPTION_WIDTH`] characters here and only
//! here; the stored description is never modified.

use super::messages::Message;
use super::task::TaskList;

/// Maximum number of characters of a description shown in the task table.
pub const DESCRIPTION_WIDTH: usize = 20;

/// A task prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTask {
    pub id: u32,
    pub status: String,
    pub description: String,
}

/// Returns the first `width` characters of `text`.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn truncate_chars(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

pub trait TaskGroup {
    /// Formats every task into a display row, in list order.
    fn format(&self) -> Vec<FormattedTask>;
}

impl TaskGroup for TaskList {
    fn format(&self) -> Vec<FormattedTask> {
        self.iter()
            .map(|task| FormattedTask {
                id: task.id,
                status: (if task.done { Message::TaskStatusDone } else { Message::TaskStatusPending }).to_string(),
                description: truncate_chars(&task.description, DESCRIPTION_WIDTH).to_string(),
            })
            .collect()
    }
}
