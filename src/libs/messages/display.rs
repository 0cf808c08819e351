//! Display implementation for tasklist messages.
//!
//! Every line of user-facing text lives here, so the wording of prompts,
//! confirmations and errors can be reviewed and changed in one place.
//!
//! ```rust
//! use tasklist::libs::messages::Message;
//!
//! let message = Message::TaskNotFoundWithId(7);
//! assert_eq!(message.to_string(), "Task with ID 7 not found.");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` variant into the text shown to the user.
    ///
    /// Parameters are interpolated as-is; callers are responsible for any
    /// trimming or truncation before building the message.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::MenuTitle => "    Task Management System CLI".to_string(),
            Message::MenuAddTask => "1. Add a new task".to_string(),
            Message::MenuViewTasks => "2. View all tasks".to_string(),
            Message::MenuMarkDone => "3. Mark task as done".to_string(),
            Message::MenuDeleteTask => "4. Delete a task".to_string(),
            Message::MenuExit => "5. Exit".to_string(),
            Message::InvalidMenuChoice => "Invalid choice. Please enter a number between 1 and 5.".to_string(),
            Message::Goodbye => "👋 Saving and exiting. Goodbye!".to_string(),

            // === TASK MESSAGES ===
            Message::TaskAdded(description) => format!("Task '{}' added successfully.", description),
            Message::TaskDescriptionEmpty => "Task description cannot be empty.".to_string(),
            Message::TaskMarkedDone(id, description) => format!("🎉 Task ID {} marked as DONE: '{}'", id, description),
            Message::TaskDeleted(id) => format!("🗑️ Task with ID {} successfully deleted.", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::InvalidTaskId => "Invalid input. Please enter a valid number for the ID.".to_string(),

            // === VIEW MESSAGES ===
            Message::TaskListTitle => "           📋 TO-DO LIST 📋".to_string(),
            Message::TaskListEmpty => "    The task list is currently empty.".to_string(),
            Message::TaskStatusDone => "✅ Done".to_string(),
            Message::TaskStatusPending => "⏳ Pending".to_string(),

            // === STORAGE MESSAGES ===
            Message::TasksFileCorrupted(file) => format!("{} is corrupted or empty. Starting with an empty task list.", file),
            Message::TasksLoadFailed(error) => format!("An error occurred while loading tasks: {}", error),
            Message::TasksSaveFailed(error) => format!("An error occurred while saving tasks: {}", error),

            // === PROMPTS ===
            Message::PromptMenuChoice => "Enter your choice (1-5)".to_string(),
            Message::PromptTaskDescription => "Enter the new task description".to_string(),
            Message::PromptTaskIdDone => "Enter the ID of the task to mark as DONE".to_string(),
            Message::PromptTaskIdDelete => "Enter the ID of the task to DELETE".to_string(),

            // === GENERAL MESSAGES ===
            Message::InputClosed => "Input stream closed.".to_string(),
            Message::InputFailed(error) => format!("Failed to read input: {}", error),
        };

        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_keeps_sign() {
        assert_eq!(Message::TaskNotFoundWithId(-1).to_string(), "Task with ID -1 not found.");
        assert_eq!(Message::TaskNotFoundWithId(99_999_999_999).to_string(), "Task with ID 99999999999 not found.");
    }
}
