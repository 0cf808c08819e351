//! Task records and the in-memory task list.
//!
//! `TaskList` owns the ordered tasks for the lifetime of the process. Lists
//! built through [`TaskList::add`] and [`TaskList::delete`] keep ids dense:
//! exactly `1..=len`, in display order. Adding assigns `len + 1`; deleting
//! renumbers whatever is left. A list loaded from a hand-edited file keeps
//! whatever ids it had until the next successful delete, so `add` may then
//! hand out an id that is already taken.
//!
//! ```rust
//! use tasklist::libs::task::TaskList;
//!
//! let mut tasks = TaskList::new();
//! tasks.add("Buy milk").unwrap();
//! tasks.add("Walk dog").unwrap();
//! assert!(tasks.delete(1));
//! assert_eq!(tasks.get(1).unwrap().description, "Walk dog");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single to-do item as stored in the tasks file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: u32, description: &str) -> Self {
        Task {
            id,
            description: description.to_string(),
            done: false,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("task description cannot be empty")]
    EmptyDescription,
}

/// Ordered collection of tasks. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new pending task with the next id.
    ///
    /// The description is trimmed first; an empty result is rejected and the
    /// list is left untouched.
    pub fn add(&mut self, description: &str) -> Result<&Task, TaskError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let id = self.tasks.len() as u32 + 1;
        self.tasks.push(Task::new(id, description));
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Marks the first task with `id` as done and returns it.
    pub fn mark_done(&mut self, id: u32) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.done = true;
        Some(task)
    }

    /// Removes every task with `id`. Returns `true` when something was
    /// removed, in which case the remaining tasks are renumbered `1..=len`.
    pub fn delete(&mut self, id: u32) -> bool {
        let initial_len = self.tasks.len();
        self.tasks.retain(|task| task.id != id);

        if self.tasks.len() == initial_len {
            return false;
        }

        self.renumber();
        true
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    fn renumber(&mut self) {
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.id = index as u32 + 1;
        }
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        TaskList { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
