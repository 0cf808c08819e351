//! Core library modules: the task model, its persistence, and the pieces of
//! terminal I/O the menu is built from.
//!
//! ```rust
//! use tasklist::libs::task::TaskList;
//! use tasklist::libs::view::View;
//!
//! let mut tasks = TaskList::new();
//! tasks.add("Water the plants").unwrap();
//! View::tasks(&tasks);
//! ```

pub mod formatter;
pub mod messages;
pub mod prompt;
pub mod storage;
pub mod task;
pub mod view;
