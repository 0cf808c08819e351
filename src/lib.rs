//! # Tasklist
//!
//! A single-user to-do list manager for the terminal. Tasks live in a local
//! JSON file and are edited through a numbered menu.
//!
//! ## Features
//!
//! - **Add**: create a pending task from a free-text description
//! - **View**: print the list as a table
//! - **Complete**: mark a task as done by id
//! - **Delete**: remove a task by id; remaining ids are renumbered `1..=N`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
