//! Interactive menu and the command handlers behind it.
//!
//! The program has a single interactive surface: a numbered menu read in a
//! loop until the user picks "Exit". Each menu entry maps to one handler
//! module:
//!
//! - [`add`]: create a task from a description
//! - [`view`]: print the task table
//! - [`done`]: mark a task as completed
//! - [`delete`]: remove a task and renumber the rest
//!
//! Handlers receive the task list, the storage and the prompt explicitly and
//! report what they did as an [`Outcome`].

pub mod add;
pub mod delete;
pub mod done;
pub mod view;

use crate::libs::messages::Message;
use crate::libs::prompt::{ConsolePrompt, Prompt};
use crate::libs::storage::{Storage, TASKS_FILE_NAME};
use crate::libs::task::TaskList;
use crate::libs::view::BANNER_WIDTH;
use crate::{msg_debug, msg_error, msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tasks file to read and write
    #[arg(short, long, value_name = "PATH", default_value = TASKS_FILE_NAME)]
    pub file: PathBuf,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let storage = Storage::new(cli.file);
        let mut menu = Menu::new(storage.load(), storage);

        menu.run(&mut ConsolePrompt::new())
    }
}

/// Result of a single handler invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added(u32),
    Listed,
    MarkedDone(u32),
    Deleted(u32),
    /// The referenced id does not exist. Any integer is accepted here,
    /// including values that can never be a task id.
    NotFound(i64),
    /// Blank description or non-numeric id.
    InvalidInput,
    /// The list was empty, so there was nothing to pick from.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    MarkDone,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Matches the raw input line exactly; `" 1"` or `"1 "` are not choices.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::View),
            "3" => Some(MenuChoice::MarkDone),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exiting,
}

pub struct Menu {
    tasks: TaskList,
    storage: Storage,
    state: MenuState,
}

impl Menu {
    pub fn new(tasks: TaskList, storage: Storage) -> Self {
        Menu {
            tasks,
            storage,
            state: MenuState::Running,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Runs the menu until the user exits or input can no longer be read.
    ///
    /// A failing prompt ends the loop but is not an error for the process.
    pub fn run(&mut self, prompt: &mut dyn Prompt) -> Result<()> {
        while self.state == MenuState::Running {
            if let Err(error) = self.step(prompt) {
                match error.downcast_ref::<Message>() {
                    Some(Message::InputClosed) => msg_info!(Message::InputClosed, true),
                    _ => msg_error!(Message::InputFailed(error.to_string()), true),
                }
                self.state = MenuState::Exiting;
            }
        }

        Ok(())
    }

    /// Shows the menu once, reads a choice and dispatches it.
    pub fn step(&mut self, prompt: &mut dyn Prompt) -> Result<Option<Outcome>> {
        Self::render();
        let input = prompt.read_line(&Message::PromptMenuChoice.to_string())?;

        let Some(choice) = MenuChoice::parse(&input) else {
            msg_warning!(Message::InvalidMenuChoice, true);
            return Ok(None);
        };
        msg_debug!("Menu choice {:?}", choice);

        let outcome = match choice {
            MenuChoice::Add => add::cmd(&mut self.tasks, &self.storage, prompt)?,
            MenuChoice::View => view::cmd(&self.tasks)?,
            MenuChoice::MarkDone => done::cmd(&mut self.tasks, &self.storage, prompt)?,
            MenuChoice::Delete => delete::cmd(&mut self.tasks, &self.storage, prompt)?,
            MenuChoice::Exit => {
                msg_print!(Message::Goodbye, true);
                self.state = MenuState::Exiting;
                return Ok(None);
            }
        };

        msg_debug!("Outcome {:?}", outcome);
        Ok(Some(outcome))
    }

    fn render() {
        let rule = "*".repeat(BANNER_WIDTH);

        msg_print!(format!("\n{}\n{}\n{}", rule, Message::MenuTitle, rule));
        for option in [
            Message::MenuAddTask,
            Message::MenuViewTasks,
            Message::MenuMarkDone,
            Message::MenuDeleteTask,
            Message::MenuExit,
        ] {
            msg_print!(option);
        }
        msg_print!(rule);
    }
}

/// Reads a task id. Non-numeric input is reported and yields `None`.
///
/// Negative or oversized numbers are still numbers: they come back as-is and
/// end up in the "not found" branch of the caller.
fn read_task_id(prompt: &mut dyn Prompt, message: Message) -> Result<Option<i64>> {
    let input = prompt.read_line(&message.to_string())?;

    match input.trim().parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            msg_error!(Message::InvalidTaskId, true);
            Ok(None)
        }
    }
}
