//! Line input for the interactive menu.
//!
//! Command handlers take a `&mut dyn Prompt` instead of reading stdin
//! directly, so the same handlers run against the terminal in production and
//! against scripted answers in tests.

use super::messages::Message;
use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

pub trait Prompt {
    /// Shows `prompt` and returns the line the user typed, without the line terminator.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Reads from the terminal with dialoguer, or line by line from piped stdin.
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl ConsolePrompt {
    pub fn new() -> Self {
        ConsolePrompt
    }
}

impl Prompt for ConsolePrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        if io::stdin().is_terminal() {
            let line = Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            return Ok(line);
        }

        print!("{}: ", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            bail!(Message::InputClosed);
        }
        Ok(strip_line_ending(&line).to_string())
    }
}

/// Replays a fixed list of answers. Running out of answers behaves like a
/// closed stdin.
///
/// Public so the integration tests under `tests/` can drive the menu and the
/// handlers; the binary never constructs one.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompt {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!(Message::InputClosed),
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)).unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("2\n"), "2");
        assert_eq!(strip_line_ending("2\r\n"), "2");
        assert_eq!(strip_line_ending(" 2 "), " 2 ");
        assert_eq!(strip_line_ending(""), "");
    }

    #[test]
    fn test_scripted_prompt_replays_answers() {
        let mut prompt = ScriptedPrompt::new(["1", "Buy milk"]);
        assert_eq!(prompt.read_line("first").unwrap(), "1");
        assert_eq!(prompt.read_line("second").unwrap(), "Buy milk");
        assert_eq!(prompt.asked(), ["first", "second"]);
        assert!(prompt.read_line("third").is_err());
    }
}
