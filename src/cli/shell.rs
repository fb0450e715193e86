//! Interactive shell: one command per line until `bye`

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::storage::Storage;
use crate::task::{self, TaskError, TaskList};

const GREETING: &str = "Hello! I'm Duke\nWhat can I do for you?";
const FAREWELL: &str = "Bye. Hope to see you again soon!";
const UNKNOWN_COMMAND: &str = "I'm sorry, but I don't know what that means.";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Todo(String),
    Deadline(String),
    Event(String),
    List,
    Done(usize),
    Delete(usize),
    Find(String),
    Bye,
}

impl ShellCommand {
    /// Parse a non-empty line. The first word selects the command.
    pub fn parse(line: &str) -> task::Result<Self> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));

        match word {
            "todo" => Ok(Self::Todo(rest.to_string())),
            "deadline" => Ok(Self::Deadline(rest.to_string())),
            "event" => Ok(Self::Event(rest.to_string())),
            "list" => Ok(Self::List),
            "done" => parse_position(rest).map(Self::Done),
            "delete" => parse_position(rest).map(Self::Delete),
            "find" if rest.is_empty() => Err(TaskError::malformed(
                "Please tell me what to look for.",
            )),
            "find" => Ok(Self::Find(rest.to_string())),
            "bye" => Ok(Self::Bye),
            _ => Err(TaskError::malformed(UNKNOWN_COMMAND)),
        }
    }

    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Todo(_) | Self::Deadline(_) | Self::Event(_) | Self::Done(_) | Self::Delete(_)
        )
    }
}

fn parse_position(s: &str) -> task::Result<usize> {
    s.parse().map_err(|_| {
        TaskError::malformed(format!("'{}' is not a valid task number.", s))
    })
}

pub struct Shell<'a> {
    storage: &'a Storage,
    list: TaskList,
    greeting: bool,
}

impl<'a> Shell<'a> {
    pub fn new(storage: &'a Storage, greeting: bool) -> Result<Self> {
        let list = storage.load()?;
        Ok(Self {
            storage,
            list,
            greeting,
        })
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    /// Apply one command to the list and return the status text
    pub fn execute(&mut self, command: &ShellCommand) -> task::Result<String> {
        match command {
            ShellCommand::Todo(title) => self.list.add_todo(title),
            ShellCommand::Deadline(text) => self.list.add_deadline(text),
            ShellCommand::Event(text) => self.list.add_event(text),
            ShellCommand::List => Ok(self.list.render()),
            ShellCommand::Done(position) => self.list.complete(*position),
            ShellCommand::Delete(position) => self.list.delete(*position),
            ShellCommand::Find(keyword) => self.list.find(keyword),
            ShellCommand::Bye => Ok(FAREWELL.to_string()),
        }
    }

    /// Read commands until `bye` or end of input. Command errors are printed
    /// and the loop continues; only I/O on `output` ends it early. The
    /// farewell is printed once either way when banners are enabled.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        if self.greeting {
            writeln!(output, "{}\n", GREETING)?;
        }

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            debug!("shell command: {}", line);

            let command = match ShellCommand::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(output, "{}\n", e)?;
                    continue;
                }
            };

            let is_bye = command == ShellCommand::Bye;
            match self.execute(&command) {
                Ok(farewell) if is_bye => {
                    if self.greeting {
                        writeln!(output, "{}", farewell)?;
                    }
                    return Ok(());
                }
                Ok(status) => {
                    writeln!(output, "{}\n", status)?;
                    if command.is_mutating() {
                        if let Err(e) = self.storage.save(&self.list) {
                            warn!("Failed to save tasks: {:#}", e);
                            writeln!(output, "Could not save your tasks: {:#}\n", e)?;
                        }
                    }
                }
                Err(e) => writeln!(output, "{}\n", e)?,
            }
        }

        if self.greeting {
            writeln!(output, "{}", FAREWELL)?;
        }
        Ok(())
    }
}
