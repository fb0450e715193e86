use std::fmt;

use thiserror::Error;

/// Which index-facing operation rejected a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Complete,
    Delete,
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskAction::Complete => write!(f, "mark as done"),
            TaskAction::Delete => write!(f, "delete"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("{0}")]
    MalformedInput(String),

    #[error("This task already exists in your list!\n\t{0}")]
    DuplicateTask(String),

    #[error("The task you are trying to {action} does not exist.")]
    IndexOutOfRange {
        action: TaskAction,
        position: usize,
        size: usize,
    },

    #[error("Corrupt record on line {line}: {reason}")]
    CorruptRecord { line: usize, reason: String },
}

impl TaskError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        TaskError::MalformedInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
