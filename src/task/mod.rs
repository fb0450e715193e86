//! Task management module
//!
//! This module holds the task list and its save-file format:
//! - Task kinds (todo, deadline, event) and their one-line rendering
//! - Duplicate-free, 1-based list operations returning status text
//! - Line-oriented save format `<kind><done><date>|<title>`

pub mod error;
pub mod list;
pub mod model;

pub use error::{Result, TaskAction, TaskError};
pub use list::TaskList;
pub use model::{Task, TaskKind};
