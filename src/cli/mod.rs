//! CLI command implementations

pub mod definition;
pub mod list;
pub mod profile;
pub mod shell;
pub mod task;

pub use definition::{Cli, Commands};

use anyhow::Result;
use std::io;

use crate::storage::{Config, Storage};

/// Start the interactive shell on stdin/stdout
pub fn run_shell(profile: &str) -> Result<()> {
    let config = Config::load()?;
    let storage = Storage::new(profile)?;
    let mut shell = shell::Shell::new(&storage, config.shell.greeting)?;

    let stdin = io::stdin();
    shell.run(stdin.lock(), io::stdout().lock())
}
