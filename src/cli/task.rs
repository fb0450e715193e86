//! One-shot task commands: add, done, delete, find

use anyhow::Result;
use clap::Args;

use crate::storage::Storage;
use crate::task::TaskList;

#[derive(Args)]
pub struct TodoArgs {
    /// Task title
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    title: Vec<String>,
}

impl TodoArgs {
    pub fn title(&self) -> String {
        self.title.join(" ")
    }
}

#[derive(Args)]
pub struct DatedArgs {
    /// Title followed by the date directive, e.g. `Submit report /by 2024-03-01`
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    text: Vec<String>,
}

impl DatedArgs {
    pub fn text(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Args)]
pub struct PositionArgs {
    /// Task number as shown by `list`
    pub position: usize,
}

#[derive(Args)]
pub struct FindArgs {
    /// Text to look for in task titles (case-sensitive)
    keyword: String,
}

pub fn run_todo(profile: &str, args: TodoArgs) -> Result<()> {
    mutate(profile, |list| Ok(list.add_todo(&args.title())?))
}

pub fn run_deadline(profile: &str, args: DatedArgs) -> Result<()> {
    mutate(profile, |list| Ok(list.add_deadline(&args.text())?))
}

pub fn run_event(profile: &str, args: DatedArgs) -> Result<()> {
    mutate(profile, |list| Ok(list.add_event(&args.text())?))
}

pub fn run_done(profile: &str, args: PositionArgs) -> Result<()> {
    mutate(profile, |list| Ok(list.complete(args.position)?))
}

pub fn run_delete(profile: &str, args: PositionArgs) -> Result<()> {
    mutate(profile, |list| Ok(list.delete(args.position)?))
}

pub fn run_find(profile: &str, args: FindArgs) -> Result<()> {
    let storage = Storage::new(profile)?;
    let list = storage.load()?;
    println!("{}", list.find(&args.keyword)?);
    Ok(())
}

/// Load, apply, save, print. Nothing is written when the operation fails.
fn mutate(profile: &str, op: impl FnOnce(&mut TaskList) -> Result<String>) -> Result<()> {
    let storage = Storage::new(profile)?;
    let mut list = storage.load()?;
    let status = op(&mut list)?;
    storage.save(&list)?;
    println!("{}", status);
    Ok(())
}
