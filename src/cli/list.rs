//! `duke list` command implementation

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;

use crate::storage::Storage;
use crate::task::{Task, TaskKind, TaskList};

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Show pending tasks whose date has passed
    #[arg(long)]
    overdue: bool,
}

#[derive(Serialize)]
struct TaskJson<'a> {
    position: usize,
    kind: TaskKind,
    done: bool,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    due: Option<NaiveDate>,
}

impl<'a> TaskJson<'a> {
    fn new(position: usize, task: &'a Task) -> Self {
        Self {
            position,
            kind: task.kind(),
            done: task.is_done(),
            title: task.title(),
            due: task.due(),
        }
    }
}

pub fn run(profile: &str, args: ListArgs) -> Result<()> {
    let storage = Storage::new(profile)?;
    let list = storage.load()?;
    let list = if args.overdue {
        list.overdue(Local::now().date_naive())
    } else {
        list
    };

    if args.json {
        println!("{}", to_json(&list)?);
        return Ok(());
    }

    println!("{}", list);
    Ok(())
}

fn to_json(list: &TaskList) -> Result<String> {
    let tasks: Vec<TaskJson> = list
        .iter()
        .enumerate()
        .map(|(i, task)| TaskJson::new(i + 1, task))
        .collect();
    Ok(serde_json::to_string_pretty(&tasks)?)
}
