//! Duke - personal task tracker for the terminal

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use duke::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("DUKE_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("duke=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let profile = cli.profile.unwrap_or_default();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "duke", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Profile { command }) => cli::profile::run(command),
        Some(Commands::Todo(args)) => cli::task::run_todo(&profile, args),
        Some(Commands::Deadline(args)) => cli::task::run_deadline(&profile, args),
        Some(Commands::Event(args)) => cli::task::run_event(&profile, args),
        Some(Commands::List(args)) => cli::list::run(&profile, args),
        Some(Commands::Done(args)) => cli::task::run_done(&profile, args),
        Some(Commands::Delete(args)) => cli::task::run_delete(&profile, args),
        Some(Commands::Find(args)) => cli::task::run_find(&profile, args),
        None => cli::run_shell(&profile),
    }
}
