//! Top-level clap definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::list::ListArgs;
use super::profile::ProfileCommands;
use super::task::{DatedArgs, FindArgs, PositionArgs, TodoArgs};

#[derive(Parser)]
#[command(name = "duke")]
#[command(version, about = "Personal task tracker: to-dos, deadlines and events")]
#[command(
    long_about = "Personal task tracker: to-dos, deadlines and events.\n\n\
    Run without a subcommand to start the interactive shell."
)]
pub struct Cli {
    /// Profile whose task list to use (defaults to the configured default)
    #[arg(short, long, global = true, env = "DUKE_PROFILE")]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a to-do
    Todo(TodoArgs),

    /// Add a deadline: <title> /by YYYY-MM-DD
    Deadline(DatedArgs),

    /// Add an event: <title> /at YYYY-MM-DD
    Event(DatedArgs),

    /// List tasks
    #[command(alias = "ls")]
    List(ListArgs),

    /// Mark a task as done
    Done(PositionArgs),

    /// Delete a task
    #[command(alias = "rm")]
    Delete(PositionArgs),

    /// Show tasks whose title contains a keyword
    Find(FindArgs),

    /// Manage profiles
    Profile {
        #[command(subcommand)]
        command: Option<ProfileCommands>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_deadline_words() {
        let cli = Cli::try_parse_from([
            "duke",
            "deadline",
            "Submit",
            "report",
            "/by",
            "2024-03-01",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Deadline(args)) => {
                assert_eq!(args.text(), "Submit report /by 2024-03-01")
            }
            _ => panic!("expected deadline command"),
        }
    }

    #[test]
    fn test_parse_global_profile() {
        let cli = Cli::try_parse_from(["duke", "list", "--profile", "work"]).unwrap();
        assert_eq!(cli.profile.as_deref(), Some("work"));
        assert!(matches!(cli.command, Some(Commands::List(_))));
    }

    #[test]
    fn test_no_subcommand_means_shell() {
        let cli = Cli::try_parse_from(["duke"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_delete_alias() {
        let cli = Cli::try_parse_from(["duke", "rm", "2"]).unwrap();
        match cli.command {
            Some(Commands::Delete(args)) => assert_eq!(args.position, 2),
            _ => panic!("expected delete command"),
        }
    }
}
