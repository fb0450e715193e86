//! `duke profile` subcommands implementation

use anyhow::{bail, Result};
use clap::Subcommand;
use std::io::{self, Write};

use crate::storage::{self, Config};

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// List all profiles
    #[command(alias = "ls")]
    List,

    /// Create a new profile
    #[command(alias = "new")]
    Create {
        /// Profile name
        name: String,
    },

    /// Delete a profile and its task list
    #[command(alias = "rm")]
    Delete {
        /// Profile name
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or set default profile
    Default {
        /// Profile name (optional, shows current if not provided)
        name: Option<String>,
    },
}

pub fn run(command: Option<ProfileCommands>) -> Result<()> {
    match command {
        Some(ProfileCommands::List) | None => list_profiles(),
        Some(ProfileCommands::Create { name }) => create_profile(&name),
        Some(ProfileCommands::Delete { name, yes }) => delete_profile(&name, yes),
        Some(ProfileCommands::Default { name }) => match name {
            Some(n) => set_default_profile(&n),
            None => show_default_profile(),
        },
    }
}

fn list_profiles() -> Result<()> {
    let profiles = storage::list_profiles()?;
    let config = Config::load()?;

    if profiles.is_empty() {
        println!("No profiles found.");
        println!("Add a task to create the default profile automatically.");
        return Ok(());
    }

    println!("Profiles:");
    for p in &profiles {
        if *p == config.default_profile {
            println!("  * {} (default)", p);
        } else {
            println!("    {}", p);
        }
    }
    println!("\nTotal: {} profiles", profiles.len());

    Ok(())
}

fn create_profile(name: &str) -> Result<()> {
    storage::create_profile(name)?;
    println!("✓ Created profile: {}", name);
    println!("  Use with: duke -p {}", name);
    Ok(())
}

fn delete_profile(name: &str, yes: bool) -> Result<()> {
    if !yes {
        print!(
            "Are you sure you want to delete profile '{}'? This will remove all of its tasks. [y/N] ",
            name
        );
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;

        if response.trim().to_lowercase() != "y" {
            println!("Cancelled.");
            return Ok(());
        }
    }

    storage::delete_profile(name)?;
    println!("✓ Deleted profile: {}", name);
    Ok(())
}

fn show_default_profile() -> Result<()> {
    println!("Default profile: {}", Config::load()?.default_profile);
    Ok(())
}

fn set_default_profile(name: &str) -> Result<()> {
    let profiles = storage::list_profiles()?;
    if !profiles.iter().any(|p| p == name) {
        bail!("Profile '{}' does not exist", name);
    }

    let mut config = Config::load()?;
    config.default_profile = name.to_string();
    storage::save_config(&config)?;
    println!("✓ Default profile set to: {}", name);
    Ok(())
}
