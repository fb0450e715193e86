//! Save-file location, profiles and user configuration

pub mod config;
pub mod store;

pub use config::{load_config, save_config, Config, ShellConfig, StorageConfig};
pub use store::Storage;

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_PROFILE: &str = "default";

const APP_DIR_ENV: &str = "DUKE_HOME";
const PROFILES_DIR: &str = "profiles";

/// Root directory for config and profiles, created on demand.
///
/// `$DUKE_HOME` wins; otherwise the XDG config dir on Linux and `~/.duke` elsewhere.
pub fn get_app_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os(APP_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => default_app_dir()?,
    };

    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create app directory {}", dir.display()))?;
    }

    Ok(dir)
}

#[cfg(target_os = "linux")]
fn default_app_dir() -> Result<PathBuf> {
    let config_dir =
        dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?;
    Ok(config_dir.join("duke"))
}

#[cfg(not(target_os = "linux"))]
fn default_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
    Ok(home.join(".duke"))
}

pub fn get_profile_dir(profile: &str) -> Result<PathBuf> {
    validate_profile_name(profile)?;
    let dir = get_app_dir()?.join(PROFILES_DIR).join(profile);
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

pub fn list_profiles() -> Result<Vec<String>> {
    let dir = get_app_dir()?.join(PROFILES_DIR);
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut profiles = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                profiles.push(name.to_string());
            }
        }
    }
    profiles.sort();
    Ok(profiles)
}

pub fn create_profile(name: &str) -> Result<()> {
    validate_profile_name(name)?;
    let dir = get_app_dir()?.join(PROFILES_DIR).join(name);
    if dir.exists() {
        bail!("Profile '{}' already exists", name);
    }
    fs::create_dir_all(&dir)?;
    info!("Created profile {}", name);
    Ok(())
}

pub fn delete_profile(name: &str) -> Result<()> {
    validate_profile_name(name)?;
    if name == DEFAULT_PROFILE || name == Config::load()?.default_profile {
        bail!("Cannot delete the default profile");
    }
    let dir = get_app_dir()?.join(PROFILES_DIR).join(name);
    if !dir.exists() {
        bail!("Profile '{}' does not exist", name);
    }
    fs::remove_dir_all(&dir)?;
    info!("Deleted profile {}", name);
    Ok(())
}

fn validate_profile_name(name: &str) -> Result<()> {
    if name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_whitespace)
    {
        bail!("Invalid profile name: '{}'", name);
    }
    Ok(())
}
