//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::{get_app_dir, DEFAULT_PROFILE};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_profile")]
    pub default_profile: String,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub shell: ShellConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: default_profile(),
            storage: StorageConfig::default(),
            shell: ShellConfig::default(),
        }
    }
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Save file name inside the profile directory
    #[serde(default = "default_file_name")]
    pub file_name: String,

    #[serde(default = "default_true")]
    pub backup_on_save: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            backup_on_save: true,
        }
    }
}

fn default_file_name() -> String {
    "tasks.txt".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Print the greeting and farewell banners
    #[serde(default = "default_true")]
    pub greeting: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { greeting: true }
    }
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Invalid config at {:?}", path))?;
    Ok(Some(config))
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
