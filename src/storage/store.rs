//! Task list persistence - one save file per profile

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{get_profile_dir, Config, DEFAULT_PROFILE};
use crate::task::TaskList;

pub struct Storage {
    profile: String,
    tasks_path: PathBuf,
    backup_on_save: bool,
}

impl Storage {
    pub fn new(profile: &str) -> Result<Self> {
        let config = Config::load()?;
        let profile_name = if profile.is_empty() {
            config.default_profile.clone()
        } else {
            profile.to_string()
        };

        let profile_dir = get_profile_dir(&profile_name)?;
        let tasks_path = profile_dir.join(&config.storage.file_name);

        Ok(Self {
            profile: profile_name,
            tasks_path,
            backup_on_save: config.storage.backup_on_save,
        })
    }

    /// Storage backed by an explicit file, outside any profile
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            profile: DEFAULT_PROFILE.to_string(),
            tasks_path: path.into(),
            backup_on_save: true,
        }
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn path(&self) -> &Path {
        &self.tasks_path
    }

    /// Previous save file, kept next to the current one as `<file>.bak`
    pub fn backup_path(&self) -> PathBuf {
        let mut path = self.tasks_path.clone().into_os_string();
        path.push(".bak");
        PathBuf::from(path)
    }

    pub fn load(&self) -> Result<TaskList> {
        if !self.tasks_path.exists() {
            debug!("No save file at {}", self.tasks_path.display());
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.tasks_path)
            .with_context(|| format!("Failed to read tasks from {:?}", self.tasks_path))?;
        if content.trim().is_empty() {
            return Ok(TaskList::new());
        }

        let list = TaskList::parse(&content)
            .with_context(|| format!("Failed to load tasks from {:?}", self.tasks_path))?;
        debug!(
            "Loaded {} tasks from {}",
            list.len(),
            self.tasks_path.display()
        );
        Ok(list)
    }

    pub fn save(&self, list: &TaskList) -> Result<()> {
        if self.backup_on_save && self.tasks_path.exists() {
            if let Err(e) = fs::copy(&self.tasks_path, self.backup_path()) {
                warn!("Failed to create backup: {}", e);
            }
        }

        if let Some(parent) = self.tasks_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.tasks_path, list.to_persisted_text())
            .with_context(|| format!("Failed to write tasks to {:?}", self.tasks_path))?;
        debug!("Saved {} tasks to {}", list.len(), self.tasks_path.display());
        Ok(())
    }
}
