//! Task Store: durable persistence for tasks and settings
//!
//! Two independent JSON documents under one base directory: `tasks.json`
//! (the full task collection) and `settings.json`. Writes replace the whole
//! document via a temp file and rename, so a reader never observes a
//! partially written document.
//!
//! No operation past [`TaskStore::open`] ever fails to the caller: I/O and
//! parse failures are logged and degrade to safe defaults (empty collection
//! on read, silent no-op on write). A corrupt document is treated as "no
//! data", not a fatal error.

use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::domain::{AppSettings, Task};

const TASKS_FILE: &str = "tasks.json";
const SETTINGS_FILE: &str = "settings.json";

/// Durable key-value persistence boundary for tasks and settings
pub struct TaskStore {
    base_path: PathBuf,
}

impl TaskStore {
    /// Open or create a store at the given directory
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).context("Failed to create store directory")?;
        debug!(?base_path, "Opened task store");
        Ok(Self { base_path })
    }

    /// Load the persisted task collection
    ///
    /// Returns an empty collection when no document exists or the stored
    /// payload fails to parse.
    pub fn load_tasks(&self) -> Vec<Task> {
        match self.try_load_tasks() {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(error = %e, "Failed to load tasks, treating as empty");
                Vec::new()
            }
        }
    }

    /// Upsert a task by id
    ///
    /// Replaces the matching task (refreshing its `updated_at`), or appends
    /// when no match exists.
    pub fn write_task(&self, task: &Task) {
        let mut tasks = self.load_tasks();
        match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => {
                *existing = task.clone();
                existing.touch();
            }
            None => tasks.push(task.clone()),
        }
        if let Err(e) = self.try_write_tasks(&tasks) {
            warn!(error = %e, task_id = %task.id, "Failed to persist task");
        }
    }

    /// Remove the task with the given id; no-op when absent
    pub fn delete_task(&self, id: &str) {
        let mut tasks = self.load_tasks();
        tasks.retain(|t| t.id != id);
        if let Err(e) = self.try_write_tasks(&tasks) {
            warn!(error = %e, task_id = %id, "Failed to persist task deletion");
        }
    }

    /// Remove all tasks with completed status
    pub fn clear_completed(&self) {
        let mut tasks = self.load_tasks();
        tasks.retain(|t| !t.is_completed());
        if let Err(e) = self.try_write_tasks(&tasks) {
            warn!(error = %e, "Failed to persist completed-task removal");
        }
    }

    /// Remove the entire persisted task collection
    pub fn reset_all(&self) {
        let path = self.base_path.join(TASKS_FILE);
        if path.exists()
            && let Err(e) = fs::remove_file(&path)
        {
            warn!(error = %e, "Failed to remove tasks document");
        }
    }

    /// Load persisted settings, or defaults when missing or corrupt
    pub fn load_settings(&self) -> AppSettings {
        let path = self.base_path.join(SETTINGS_FILE);
        if !path.exists() {
            return AppSettings::default();
        }
        match fs::read_to_string(&path)
            .map_err(eyre::Report::from)
            .and_then(|content| serde_json::from_str(&content).map_err(eyre::Report::from))
        {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Failed to load settings, using defaults");
                AppSettings::default()
            }
        }
    }

    /// Persist settings
    pub fn save_settings(&self, settings: &AppSettings) {
        let result = serde_json::to_string_pretty(settings)
            .map_err(eyre::Report::from)
            .and_then(|json| self.write_document(SETTINGS_FILE, &json));
        if let Err(e) = result {
            warn!(error = %e, "Failed to persist settings");
        }
    }

    fn try_load_tasks(&self) -> Result<Vec<Task>> {
        let path = self.base_path.join(TASKS_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).context("Failed to read tasks document")?;
        let tasks = serde_json::from_str(&content).context("Failed to parse tasks document")?;
        Ok(tasks)
    }

    fn try_write_tasks(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks).context("Failed to serialize tasks")?;
        self.write_document(TASKS_FILE, &json)
    }

    /// Replace a document atomically: write a temp file, then rename over
    fn write_document(&self, name: &str, content: &str) -> Result<()> {
        let path = self.base_path.join(name);
        let tmp = self.base_path.join(format!("{}.tmp", name));
        fs::write(&tmp, content).context("Failed to write document")?;
        fs::rename(&tmp, &path).context("Failed to replace document")?;
        Ok(())
    }
}
