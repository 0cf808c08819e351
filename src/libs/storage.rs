//! JSON file persistence for the task list.
//!
//! The whole list is read once at startup and rewritten in full after every
//! successful mutation. There is no locking and no atomic replace: a crash
//! mid-write can leave a damaged file, which the next [`Storage::load`]
//! treats like a corrupted one and replaces with an empty list.
//!
//! Two layers are provided:
//!
//! - [`Storage::try_load`] / [`Storage::try_save`] return a [`StorageError`]
//!   and are what tests and other callers can reason about.
//! - [`Storage::load`] / [`Storage::save`] never fail. They report problems to
//!   the user and degrade, which is what the interactive menu needs.
//!
//! ```rust,no_run
//! use tasklist::libs::storage::Storage;
//!
//! let storage = Storage::default();
//! let mut tasks = storage.load();
//! tasks.add("Buy milk").unwrap();
//! storage.save(&tasks);
//! ```

use super::messages::Message;
use super::task::TaskList;
use crate::{msg_debug, msg_error, msg_warning};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default tasks file, resolved against the working directory.
pub const TASKS_FILE_NAME: &str = "tasks.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} does not contain a valid task list: {source}")]
    Corrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Self::new(TASKS_FILE_NAME)
    }
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the task list. A missing file is an empty list, not an error.
    pub fn try_load(&self) -> Result<TaskList, StorageError> {
        if !self.path.exists() {
            msg_debug!("No tasks file at {}, starting empty", self.path.display());
            return Ok(TaskList::new());
        }

        let bytes = fs::read(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        let tasks: TaskList = serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupted {
            path: self.path.clone(),
            source,
        })?;

        msg_debug!("Loaded {} task(s) from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    /// Overwrites the file with the full, pretty-printed list.
    pub fn try_save(&self, tasks: &TaskList) -> Result<(), StorageError> {
        let io_error = |source: io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, tasks).map_err(|source| io_error(source.into()))?;
        writer.flush().map_err(io_error)?;

        msg_debug!("Saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }

    /// Reads the task list, falling back to an empty list on any failure.
    pub fn load(&self) -> TaskList {
        match self.try_load() {
            Ok(tasks) => tasks,
            Err(StorageError::Corrupted { source, .. }) => {
                msg_debug!("Discarding unreadable tasks file: {}", source);
                msg_warning!(Message::TasksFileCorrupted(self.file_name()));
                TaskList::new()
            }
            Err(error) => {
                msg_error!(Message::TasksLoadFailed(error.to_string()));
                TaskList::new()
            }
        }
    }

    /// Writes the task list, reporting failures. Returns whether the write succeeded.
    pub fn save(&self, tasks: &TaskList) -> bool {
        match self.try_save(tasks) {
            Ok(()) => true,
            Err(error) => {
                msg_error!(Message::TasksSaveFailed(error.to_string()));
                false
            }
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
