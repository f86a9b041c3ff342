//! Snapshot persistence for the workout log.
//!
//! The journal is the store's storage handle. It owns the data directory and
//! two JSON slots: `workouts.json` holds the full date-keyed workout log and
//! `marked.json` holds the derived marked-dates cache. Every save rewrites a
//! slot in full through a temp file and an atomic rename, so an interrupted
//! write leaves the previous snapshot intact.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::workouts::store::{MarkedDates, WorkoutLog};

const WORKOUTS_FILE: &str = "workouts.json";
const MARKED_FILE: &str = "marked.json";

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "liftlog", "LiftLog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Scoped handle to the on-disk snapshot slots.
#[derive(Debug, Clone)]
pub struct Journal {
    dir: PathBuf,
}

impl Journal {
    /// Journal rooted at the platform data directory.
    pub fn open_default() -> Self {
        Self::at(get_data_dir())
    }

    /// Journal rooted at an explicit directory. Used by tests and the
    /// `LIFTLOG_DATA_DIR` override.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the snapshot slots live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the workout-log slot.
    pub fn workouts_path(&self) -> PathBuf {
        self.dir.join(WORKOUTS_FILE)
    }

    /// Path of the marked-dates slot.
    pub fn marked_path(&self) -> PathBuf {
        self.dir.join(MARKED_FILE)
    }

    /// Read the persisted workout log.
    ///
    /// Returns `Ok(None)` when no snapshot has been written yet (first run).
    /// A snapshot that exists but cannot be parsed is an error; the store
    /// treats it as absent and starts empty.
    pub fn load(&self) -> Result<Option<WorkoutLog>, JournalError> {
        let path = self.workouts_path();

        if !path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&path).map_err(|e| JournalError::IoError(e.to_string()))?;

        let log: WorkoutLog =
            serde_json::from_str(&content).map_err(|e| JournalError::ParseError(e.to_string()))?;

        Ok(Some(log))
    }

    /// Write the full workout log and the derived marked-dates cache,
    /// overwriting the previous snapshot.
    pub fn save(&self, log: &WorkoutLog, marks: &MarkedDates) -> Result<(), JournalError> {
        fs::create_dir_all(&self.dir).map_err(|e| JournalError::IoError(e.to_string()))?;

        let log_json = serde_json::to_string_pretty(log)
            .map_err(|e| JournalError::SerializeError(e.to_string()))?;
        let marks_json = serde_json::to_string_pretty(marks)
            .map_err(|e| JournalError::SerializeError(e.to_string()))?;

        self.write_slot(&self.workouts_path(), &log_json)?;
        self.write_slot(&self.marked_path(), &marks_json)?;

        Ok(())
    }

    /// Acquire a temp file next to `path`, write the content, flush, then
    /// rename over the old slot.
    fn write_slot(&self, path: &Path, content: &str) -> Result<(), JournalError> {
        let tmp = path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp).map_err(|e| JournalError::IoError(e.to_string()))?;
        file.write_all(content.as_bytes())
            .map_err(|e| JournalError::IoError(e.to_string()))?;
        file.sync_all()
            .map_err(|e| JournalError::IoError(e.to_string()))?;
        drop(file);

        fs::rename(&tmp, path).map_err(|e| JournalError::IoError(e.to_string()))?;

        Ok(())
    }
}

/// Snapshot persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
