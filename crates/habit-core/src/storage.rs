//! Persistence for the habit collection: a JSON file in the user data
//! directory, plus the `/export` payload and its strict re-import.
//!
//! The core never learns the storage medium beyond these functions. Startup
//! goes through [`load_or_default`], which substitutes the sample habit set
//! for absent or malformed state and never errors.

use crate::store::{Habit, HabitStore};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the `/export` payload, written to the working directory.
pub const EXPORT_FILE_NAME: &str = "habits_export.json";

const HABITS_FILE_NAME: &str = "habits.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access habit state: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode habit state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-user data file location, falling back to the working directory when
/// the platform directories cannot be resolved.
pub fn habits_path() -> PathBuf {
    match ProjectDirs::from("", "", "habitsys") {
        Some(dirs) => dirs.data_dir().join(HABITS_FILE_NAME),
        None => PathBuf::from(HABITS_FILE_NAME),
    }
}

/// Reads the persisted collection, substituting the sample set when the
/// file is absent or does not parse. Never fails.
pub fn load_or_default(path: &Path) -> HabitStore {
    fs::read_to_string(path)
        .ok()
        .and_then(|text| serde_json::from_str::<Vec<Habit>>(&text).ok())
        .map(HabitStore::new)
        .unwrap_or_else(HabitStore::sample)
}

/// Writes the collection as pretty-printed JSON, creating parent
/// directories as needed.
pub fn save(path: &Path, habits: &[Habit]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(habits)?)?;
    Ok(())
}

/// Writes the `/export` payload: a UTF-8 JSON array of habit records.
pub fn export(path: &Path, habits: &[Habit]) -> Result<(), StorageError> {
    save(path, habits)
}

/// Strict parse of an export payload back into a collection. Unlike
/// [`load_or_default`] this reports failures, so a caller can tell a bad
/// file from an empty one.
pub fn import(path: &Path) -> Result<Vec<Habit>, StorageError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
