//! Persistence gateway for the aggregator state.
//!
//! The whole [`AppState`] lives in one JSON blob on disk, read on load and
//! rewritten after every mutation. Access is last-writer-wins with no lock
//! discipline: the aggregator runs as a single interactive session, so there
//! are no concurrent writers to guard against.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use nolasales_core::AppState;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Owns the state blob's location and mediates every read and write of it.
///
/// Operations that mutate state take the [`AppState`] explicitly and persist
/// through this gateway; there is no ambient storage access anywhere else.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted state. `Ok(None)` when the blob does not exist
    /// yet; a corrupted blob is surfaced as [`StoreError::Parse`] rather
    /// than silently reseeded.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] on I/O failure and [`StoreError::Parse`]
    /// when the blob is not a valid serialized state.
    pub fn load(&self) -> Result<Option<AppState>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.display().to_string(),
                    source: e,
                })
            }
        };
        let state = serde_json::from_str(&raw).map_err(|e| StoreError::Parse {
            context: self.path.display().to_string(),
            source: e,
        })?;
        Ok(Some(state))
    }

    /// Writes the full state blob, creating parent directories on first use.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] on I/O failure.
    pub fn save(&self, state: &AppState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                    path: parent.display().to_string(),
                    source: e,
                })?;
            }
        }
        // Serializing AppState cannot fail (string keys, no non-finite
        // floats), but route the error through Parse instead of panicking.
        let json = serde_json::to_string(state).map_err(|e| StoreError::Parse {
            context: "state serialization".to_owned(),
            source: e,
        })?;
        fs::write(&self.path, json).map_err(|e| StoreError::Write {
            path: self.path.display().to_string(),
            source: e,
        })
    }

    /// Loads the persisted state, seeding and saving the default state on
    /// first run.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from [`load`](Self::load) and
    /// [`save`](Self::save).
    pub fn load_or_init(&self) -> Result<AppState, StoreError> {
        if let Some(state) = self.load()? {
            return Ok(state);
        }
        tracing::info!(path = %self.path.display(), "seeding default state");
        let state = AppState::with_default_stores();
        self.save(&state)?;
        Ok(state)
    }

    /// Parses a full state blob from text and, only if it parses, replaces
    /// the persisted state wholesale. On a parse error nothing is written,
    /// so the prior state survives untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Parse`] when the text is not a valid serialized
    /// state, and [`StoreError::Write`] if persisting the replacement fails.
    pub fn import(&self, json: &str) -> Result<AppState, StoreError> {
        let state: AppState = serde_json::from_str(json).map_err(|e| StoreError::Parse {
            context: "imported data".to_owned(),
            source: e,
        })?;
        self.save(&state)?;
        Ok(state)
    }
}

/// Renders the state as the pretty-printed JSON used for export files.
///
/// # Errors
///
/// Returns [`StoreError::Parse`] if serialization fails (not expected for
/// well-formed state).
pub fn export_pretty(state: &AppState) -> Result<String, StoreError> {
    serde_json::to_string_pretty(state).map_err(|e| StoreError::Parse {
        context: "state serialization".to_owned(),
        source: e,
    })
}

/// Default export file name, stamped with the given date:
/// `nolasales-data-2025-08-05.json`.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("nolasales-data-{}.json", date.format("%Y-%m-%d"))
}
