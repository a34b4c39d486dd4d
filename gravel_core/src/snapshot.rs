//! # Form Snapshot
//!
//! Convenience persistence of last-used input values, keyed by field
//! identifier. Values are stored and restored verbatim as strings with no
//! validation; the presentation layer uses them to prefill its inputs.
//!
//! Persistence follows the same best-effort contract as the history store:
//! saves are swallowed-and-logged on failure, loads fall back to empty.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

/// Default file name for the snapshot mirror.
pub const SNAPSHOT_FILE: &str = "gravel_form_data.json";

/// Last-used raw form values, keyed by field identifier.
///
/// Persisted as a flat field-id to value JSON object.
#[derive(Debug, Default)]
pub struct FormSnapshot {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FormSnapshot {
    /// Load a snapshot from the given file, or start empty if the file is
    /// absent or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        FormSnapshot { path, values }
    }

    /// Get the stored value for a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Store a field value verbatim.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Best-effort write of all values back to the mirror file.
    pub fn save(&self) {
        let json = match serde_json::to_string_pretty(&self.values) {
            Ok(json) => json,
            Err(e) => {
                warn!("could not serialize form snapshot: {}", e);
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            warn!("could not save form snapshot to {}: {}", self.path.display(), e);
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
