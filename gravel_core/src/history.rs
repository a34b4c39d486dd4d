//! # Calculation History Store
//!
//! Append-only log of completed calculations, held in memory and mirrored
//! to a JSON file with atomic write semantics (write to .tmp, sync, rename).
//!
//! Durability is best-effort by contract: `append` never fails the caller.
//! A failed write is reported through the `log` facade and swallowed; the
//! in-memory log still reflects the append. Likewise a missing, corrupt, or
//! unparsable file at open time yields an empty log, not an error.
//!
//! There is no query, filter, or eviction. The log grows unboundedly for
//! the life of the storage medium.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gravel_core::history::{HistoryRecord, HistoryStore};
//! use gravel_core::shapes::Shape;
//!
//! let mut store = HistoryStore::open("gravel_history.json");
//! # let result = unimplemented!();
//! store.append(HistoryRecord::new(Shape::Rectangular, &result));
//! println!("{} calculations on record", store.len());
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::calculator::CalculationResult;
use crate::errors::{CalcError, CalcResult};
use crate::shapes::Shape;

/// Default file name for the durable history mirror.
pub const HISTORY_FILE: &str = "gravel_history.json";

/// A persisted summary of one completed calculation.
///
/// Immutable after creation; its only identity is the timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Plot shape the calculation was for
    pub shape: Shape,

    /// Volume in cubic yards
    pub volume: f64,

    /// Weight in US short tons
    pub weight: f64,

    /// Total cost (zero when no price was supplied)
    pub cost: f64,

    /// When the calculation completed (serialized as ISO-8601)
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    /// Summarize a calculation result, stamped with the current time.
    pub fn new(shape: Shape, result: &CalculationResult) -> Self {
        HistoryRecord {
            shape,
            volume: result.volume_cuyd,
            weight: result.weight_tons,
            cost: result.total_cost,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered, append-only calculation log with a durable JSON mirror.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    /// Open a store backed by the given file.
    ///
    /// If the file exists and parses as a record array, the log is restored
    /// from it. If it is absent, corrupt, or unparsable, the store starts
    /// empty; the condition is logged, never raised.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match load_records(&path) {
            Ok(records) => {
                debug!("restored {} history records from {}", records.len(), path.display());
                records
            }
            Err(e) if path.exists() => {
                warn!("discarding unreadable history at {}: {}", path.display(), e);
                Vec::new()
            }
            Err(_) => Vec::new(),
        };
        HistoryStore { path, records }
    }

    /// Append a record to the log and mirror the full log to disk.
    ///
    /// The in-memory log always reflects the append; a failed disk write is
    /// logged and swallowed. No retry is attempted.
    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push(record);
        if let Err(e) = self.persist() {
            warn!("could not persist history to {}: {}", self.path.display(), e);
        }
    }

    /// All records, in append order.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Number of records on the log.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the durable mirror.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the durable mirror with the full in-memory log.
    ///
    /// Writes to a temp file, syncs, then renames so an interrupted write
    /// never corrupts the existing mirror.
    fn persist(&self) -> CalcResult<()> {
        let json = serde_json::to_string_pretty(&self.records).map_err(|e| {
            CalcError::SerializationError {
                reason: e.to_string(),
            }
        })?;

        let tmp_path = self.path.with_extension("json.tmp");

        let mut tmp_file = File::create(&tmp_path).map_err(|e| {
            CalcError::storage("create temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        tmp_file.write_all(json.as_bytes()).map_err(|e| {
            CalcError::storage("write temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        tmp_file.sync_all().map_err(|e| {
            CalcError::storage("sync temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            CalcError::storage("rename to final", self.path.display().to_string(), e.to_string())
        })?;

        Ok(())
    }
}

/// Read and parse the record array from a mirror file.
fn load_records(path: &Path) -> CalcResult<Vec<HistoryRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CalcError::storage("read", path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}
