//! Run manifest: JSON summary of what an export produced
//!
//! Written next to the table files so downstream diff tooling can see what
//! a run contained without decoding the binaries.

use crate::error::{Error, Result};
use crate::export::ExportOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the manifest written next to the table files
pub const MANIFEST_FILE: &str = "manifest.json";

/// One exported table in the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Table kind, as its file stem
    pub table: String,
    /// Table file that was written
    pub file: PathBuf,
    /// Number of merged records in the file
    pub records: usize,
}

/// Summary of one export run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportManifest {
    /// When the run finished
    pub generated_at: DateTime<Utc>,
    /// Store the tables were read from
    pub store_root: PathBuf,
    /// Exported tables, sorted by table name
    pub tables: Vec<ManifestEntry>,
}

impl ExportManifest {
    /// Build a manifest from export outcomes
    pub fn new(store_root: impl Into<PathBuf>, outcomes: &[ExportOutcome]) -> Self {
        let mut tables: Vec<ManifestEntry> = outcomes
            .iter()
            .map(|outcome| ManifestEntry {
                table: outcome.kind.to_string(),
                file: outcome.path.clone(),
                records: outcome.records,
            })
            .collect();
        tables.sort_by(|a, b| a.table.cmp(&b.table));

        Self {
            generated_at: Utc::now(),
            store_root: store_root.into(),
            tables,
        }
    }

    /// Load a manifest from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(Error::Json)
    }

    /// Save the manifest to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
