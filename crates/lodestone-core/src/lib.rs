//! lodestone-core: extract localized game-data tables from a sheet store
//!
//! This library provides functionality to:
//! - Read per-language row sheets from a store (CSV-backed by default)
//! - Merge rows across the four supported languages by row id
//! - Serialize each merged table to a compact binary file
//! - Summarize a run in a JSON manifest

pub mod error;
pub mod export;
pub mod lang;
pub mod manifest;
pub mod merger;
pub mod row;
pub mod store;
pub mod table;
pub mod writer;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::{Error, Result};
pub use export::{export_table, export_tables, verify_table, ExportOutcome};
pub use lang::{Language, LocalizedText};
pub use manifest::{ExportManifest, ManifestEntry, MANIFEST_FILE};
pub use merger::{merge_sheets, MERGE_WORKERS};
pub use row::{FieldValue, SheetRow};
pub use store::{CsvStore, SheetSource};
pub use table::{TableKind, TableRecord};
pub use writer::{read_table, table_path, write_table, Table};
