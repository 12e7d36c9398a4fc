//! In-memory sheet store for tests

use crate::error::{Error, Result};
use crate::lang::Language;
use crate::row::{FieldValue, SheetRow};
use crate::store::SheetSource;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Sheet source serving rows from memory. Sheets can be marked as failing
/// (every read errors) or as serial-only (concurrent access unsupported).
pub(crate) struct MemoryStore {
    sheets: HashMap<(String, Language), Vec<SheetRow>>,
    serial_only: HashSet<String>,
    failing: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            sheets: HashMap::new(),
            serial_only: HashSet::new(),
            failing: HashSet::new(),
        }
    }

    pub fn put(&mut self, sheet: &str, language: Language, rows: Vec<SheetRow>) {
        self.sheets.insert((sheet.to_string(), language), rows);
    }

    pub fn mark_serial_only(&mut self, sheet: &str) {
        self.serial_only.insert(sheet.to_string());
    }

    pub fn mark_failing(&mut self, sheet: &str) {
        self.failing.insert(sheet.to_string());
    }
}

impl SheetSource for MemoryStore {
    fn sheet(&self, name: &str, language: Language) -> Result<Vec<SheetRow>> {
        if self.failing.contains(name) {
            return Err(Error::FileRead {
                path: PathBuf::from(name),
                source: std::io::Error::new(std::io::ErrorKind::Other, "synthetic sheet failure"),
            });
        }
        Ok(self
            .sheets
            .get(&(name.to_string(), language))
            .cloned()
            .unwrap_or_default())
    }

    fn supports_concurrent_access(&self, name: &str) -> bool {
        !self.serial_only.contains(name)
    }
}

/// A row carrying a single text field
pub(crate) fn text_row(id: u32, field: &str, value: &str) -> SheetRow {
    SheetRow::new(id).with_field(field, FieldValue::Text(value.to_string()))
}
