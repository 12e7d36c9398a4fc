//! Sheet store collaborators: the source of per-language rows
//!
//! The packed game archive itself is read by external tooling; this crate
//! consumes sheets already unpacked to per-language CSV files. The
//! [`SheetSource`] trait is the seam where an archive-backed reader would
//! plug in instead.

use crate::error::{Error, Result};
use crate::lang::Language;
use crate::row::{FieldValue, SheetRow};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Row-by-row sheet reader keyed by language
pub trait SheetSource {
    /// Read every row of one language's sheet. Iteration order is
    /// implementation-defined and not stable across calls.
    fn sheet(&self, name: &str, language: Language) -> Result<Vec<SheetRow>>;

    /// Whether this sheet tolerates being read alongside other sheets.
    /// Sheets reporting false are read with exclusive access to the store.
    fn supports_concurrent_access(&self, _name: &str) -> bool {
        true
    }
}

/// Sheet store backed by per-language CSV files under a root directory.
///
/// Expects `<root>/<Sheet>.<code>.csv` (e.g. `Achievement.en.csv`). The
/// first CSV column holds the row id; the remaining header names are the
/// row's field names.
#[derive(Debug)]
pub struct CsvStore {
    root: PathBuf,
    sheets: BTreeMap<String, BTreeSet<Language>>,
}

impl CsvStore {
    /// Open a store rooted at `root`, indexing the sheet files under it
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::StoreOpen {
                path: root.to_path_buf(),
                message: "not a directory".to_string(),
            });
        }

        let mut sheets: BTreeMap<String, BTreeSet<Language>> = BTreeMap::new();
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry?;
            let path = entry.path();

            if path.extension().is_some_and(|ext| ext == "csv") {
                if let Some((sheet, language)) = split_sheet_name(path) {
                    sheets.entry(sheet).or_default().insert(language);
                }
            }
        }

        Ok(Self {
            root: root.to_path_buf(),
            sheets,
        })
    }

    /// Sheet names discovered under the root, with the languages present
    pub fn sheets(&self) -> &BTreeMap<String, BTreeSet<Language>> {
        &self.sheets
    }

    fn sheet_path(&self, name: &str, language: Language) -> PathBuf {
        self.root.join(format!("{}.{}.csv", name, language.code()))
    }
}

impl SheetSource for CsvStore {
    fn sheet(&self, name: &str, language: Language) -> Result<Vec<SheetRow>> {
        let path = self.sheet_path(name, language);
        let file = File::open(&path).map_err(|e| Error::FileRead {
            path: path.clone(),
            source: e,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader
            .headers()
            .map_err(|e| Error::Csv {
                path: path.clone(),
                source: e,
            })?
            .clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| Error::Csv {
                path: path.clone(),
                source: e,
            })?;

            let raw_id = record.get(0).unwrap_or("");
            let id: u32 = raw_id.trim().parse().map_err(|_| Error::InvalidRowId {
                value: raw_id.to_string(),
                path: path.clone(),
            })?;

            // Rows shorter than the header keep the missing fields at default.
            let mut row = SheetRow::new(id);
            for (name, value) in headers.iter().skip(1).zip(record.iter().skip(1)) {
                row.insert(name, FieldValue::parse(value));
            }
            rows.push(row);
        }

        Ok(rows)
    }
}

/// Split "Achievement.en.csv" into ("Achievement", English)
fn split_sheet_name(path: &Path) -> Option<(String, Language)> {
    let stem = path.file_stem()?.to_str()?;
    let (sheet, code) = stem.rsplit_once('.')?;
    let language = Language::from_code(code)?;
    (!sheet.is_empty()).then(|| (sheet.to_string(), language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store_with(files: &[(&str, &str)]) -> (tempfile::TempDir, CsvStore) {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let store = CsvStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_invalid_root() {
        let result = CsvStore::open("/does/not/exist");
        assert!(matches!(result, Err(Error::StoreOpen { .. })));
    }

    #[test]
    fn test_sheet_rows() {
        let (_dir, store) = store_with(&[(
            "Achievement.en.csv",
            "key,Name\n1,To Crush Your Enemies I\n2,Mastering War\n",
        )]);

        let rows = store.sheet("Achievement", Language::English).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].text("Name"), "To Crush Your Enemies I");
        assert_eq!(rows[1].id, 2);
    }

    #[test]
    fn test_sheet_boolean_fields() {
        let (_dir, store) = store_with(&[(
            "Title.en.csv",
            "key,Masculine,Feminine,IsPrefix\n5,the Pious,the Pious,True\n",
        )]);

        let rows = store.sheet("Title", Language::English).unwrap();
        assert!(rows[0].flag("IsPrefix"));
    }

    #[test]
    fn test_missing_language_file() {
        let (_dir, store) = store_with(&[("Mount.en.csv", "key,Singular\n1,chocobo\n")]);

        let result = store.sheet("Mount", Language::French);
        assert!(matches!(result, Err(Error::FileRead { .. })));
    }

    #[test]
    fn test_invalid_row_id() {
        let (_dir, store) = store_with(&[("Town.en.csv", "key,Name\nnope,Gridania\n")]);

        let result = store.sheet("Town", Language::English);
        assert!(matches!(result, Err(Error::InvalidRowId { .. })));
    }

    #[test]
    fn test_sheet_index() {
        let (_dir, store) = store_with(&[
            ("Race.en.csv", "key,Masculine,Feminine\n1,Hyur,Hyur\n"),
            ("Race.de.csv", "key,Masculine,Feminine\n1,Hyuran,Hyuran\n"),
            ("notes.txt", "not a sheet"),
        ]);

        let sheets = store.sheets();
        assert_eq!(sheets.len(), 1);
        let languages = &sheets["Race"];
        assert!(languages.contains(&Language::English));
        assert!(languages.contains(&Language::German));
        assert!(!languages.contains(&Language::French));
    }

    #[test]
    fn test_split_sheet_name() {
        assert_eq!(
            split_sheet_name(Path::new("GrandCompany.fr.csv")),
            Some(("GrandCompany".to_string(), Language::French))
        );
        assert_eq!(split_sheet_name(Path::new("NoLanguage.csv")), None);
        assert_eq!(split_sheet_name(Path::new("Weird.zz.csv")), None);
    }
}
