//! Binary table files: encode, write, and decode back

use crate::error::{Error, Result};
use crate::table::TableKind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root object of one table file: every merged record of one table kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table<R> {
    pub records: Vec<R>,
}

/// Path of the table file for `kind` under `dir`
pub fn table_path(dir: &Path, kind: TableKind) -> PathBuf {
    dir.join(format!("{}_table.bin", kind.file_stem()))
}

/// Encode `table` and write it to `<stem>_table.bin` under `dir`,
/// overwriting any existing file. Returns the path written.
///
/// The write is not atomic; a crash mid-write can leave a truncated file,
/// which [`read_table`] rejects.
pub fn write_table<R: Serialize>(dir: &Path, kind: TableKind, table: &Table<R>) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    // Size the buffer from the encoder's bound before encoding into it.
    let bound = bincode::serialized_size(table)?;
    let mut buf: Vec<u8> = Vec::with_capacity(bound as usize);
    bincode::serialize_into(&mut buf, table)?;

    let path = table_path(dir, kind);
    fs::write(&path, &buf)?;
    Ok(path)
}

/// Decode a table file written by [`write_table`]
pub fn read_table<R: DeserializeOwned>(path: &Path) -> Result<Table<R>> {
    let bytes = fs::read(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    bincode::deserialize(&bytes).map_err(|e| Error::Decode {
        path: path.to_path_buf(),
        source: e,
    })
}
