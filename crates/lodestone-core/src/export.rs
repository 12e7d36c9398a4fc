//! Per-table exporters and the all-tables orchestration

use crate::error::Result;
use crate::merger::merge_sheets;
use crate::store::SheetSource;
use crate::table::{
    Achievement, ClassJob, Deity, GrandCompany, Item, Minion, Mount, Race, Reputation, TableKind,
    TableRecord, Title, Town, Tribe,
};
use crate::writer::{read_table, write_table, Table};
use log::info;
use std::path::{Path, PathBuf};
use std::thread;

/// What one exporter produced
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub kind: TableKind,
    pub records: usize,
    pub path: PathBuf,
}

/// Export one table kind: merge all language passes and write the table file.
///
/// With `verify`, the just-written file is decoded back and the result
/// discarded; a corrupt write surfaces here instead of downstream.
pub fn export_table<R, S>(store: &S, out_dir: &Path, verify: bool) -> Result<ExportOutcome>
where
    R: TableRecord,
    S: SheetSource + Sync,
{
    let records = merge_sheets::<R, S>(store)?;
    let table = Table { records };
    let path = write_table(out_dir, R::TABLE, &table)?;

    if verify {
        let _ = read_table::<R>(&path)?;
    }

    info!(
        "exported {} {} records to {}",
        table.records.len(),
        R::TABLE,
        path.display()
    );
    Ok(ExportOutcome {
        kind: R::TABLE,
        records: table.records.len(),
        path,
    })
}

fn run_exporter<S: SheetSource + Sync>(
    store: &S,
    kind: TableKind,
    out_dir: &Path,
    verify: bool,
) -> Result<ExportOutcome> {
    match kind {
        TableKind::Item => export_table::<Item, S>(store, out_dir, verify),
        TableKind::Achievement => export_table::<Achievement, S>(store, out_dir, verify),
        TableKind::ClassJob => export_table::<ClassJob, S>(store, out_dir, verify),
        TableKind::Deity => export_table::<Deity, S>(store, out_dir, verify),
        TableKind::GrandCompany => export_table::<GrandCompany, S>(store, out_dir, verify),
        TableKind::Minion => export_table::<Minion, S>(store, out_dir, verify),
        TableKind::Mount => export_table::<Mount, S>(store, out_dir, verify),
        TableKind::Race => export_table::<Race, S>(store, out_dir, verify),
        TableKind::Reputation => export_table::<Reputation, S>(store, out_dir, verify),
        TableKind::Title => export_table::<Title, S>(store, out_dir, verify),
        TableKind::Town => export_table::<Town, S>(store, out_dir, verify),
        TableKind::Tribe => export_table::<Tribe, S>(store, out_dir, verify),
    }
}

/// Export the given table kinds.
///
/// Kinds whose sheets tolerate concurrent access run one thread each and
/// are joined before the remaining kinds run one by one with exclusive
/// access to the store. The first failure fails the whole run; exporters
/// share no mutable state, so a failed one never corrupts the others.
pub fn export_tables<S>(
    store: &S,
    kinds: &[TableKind],
    out_dir: &Path,
    verify: bool,
) -> Result<Vec<ExportOutcome>>
where
    S: SheetSource + Sync,
{
    let (concurrent, serial): (Vec<TableKind>, Vec<TableKind>) = kinds
        .iter()
        .copied()
        .partition(|kind| store.supports_concurrent_access(kind.sheet()));

    let results: Vec<Result<ExportOutcome>> = thread::scope(|scope| {
        let handles: Vec<_> = concurrent
            .iter()
            .map(|&kind| scope.spawn(move || run_exporter(store, kind, out_dir, verify)))
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(payload) => std::panic::resume_unwind(payload),
            })
            .collect()
    });

    let mut outcomes = Vec::with_capacity(kinds.len());
    for result in results {
        outcomes.push(result?);
    }

    for kind in serial {
        outcomes.push(run_exporter(store, kind, out_dir, verify)?);
    }

    Ok(outcomes)
}

/// Decode a written table file and return how many records it holds
pub fn verify_table(path: &Path, kind: TableKind) -> Result<usize> {
    Ok(match kind {
        TableKind::Item => read_table::<Item>(path)?.records.len(),
        TableKind::Achievement => read_table::<Achievement>(path)?.records.len(),
        TableKind::ClassJob => read_table::<ClassJob>(path)?.records.len(),
        TableKind::Deity => read_table::<Deity>(path)?.records.len(),
        TableKind::GrandCompany => read_table::<GrandCompany>(path)?.records.len(),
        TableKind::Minion => read_table::<Minion>(path)?.records.len(),
        TableKind::Mount => read_table::<Mount>(path)?.records.len(),
        TableKind::Race => read_table::<Race>(path)?.records.len(),
        TableKind::Reputation => read_table::<Reputation>(path)?.records.len(),
        TableKind::Title => read_table::<Title>(path)?.records.len(),
        TableKind::Town => read_table::<Town>(path)?.records.len(),
        TableKind::Tribe => read_table::<Tribe>(path)?.records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Language;
    use crate::testutil::{text_row, MemoryStore};
    use crate::writer::table_path;

    fn populated_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        for kind in TableKind::ALL {
            let field = match kind {
                TableKind::Minion | TableKind::Mount => "Singular",
                TableKind::Race | TableKind::Tribe | TableKind::Title => "Masculine",
                _ => "Name",
            };
            for language in Language::ALL {
                store.put(
                    kind.sheet(),
                    language,
                    vec![text_row(1, field, "alpha"), text_row(2, field, "beta")],
                );
            }
        }
        store
    }

    #[test]
    fn test_export_all_kinds_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = populated_store();

        let outcomes = export_tables(&store, &TableKind::ALL, dir.path(), false).unwrap();

        assert_eq!(outcomes.len(), TableKind::ALL.len());
        for kind in TableKind::ALL {
            let path = table_path(dir.path(), kind);
            assert!(path.is_file(), "missing {}", path.display());
            assert_eq!(verify_table(&path, kind).unwrap(), 2);
        }
    }

    #[test]
    fn test_export_serial_only_sheet_still_exported() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = populated_store();
        store.mark_serial_only(TableKind::Item.sheet());

        let outcomes = export_tables(&store, &TableKind::ALL, dir.path(), true).unwrap();

        assert_eq!(outcomes.len(), TableKind::ALL.len());
        // Serialized kinds are appended after the concurrent batch.
        assert_eq!(outcomes.last().unwrap().kind, TableKind::Item);
        assert!(table_path(dir.path(), TableKind::Item).is_file());
    }

    #[test]
    fn test_export_failure_writes_no_file_for_that_kind() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = populated_store();
        store.mark_failing(TableKind::Mount.sheet());

        let result = export_tables(&store, &TableKind::ALL, dir.path(), false);

        assert!(result.is_err());
        assert!(!table_path(dir.path(), TableKind::Mount).exists());
    }

    #[test]
    fn test_export_single_kind() {
        let dir = tempfile::tempdir().unwrap();
        let store = populated_store();

        let outcomes =
            export_tables(&store, &[TableKind::Minion], dir.path(), true).unwrap();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].kind, TableKind::Minion);
        assert_eq!(outcomes[0].records, 2);
        assert!(!table_path(dir.path(), TableKind::Mount).exists());
    }
}
