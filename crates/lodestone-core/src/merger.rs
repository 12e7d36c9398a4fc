//! Language-merge engine: fold per-language sheets into id-keyed records

use crate::error::Result;
use crate::lang::Language;
use crate::store::SheetSource;
use crate::table::TableRecord;
use log::debug;
use parking_lot::Mutex;
use rayon::prelude::*;
use std::collections::HashMap;

/// Worker cap for folding one language's rows into the shared map
pub const MERGE_WORKERS: usize = 4;

/// Merge all four language passes of `R`'s sheet into one record per
/// distinct row id, sorted by id.
///
/// Languages are processed in [`Language::ALL`] order; rows within a pass
/// are folded with at most [`MERGE_WORKERS`] workers. Any sheet-read
/// failure aborts this merge without touching other tables.
pub fn merge_sheets<R, S>(store: &S) -> Result<Vec<R>>
where
    R: TableRecord,
    S: SheetSource + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(MERGE_WORKERS)
        .build()?;
    let merged: Mutex<HashMap<u32, R>> = Mutex::new(HashMap::new());

    for language in Language::ALL {
        let rows = store.sheet(R::TABLE.sheet(), language)?;
        debug!("{}: merging {} rows ({})", R::TABLE, rows.len(), language);

        pool.install(|| {
            rows.par_iter().for_each(|row| {
                // Find-or-create and the field write share the critical
                // section. Ids are unique within one pass, so concurrent
                // rows contend only on map structure, never on one record.
                let mut map = merged.lock();
                let record = map.entry(row.id).or_insert_with(|| R::from_row(row));
                record.apply_language(language, row);
            });
        });
    }

    let mut records: Vec<R> = merged.into_inner().into_values().collect();
    // Canonical order, so repeated runs produce identical bytes.
    records.sort_unstable_by_key(|record| record.id());
    Ok(records)
}
