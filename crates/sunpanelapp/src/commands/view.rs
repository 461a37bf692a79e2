use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::RecordSelector;
use crate::model::Collection;
use crate::store::Gateway;

use super::helpers::{indexed_records, resolve_selectors};

pub fn run<S: Gateway>(
    store: &S,
    collection: Collection,
    selectors: &[RecordSelector],
) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, collection, selectors)?;
    let indexed = indexed_records(store, collection)?;

    let listed = resolved
        .into_iter()
        .filter_map(|(_, id)| indexed.iter().find(|dp| dp.record.id == id).cloned())
        .collect();
    Ok(CmdResult::default().with_listed_records(listed))
}
