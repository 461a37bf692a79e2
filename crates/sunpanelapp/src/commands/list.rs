use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Collection;
use crate::store::Gateway;

use super::helpers::{indexed_records, record_matches};

/// Lists a collection in display order. Filtering keeps canonical positions.
pub fn run<S: Gateway>(store: &S, collection: Collection, search: Option<&str>) -> Result<CmdResult> {
    let indexed = indexed_records(store, collection)?;

    let listed = match search.map(str::trim).filter(|t| !t.is_empty()) {
        Some(term) => indexed
            .into_iter()
            .filter(|dp| record_matches(dp, term))
            .collect(),
        None => indexed,
    };

    Ok(CmdResult::default().with_listed_records(listed))
}
