use crate::commands::{CmdResult, CollectionSummary};
use crate::error::Result;
use crate::model::Collection;
use crate::ordering::check_order;
use crate::store::Gateway;

/// Record count and order health for every collection.
pub fn run<S: Gateway>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for collection in Collection::ALL {
        let records = store.list_all(collection)?;
        result.collections.push(CollectionSummary {
            collection,
            records: records.len(),
            healthy: check_order(&records).is_healthy(),
        });
    }
    Ok(result)
}
