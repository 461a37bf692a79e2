use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayRecord, RecordSelector};
use crate::model::Collection;
use crate::ordering::close_gap;
use crate::store::Gateway;

use super::apply::apply_updates;
use super::helpers::resolve_selectors;

/// Deletes records and closes the gap each one leaves.
///
/// Selectors are resolved against the listing as it stands before anything is
/// deleted. Records are then removed one at a time, each followed by its own
/// gap-closing batch.
pub fn run<S: Gateway>(
    store: &mut S,
    collection: Collection,
    selectors: &[RecordSelector],
) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, collection, selectors)?;
    let mut result = CmdResult::default();

    for (position, id) in resolved {
        // The former order value is needed after the record is gone.
        let record = store.get(collection, &id)?;
        let deleted_order_index = record.order_or_default();

        store.delete(collection, &id)?;
        tracing::info!(
            collection = %collection,
            id = %id,
            order_index = deleted_order_index,
            "record deleted"
        );

        let remaining = store.list_all(collection)?;
        let updates = close_gap(&remaining, deleted_order_index);
        apply_updates(store, collection, &updates)?;

        result.add_message(CmdMessage::success(format!(
            "Deleted from {} ({}): {}",
            collection,
            position,
            record.label()
        )));
        result.affected_records.push(DisplayRecord { position, record });
    }

    Ok(result)
}
