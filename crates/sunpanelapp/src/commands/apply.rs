use crate::error::{Result, SunpanelError};
use crate::model::{Collection, RecordPatch};
use crate::ordering::OrderUpdate;
use crate::store::Gateway;

/// Writes order updates one at a time, in the given order.
///
/// Stops at the first failing call. Updates written before it are kept;
/// the ones after it are never attempted. Returns the number written.
pub fn apply_updates<S: Gateway>(
    store: &mut S,
    collection: Collection,
    updates: &[OrderUpdate],
) -> Result<usize> {
    let total = updates.len();

    for (applied, update) in updates.iter().enumerate() {
        if let Err(source) = store.update(
            collection,
            &update.id,
            RecordPatch::order(update.order_index),
        ) {
            tracing::warn!(
                collection = %collection,
                id = %update.id,
                applied,
                total,
                error = %source,
                "order update batch aborted"
            );
            return Err(SunpanelError::Batch {
                applied,
                total,
                source: Box::new(source),
            });
        }
    }

    if total > 0 {
        tracing::debug!(collection = %collection, total, "order updates applied");
    }
    Ok(total)
}
