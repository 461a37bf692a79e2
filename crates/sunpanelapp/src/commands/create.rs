use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SunpanelError};
use crate::model::{validate_new_fields, Collection, Fields, NewRecord};
use crate::ordering::next_order_index;
use crate::store::Gateway;

use super::helpers::find_display_record;

pub fn run<S: Gateway>(store: &mut S, collection: Collection, mut fields: Fields) -> Result<CmdResult> {
    // Nulls mean "remove" in a patch; on a new record they are just absent.
    fields.retain(|_, value| !value.is_null());
    validate_new_fields(collection, &fields)?;

    let existing = store.list_all(collection)?;
    let order_index = next_order_index(&existing);
    if existing.iter().any(|r| r.order_or_default() == order_index) {
        return Err(SunpanelError::Api(format!(
            "No order value left after {} in {}. Run doctor --fix to renumber.",
            order_index, collection
        )));
    }
    let record = store.create(collection, NewRecord { order_index, fields })?;

    tracing::info!(
        collection = %collection,
        id = %record.id,
        order_index,
        "record created"
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created in {}: {}",
        collection,
        record.label()
    )));
    if let Some(dp) = find_display_record(store, collection, record.id)? {
        result.affected_records.push(dp);
    }
    Ok(result)
}
