use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SunpanelError};
use crate::index::RecordSelector;
use crate::model::{validate_field_patch, Collection, Fields, RecordPatch};
use crate::store::Gateway;

use super::helpers::{find_display_record, resolve_single};

/// Edits a record's fields. Order is never touched here.
pub fn run<S: Gateway>(
    store: &mut S,
    collection: Collection,
    selectors: &[RecordSelector],
    fields: Fields,
) -> Result<CmdResult> {
    validate_field_patch(collection, &fields)?;
    let patch = RecordPatch::fields(fields);
    if patch.is_empty() {
        return Err(SunpanelError::Api("Nothing to update".to_string()));
    }

    let (_, id) = resolve_single(store, collection, selectors)?;
    let updated = store.update(collection, &id, patch)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated in {}: {}",
        collection,
        updated.label()
    )));
    if let Some(dp) = find_display_record(store, collection, id)? {
        result.affected_records.push(dp);
    }
    Ok(result)
}
