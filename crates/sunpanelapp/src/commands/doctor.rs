use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Collection;
use crate::ordering::{check_order, renumber};
use crate::store::Gateway;

use super::apply::apply_updates;
use super::helpers::indexed_records;

/// Reports gaps, duplicates and missing order values. With `fix`, rewrites
/// the collection to `0..N-1` in its current display order.
pub fn run<S: Gateway>(store: &mut S, collection: Collection, fix: bool) -> Result<CmdResult> {
    let records = store.list_all(collection)?;
    let report = check_order(&records);
    let mut result = CmdResult::default();

    if report.is_healthy() {
        result.add_message(CmdMessage::info(format!(
            "{}: order is healthy ({} records)",
            collection, report.total
        )));
        result.order_report = Some(report);
        return Ok(result);
    }

    if !report.missing.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "{} record(s) have no order value",
            report.missing.len()
        )));
    }
    if !report.duplicates.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Duplicate order values: {}",
            join_values(&report.duplicates)
        )));
    }
    if !report.gaps.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Missing order values: {}",
            join_values(&report.gaps)
        )));
    }

    if fix {
        let updates = renumber(&records);
        let written = apply_updates(store, collection, &updates)?;
        tracing::info!(collection = %collection, written, "collection renumbered");
        result.add_message(CmdMessage::success(format!(
            "Renumbered {} record(s) in {}",
            written, collection
        )));
        result.listed_records = indexed_records(store, collection)?;
    } else {
        result.add_message(CmdMessage::info("Run with --fix to renumber"));
    }

    result.order_report = Some(report);
    Ok(result)
}

fn join_values(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
