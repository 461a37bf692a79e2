use crate::error::{Result, SunpanelError};
use crate::index::{index_records, DisplayRecord, RecordSelector};
use crate::model::Collection;
use crate::store::Gateway;
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

pub fn indexed_records<S: Gateway>(store: &S, collection: Collection) -> Result<Vec<DisplayRecord>> {
    let records = store.list_all(collection)?;
    Ok(index_records(&records))
}

/// Case-insensitive match against every string field of a record.
pub fn record_matches(dp: &DisplayRecord, term: &str) -> bool {
    let term = term.to_lowercase();
    dp.record.fields.values().any(|value| match value {
        Value::String(s) => s.to_lowercase().contains(&term),
        _ => false,
    })
}

/// Resolves selectors to `(position, id)` pairs against the current listing.
/// Each record appears at most once, in first-mention order.
pub fn resolve_selectors<S: Gateway>(
    store: &S,
    collection: Collection,
    selectors: &[RecordSelector],
) -> Result<Vec<(usize, Uuid)>> {
    let indexed = indexed_records(store, collection)?;
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    let not_found = |position: usize| {
        SunpanelError::Api(format!(
            "Position {} not found in {} ({} records)",
            position,
            collection,
            indexed.len()
        ))
    };

    for selector in selectors {
        let (position, id) = match selector {
            RecordSelector::Position(position) => position
                .checked_sub(1)
                .and_then(|i| indexed.get(i))
                .map(|dp| (dp.position, dp.record.id))
                .ok_or_else(|| not_found(*position))?,
            RecordSelector::Range(start, end) => {
                if *end > indexed.len() {
                    return Err(not_found(*end));
                }
                let start = (*start).max(1);
                for dp in &indexed[start - 1..*end] {
                    if seen.insert(dp.record.id) {
                        results.push((dp.position, dp.record.id));
                    }
                }
                continue;
            }
            RecordSelector::Id(id) => indexed
                .iter()
                .find(|dp| dp.record.id == *id)
                .map(|dp| (dp.position, dp.record.id))
                .ok_or(SunpanelError::RecordNotFound {
                    collection,
                    id: *id,
                })?,
            RecordSelector::Text(term) => {
                let matches: Vec<&DisplayRecord> =
                    indexed.iter().filter(|dp| record_matches(dp, term)).collect();
                match matches.as_slice() {
                    [] => {
                        return Err(SunpanelError::Api(format!(
                            "No record in {} matches \"{}\"",
                            collection, term
                        )))
                    }
                    [dp] => (dp.position, dp.record.id),
                    many => {
                        return Err(SunpanelError::Api(format!(
                            "\"{}\" matches {} records in {}. Please be more specific.",
                            term,
                            many.len(),
                            collection
                        )))
                    }
                }
            }
        };

        if seen.insert(id) {
            results.push((position, id));
        }
    }

    Ok(results)
}

/// Resolves selectors that must name exactly one record.
pub fn resolve_single<S: Gateway>(
    store: &S,
    collection: Collection,
    selectors: &[RecordSelector],
) -> Result<(usize, Uuid)> {
    let resolved = resolve_selectors(store, collection, selectors)?;
    match resolved.as_slice() {
        [single] => Ok(*single),
        [] => Err(SunpanelError::Api("No record selected".to_string())),
        many => Err(SunpanelError::Api(format!(
            "Expected a single record, got {}",
            many.len()
        ))),
    }
}

/// Looks up the current display entry for a record id.
pub fn find_display_record<S: Gateway>(
    store: &S,
    collection: Collection,
    id: Uuid,
) -> Result<Option<DisplayRecord>> {
    Ok(indexed_records(store, collection)?
        .into_iter()
        .find(|dp| dp.record.id == id))
}
