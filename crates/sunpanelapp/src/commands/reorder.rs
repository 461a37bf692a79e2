use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RecordSelector;
use crate::model::Collection;
use crate::ordering::{self, Direction};
use crate::store::Gateway;

use super::apply::apply_updates;
use super::helpers::{find_display_record, resolve_single};

/// Moves one record a single position up or down.
///
/// At the top (moving up) or bottom (moving down) nothing is written and the
/// result carries an info message instead of an error.
pub fn run<S: Gateway>(
    store: &mut S,
    collection: Collection,
    selectors: &[RecordSelector],
    direction: Direction,
) -> Result<CmdResult> {
    let (position, id) = resolve_single(store, collection, selectors)?;
    let records = store.list_all(collection)?;
    let updates = ordering::reorder(&records, id, direction);

    let mut result = CmdResult::default();

    if updates.is_empty() {
        tracing::debug!(collection = %collection, id = %id, %direction, "reorder at boundary");
        let edge = match direction {
            Direction::Up => "top",
            Direction::Down => "bottom",
        };
        result.add_message(CmdMessage::info(format!(
            "Already at the {} of {}",
            edge, collection
        )));
        if let Some(dp) = find_display_record(store, collection, id)? {
            result.affected_records.push(dp);
        }
        return Ok(result);
    }

    let written = apply_updates(store, collection, &updates)?;
    tracing::info!(
        collection = %collection,
        id = %id,
        %direction,
        written,
        "record moved"
    );

    if let Some(dp) = find_display_record(store, collection, id)? {
        result.add_message(CmdMessage::success(format!(
            "Moved {}: {} ({} -> {})",
            direction,
            dp.record.label(),
            position,
            dp.position
        )));
        result.affected_records.push(dp);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::SunpanelError;
    use crate::store::memory::fixtures::StoreFixture;

    fn orders(fixture: &StoreFixture) -> Vec<(String, Option<u32>)> {
        fixture
            .store
            .list_all(Collection::Services)
            .unwrap()
            .into_iter()
            .map(|r| (r.label(), r.order_index))
            .collect()
    }

    #[test]
    fn moving_up_swaps_with_the_previous_record() {
        let mut fixture = StoreFixture::new().with_titles(Collection::Services, &["x", "y", "z"]);
        let before = fixture.store.backend().save_attempts();

        let result = run(
            &mut fixture.store,
            Collection::Services,
            &[RecordSelector::Text("y".into())],
            Direction::Up,
        )
        .unwrap();

        assert_eq!(
            orders(&fixture),
            vec![
                ("x".to_string(), Some(1)),
                ("y".to_string(), Some(0)),
                ("z".to_string(), Some(2)),
            ]
        );
        // One write per changed record; z is untouched.
        assert_eq!(fixture.store.backend().save_attempts() - before, 2);
        assert_eq!(result.affected_records[0].position, 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn moving_down_swaps_with_the_next_record() {
        let mut fixture = StoreFixture::new().with_titles(Collection::Services, &["x", "y", "z"]);
        run(
            &mut fixture.store,
            Collection::Services,
            &[RecordSelector::Position(1)],
            Direction::Down,
        )
        .unwrap();
        assert_eq!(fixture.titles(Collection::Services), vec!["y", "x", "z"]);
    }

    #[test]
    fn first_record_up_is_a_quiet_noop() {
        let mut fixture = StoreFixture::new().with_titles(Collection::Services, &["x", "y", "z"]);
        let before = fixture.store.backend().save_attempts();

        let result = run(
            &mut fixture.store,
            Collection::Services,
            &[RecordSelector::Position(1)],
            Direction::Up,
        )
        .unwrap();

        assert_eq!(fixture.store.backend().save_attempts(), before);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.messages[0].content.contains("top"));
        assert_eq!(fixture.titles(Collection::Services), vec!["x", "y", "z"]);
    }

    #[test]
    fn last_record_down_is_a_quiet_noop() {
        let mut fixture = StoreFixture::new().with_titles(Collection::Services, &["x", "y", "z"]);
        let result = run(
            &mut fixture.store,
            Collection::Services,
            &[RecordSelector::Position(3)],
            Direction::Down,
        )
        .unwrap();
        assert!(result.messages[0].content.contains("bottom"));
        assert_eq!(fixture.titles(Collection::Services), vec!["x", "y", "z"]);
    }

    #[test]
    fn reorder_heals_a_damaged_collection() {
        let mut fixture = StoreFixture::new()
            .with_raw_order(Collection::Services, "a", Some(0))
            .with_raw_order(Collection::Services, "b", Some(4))
            .with_raw_order(Collection::Services, "c", Some(4))
            .with_raw_order(Collection::Services, "d", None);

        run(
            &mut fixture.store,
            Collection::Services,
            &[RecordSelector::Text("c".into())],
            Direction::Up,
        )
        .unwrap();

        let mut values: Vec<u32> = fixture
            .store
            .list_all(Collection::Services)
            .unwrap()
            .iter()
            .map(|r| r.order_or_default())
            .collect();
        values.sort_unstable();
        assert_eq!(values, vec![0, 1, 2, 3]);
        // "d" (missing, reads as 0) sorts right after "a"; "c" started last.
        assert_eq!(fixture.titles(Collection::Services), vec!["a", "d", "c", "b"]);
    }

    #[test]
    fn failed_write_is_reported_without_rollback() {
        let mut fixture = StoreFixture::new().with_titles(Collection::Services, &["x", "y", "z"]);
        fixture.store.backend().fail_after_writes(1);

        let err = run(
            &mut fixture.store,
            Collection::Services,
            &[RecordSelector::Position(2)],
            Direction::Up,
        )
        .unwrap_err();

        assert!(matches!(err, SunpanelError::Batch { applied: 1, total: 2, .. }));
        // x was moved to 1, y never got 0: a duplicate remains until repaired.
        assert_eq!(
            orders(&fixture),
            vec![
                ("x".to_string(), Some(1)),
                ("y".to_string(), Some(1)),
                ("z".to_string(), Some(2)),
            ]
        );
    }
}
