//! # Ordering: Display Positions Among Siblings
//!
//! Editors let an admin decide the order in which service cards, categories,
//! nav links and so on appear on the public site. The order is stored on each
//! record as `order_index`, and this module owns every computation over it.
//!
//! Everything here is a pure function: it takes a snapshot of a collection and
//! returns the `(id, order_index)` pairs that need to be written. Writing them
//! is the command layer's job (see [`crate::commands::apply`]).
//!
//! ## Target State
//!
//! After any ordering operation on `N` records the stored values are exactly
//! `0, 1, …, N-1`: no duplicates, no gaps. Records not directly involved keep
//! their relative order.
//!
//! ## Operations
//!
//! - [`next_order_index`]: value for a newly created record (`max + 1`, or `0`).
//! - [`reorder`]: move one record up or down by one position. The whole list is
//!   re-derived from positions, which also repairs any earlier gap or duplicate.
//! - [`close_gap`]: after a delete, pull every later record down by one.
//! - [`sort_for_display`]: stable sort by order value for rendering.
//! - [`check_order`] / [`renumber`]: diagnose and repair a damaged collection.
//!
//! ## Missing Values
//!
//! A record without an `order_index` is treated as `0` everywhere. That makes a
//! never-ordered record indistinguishable from one explicitly placed first;
//! this is kept as-is rather than guessed at.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::model::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(format!("Unknown direction '{}', expected up or down", other)),
        }
    }
}

/// One order value to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OrderUpdate {
    pub id: Uuid,
    pub order_index: u32,
}

impl OrderUpdate {
    pub fn new(id: Uuid, order_index: u32) -> Self {
        Self { id, order_index }
    }
}

/// Order value for a record about to be created.
///
/// Input order does not matter. Existing gaps or duplicates are left alone.
pub fn next_order_index(existing: &[Record]) -> u32 {
    existing
        .iter()
        .map(Record::order_or_default)
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

/// Returns a sorted copy; ties keep their fetch order.
pub fn sort_for_display(collection: &[Record]) -> Vec<Record> {
    let mut sorted = collection.to_vec();
    sorted.sort_by_key(Record::order_or_default);
    sorted
}

/// Moves `target` one position in `direction` and re-derives every position.
///
/// Returns only the pairs whose stored value changes, listed in the display
/// order from before the move. Moving the first record up, the last record
/// down, or an id that is not in the collection yields an empty list.
pub fn reorder(collection: &[Record], target: Uuid, direction: Direction) -> Vec<OrderUpdate> {
    let sorted = sort_for_display(collection);

    let Some(from) = sorted.iter().position(|r| r.id == target) else {
        return Vec::new();
    };
    let to = match direction {
        Direction::Up => from.checked_sub(1),
        Direction::Down => Some(from + 1).filter(|&j| j < sorted.len()),
    };
    let Some(to) = to else {
        return Vec::new();
    };

    // Swapping positions `from` and `to` then numbering 0..N-1.
    sorted
        .iter()
        .enumerate()
        .filter_map(|(pos, record)| {
            let new_pos = if pos == from {
                to
            } else if pos == to {
                from
            } else {
                pos
            };
            let new_index = position_value(new_pos);
            (record.order_index != Some(new_index))
                .then(|| OrderUpdate::new(record.id, new_index))
        })
        .collect()
}

/// Pulls every record above `deleted_order_index` down by one.
///
/// `remaining` must no longer contain the deleted record. Output is sorted by
/// ascending original order value.
pub fn close_gap(remaining: &[Record], deleted_order_index: u32) -> Vec<OrderUpdate> {
    let mut shifted: Vec<&Record> = remaining
        .iter()
        .filter(|r| r.order_or_default() > deleted_order_index)
        .collect();
    shifted.sort_by_key(|r| r.order_or_default());

    shifted
        .into_iter()
        .map(|r| OrderUpdate::new(r.id, r.order_or_default() - 1))
        .collect()
}

/// Re-derives `0..N-1` from the current display order.
pub fn renumber(collection: &[Record]) -> Vec<OrderUpdate> {
    sort_for_display(collection)
        .iter()
        .enumerate()
        .filter_map(|(pos, record)| {
            let new_index = position_value(pos);
            (record.order_index != Some(new_index))
                .then(|| OrderUpdate::new(record.id, new_index))
        })
        .collect()
}

fn position_value(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

/// Problems found in a collection's stored order values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderReport {
    pub total: usize,
    /// Records with no stored order value.
    pub missing: Vec<Uuid>,
    /// Values held by more than one record.
    pub duplicates: Vec<u32>,
    /// Values in `0..=max` that nobody holds.
    pub gaps: Vec<u32>,
}

impl OrderReport {
    pub fn is_healthy(&self) -> bool {
        self.missing.is_empty() && self.duplicates.is_empty() && self.gaps.is_empty()
    }
}

/// Inspects stored order values without changing anything.
pub fn check_order(collection: &[Record]) -> OrderReport {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    let mut missing = Vec::new();

    for record in collection {
        match record.order_index {
            Some(value) => *counts.entry(value).or_default() += 1,
            None => missing.push(record.id),
        }
    }

    let duplicates = counts
        .iter()
        .filter(|(_, &count)| count > 1)
        .map(|(&value, _)| value)
        .collect();

    let gaps = match counts.keys().next_back() {
        Some(&max) => (0..=max).filter(|v| !counts.contains_key(v)).collect(),
        None => Vec::new(),
    };

    OrderReport {
        total: collection.len(),
        missing,
        duplicates,
        gaps,
    }
}
