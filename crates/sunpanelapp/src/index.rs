//! # Record Identifiers: UUID vs Display Position
//!
//! Records are stored under UUIDs, which nobody wants to type. The admin
//! instead refers to records by their **display position**: the 1-based rank
//! in the collection as the public site would render it.
//!
//! ## Canonical Positions
//!
//! Positions always come from the full, unfiltered collection sorted with
//! [`crate::ordering::sort_for_display`]. Filtering a listing never renumbers
//! it, so `delete services 3` targets the same record whether or not the last
//! listing was filtered.
//!
//! ## Selector Grammar
//!
//! - **Position**: `N` (e.g. `1`, `12`)
//! - **Range**: `Start-End` (e.g. `2-4`), start must be ≤ end. Ranges stay
//!   unexpanded until they are resolved against a listing.
//! - **UUID**: the full record id
//! - **Text**: anything else is a case-insensitive search that must match
//!   exactly one record
//!
//! ## Implementation
//!
//! - [`index_records`]: pairs each record with its canonical position
//! - [`DisplayRecord`]: a record plus its position
//! - [`RecordSelector`]: parsed user reference
//! - [`parse_position_or_range`]: parses `"3"` or `"2-4"` into a selector

use serde::Serialize;
use uuid::Uuid;

use crate::model::Record;
use crate::ordering::sort_for_display;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    /// 1-based display position.
    pub position: usize,
    pub record: Record,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordSelector {
    Position(usize),
    /// Inclusive, `start <= end`.
    Range(usize, usize),
    Id(Uuid),
    Text(String),
}

/// Assigns canonical display positions to a whole collection.
pub fn index_records(records: &[Record]) -> Vec<DisplayRecord> {
    sort_for_display(records)
        .into_iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            position: i + 1,
            record,
        })
        .collect()
}

fn parse_position(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("Positions start at 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a position", s)),
    }
}

/// Parses a single position or an inclusive range.
pub fn parse_position_or_range(s: &str) -> Result<RecordSelector, String> {
    if let Some((start, end)) = s.split_once('-') {
        let (Ok(start), Ok(end)) = (parse_position(start), parse_position(end)) else {
            return Err(format!("'{}' is not a position range", s));
        };
        if start > end {
            return Err(format!(
                "Invalid range: {} is greater than {}",
                start, end
            ));
        }
        return Ok(RecordSelector::Range(start, end));
    }
    parse_position(s).map(RecordSelector::Position)
}
