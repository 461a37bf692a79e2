//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for sunpanel operations, whichever UI drives them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: selector strings become [`RecordSelector`]s and
//!   `key=value` strings become [`Fields`]
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr or formatting
//!
//! ## Selectors
//!
//! 1. **Parsing**: every input is tried as a position or range
//!    ([`crate::index::parse_position_or_range`]) or a UUID.
//! 2. **Deduplication**: repeated selectors collapse, first mention wins.
//!    Ranges are not expanded here; they resolve against the listing.
//! 3. **Search Fallback**: if any input is neither, all inputs are joined with
//!    spaces and become one text search.
//!
//! A malformed range (`5-3`) is an error rather than a search term.
//!
//! ## Field Assignments
//!
//! - `key=value` sets a string
//! - `key:=<json>` sets any JSON value (`price:=120`, `tags:=["a","b"]`)
//! - `key=` removes the field
//!
//! ## Generic Over Gateway
//!
//! `SunpanelApi<S: Gateway>` runs against `FileStore` in production and
//! `InMemoryStore` in tests.

use crate::commands;
use crate::error::{Result, SunpanelError};
use crate::index::{parse_position_or_range, RecordSelector};
use crate::model::{Collection, Fields};
use crate::ordering::Direction;
use crate::store::Gateway;
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

/// The main API facade for sunpanel operations.
pub struct SunpanelApi<S: Gateway> {
    store: S,
    paths: commands::SunpanelPaths,
}

impl<S: Gateway> SunpanelApi<S> {
    pub fn new(store: S, paths: commands::SunpanelPaths) -> Self {
        Self { store, paths }
    }

    pub fn create_record<A: AsRef<str>>(
        &mut self,
        collection: Collection,
        assignments: &[A],
    ) -> Result<commands::CmdResult> {
        let fields = parse_field_assignments(assignments)?;
        commands::create::run(&mut self.store, collection, fields)
    }

    pub fn list_records(
        &self,
        collection: Collection,
        search: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, collection, search)
    }

    pub fn view_records<I: AsRef<str>>(
        &self,
        collection: Collection,
        inputs: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::view::run(&self.store, collection, &selectors)
    }

    pub fn update_record<I: AsRef<str>, A: AsRef<str>>(
        &mut self,
        collection: Collection,
        inputs: &[I],
        assignments: &[A],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        let fields = parse_field_assignments(assignments)?;
        commands::update::run(&mut self.store, collection, &selectors, fields)
    }

    pub fn move_record<I: AsRef<str>>(
        &mut self,
        collection: Collection,
        inputs: &[I],
        direction: Direction,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::reorder::run(&mut self.store, collection, &selectors, direction)
    }

    pub fn delete_records<I: AsRef<str>>(
        &mut self,
        collection: Collection,
        inputs: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        commands::delete::run(&mut self.store, collection, &selectors)
    }

    pub fn doctor(&mut self, collection: Collection, fix: bool) -> Result<commands::CmdResult> {
        commands::doctor::run(&mut self.store, collection, fix)
    }

    pub fn status(&self) -> Result<commands::CmdResult> {
        commands::status::run(&self.store)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::SunpanelPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordSelector>> {
    let mut selectors = Vec::new();
    let mut parse_failed = false;

    for input in inputs {
        let input = input.as_ref().trim();
        if let Ok(id) = Uuid::parse_str(input) {
            selectors.push(RecordSelector::Id(id));
            continue;
        }
        match parse_position_or_range(input) {
            Ok(selector) => selectors.push(selector),
            Err(e) => {
                if e.contains("Invalid range") {
                    return Err(SunpanelError::Api(e));
                }
                parse_failed = true;
                break;
            }
        }
    }

    if !parse_failed {
        let mut seen = HashSet::new();
        selectors.retain(|s| seen.insert(s.clone()));
        return Ok(selectors);
    }

    let search_term = inputs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");

    Ok(vec![RecordSelector::Text(search_term)])
}

fn parse_field_assignments<A: AsRef<str>>(assignments: &[A]) -> Result<Fields> {
    let mut fields = Fields::new();
    for assignment in assignments {
        let assignment = assignment.as_ref();
        let Some((key, raw)) = assignment.split_once('=') else {
            return Err(SunpanelError::Api(format!(
                "Expected key=value, got '{}'",
                assignment
            )));
        };

        let (key, value) = match key.strip_suffix(':') {
            Some(key) => {
                let value = serde_json::from_str(raw).map_err(|e| {
                    SunpanelError::Api(format!("Invalid JSON for '{}': {}", key, e))
                })?;
                (key, value)
            }
            None if raw.is_empty() => (key, Value::Null),
            None => (key, Value::String(raw.to_string())),
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(SunpanelError::Api(format!(
                "Missing field name in '{}'",
                assignment
            )));
        }
        fields.insert(key.to_string(), value);
    }
    Ok(fields)
}

pub use commands::{CmdMessage, CmdResult, CollectionSummary, MessageLevel, SunpanelPaths};
