//! # Storage Layer
//!
//! This module defines the persistence boundary. Everything above it talks to
//! a [`Gateway`]: a plain document store with list/get/create/update/delete and
//! nothing more. In particular there are **no multi-document transactions**
//! and **no locks** between reading a collection and writing it back.
//!
//! ## Split
//!
//! - [`Gateway`]: the "what" (records, ids, partial updates).
//! - [`backend::StorageBackend`]: the "how" (files on disk, or memory).
//! - [`record_store::RecordStore`]: implements the first on top of the second.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON document per collection on disk.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O,
//!   including injected write failures.
//!
//! ## Storage Layout
//!
//! ```text
//! .sunpanel/
//! ├── sunpanel.toml        # Optional configuration
//! ├── services.json        # [Record, ...] in creation order
//! ├── testimonials.json
//! └── ...
//! ```
//!
//! Records are kept in creation order. That is the "fetch order" the display
//! sorter falls back on when two records share an order value.

use crate::error::Result;
use crate::model::{Collection, NewRecord, Record, RecordPatch};
use uuid::Uuid;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod record_store;

/// Abstract interface for the record store.
///
/// Every method is one independent remote-style call. Callers that need
/// several writes issue them one after another and live with partial
/// failure.
pub trait Gateway {
    /// Every record of a collection, in fetch order.
    fn list_all(&self, collection: Collection) -> Result<Vec<Record>>;

    /// A single record by id.
    fn get(&self, collection: Collection, id: &Uuid) -> Result<Record>;

    /// Stores a new record. The store assigns the id and timestamps.
    fn create(&mut self, collection: Collection, new: NewRecord) -> Result<Record>;

    /// Applies a partial update and returns the stored result.
    fn update(&mut self, collection: Collection, id: &Uuid, patch: RecordPatch) -> Result<Record>;

    /// Removes a record permanently.
    fn delete(&mut self, collection: Collection, id: &Uuid) -> Result<()>;
}
