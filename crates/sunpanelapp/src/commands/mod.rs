//! # Command Layer
//!
//! This module contains the **core business logic** of sunpanel. Each command
//! lives in its own submodule and implements pure Rust functions over a
//! [`Gateway`](crate::store::Gateway).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Validate editor input against the collection's required fields
//! - Ask [`crate::ordering`] which order values must change
//! - Write those changes through the gateway, one call at a time
//! - Return a structured [`CmdResult`] with affected records and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or formatting
//! - **Notification**: messages are returned with a level, the UI decides how
//!   to show them
//! - **Rollback or retry**: a failed batch is reported, never undone
//!
//! ## Sequential Writes
//!
//! Reordering, deleting and repairing can touch several records. Those writes
//! go through [`apply::apply_updates`], which issues them strictly one after
//! the other and stops at the first failure. Updates already written stay
//! written; the caller gets [`SunpanelError::Batch`](crate::error::SunpanelError::Batch)
//! with the count.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore`, including its injected write failures.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a record at the end of its collection
//! - [`list`]: List a collection in display order
//! - [`view`]: Retrieve selected records
//! - [`update`]: Edit a record's fields
//! - [`reorder`]: Move a record up or down one position
//! - [`delete`]: Delete records and close the gap they leave
//! - [`doctor`]: Check and repair order values
//! - [`status`]: Per-collection summary
//! - [`init`]: Create the data directory
//! - [`apply`]: Sequential update batches
//! - [`helpers`]: Selector resolution

use crate::index::DisplayRecord;
use crate::model::Collection;
use crate::ordering::OrderReport;
use serde::Serialize;
use std::path::PathBuf;

pub mod apply;
pub mod create;
pub mod delete;
pub mod doctor;
pub mod helpers;
pub mod init;
pub mod list;
pub mod reorder;
pub mod status;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct SunpanelPaths {
    /// Where collection documents and the local config live.
    pub data_dir: PathBuf,
    /// User-level config directory, if one could be determined.
    pub config_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionSummary {
    pub collection: Collection,
    pub records: usize,
    pub healthy: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<DisplayRecord>,
    pub listed_records: Vec<DisplayRecord>,
    pub collections: Vec<CollectionSummary>,
    pub order_report: Option<OrderReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }
}
