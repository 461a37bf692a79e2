//! # CLI Behavior
//!
//! This is **one possible UI client** for sunpanel. It is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! ## Addressing Records
//!
//! Every per-record command takes a collection and one or more selectors:
//!
//! - `sunpanel up services 3`: by display position
//! - `sunpanel delete services 2-4`: by position range
//! - `sunpanel edit services battery -f icon=bolt`: by unique text match
//!
//! Positions are the ones `sunpanel list` prints, and never shift because a
//! listing was filtered.
//!
//! ## Naked Execution
//!
//! `sunpanel` with no command lists the default collection
//! (`default_collection` in `sunpanel.toml`).
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `print`: output formatting (tables, colors, messages)
//! - `setup`: argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
