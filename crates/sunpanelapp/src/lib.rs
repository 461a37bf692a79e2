//! # Sunpanel Architecture
//!
//! Sunpanel manages the **ordered content collections** behind a solar-services
//! website: service cards, testimonials, hero slides, navigation links. Every
//! record carries an `order_index`, and this library keeps those values
//! meaningful as editors create, move and delete records.
//!
//! Like any tool in this family, it is a library that happens to have a CLI.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/sunpanel)                                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (positions/search → selectors)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Reads through the gateway, asks ordering what to change  │
//! │  - Writes the changes one at a time, never rolls back       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Ordering (ordering.rs)                                     │
//! │  - Pure functions: next index, reorder, close gap, sort     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Gateway trait                                            │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns
//! `Result<CmdResult>`. It never prints and never exits. Diagnostics go
//! through `tracing`; the binary decides whether anyone sees them.
//!
//! ## Testing Strategy
//!
//! 1. **Ordering** (`ordering.rs`): properties of the pure functions,
//!    checked exhaustively for small collections.
//! 2. **Commands** (`commands/*.rs`): the lion's share, against
//!    `InMemoryStore` with injected write failures.
//! 3. **API** (`api.rs`): selector and field parsing, dispatch.
//! 4. **CLI** (`crates/sunpanel/tests`): end-to-end runs of the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`ordering`]: Order assignment, reordering, gap closing, display sort
//! - [`store`]: Gateway trait and its implementations
//! - [`model`]: `Record`, `Collection`, patches and validation
//! - [`index`]: Display positions and selectors
//! - [`config`]: Configuration management
//! - [`init`]: Data directory discovery and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod ordering;
pub mod store;
