//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student record library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Routes form submissions to add or update                 │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Validates drafts, mutates the store, triggers saves      │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store + Storage (store.rs, storage/)                       │
//! │  - RosterStore: the authoritative in-memory collection      │
//! │  - StorageBackend trait: FileBackend (production),          │
//! │    InMemoryBackend (testing)                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, store), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! The one exception is the storage layer, which owns the single JSON
//! snapshot file. A failed save is downgraded to a warning message rather
//! than an error: the mutation stays in memory and the session continues.
//!
//! ## Id Allocation
//!
//! Record ids come from a monotonically increasing counter that is persisted
//! alongside the records and never reused, so deleting a student can never
//! cause a later addition to collide with a survivor's id.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of business logic against
//!    `InMemoryBackend`. This is where the lion's share of testing lives.
//! 2. **API** (`api.rs`): dispatch tests—right command, right arguments.
//! 3. **CLI** (`tests/`): `assert_cmd` tests driving the compiled binary
//!    against a temp `ROSTER_HOME`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The authoritative in-memory record collection
//! - [`storage`]: Persistence abstraction and implementations
//! - [`model`]: Core data types (`StudentRecord`, `StudentDraft`)
//! - [`validate`]: Field and uniqueness validation
//! - [`query`]: Search filtering and sorting
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod query;
pub mod storage;
pub mod store;
pub mod validate;
