//! # Persistence Layer
//!
//! This module defines the persistence abstraction for roster. The
//! [`StorageBackend`] trait lets the application work with different
//! backends.
//!
//! ## Design Rationale
//!
//! Persistence is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryBackend` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: Production file-based storage. The whole roster
//!   lives in one JSON document, `students.json`, in the data directory.
//! - [`memory::InMemoryBackend`]: In-memory storage for testing, with a
//!   switch to simulate write failures.
//!
//! ## Storage Format
//!
//! One snapshot document, overwritten in full on every save:
//!
//! ```text
//! {
//!   "students": [
//!     { "id": 1, "name": "...", "age": 14, "class": "...",
//!       "interests": "...", "dateAdded": "M/D/YYYY",
//!       "lastUpdated": "M/D/YYYY" }
//!   ],
//!   "nextId": 2
//! }
//! ```
//!
//! The id counter is persisted with the records so allocation stays
//! monotonic across restarts.
//!
//! ## Failure Policy
//!
//! A missing or unparseable document loads as a first run (empty roster,
//! counter at 1) rather than an error. Save failures are reported to the
//! caller, which downgrades them to a warning: the session continues on the
//! in-memory state.

use crate::error::Result;
use crate::model::RosterData;

pub mod fs;
pub mod memory;

/// Abstract interface for roster persistence.
pub trait StorageBackend {
    /// Read the persisted snapshot. Missing or corrupt state is a first
    /// run, not an error.
    fn load(&self) -> Result<RosterData>;

    /// Overwrite the persisted snapshot with the given state.
    fn save(&mut self, data: &RosterData) -> Result<()>;
}
