//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all roster operations, regardless of the UI in
//! front of it.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Routes** form submissions to add or update, depending on whether an
//!   edit is in progress
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It deliberately contains no business logic (that lives in
//! `commands/*.rs`), no I/O and no presentation concerns.
//!
//! ## Generic Over StorageBackend
//!
//! `RosterApi<S: StorageBackend>` is generic over persistence:
//! - Production: `RosterApi<FileBackend>`
//! - Testing: `RosterApi<InMemoryBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::StudentDraft;
use crate::query::SortKey;
use crate::storage::StorageBackend;
use crate::store::RosterStore;

/// The main API facade for roster operations.
///
/// Owns the authoritative store and its storage backend. All UI clients
/// should interact through this API.
pub struct RosterApi<S: StorageBackend> {
    store: RosterStore,
    backend: S,
}

impl<S: StorageBackend> RosterApi<S> {
    /// Hydrate the store from the backend and return the ready API.
    ///
    /// Missing or corrupt persisted state loads as a first run. An
    /// unreadable backing store starts an empty session and surfaces a
    /// warning; the session stays usable in memory.
    pub fn open(backend: S) -> (Self, Vec<CmdMessage>) {
        let mut warnings = Vec::new();
        let data = match backend.load() {
            Ok(data) => data,
            Err(e) => {
                warnings.push(CmdMessage::warning(format!(
                    "Could not read the saved roster ({}); starting empty",
                    e
                )));
                Default::default()
            }
        };
        let api = Self {
            store: RosterStore::hydrate(data),
            backend,
        };
        (api, warnings)
    }

    /// Route a submitted form: an in-progress edit updates that record,
    /// otherwise the draft becomes a new student.
    pub fn submit_form(&mut self, draft: StudentDraft, editing_id: Option<u64>) -> Result<CmdResult> {
        match editing_id {
            Some(id) => commands::update::run(&mut self.store, &mut self.backend, id, draft),
            None => commands::add::run(&mut self.store, &mut self.backend, draft),
        }
    }

    pub fn delete_student(&mut self, id: u64) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, &mut self.backend, id)
    }

    pub fn list_students(&self, term: &str, sort: SortKey) -> Result<CmdResult> {
        commands::list::run(&self.store, term, sort)
    }

    pub fn get_student(&self, id: u64) -> Result<CmdResult> {
        commands::show::run(&self.store, id)
    }

    pub fn export(&self) -> Result<CmdResult> {
        commands::export::run(&self.store)
    }

    pub fn clear_all(&mut self, confirmed: bool) -> Result<CmdResult> {
        commands::clear::run(&mut self.store, &mut self.backend, confirmed)
    }

    pub fn student_count(&self) -> usize {
        self.store.len()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, ExportDocument, MessageLevel};
