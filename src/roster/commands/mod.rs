use crate::model::StudentRecord;
use crate::storage::StorageBackend;
use crate::store::RosterStore;

pub mod add;
pub mod clear;
pub mod delete;
pub mod export;
pub mod list;
pub mod show;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A JSON export of the roster, ready for the CLI to write wherever the
/// user wants it. The filename carries the export date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub filename: String,
    pub json: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<StudentRecord>,
    pub listed: Vec<StudentRecord>,
    pub export: Option<ExportDocument>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<StudentRecord>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<StudentRecord>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_export(mut self, export: ExportDocument) -> Self {
        self.export = Some(export);
        self
    }
}

/// Write-through after a mutation. A save failure must not undo or abort
/// the mutation, so it is downgraded to a warning on the result.
pub(crate) fn persist<S: StorageBackend>(
    store: &RosterStore,
    backend: &mut S,
    result: &mut CmdResult,
) {
    if let Err(e) = backend.save(&store.snapshot()) {
        result.add_message(CmdMessage::warning(format!(
            "Could not save the roster ({}); changes are kept in memory only",
            e
        )));
    }
}
