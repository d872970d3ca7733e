use chrono::Local;
use serde::{Deserialize, Serialize};

/// A single student entry as it lives in the store and on disk.
///
/// `id` and `date_added` are fixed at creation; everything else may change
/// through a validated update, which also rewrites `last_updated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub class: String,
    pub interests: String,
    #[serde(rename = "dateAdded")]
    pub date_added: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

/// The four user-editable fields of a student, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub age: u32,
    pub class: String,
    pub interests: String,
}

impl StudentDraft {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        class: impl Into<String>,
        interests: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            class: class.into(),
            interests: interests.into(),
        }
    }

    /// Trim surrounding whitespace from every text field. Drafts are
    /// normalized once, before validation, so the store never holds padded
    /// values and the duplicate-name check compares like with like.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            age: self.age,
            class: self.class.trim().to_string(),
            interests: self.interests.trim().to_string(),
        }
    }
}

/// The persisted snapshot: the full record list plus the id counter,
/// serialized as `{"students": [...], "nextId": N}` under a single file.
///
/// The counter travels with the records so that id allocation stays
/// monotonic across process restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterData {
    pub students: Vec<StudentRecord>,
    #[serde(rename = "nextId")]
    pub next_id: u64,
}

impl Default for RosterData {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            next_id: 1,
        }
    }
}

/// Today's date in the `M/D/YYYY` form used for both record stamps,
/// matching the on-disk format.
pub fn today_stamp() -> String {
    Local::now().format("%-m/%-d/%Y").to_string()
}
