//! Draft validation.
//!
//! Pure functions: the outcome is a value, and rendering it is the CLI's
//! business. Checks run in a fixed order and stop at the first failure, so
//! the user sees one problem at a time.

use crate::model::{StudentDraft, StudentRecord};
use thiserror::Error;

pub const MIN_AGE: u32 = 5;
pub const MAX_AGE: u32 = 100;

/// Why a draft was rejected. The `Display` strings are the user-facing
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Student name must be at least 2 characters long")]
    NameTooShort,

    #[error("Student age must be between {MIN_AGE} and {MAX_AGE}")]
    AgeOutOfRange,

    #[error("Student class is required")]
    ClassRequired,

    #[error("Student interests must be at least 3 characters long")]
    InterestsTooShort,

    #[error("A student with this name already exists")]
    DuplicateName,
}

/// Check a draft against the field constraints and against the current
/// roster for name uniqueness.
///
/// `exclude_id` is the id of the record being edited, if any, so that
/// re-saving a student under their own name is not a collision. Pass `None`
/// when adding.
pub fn validate(
    draft: &StudentDraft,
    records: &[StudentRecord],
    exclude_id: Option<u64>,
) -> Result<(), ValidationError> {
    if draft.name.trim().chars().count() < 2 {
        return Err(ValidationError::NameTooShort);
    }
    if draft.age < MIN_AGE || draft.age > MAX_AGE {
        return Err(ValidationError::AgeOutOfRange);
    }
    if draft.class.trim().is_empty() {
        return Err(ValidationError::ClassRequired);
    }
    if draft.interests.trim().chars().count() < 3 {
        return Err(ValidationError::InterestsTooShort);
    }

    let candidate = draft.name.trim().to_lowercase();
    let taken = records
        .iter()
        .filter(|r| Some(r.id) != exclude_id)
        .any(|r| r.name.trim().to_lowercase() == candidate);
    if taken {
        return Err(ValidationError::DuplicateName);
    }

    Ok(())
}
