use crate::validate::ValidationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("No student with id {0}")]
    NotFound(u64),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
