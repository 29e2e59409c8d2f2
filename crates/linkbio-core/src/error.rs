use crate::link::LinkId;
use thiserror::Error;

/// Errors raised while building core types from untrusted input.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid link id: {0}")]
    InvalidLinkId(String),
}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("link not found: {0}")]
    NotFound(LinkId),
    #[error("constraint violated: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

impl StorageError {
    /// Returns `true` when the operation matched no row.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}
