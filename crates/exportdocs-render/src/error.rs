//! Export error types.

use thiserror::Error;

use exportdocs_core::EventId;
use exportdocs_store::StoreError;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while generating a report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The event id does not resolve in the store.
    #[error("event {event_id} not found")]
    NotFound { event_id: EventId },

    /// The store failed for another reason (unreadable, corrupt data).
    #[error("store error: {0}")]
    Store(#[source] StoreError),

    /// The DOCX writer could not produce the package.
    #[error("failed to serialize document: {0}")]
    Serialization(String),
}

impl ExportError {
    /// Maps a store lookup failure for `event_id`.
    pub fn from_store(event_id: EventId, err: StoreError) -> Self {
        if err.is_not_found() {
            Self::NotFound { event_id }
        } else {
            Self::Store(err)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
