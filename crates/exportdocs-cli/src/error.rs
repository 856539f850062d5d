//! CLI error types.

use thiserror::Error;

use exportdocs_render::ExportError;
use exportdocs_store::StoreError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors reported by the `exportdocs` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The event store could not be opened.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Report generation failed.
    #[error("{0}")]
    Export(#[from] ExportError),

    /// Writing a report to disk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
