//! Error types for lexicard-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using IngestError.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Run-level ingestion failures.
///
/// Per-row problems (ragged columns, unbalanced quotes) are absorbed by
/// the pipeline and never surface here; only whole-input failures do.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read spreadsheet {}: {message}", path.display())]
    Spreadsheet { path: PathBuf, message: String },

    #[error("no worksheet found in {}", path.display())]
    EmptySheet { path: PathBuf },
}
