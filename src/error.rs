//! Per-class failures. None of these stop other classes from being processed.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StubError {
    /// A page could not be retrieved.
    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The brief table and the detailed list of a class page disagree.
    #[error("{class}: {summaries} summary entries but {details} detailed entries")]
    AlignmentMismatch {
        class: String,
        summaries: usize,
        details: usize,
    },

    /// A stub file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
