use thiserror::Error;

use crate::models::Source;

/// A history source that could not be scanned at all
///
/// Raised only for top-level failures such as an unreadable base directory.
/// Per-file and per-workspace problems are logged and skipped instead.
#[derive(Debug, Error)]
#[error("failed to read {origin} history: {error:#}")]
pub struct SourceFailure {
    pub origin: Source,
    pub error: anyhow::Error,
}

impl SourceFailure {
    pub fn new(origin: Source, error: anyhow::Error) -> Self {
        Self { origin, error }
    }
}
