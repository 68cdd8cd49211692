//! Error types for tree construction and navigation lookups.

use std::path::PathBuf;

/// Structural error raised while building the page tree.
///
/// Any of these aborts the whole build: unique routing and total status
/// classification cannot be guaranteed past them.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Two pages share a route (after trailing-slash normalization).
    #[error("Duplicate route: {route}")]
    DuplicateRoute { route: String },
    /// Route is empty or does not start with `/`.
    #[error("Invalid route '{route}': routes must start with '/'")]
    InvalidRoute { route: String },
    /// No translation status source covers this page.
    #[error("No translation status for page {route}")]
    UnclassifiedTranslationStatus { route: String },
    /// Parent id does not belong to this tree.
    #[error("Unknown parent for page {route}")]
    UnknownParent { route: String },
    /// Page tree input is not valid JSON or does not match the page model.
    #[error("Invalid page tree: {0}")]
    Parse(#[from] serde_json::Error),
    /// Status map file could not be parsed.
    #[error("Invalid translation status file {}: {message}", .path.display())]
    StatusMap { path: PathBuf, message: String },
    /// I/O error reading an input file.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-page lookup error.
///
/// Aborts only the render of the page concerned.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Route is not present in the tree.
    #[error("Page not found: {0}")]
    PageNotFound(String),
}
