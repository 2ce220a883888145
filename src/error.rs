//! Error types for geometry and query operations.

use thiserror::Error;

/// Errors produced by the geometry engine and the query service.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or unclosable input ring (too few distinct vertices,
    /// non-finite coordinates).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Candidate fetch failed. Surfaced to the caller as a request
    /// failure; retry policy belongs to the storage collaborator.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Unexpected numeric failure during intersection computation.
    /// Per-candidate this is recoverable by skipping, like a malformed ring.
    #[error("intersection computation failed: {0}")]
    Computation(String),
}

/// Result type for mapoverlap operations.
pub type Result<T> = std::result::Result<T, Error>;
