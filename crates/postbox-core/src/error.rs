//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// A missing row is its own variant so callers can distinguish "not found"
/// from a failing statement; connection and query failures carry the
/// driver's message for logging.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}
