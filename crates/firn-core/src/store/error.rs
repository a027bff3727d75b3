//! Store error types.
//!
//! Defines errors that can occur during store operations:
//! - `Unavailable`: Backend cannot be reached
//! - `Query`: Request was malformed or violated a constraint
//! - `Serialization`: Failed to encode/decode a record
//! - `Io`: Underlying storage system errors

use thiserror::Error;

/// Errors that can occur during store operations
///
/// Clone so failures can travel inside UI events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Backend unreachable
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Malformed query or constraint violation
    #[error("invalid query: {0}")]
    Query(String),

    /// Serialization or deserialization failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error (file system, database, etc.)
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}
