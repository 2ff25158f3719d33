//! Error types for notely-core

use thiserror::Error;

/// Result type alias using notely-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notely-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Note id prefix matched more than one note
    #[error("ID prefix '{prefix}' is ambiguous; matches: {}", matches.join(", "))]
    AmbiguousId {
        prefix: String,
        matches: Vec<String>,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key/value storage error
    #[error("Storage error: {0}")]
    Storage(String),
}
