//! Crate error type.
//!
//! Read-side storage problems are never represented here: loading falls back
//! to an empty collection instead of failing. Per-record import problems are
//! handled inside the merge normalization and do not surface as errors either.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Writing the collection to durable storage failed. The in-memory
    /// collection still holds the committed change.
    #[error("could not write task data: {0}")]
    PersistenceWrite(#[from] io::Error),

    /// Serializing the collection failed.
    #[error("could not encode task data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An import payload whose top-level shape is not a JSON array.
    /// The current collection is left untouched.
    #[error("import rejected: {0}")]
    ImportFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn import_format(message: impl Into<String>) -> Self {
        Self::ImportFormat(message.into())
    }
}
