//! # Error Types
//!
//! Defines the error types used throughout the topology schema workspace.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.

use thiserror::Error;

/// Top-level error type for topology schema generation.
#[derive(Error, Debug)]
pub enum TopoError {
    /// The exchange type tag is not one of the supported types.
    ///
    /// The rendered message is fixed; the rejected value is retained for
    /// callers that want to report it.
    #[error("type must be \"direct\", \"topic\", \"fanout\" or \"x-lvc\"")]
    InvalidExchangeType {
        /// The rejected type tag, exactly as supplied.
        value: String,
    },

    /// Serialization of a schema document failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for TopoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
