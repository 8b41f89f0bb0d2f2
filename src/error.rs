//! Error types for building and loading symbol graphs.
//!
//! The generation pipeline itself never fails: unsupported inputs are
//! skipped and reported through [`Outcome`](crate::generator::Outcome).
//! Errors only arise while a [`Compilation`](crate::model::Compilation) is
//! being assembled or deserialized.

use thiserror::Error;

use crate::base::SymbolId;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing a symbol graph.
#[derive(Debug, Error)]
pub enum Error {
    /// A symbol refers to an id that is not part of the graph.
    #[error("Unknown symbol {id} referenced by {referenced_by}")]
    UnknownSymbol {
        id: SymbolId,
        referenced_by: &'static str,
    },

    /// A symbol refers to an id of the wrong kind.
    #[error("Symbol {id} is not a {expected}")]
    InvalidReference { id: SymbolId, expected: &'static str },

    /// The same id was inserted twice.
    #[error("Duplicate symbol id {0}")]
    DuplicateSymbol(SymbolId),

    /// A symbol was added after the id space ran out.
    #[error("No symbol id left after {0}")]
    IdSpaceExhausted(SymbolId),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unknown symbol error.
    pub fn unknown(id: SymbolId, referenced_by: &'static str) -> Self {
        Self::UnknownSymbol { id, referenced_by }
    }

    /// Create an invalid reference error.
    pub fn invalid(id: SymbolId, expected: &'static str) -> Self {
        Self::InvalidReference { id, expected }
    }

    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }
}
