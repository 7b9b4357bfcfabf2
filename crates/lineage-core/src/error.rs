//! Error types for loading documents and parsing JSON Pointers.
//!
//! Lineage lookups themselves never fail: a target missing from the tree is
//! reported as `None`, not as an error.

use thiserror::Error;

/// Errors that can occur while building a tree or resolving a pointer.
#[derive(Error, Debug)]
pub enum LineageError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The pointer string is not a syntactically valid RFC 6901 JSON Pointer.
    #[error("invalid JSON pointer '{pointer}': {message}")]
    InvalidPointer { pointer: String, message: String },
}

/// Convenience alias used throughout lineage-core.
pub type Result<T> = std::result::Result<T, LineageError>;
