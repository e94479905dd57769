//! Error types for Checkflow.
//!
//! All errors in Checkflow are represented by the `CheckflowError` enum,
//! which provides specific variants for different error categories.

use std::io::ErrorKind;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all Checkflow operations.
///
/// Every variant is terminal for the call that produced it: nothing in the
/// crate retries on error.
#[derive(Deserialize, Serialize, Error, Debug, Clone, PartialEq)]
pub enum CheckflowError {
    /// Configuration parsing or validation errors.
    #[error("{0}")]
    Config(String),

    /// Data conversion errors (JSON, TOML).
    #[error("{0}")]
    Convert(String),

    /// Flow lookup or definition errors.
    #[error("{0}")]
    Flow(String),

    /// Node lookup or definition errors.
    #[error("{0}")]
    Node(String),

    /// Edge definition errors.
    #[error("{0}")]
    Edge(String),

    /// Flow store errors.
    #[error("{0}")]
    Store(String),

    /// Flat-text import errors.
    #[error("{0}")]
    Import(String),

    /// Generative collaborator errors (credential, transport, payload).
    #[error("{0}")]
    Generate(String),

    /// Editing surface errors (operation not allowed in the current mode).
    #[error("{0}")]
    Editor(String),

    /// I/O operation errors.
    #[error("{0}")]
    IoError(String),
}

impl From<CheckflowError> for String {
    fn from(val: CheckflowError) -> Self {
        val.to_string()
    }
}

impl From<std::io::Error> for CheckflowError {
    fn from(error: std::io::Error) -> Self {
        CheckflowError::IoError(error.to_string())
    }
}

impl From<CheckflowError> for std::io::Error {
    fn from(val: CheckflowError) -> Self {
        #[allow(clippy::io_other_error)]
        std::io::Error::new(ErrorKind::Other, val.to_string())
    }
}

impl From<serde_json::Error> for CheckflowError {
    fn from(error: serde_json::Error) -> Self {
        CheckflowError::Convert(error.to_string())
    }
}

impl From<toml::de::Error> for CheckflowError {
    fn from(error: toml::de::Error) -> Self {
        CheckflowError::Config(error.to_string())
    }
}

impl From<reqwest::Error> for CheckflowError {
    fn from(error: reqwest::Error) -> Self {
        CheckflowError::Generate(format!("Http error: {}", error))
    }
}

impl From<jsonschema::ValidationError<'_>> for CheckflowError {
    fn from(error: jsonschema::ValidationError<'_>) -> Self {
        CheckflowError::Generate(format!("malformed generated flow: {}", error))
    }
}
