//! Error types for the parseview-core library.
//!
//! The normalizer itself never fails; these errors only cover the edges
//! where bytes are turned into values (JSON text, configuration files).

use thiserror::Error;

/// Main error type for the parseview library.
#[derive(Error, Debug)]
pub enum ParseViewError {
    /// Payload or record text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Document kind string is neither `contract` nor `invoice`.
    #[error("unknown document kind: {0}")]
    UnknownKind(String),
}

/// Result type for the parseview library.
pub type Result<T> = std::result::Result<T, ParseViewError>;
