//! Error types for the codec layer.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding binding documents.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Malformed JSON document.
    #[error("json document error: {0}")]
    Json(#[from] serde_json::Error),

    /// Storage document could not be written.
    #[error("storage encode error: {0}")]
    StorageEncode(#[from] rmp_serde::encode::Error),

    /// Malformed storage document.
    #[error("storage decode error: {0}")]
    StorageDecode(#[from] rmp_serde::decode::Error),
}
