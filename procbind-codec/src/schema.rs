//! The handler traits a deployment's row schema implements.
//!
//! Decoding mutates a default row in place: a handler fills `std` from the
//! standard fields and, when the edition defines extra fields, attaches an
//! extension (template side) or populates `extra` (instance side). Both
//! encodings must yield the same logical fields for the same document.
//!
//! Empty input is a defined no-op: the row's `std` stays unset and the
//! handler returns success. Malformed input is an error.

use crate::CodecResult;
use procbind_model::{InstanceRow, TemplateRow};

/// Decodes template rows for the active schema.
pub trait TemplateRowSchema: Send + Sync {
    /// Decodes a template row from a JSON document.
    fn decode_json(&self, data: &[u8], row: &mut TemplateRow) -> CodecResult<()>;

    /// Decodes a template row from a storage (MessagePack) document.
    fn decode_storage(&self, data: &[u8], row: &mut TemplateRow) -> CodecResult<()>;
}

/// Decodes instance rows for the active schema.
pub trait InstanceRowSchema: Send + Sync {
    /// Decodes an instance row from a JSON document.
    fn decode_json(&self, data: &[u8], row: &mut InstanceRow) -> CodecResult<()>;

    /// Decodes an instance row from a storage (MessagePack) document.
    fn decode_storage(&self, data: &[u8], row: &mut InstanceRow) -> CodecResult<()>;
}
