//! Pluggable row schemas and the concrete encodings for binding rows.
//!
//! Rows travel in two encodings: a human-readable JSON document (API
//! traffic) and a MessagePack storage document (persistence). Decoding is
//! schema-dependent (which fields exist beyond the standard set is an
//! edition decision), so it routes through the handler pair held by a
//! [`SchemaRegistry`]. Encoding is schema-independent: rows flatten
//! themselves through their `Serialize` impls, and [`encode_json`] /
//! [`encode_storage`] pick the wire format.
//!
//! The registry is plain data. Build one at startup (usually
//! [`SchemaRegistry::standard`]) and hand it to whatever decodes rows;
//! handlers are shared via `Arc`, so clones are cheap and concurrent use
//! needs no locking.

mod error;
mod registry;
mod schema;
mod standard;

pub use error::{CodecError, CodecResult};
pub use registry::SchemaRegistry;
pub use schema::{InstanceRowSchema, TemplateRowSchema};
pub use standard::StandardSchema;

use serde::Serialize;

/// Encodes a row or template collection as a JSON document.
pub fn encode_json<T: Serialize>(value: &T) -> CodecResult<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Encodes a row or template collection as a storage document
/// (MessagePack with named fields, so documents stay self-describing).
pub fn encode_storage<T: Serialize>(value: &T) -> CodecResult<Vec<u8>> {
    Ok(rmp_serde::to_vec_named(value)?)
}
