//! Field domain types for process binding templates.
//!
//! This crate defines the fundamental, schema-agnostic value types used by
//! the binding reconciliation engine:
//! - [`BindIp`], [`PortSpec`], [`Protocol`] — the standard binding field domains
//! - [`TemplateField`] — a value paired with its "as default value" enforcement flag
//! - [`FieldError`] — field-level domain validation failures
//!
//! Edition-specific extension fields and the reconciliation algorithms
//! belong to `procbind-model`, not here.

mod address;
mod field;
mod port;
mod protocol;

pub use address::BindIp;
pub use field::{EnableField, FieldValue, IpField, PortField, ProtocolField, TemplateField};
pub use port::PortSpec;
pub use protocol::Protocol;

/// Result type alias for field-level validation.
pub type FieldResult<T> = std::result::Result<T, FieldError>;

/// Errors raised by field-level domain validation.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("invalid ip address: {0}")]
    InvalidIp(String),

    #[error("invalid port expression: {0}")]
    InvalidPort(String),

    #[error("unknown protocol: {0}")]
    UnknownProtocol(String),
}
