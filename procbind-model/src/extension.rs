//! The extension seam for edition-specific binding fields.
//!
//! A deployment that needs more per-row fields than the standard
//! ip/port/protocol/enable set implements [`TemplateRowExtension`] for its
//! template rows and registers a matching row schema pair with the codec
//! layer. The reconciliation algorithms never look inside an extension;
//! they only route through this trait.
//!
//! On the instance side no trait is needed: extension data is carried
//! directly as the row's free-form [`ExtraMap`](crate::ExtraMap).

use crate::instance::{ExtraMap, InstanceRow};
use std::fmt;
use thiserror::Error;

/// Persisted name of the template-row identifier field.
pub const ROW_ID_FIELD: &str = "row_id";
/// Persisted name of the instance-row back-reference field.
pub const TEMPLATE_ROW_ID_FIELD: &str = "template_row_id";
/// Persisted name of the ip field.
pub const IP_FIELD: &str = "ip";
/// Persisted name of the port field.
pub const PORT_FIELD: &str = "port";
/// Persisted name of the protocol field.
pub const PROTOCOL_FIELD: &str = "protocol";
/// Persisted name of the enable field.
pub const ENABLE_FIELD: &str = "enable";
/// Name of the binding collection inside a process document; also the
/// container segment of validation error paths.
pub const BIND_INFO_FIELD: &str = "bind_info";

/// Field names reserved by the standard row schema, stable across
/// encodings.
///
/// Extension payloads must not reuse these names. When one does, the
/// encoder lets the extension value shadow the standard one and logs a
/// warning; almost never what a schema author wants.
pub const STANDARD_FIELDS: &[&str] = &[
    ROW_ID_FIELD,
    TEMPLATE_ROW_ID_FIELD,
    IP_FIELD,
    PORT_FIELD,
    PROTOCOL_FIELD,
    ENABLE_FIELD,
];

/// What an extension contributed to one reconciled instance row.
#[derive(Debug, Clone, Default)]
pub struct ExtensionChange {
    /// The instance row's new extension data, replacing the old map.
    pub extra: ExtraMap,
    /// Whether any extension field differed from the instance's value.
    pub changed: bool,
    /// Whether a field participating in instance identity differed.
    pub identity_changed: bool,
}

/// An extension field that failed validation.
#[derive(Debug, Clone, Error)]
#[error("{field}: {message}")]
pub struct ExtensionViolation {
    /// Name of the offending extension field.
    pub field: String,
    pub message: String,
}

impl ExtensionViolation {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Edition-specific fields attached to one template row.
///
/// Implementations are injected at decode time by the active row schema
/// and consulted by the reconciliation algorithms at the four points below.
pub trait TemplateRowExtension: fmt::Debug + Send + Sync {
    /// Validates the extension fields. Runs after the standard fields of
    /// the same row.
    fn validate(&self) -> Result<(), ExtensionViolation>;

    /// Compares the extension's enforced values against an instance row,
    /// returning the row's new extension data plus change flags.
    fn extract_change(&self, instance: &InstanceRow) -> ExtensionChange;

    /// Produces the instance extension data implied by this template row
    /// and the instance's prior extension data, unconditionally.
    fn extract_update(&self, existing: &ExtraMap) -> ExtraMap;

    /// Flattens the extension fields into persisted name/value pairs for
    /// encoding. Names must stay clear of [`STANDARD_FIELDS`].
    fn flatten(&self) -> ExtraMap;
}
