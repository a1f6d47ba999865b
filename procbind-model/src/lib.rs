//! Binding template/instance rows and the reconciliation algorithms.
//!
//! A *template* declares how a process's network bindings should look; the
//! *instances* are the bindings actually recorded on deployed processes.
//! This crate owns the row data model and the three operations that tie the
//! two together:
//! - [`BindTemplate::validate`] — domain validation plus row-id auto-numbering
//! - [`BindTemplate::reconcile`] — overlay enforced values onto a process's
//!   rows, tracking what changed
//! - [`BindTemplate::diff`] — detect whether re-applying the template would
//!   change anything, without mutating the originals
//!
//! Edition-specific extra fields hang off each row through the
//! [`TemplateRowExtension`] seam; the standard edition carries none.
//! Serialization to concrete encodings lives in `procbind-codec`.

mod encode;
mod error;
mod extension;
mod instance;
mod process;
mod reconcile;
mod template;

pub use error::{ValidateError, ValidateResult};
pub use extension::{
    ExtensionChange, ExtensionViolation, TemplateRowExtension, BIND_INFO_FIELD, ENABLE_FIELD,
    IP_FIELD, PORT_FIELD, PROTOCOL_FIELD, ROW_ID_FIELD, STANDARD_FIELDS, TEMPLATE_ROW_ID_FIELD,
};
pub use instance::{ExtraMap, InstanceRow, InstanceRowFields};
pub use process::Process;
pub use reconcile::{Diff, Reconciliation};
pub use template::{BindTemplate, TemplateRow, TemplateRowFields};
