//! Template rows and the binding template collection.

use crate::error::{ValidateError, ValidateResult};
use crate::extension::{
    TemplateRowExtension, BIND_INFO_FIELD, ENABLE_FIELD, IP_FIELD, PORT_FIELD, PROTOCOL_FIELD,
};
use procbind_types::{EnableField, IpField, PortField, ProtocolField};
use serde::{Deserialize, Serialize};

/// The standard fields of a template row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateRowFields {
    /// Identifier of the row, unique within its template once
    /// [`BindTemplate::validate`] has run. `0` means unassigned.
    pub row_id: i64,
    #[serde(deserialize_with = "IpField::from_nullable")]
    pub ip: IpField,
    #[serde(deserialize_with = "PortField::from_nullable")]
    pub port: PortField,
    #[serde(deserialize_with = "ProtocolField::from_nullable")]
    pub protocol: ProtocolField,
    #[serde(deserialize_with = "EnableField::from_nullable")]
    pub enable: EnableField,
}

/// One declared binding slot in a template, with enforcement metadata.
#[derive(Debug, Default)]
pub struct TemplateRow {
    /// Standard fields; unset only when decoded from empty input.
    pub std: Option<TemplateRowFields>,
    /// Edition-specific fields, absent in the standard schema.
    pub extension: Option<Box<dyn TemplateRowExtension>>,
}

impl TemplateRow {
    /// A row carrying the given standard fields and no extension.
    #[must_use]
    pub fn from_std(std: TemplateRowFields) -> Self {
        Self {
            std: Some(std),
            extension: None,
        }
    }

    /// Attaches an extension to the row.
    #[must_use]
    pub fn with_extension(mut self, extension: Box<dyn TemplateRowExtension>) -> Self {
        self.extension = Some(extension);
        self
    }

    /// The row identifier, `0` when unset or unassigned.
    #[must_use]
    pub fn row_id(&self) -> i64 {
        self.std.as_ref().map_or(0, |std| std.row_id)
    }
}

/// The binding template of a service process: an ordered collection of
/// declared binding rows.
///
/// Created from a decoded template submission, validated once (which
/// assigns identifiers to new rows in place), then used read-only by the
/// reconciliation operations in this crate.
#[derive(Debug, Default)]
pub struct BindTemplate {
    pub rows: Vec<TemplateRow>,
    /// Collection-level enforcement flag kept for front-end compatibility.
    /// The reconciliation algorithms only consult the per-field flags.
    pub as_default_value: Option<bool>,
}

impl BindTemplate {
    /// A template made of the given rows.
    #[must_use]
    pub fn from_rows(rows: Vec<TemplateRow>) -> Self {
        Self {
            rows,
            as_default_value: None,
        }
    }

    /// Validates every row, then assigns identifiers to unassigned rows.
    ///
    /// Standard fields are checked in a fixed order (ip, port, protocol,
    /// enable, then the extension), short-circuiting on the first failure
    /// with a path of the form `bind_info[<index>].<field>`. Once the whole
    /// collection has passed, every row whose `row_id` is `0` receives the
    /// next identifier above the pre-existing maximum, in original row
    /// order, so identifiers end up unique and deterministic.
    pub fn validate(&mut self) -> ValidateResult<()> {
        let mut max_row_id = 0;

        for (idx, row) in self.rows.iter().enumerate() {
            let std = row.std.as_ref().ok_or_else(|| ValidateError::MissingValue {
                path: BIND_INFO_FIELD.to_string(),
            })?;

            if std.row_id > max_row_id {
                max_row_id = std.row_id;
            }

            std.ip.validate().map_err(|source| ValidateError::Field {
                path: field_path(idx, IP_FIELD),
                source,
            })?;
            std.port.validate().map_err(|source| ValidateError::Field {
                path: field_path(idx, PORT_FIELD),
                source,
            })?;
            std.protocol
                .validate()
                .map_err(|source| ValidateError::Field {
                    path: field_path(idx, PROTOCOL_FIELD),
                    source,
                })?;
            std.enable.validate().map_err(|source| ValidateError::Field {
                path: field_path(idx, ENABLE_FIELD),
                source,
            })?;

            if let Some(extension) = &row.extension {
                extension
                    .validate()
                    .map_err(|violation| ValidateError::Extension {
                        path: field_path(idx, &violation.field),
                        message: violation.message,
                    })?;
            }
        }

        for row in &mut self.rows {
            if let Some(std) = row.std.as_mut() {
                if std.row_id == 0 {
                    max_row_id += 1;
                    std.row_id = max_row_id;
                }
            }
        }

        Ok(())
    }

    /// Replaces the collection wholesale. Binding templates always update
    /// as a unit, never row by row.
    pub fn replace_with(&mut self, other: BindTemplate) {
        self.rows = other.rows;
        self.as_default_value = other.as_default_value;
    }
}

pub(crate) fn field_path(idx: usize, field: &str) -> String {
    format!("{BIND_INFO_FIELD}[{idx}].{field}")
}
