//! Instance rows: the bindings actually in effect on a deployed process.

use procbind_types::Protocol;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Free-form extension data on an instance row, keyed by persisted field
/// name. Interpreted only by the active row schema; an empty map means no
/// extension data.
pub type ExtraMap = BTreeMap<String, Value>;

/// The standard fields of an instance row.
///
/// Every field except the back-reference is a three-state optional:
/// absent (`None`, the field is not bound), present-but-empty, and present
/// with a value are all distinct, and the reconciliation algorithms depend
/// on the distinction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceRowFields {
    /// Identifier of the template row this instance row was materialized
    /// from. `0` means the row predates the template and matches nothing.
    pub template_row_id: i64,
    pub ip: Option<String>,
    pub port: Option<String>,
    pub protocol: Option<Protocol>,
    pub enable: Option<bool>,
}

/// One concrete binding recorded on a deployed process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceRow {
    /// Standard fields; unset only when decoded from empty input.
    pub std: Option<InstanceRowFields>,
    /// Extension data owned by the active schema.
    pub extra: ExtraMap,
}

impl InstanceRow {
    /// A row carrying the given standard fields and no extension data.
    #[must_use]
    pub fn from_std(std: InstanceRowFields) -> Self {
        Self {
            std: Some(std),
            extra: ExtraMap::new(),
        }
    }

    /// The template row this row is tied to, `0` when unset or unmatched.
    #[must_use]
    pub fn template_row_id(&self) -> i64 {
        self.std.as_ref().map_or(0, |std| std.template_row_id)
    }
}

/// Whether every extension value in the map is JSON null. A map of all-null
/// values is semantically empty for change detection.
pub(crate) fn all_values_null(extra: &ExtraMap) -> bool {
    extra.values().all(Value::is_null)
}
