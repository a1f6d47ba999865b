//! The process entity owning a set of instance binding rows.

use crate::instance::InstanceRow;

/// A deployed process instance, reduced to what the binding engine needs.
///
/// The full process record (function name, start parameters, timeouts and
/// so on) lives with the persistence layer; reconciliation only reads the
/// identity and the current bindings, and hands back a replacement row
/// list for the caller to persist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Process {
    pub id: i64,
    pub name: Option<String>,
    /// The bindings currently recorded for this process.
    pub bind_info: Vec<InstanceRow>,
}

impl Process {
    /// A process with the given bindings.
    #[must_use]
    pub fn with_bind_info(id: i64, bind_info: Vec<InstanceRow>) -> Self {
        Self {
            id,
            name: None,
            bind_info,
        }
    }
}
