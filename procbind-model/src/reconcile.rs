//! The three reconciliation algorithms tying templates to instances.
//!
//! All of them match instance rows to template rows by identifier and walk
//! the template in order, so the produced row list follows template order
//! and instance rows with no template counterpart are dropped. They differ
//! in what they do per field:
//! - [`BindTemplate::reconcile`] compares before overwriting and tracks
//!   change flags;
//! - [`BindTemplate::apply_rows`] overwrites every enforced field
//!   unconditionally;
//! - [`BindTemplate::diff`] materializes a copy via `apply_rows` and
//!   reports whether anything would move.

use crate::instance::{all_values_null, ExtraMap, InstanceRow, InstanceRowFields};
use crate::process::Process;
use crate::template::{BindTemplate, TemplateRowFields};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Outcome of [`BindTemplate::reconcile`]: the rebuilt instance rows plus
/// what moved.
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    /// The process's new binding rows, in template order.
    pub rows: Vec<InstanceRow>,
    /// Whether any enforced field was brought in line.
    pub changed: bool,
    /// Whether a field participating in instance identity (the port)
    /// moved. Callers keeping name/port-keyed lookups must invalidate
    /// them when this is set.
    pub identity_changed: bool,
}

/// Outcome of [`BindTemplate::diff`].
#[derive(Debug, Clone, Default)]
pub struct Diff {
    /// The instance rows as they would look after re-applying the
    /// template.
    pub rows: Vec<InstanceRow>,
    /// Whether re-applying the template would change the process.
    pub changed: bool,
}

impl BindTemplate {
    /// Overlays every template-enforced field onto the process's current
    /// binding rows, reporting what changed.
    ///
    /// Each template row pulls the instance row carrying its identifier
    /// (or starts a fresh one) and re-ties it. An enforced field is
    /// overwritten only when template and instance disagree on presence or
    /// value; an enforced field with no value enforces absence and clears
    /// the instance field. Non-enforced fields are never touched.
    #[must_use]
    pub fn reconcile(&self, process: &Process) -> Reconciliation {
        let by_id = rows_by_template_id(&process.bind_info);
        let default_tpl = TemplateRowFields::default();

        let mut changed = false;
        let mut identity_changed = false;
        let mut rows = Vec::with_capacity(self.rows.len());

        for row in &self.rows {
            let tpl = row.std.as_ref().unwrap_or(&default_tpl);
            let mut instance = by_id
                .get(&tpl.row_id)
                .map(|existing| (*existing).clone())
                .unwrap_or_default();

            let std = instance.std.get_or_insert_with(InstanceRowFields::default);
            std.template_row_id = tpl.row_id;

            if tpl.ip.is_enforced() {
                let want = tpl.ip.value.as_ref().map(|ip| ip.as_str());
                if want != std.ip.as_deref() {
                    std.ip = want.map(str::to_string);
                    changed = true;
                }
            }

            if tpl.port.is_enforced() {
                let want = tpl.port.value.as_ref().map(|port| port.as_str());
                if want != std.port.as_deref() {
                    std.port = want.map(str::to_string);
                    changed = true;
                    identity_changed = true;
                }
            }

            if tpl.protocol.is_enforced() && tpl.protocol.value != std.protocol {
                std.protocol = tpl.protocol.value;
                changed = true;
            }

            if tpl.enable.is_enforced() && tpl.enable.value != std.enable {
                std.enable = tpl.enable.value;
                changed = true;
            }

            if let Some(extension) = &row.extension {
                let change = extension.extract_change(&instance);
                changed |= change.changed;
                identity_changed |= change.identity_changed;
                instance.extra = change.extra;
            }

            rows.push(instance);
        }

        debug!(
            "reconciled {} binding rows against template (changed={}, identity_changed={})",
            rows.len(),
            changed,
            identity_changed
        );

        Reconciliation {
            rows,
            changed,
            identity_changed,
        }
    }

    /// Rebuilds the instance rows a template implies, overwriting every
    /// enforced field unconditionally.
    ///
    /// Unlike [`BindTemplate::reconcile`] there is no change tracking, and
    /// the port is assigned whenever enforced even when the template value
    /// is absent. Non-enforced fields and unmatched extension data pass
    /// through from the matched instance row.
    #[must_use]
    pub fn apply_rows(&self, rows: &[InstanceRow]) -> Vec<InstanceRow> {
        let by_id = rows_by_template_id(rows);
        let default_tpl = TemplateRowFields::default();

        let mut out = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let tpl = row.std.as_ref().unwrap_or(&default_tpl);
            let mut instance = by_id
                .get(&tpl.row_id)
                .map(|existing| (*existing).clone())
                .unwrap_or_default();

            let std = instance.std.get_or_insert_with(InstanceRowFields::default);
            std.template_row_id = tpl.row_id;

            if tpl.ip.is_enforced() {
                std.ip = tpl.ip.value.as_ref().map(|ip| ip.as_str().to_string());
            }
            if tpl.port.is_enforced() {
                std.port = tpl.port.value.as_ref().map(|port| port.as_str().to_string());
            }
            if tpl.protocol.is_enforced() {
                std.protocol = tpl.protocol.value;
            }
            if tpl.enable.is_enforced() {
                std.enable = tpl.enable.value;
            }

            if let Some(extension) = &row.extension {
                instance.extra = extension.extract_update(&instance.extra);
            }

            out.push(instance);
        }
        out
    }

    /// The effective binding rows of a process materialized from this
    /// template, used when stamping a process out of a template rather
    /// than diffing an existing one.
    #[must_use]
    pub fn materialize(&self, process: &Process) -> Vec<InstanceRow> {
        self.apply_rows(&process.bind_info)
    }

    /// Reports whether re-applying this template to `existing` would
    /// change anything, without mutating the originals.
    ///
    /// The rows are materialized from a copy and compared side by side:
    /// any length difference, any row present on one side only, and any
    /// standard field disagreeing (absence included) count as drift.
    /// Extension maps are compared leniently: a map whose values are all
    /// null is treated as empty, and a key missing on one side is treated
    /// as null.
    #[must_use]
    pub fn diff(&self, existing: &[InstanceRow]) -> Diff {
        // apply_rows never mutates its input; the materialized rows are
        // built from clones.
        let rows = self.apply_rows(existing);
        let changed = rows_drifted(existing, &rows);
        if changed {
            debug!("process bindings drifted from template");
        }
        Diff { rows, changed }
    }
}

fn rows_by_template_id(rows: &[InstanceRow]) -> HashMap<i64, &InstanceRow> {
    rows.iter().map(|row| (row.template_row_id(), row)).collect()
}

fn rows_drifted(existing: &[InstanceRow], materialized: &[InstanceRow]) -> bool {
    if existing.len() != materialized.len() {
        return true;
    }

    let by_id = rows_by_template_id(materialized);
    existing.iter().any(|row| {
        by_id
            .get(&row.template_row_id())
            .map_or(true, |materialized| row_drifted(row, materialized))
    })
}

fn row_drifted(existing: &InstanceRow, materialized: &InstanceRow) -> bool {
    match (&existing.std, &materialized.std) {
        (Some(a), Some(b)) => {
            if a.ip != b.ip || a.port != b.port || a.protocol != b.protocol || a.enable != b.enable
            {
                return true;
            }
        }
        (None, None) => {}
        _ => return true,
    }

    extra_drifted(&existing.extra, &materialized.extra)
}

fn extra_drifted(existing: &ExtraMap, materialized: &ExtraMap) -> bool {
    if existing.len() != materialized.len() {
        let (smaller, larger) = if existing.len() < materialized.len() {
            (existing, materialized)
        } else {
            (materialized, existing)
        };
        return !(smaller.is_empty() && all_values_null(larger));
    }

    existing
        .iter()
        .any(|(key, value)| materialized.get(key).unwrap_or(&Value::Null) != value)
}
