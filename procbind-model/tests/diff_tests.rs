use procbind_model::{
    BindTemplate, ExtensionChange, ExtensionViolation, ExtraMap, InstanceRow, InstanceRowFields,
    TemplateRow, TemplateRowExtension, TemplateRowFields,
};
use procbind_types::{EnableField, PortField, PortSpec};
use serde_json::json;

fn template(rows: Vec<TemplateRowFields>) -> BindTemplate {
    BindTemplate::from_rows(rows.into_iter().map(TemplateRow::from_std).collect())
}

fn instance(template_row_id: i64) -> InstanceRow {
    InstanceRow::from_std(InstanceRowFields {
        template_row_id,
        ..Default::default()
    })
}

/// Extension whose update pass writes the given extra map.
#[derive(Debug)]
struct StampExtension {
    stamp: ExtraMap,
}

impl TemplateRowExtension for StampExtension {
    fn validate(&self) -> Result<(), ExtensionViolation> {
        Ok(())
    }

    fn extract_change(&self, _instance: &InstanceRow) -> ExtensionChange {
        ExtensionChange::default()
    }

    fn extract_update(&self, _existing: &ExtraMap) -> ExtraMap {
        self.stamp.clone()
    }

    fn flatten(&self) -> ExtraMap {
        ExtraMap::new()
    }
}

fn stamped_template(row_id: i64, stamp: ExtraMap) -> BindTemplate {
    let row = TemplateRow::from_std(TemplateRowFields {
        row_id,
        ..Default::default()
    })
    .with_extension(Box::new(StampExtension { stamp }));
    BindTemplate::from_rows(vec![row])
}

// ── Standard field drift ─────────────────────────────────────────

#[test]
fn settled_rows_report_no_drift() {
    let tpl = template(vec![TemplateRowFields {
        row_id: 1,
        port: PortField::enforced(PortSpec::new("8080")),
        ..Default::default()
    }]);

    let mut row = instance(1);
    row.std.as_mut().unwrap().port = Some("8080".to_string());

    let diff = tpl.diff(&[row]);
    assert!(!diff.changed);
}

#[test]
fn enforced_field_drift_is_detected() {
    let tpl = template(vec![TemplateRowFields {
        row_id: 1,
        port: PortField::enforced(PortSpec::new("8080")),
        ..Default::default()
    }]);

    let mut row = instance(1);
    row.std.as_mut().unwrap().port = Some("9090".to_string());

    let diff = tpl.diff(&[row]);
    assert!(diff.changed);
    assert_eq!(diff.rows[0].std.as_ref().unwrap().port.as_deref(), Some("8080"));
}

#[test]
fn presence_differences_count_as_drift() {
    let tpl = template(vec![TemplateRowFields {
        row_id: 1,
        enable: EnableField::enforced(true),
        ..Default::default()
    }]);

    // Instance has no enable value; the template enforces one.
    let diff = tpl.diff(&[instance(1)]);
    assert!(diff.changed);
}

#[test]
fn advisory_fields_do_not_drift() {
    let tpl = template(vec![TemplateRowFields {
        row_id: 1,
        port: PortField::advisory(PortSpec::new("8080")),
        ..Default::default()
    }]);

    let mut row = instance(1);
    row.std.as_mut().unwrap().port = Some("9090".to_string());

    let diff = tpl.diff(&[row]);
    assert!(!diff.changed);
}

// ── Row set drift ────────────────────────────────────────────────

#[test]
fn missing_instance_row_is_drift() {
    let tpl = template(vec![
        TemplateRowFields {
            row_id: 1,
            ..Default::default()
        },
        TemplateRowFields {
            row_id: 2,
            ..Default::default()
        },
    ]);

    let diff = tpl.diff(&[instance(1)]);
    assert!(diff.changed);
    assert_eq!(diff.rows.len(), 2);
}

#[test]
fn orphaned_instance_row_is_drift() {
    let tpl = template(vec![TemplateRowFields {
        row_id: 1,
        ..Default::default()
    }]);

    let diff = tpl.diff(&[instance(9)]);
    assert!(diff.changed);
}

#[test]
fn pre_template_row_is_drift() {
    let tpl = template(vec![TemplateRowFields {
        row_id: 1,
        ..Default::default()
    }]);

    let diff = tpl.diff(&[instance(0)]);
    assert!(diff.changed);
}

// ── Extension map leniency ───────────────────────────────────────

#[test]
fn all_null_extension_values_equal_an_empty_map() {
    let mut stamp = ExtraMap::new();
    stamp.insert("x".to_string(), json!(null));
    let tpl = stamped_template(1, stamp);

    // Existing row carries no extra at all; the materialized copy carries
    // {"x": null}. Semantically both are empty.
    let diff = tpl.diff(&[instance(1)]);
    assert!(!diff.changed);
}

#[test]
fn non_null_extension_value_is_drift() {
    let mut stamp = ExtraMap::new();
    stamp.insert("x".to_string(), json!("edge"));
    let tpl = stamped_template(1, stamp);

    let diff = tpl.diff(&[instance(1)]);
    assert!(diff.changed);
}

#[test]
fn differing_extension_values_are_drift() {
    let mut stamp = ExtraMap::new();
    stamp.insert("x".to_string(), json!("edge"));
    let tpl = stamped_template(1, stamp);

    let mut row = instance(1);
    row.extra.insert("x".to_string(), json!("core"));

    let diff = tpl.diff(&[row]);
    assert!(diff.changed);
}

#[test]
fn equal_extension_values_are_not_drift() {
    let mut stamp = ExtraMap::new();
    stamp.insert("x".to_string(), json!("edge"));
    let tpl = stamped_template(1, stamp);

    let mut row = instance(1);
    row.extra.insert("x".to_string(), json!("edge"));

    let diff = tpl.diff(&[row]);
    assert!(!diff.changed);
}

#[test]
fn null_values_on_both_sides_are_equal() {
    let mut stamp = ExtraMap::new();
    stamp.insert("x".to_string(), json!(null));
    let tpl = stamped_template(1, stamp);

    let mut row = instance(1);
    row.extra.insert("x".to_string(), json!(null));

    let diff = tpl.diff(&[row]);
    assert!(!diff.changed);
}

// ── Originals stay untouched ─────────────────────────────────────

#[test]
fn diff_does_not_mutate_the_existing_rows() {
    let tpl = template(vec![TemplateRowFields {
        row_id: 1,
        port: PortField::enforced(PortSpec::new("8080")),
        ..Default::default()
    }]);

    let mut row = instance(1);
    row.std.as_mut().unwrap().port = Some("9090".to_string());
    let original = vec![row];
    let before = original.clone();

    let diff = tpl.diff(&original);
    assert!(diff.changed);
    assert_eq!(original, before);
}
