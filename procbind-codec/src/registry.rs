//! The schema registry: which handler pair decodes rows.

use crate::schema::{InstanceRowSchema, TemplateRowSchema};
use crate::standard::StandardSchema;
use crate::CodecResult;
use procbind_model::{BindTemplate, InstanceRow, TemplateRow};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Holds the active row schema: one template-row handler and one
/// instance-row handler, always replaced as a pair.
///
/// The registry is built once at startup and passed to the components
/// that decode rows. A deployment either runs [`SchemaRegistry::standard`]
/// or supplies a complete custom pair; there is deliberately no way to
/// swap a single handler, and no stacking of handlers.
#[derive(Clone)]
pub struct SchemaRegistry {
    template: Arc<dyn TemplateRowSchema>,
    instance: Arc<dyn InstanceRowSchema>,
}

/// The wire shape of a whole binding template.
#[derive(Default, Deserialize)]
#[serde(default)]
struct TemplateDocument {
    value: Vec<Value>,
    as_default_value: Option<bool>,
}

impl SchemaRegistry {
    /// A registry running the given handler pair.
    #[must_use]
    pub fn new(template: Arc<dyn TemplateRowSchema>, instance: Arc<dyn InstanceRowSchema>) -> Self {
        Self { template, instance }
    }

    /// A registry running the standard schema on both sides.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Arc::new(StandardSchema), Arc::new(StandardSchema))
    }

    /// Decodes one template row from a JSON document.
    pub fn template_row_from_json(&self, data: &[u8]) -> CodecResult<TemplateRow> {
        let mut row = TemplateRow::default();
        self.template.decode_json(data, &mut row)?;
        Ok(row)
    }

    /// Decodes one template row from a storage document.
    pub fn template_row_from_storage(&self, data: &[u8]) -> CodecResult<TemplateRow> {
        let mut row = TemplateRow::default();
        self.template.decode_storage(data, &mut row)?;
        Ok(row)
    }

    /// Decodes one instance row from a JSON document.
    pub fn instance_row_from_json(&self, data: &[u8]) -> CodecResult<InstanceRow> {
        let mut row = InstanceRow::default();
        self.instance.decode_json(data, &mut row)?;
        Ok(row)
    }

    /// Decodes one instance row from a storage document.
    pub fn instance_row_from_storage(&self, data: &[u8]) -> CodecResult<InstanceRow> {
        let mut row = InstanceRow::default();
        self.instance.decode_storage(data, &mut row)?;
        Ok(row)
    }

    /// Decodes a whole binding template from a JSON document of the shape
    /// `{"value": [...], "as_default_value": ...}`. Empty input yields an
    /// empty template.
    pub fn template_from_json(&self, data: &[u8]) -> CodecResult<BindTemplate> {
        if data.is_empty() {
            return Ok(BindTemplate::default());
        }
        let doc: Option<TemplateDocument> = serde_json::from_slice(data)?;
        let doc = doc.unwrap_or_default();
        let mut rows = Vec::with_capacity(doc.value.len());
        for item in &doc.value {
            rows.push(self.template_row_from_json(&serde_json::to_vec(item)?)?);
        }
        debug!("decoded binding template with {} rows", rows.len());
        Ok(BindTemplate {
            rows,
            as_default_value: doc.as_default_value,
        })
    }

    /// Decodes a whole binding template from a storage document.
    pub fn template_from_storage(&self, data: &[u8]) -> CodecResult<BindTemplate> {
        if data.is_empty() {
            return Ok(BindTemplate::default());
        }
        let doc: Option<TemplateDocument> = rmp_serde::from_slice(data)?;
        let doc = doc.unwrap_or_default();
        let mut rows = Vec::with_capacity(doc.value.len());
        for item in &doc.value {
            rows.push(self.template_row_from_storage(&rmp_serde::to_vec_named(item)?)?);
        }
        debug!("decoded binding template with {} rows", rows.len());
        Ok(BindTemplate {
            rows,
            as_default_value: doc.as_default_value,
        })
    }

    /// Decodes an instance row list from a JSON array document. Empty
    /// input yields an empty list.
    pub fn instance_rows_from_json(&self, data: &[u8]) -> CodecResult<Vec<InstanceRow>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        let items: Vec<Value> = serde_json::from_slice::<Option<_>>(data)?.unwrap_or_default();
        let mut rows = Vec::with_capacity(items.len());
        for item in &items {
            rows.push(self.instance_row_from_json(&serde_json::to_vec(item)?)?);
        }
        Ok(rows)
    }

    /// Decodes an instance row list from a storage array document.
    pub fn instance_rows_from_storage(&self, data: &[u8]) -> CodecResult<Vec<InstanceRow>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        let items: Vec<Value> = rmp_serde::from_slice::<Option<_>>(data)?.unwrap_or_default();
        let mut rows = Vec::with_capacity(items.len());
        for item in &items {
            rows.push(self.instance_row_from_storage(&rmp_serde::to_vec_named(item)?)?);
        }
        Ok(rows)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
