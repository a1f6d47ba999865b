//! The standard (open-edition) row schema.

use crate::schema::{InstanceRowSchema, TemplateRowSchema};
use crate::CodecResult;
use procbind_model::{InstanceRow, InstanceRowFields, TemplateRow, TemplateRowFields};

/// The schema shipped by default: rows carry only the standard
/// ip/port/protocol/enable fields and the extension is never populated.
///
/// Unknown fields in the input are ignored, so documents written by a
/// richer edition still decode; their extra fields are simply dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSchema;

impl TemplateRowSchema for StandardSchema {
    fn decode_json(&self, data: &[u8], row: &mut TemplateRow) -> CodecResult<()> {
        if data.is_empty() {
            return Ok(());
        }
        let fields: Option<TemplateRowFields> = serde_json::from_slice(data)?;
        row.std = Some(fields.unwrap_or_default());
        Ok(())
    }

    fn decode_storage(&self, data: &[u8], row: &mut TemplateRow) -> CodecResult<()> {
        if data.is_empty() {
            return Ok(());
        }
        let fields: Option<TemplateRowFields> = rmp_serde::from_slice(data)?;
        row.std = Some(fields.unwrap_or_default());
        Ok(())
    }
}

impl InstanceRowSchema for StandardSchema {
    fn decode_json(&self, data: &[u8], row: &mut InstanceRow) -> CodecResult<()> {
        if data.is_empty() {
            return Ok(());
        }
        let fields: Option<InstanceRowFields> = serde_json::from_slice(data)?;
        row.std = Some(fields.unwrap_or_default());
        Ok(())
    }

    fn decode_storage(&self, data: &[u8], row: &mut InstanceRow) -> CodecResult<()> {
        if data.is_empty() {
            return Ok(());
        }
        let fields: Option<InstanceRowFields> = rmp_serde::from_slice(data)?;
        row.std = Some(fields.unwrap_or_default());
        Ok(())
    }
}
