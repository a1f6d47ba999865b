//! Flattened serialization of binding rows.
//!
//! A row always serializes as one flat field-name-to-value map: the
//! standard fields first, then the extension fields from the active
//! schema. Because the flattening happens here, any `serde` format can
//! carry a row; the codec crate provides the JSON and storage encodings.
//!
//! When an extension reuses a standard field name the extension value wins
//! and the standard one is withheld; see
//! [`STANDARD_FIELDS`](crate::STANDARD_FIELDS) for the contract schema
//! authors must follow.

use crate::extension::{
    ENABLE_FIELD, IP_FIELD, PORT_FIELD, PROTOCOL_FIELD, ROW_ID_FIELD, TEMPLATE_ROW_ID_FIELD,
};
use crate::instance::{ExtraMap, InstanceRow, InstanceRowFields};
use crate::template::{BindTemplate, TemplateRow, TemplateRowFields};
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use tracing::warn;

const TEMPLATE_ROW_KEYS: [&str; 5] = [
    ROW_ID_FIELD,
    IP_FIELD,
    PORT_FIELD,
    PROTOCOL_FIELD,
    ENABLE_FIELD,
];
const INSTANCE_ROW_KEYS: [&str; 5] = [
    TEMPLATE_ROW_ID_FIELD,
    IP_FIELD,
    PORT_FIELD,
    PROTOCOL_FIELD,
    ENABLE_FIELD,
];

fn shadowed_count(standard_keys: &[&str], extra: &ExtraMap) -> usize {
    standard_keys
        .iter()
        .filter(|key| {
            let shadowed = extra.contains_key(**key);
            if shadowed {
                warn!("extension field {:?} shadows a standard binding field", key);
            }
            shadowed
        })
        .count()
}

impl Serialize for TemplateRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let extra = self
            .extension
            .as_ref()
            .map(|extension| extension.flatten())
            .unwrap_or_default();

        let default_std;
        let std: &TemplateRowFields = match &self.std {
            Some(fields) => fields,
            None => {
                default_std = TemplateRowFields::default();
                &default_std
            }
        };

        let shadowed = shadowed_count(&TEMPLATE_ROW_KEYS, &extra);
        let mut map =
            serializer.serialize_map(Some(TEMPLATE_ROW_KEYS.len() - shadowed + extra.len()))?;
        if !extra.contains_key(ROW_ID_FIELD) {
            map.serialize_entry(ROW_ID_FIELD, &std.row_id)?;
        }
        if !extra.contains_key(IP_FIELD) {
            map.serialize_entry(IP_FIELD, &std.ip)?;
        }
        if !extra.contains_key(PORT_FIELD) {
            map.serialize_entry(PORT_FIELD, &std.port)?;
        }
        if !extra.contains_key(PROTOCOL_FIELD) {
            map.serialize_entry(PROTOCOL_FIELD, &std.protocol)?;
        }
        if !extra.contains_key(ENABLE_FIELD) {
            map.serialize_entry(ENABLE_FIELD, &std.enable)?;
        }
        for (key, value) in &extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for InstanceRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let default_std;
        let std: &InstanceRowFields = match &self.std {
            Some(fields) => fields,
            None => {
                default_std = InstanceRowFields::default();
                &default_std
            }
        };

        let shadowed = shadowed_count(&INSTANCE_ROW_KEYS, &self.extra);
        let mut map = serializer
            .serialize_map(Some(INSTANCE_ROW_KEYS.len() - shadowed + self.extra.len()))?;
        if !self.extra.contains_key(TEMPLATE_ROW_ID_FIELD) {
            map.serialize_entry(TEMPLATE_ROW_ID_FIELD, &std.template_row_id)?;
        }
        if !self.extra.contains_key(IP_FIELD) {
            map.serialize_entry(IP_FIELD, &std.ip)?;
        }
        if !self.extra.contains_key(PORT_FIELD) {
            map.serialize_entry(PORT_FIELD, &std.port)?;
        }
        if !self.extra.contains_key(PROTOCOL_FIELD) {
            map.serialize_entry(PROTOCOL_FIELD, &std.protocol)?;
        }
        if !self.extra.contains_key(ENABLE_FIELD) {
            map.serialize_entry(ENABLE_FIELD, &std.enable)?;
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for BindTemplate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut doc = serializer.serialize_struct("BindTemplate", 2)?;
        doc.serialize_field("value", &self.rows)?;
        doc.serialize_field("as_default_value", &self.as_default_value)?;
        doc.end()
    }
}
