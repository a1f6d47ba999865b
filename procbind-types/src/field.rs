//! The template-field wrapper: a value plus its enforcement flag.

use crate::{BindIp, FieldResult, PortSpec, Protocol};
use serde::{Deserialize, Deserializer, Serialize};

/// A binding field value that can be validated against its domain rules.
pub trait FieldValue {
    /// Checks the value against the domain rules of its field.
    fn validate(&self) -> FieldResult<()>;
}

// The enable flag has no domain beyond being a boolean.
impl FieldValue for bool {
    fn validate(&self) -> FieldResult<()> {
        Ok(())
    }
}

/// A template field: an optional value plus an optional "as default value"
/// flag stating whether the template enforces the value onto instances.
///
/// An absent flag means enforced. An absent value on an enforced field is
/// itself enforced: applying the template clears the instance field rather
/// than leaving it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct TemplateField<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_default_value: Option<bool>,
}

/// Template field holding a bind IP address.
pub type IpField = TemplateField<BindIp>;
/// Template field holding a port expression.
pub type PortField = TemplateField<PortSpec>;
/// Template field holding a protocol.
pub type ProtocolField = TemplateField<Protocol>;
/// Template field holding the enable flag.
pub type EnableField = TemplateField<bool>;

impl<T> TemplateField<T> {
    /// A field with no value and no flag.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            value: None,
            as_default_value: None,
        }
    }

    /// A field whose value the template enforces onto every matching
    /// instance row.
    #[must_use]
    pub fn enforced(value: T) -> Self {
        Self {
            value: Some(value),
            as_default_value: Some(true),
        }
    }

    /// An enforced field with no value: applying the template clears the
    /// instance field.
    #[must_use]
    pub const fn enforced_empty() -> Self {
        Self {
            value: None,
            as_default_value: Some(true),
        }
    }

    /// A field the template only records as a suggestion; instances own
    /// the effective value.
    #[must_use]
    pub fn advisory(value: T) -> Self {
        Self {
            value: Some(value),
            as_default_value: Some(false),
        }
    }

    /// Whether the template enforces this field. An absent flag counts as
    /// enforced.
    #[must_use]
    pub fn is_enforced(&self) -> bool {
        self.as_default_value.unwrap_or(true)
    }

    /// Deserializes a field pair, accepting JSON null for the whole pair
    /// and treating it as unset.
    pub fn from_nullable<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Self>::deserialize(deserializer)?.unwrap_or_default())
    }
}

impl<T: FieldValue> TemplateField<T> {
    /// Validates the value against its domain rules. An absent value is
    /// always valid at this layer.
    pub fn validate(&self) -> FieldResult<()> {
        match &self.value {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}

impl<T> Default for TemplateField<T> {
    fn default() -> Self {
        Self::unset()
    }
}
