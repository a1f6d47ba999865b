//! Transport protocols a binding row can declare.

use crate::field::FieldValue;
use crate::{FieldError, FieldResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The transport protocol of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
    Tcp6,
    Udp6,
}

impl Protocol {
    /// The persisted name of the protocol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
            Protocol::Tcp6 => "tcp6",
            Protocol::Udp6 => "udp6",
        }
    }
}

impl FieldValue for Protocol {
    // The enum is closed; the decode layer already enforces the domain.
    fn validate(&self) -> FieldResult<()> {
        Ok(())
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Protocol::Tcp),
            "udp" => Ok(Protocol::Udp),
            "tcp6" => Ok(Protocol::Tcp6),
            "udp6" => Ok(Protocol::Udp6),
            other => Err(FieldError::UnknownProtocol(other.to_string())),
        }
    }
}
