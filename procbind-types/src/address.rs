//! Bind address literals.

use crate::field::FieldValue;
use crate::{FieldError, FieldResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// A bind address literal in IPv4 or IPv6 textual form.
///
/// Construction via [`BindIp::new`] does not validate: decoded documents
/// carry whatever the wire had, and validation is a separate pass. Use
/// [`FromStr`] when a validated value is wanted up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BindIp(String);

impl BindIp {
    /// Wraps an address literal without validating it.
    #[must_use]
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// Returns the address literal.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FieldValue for BindIp {
    fn validate(&self) -> FieldResult<()> {
        if self.0.parse::<IpAddr>().is_ok() {
            Ok(())
        } else {
            Err(FieldError::InvalidIp(self.0.clone()))
        }
    }
}

impl fmt::Display for BindIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BindIp {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ip = Self::new(s);
        ip.validate()?;
        Ok(ip)
    }
}
