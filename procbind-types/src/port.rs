//! Port expressions.

use crate::field::FieldValue;
use crate::{FieldError, FieldResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A port expression: a single port (`"8080"`), an inclusive range
/// (`"8080-8090"`), or a comma-separated list of either
/// (`"80,443,9000-9010"`).
///
/// Every port must be in `1..=65535` and a range's start must not exceed
/// its end. As with [`crate::BindIp`], construction does not validate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortSpec(String);

impl PortSpec {
    /// Wraps a port expression without validating it.
    #[must_use]
    pub fn new(expr: impl Into<String>) -> Self {
        Self(expr.into())
    }

    /// Returns the port expression.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FieldValue for PortSpec {
    fn validate(&self) -> FieldResult<()> {
        let invalid = || FieldError::InvalidPort(self.0.clone());

        if self.0.is_empty() {
            return Err(invalid());
        }
        for segment in self.0.split(',') {
            match segment.split_once('-') {
                Some((start, end)) => {
                    let start = parse_port(start).ok_or_else(invalid)?;
                    let end = parse_port(end).ok_or_else(invalid)?;
                    if start > end {
                        return Err(invalid());
                    }
                }
                None => {
                    parse_port(segment).ok_or_else(invalid)?;
                }
            }
        }
        Ok(())
    }
}

/// Parses one decimal port number in `1..=65535`. Signs, whitespace and
/// empty segments are rejected.
fn parse_port(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u32 = s.parse().ok()?;
    if (1..=65535).contains(&n) {
        Some(n as u16)
    } else {
        None
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PortSpec {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = Self::new(s);
        spec.validate()?;
        Ok(spec)
    }
}
