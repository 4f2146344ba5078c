//! Identifier and validated scalar types for the fleet domain.

use super::FleetDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a jet in the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JetId(String);

impl JetId {
    /// Generates a fresh identifier of the form `jet-<uuid>`.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("jet-{}", Uuid::new_v4().simple()))
    }

    /// Wraps an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FleetDomainError::InvalidJetId`] when the value is blank or
    /// contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, FleetDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(FleetDomainError::InvalidJetId(raw));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for JetId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for JetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Aircraft registration mark, normalized to uppercase (for example `OO-JNS`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TailNumber(String);

impl TailNumber {
    /// Creates a normalized tail number.
    ///
    /// # Errors
    ///
    /// Returns [`FleetDomainError::InvalidTailNumber`] when the value is
    /// blank or contains inner whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, FleetDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(FleetDomainError::InvalidTailNumber(raw));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the tail number as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TailNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
