//! Identifier types for the service request domain.

use super::ServiceRequestDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

fn validated(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Identifier of a service request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generates a fresh identifier of the form `req-<uuid>`.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("req-{}", Uuid::new_v4().simple()))
    }

    /// Wraps an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestDomainError::InvalidRequestId`] when the value
    /// is blank or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ServiceRequestDomainError> {
        let raw = value.into();
        validated(&raw)
            .map(Self)
            .ok_or(ServiceRequestDomainError::InvalidRequestId(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RequestId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a chat message within a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Generates a fresh identifier of the form `msg-<uuid>`.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("msg-{}", Uuid::new_v4().simple()))
    }

    /// Wraps an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestDomainError::InvalidMessageId`] when the value
    /// is blank or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ServiceRequestDomainError> {
        let raw = value.into();
        validated(&raw)
            .map(Self)
            .ok_or(ServiceRequestDomainError::InvalidMessageId(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
