//! Notification identifiers.

use super::NotificationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a feed entry, such as `n-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(String);

impl NotificationId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("n-{}", Uuid::new_v4().simple()))
    }

    /// Wraps an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationDomainError::InvalidNotificationId`] for blank
    /// values.
    pub fn new(value: impl Into<String>) -> Result<Self, NotificationDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NotificationDomainError::InvalidNotificationId(raw));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NotificationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
