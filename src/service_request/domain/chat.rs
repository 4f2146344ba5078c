//! Per-request chat messages.

use super::{MessageId, ServiceRequestDomainError};
use crate::account::domain::UserRole;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Author tag shown next to a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    /// The aircraft owner.
    Owner,
    /// The assigned provider.
    Provider,
    /// The platform.
    System,
}

impl MessageSender {
    /// Maps the posting role to its sender tag.
    #[must_use]
    pub const fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Client => Self::Owner,
            UserRole::Provider => Self::Provider,
            UserRole::Operator => Self::System,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Provider => "provider",
            Self::System => "system",
        }
    }
}

impl fmt::Display for MessageSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message in a request's chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    sender: MessageSender,
    text: String,
    timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Creates a message stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestDomainError::EmptyMessage`] when the text is
    /// blank after trimming.
    pub fn new(
        sender: MessageSender,
        text: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, ServiceRequestDomainError> {
        let raw = text.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ServiceRequestDomainError::EmptyMessage);
        }
        Ok(Self {
            id: MessageId::generate(),
            sender,
            text: trimmed.to_owned(),
            timestamp: clock.utc(),
        })
    }

    /// Reconstructs a stored message.
    #[must_use]
    pub const fn from_persisted(
        id: MessageId,
        sender: MessageSender,
        text: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            sender,
            text,
            timestamp,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the sender tag.
    #[must_use]
    pub const fn sender(&self) -> MessageSender {
        self.sender
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when the message was posted.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
