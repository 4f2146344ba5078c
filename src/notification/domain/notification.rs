//! Feed entry aggregate.

use super::{NotificationDomainError, NotificationEvent, NotificationId, NotificationKind};
use crate::i18n::{Language, Translator};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Rendered feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    kind: NotificationKind,
    text: String,
    timestamp: DateTime<Utc>,
    read: bool,
}

/// Parameter object for reconstructing a stored notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedNotificationData {
    /// Stored identifier.
    pub id: NotificationId,
    /// Feed category.
    pub kind: NotificationKind,
    /// Rendered text.
    pub text: String,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    /// Whether the entry was read.
    pub read: bool,
}

impl Notification {
    /// Renders an unread notification for an event in `language`.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationDomainError::TemplateRender`] when rendering
    /// fails.
    pub fn from_event(
        event: &NotificationEvent,
        translator: &Translator,
        language: Language,
        clock: &impl Clock,
    ) -> Result<Self, NotificationDomainError> {
        Ok(Self {
            id: NotificationId::generate(),
            kind: event.kind(),
            text: event.render(translator, language)?,
            timestamp: clock.utc(),
            read: false,
        })
    }

    /// Reconstructs a notification from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedNotificationData) -> Self {
        Self {
            id: data.id,
            kind: data.kind,
            text: data.text,
            timestamp: data.timestamp,
            read: data.read,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> &NotificationId {
        &self.id
    }

    /// Returns the feed category.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Returns the rendered text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the creation time.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns `true` once the entry has been read.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.read
    }

    /// Marks the entry read, returning `false` if it already was.
    pub const fn mark_read(&mut self) -> bool {
        let changed = !self.read;
        self.read = true;
        changed
    }
}
