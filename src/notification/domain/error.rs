//! Error types for notification rendering and parsing.

use super::NotificationKind;
use thiserror::Error;

/// Errors returned while building notifications.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationDomainError {
    /// The notification identifier is blank.
    #[error("invalid notification identifier: '{0}'")]
    InvalidNotificationId(String),

    /// The text template failed to render.
    #[error("failed to render {kind} notification: {reason}")]
    TemplateRender {
        /// Kind of the notification being rendered.
        kind: NotificationKind,
        /// Rendering failure reason.
        reason: String,
    },
}

/// Error returned while parsing notification kinds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown notification kind: {0}")]
pub struct ParseNotificationKindError(pub String);
