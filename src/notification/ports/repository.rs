//! Repository port for feed entries.

use crate::notification::domain::{Notification, NotificationId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notification repository operations.
pub type NotificationRepositoryResult<T> = Result<T, NotificationRepositoryError>;

/// Feed storage contract.
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Stores a new entry at the top of the feed.
    async fn store(&self, notification: &Notification) -> NotificationRepositoryResult<()>;

    /// Replaces the stored entry with the same identifier.
    async fn update(&self, notification: &Notification) -> NotificationRepositoryResult<()>;

    /// Finds an entry by identifier.
    async fn find_by_id(
        &self,
        id: &NotificationId,
    ) -> NotificationRepositoryResult<Option<Notification>>;

    /// Returns the feed, newest first.
    async fn list(&self) -> NotificationRepositoryResult<Vec<Notification>>;
}

/// Errors returned by notification repository implementations.
#[derive(Debug, Clone, Error)]
pub enum NotificationRepositoryError {
    /// An entry with the same identifier already exists.
    #[error("duplicate notification identifier: {0}")]
    DuplicateNotification(NotificationId),

    /// The entry was not found.
    #[error("notification not found: {0}")]
    NotFound(NotificationId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotificationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
