//! Service layer for pushing and reading feed entries.

use crate::i18n::{Language, Translator};
use crate::notification::{
    domain::{Notification, NotificationDomainError, NotificationEvent, NotificationId},
    ports::{NotificationRepository, NotificationRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for feed operations.
#[derive(Debug, Error)]
pub enum NotificationServiceError {
    /// Rendering failed.
    #[error(transparent)]
    Domain(#[from] NotificationDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] NotificationRepositoryError),
    /// No entry exists with the identifier.
    #[error("notification not found: {0}")]
    NotFound(NotificationId),
}

/// Result type for feed service operations.
pub type NotificationServiceResult<T> = Result<T, NotificationServiceError>;

/// Feed orchestration service.
#[derive(Clone)]
pub struct NotificationFeedService<R, C>
where
    R: NotificationRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    translator: Arc<Translator>,
    clock: Arc<C>,
}

impl<R, C> NotificationFeedService<R, C>
where
    R: NotificationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new feed service rendering through `translator`.
    #[must_use]
    pub const fn new(repository: Arc<R>, translator: Arc<Translator>, clock: Arc<C>) -> Self {
        Self {
            repository,
            translator,
            clock,
        }
    }

    /// Renders an event in `language` and pushes it to the top of the feed.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationServiceError::Domain`] when rendering fails.
    pub async fn push(
        &self,
        event: &NotificationEvent,
        language: Language,
    ) -> NotificationServiceResult<Notification> {
        let notification =
            Notification::from_event(event, &self.translator, language, &*self.clock)?;
        self.repository.store(&notification).await?;
        info!(
            notification_id = %notification.id(),
            kind = %notification.kind(),
            %language,
            "notification pushed"
        );
        Ok(notification)
    }

    /// Stores a previously created entry as-is.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationServiceError::Repository`] on duplicates.
    pub async fn restore(
        &self,
        notification: Notification,
    ) -> NotificationServiceResult<Notification> {
        self.repository.store(&notification).await?;
        Ok(notification)
    }

    /// Returns the feed, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationServiceError::Repository`] on persistence failure.
    pub async fn list(&self) -> NotificationServiceResult<Vec<Notification>> {
        Ok(self.repository.list().await?)
    }

    /// Counts unread entries.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationServiceError::Repository`] on persistence failure.
    pub async fn unread_count(&self) -> NotificationServiceResult<usize> {
        let feed = self.repository.list().await?;
        Ok(feed.iter().filter(|entry| !entry.is_read()).count())
    }

    /// Marks one entry read.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationServiceError::NotFound`] for unknown ids.
    pub async fn mark_read(
        &self,
        id: &NotificationId,
    ) -> NotificationServiceResult<Notification> {
        let mut notification = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| NotificationServiceError::NotFound(id.clone()))?;
        if notification.mark_read() {
            self.repository.update(&notification).await?;
            debug!(notification_id = %id, "notification marked read");
        }
        Ok(notification)
    }

    /// Marks every entry read and returns how many changed.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationServiceError::Repository`] on persistence failure.
    pub async fn mark_all_read(&self) -> NotificationServiceResult<usize> {
        let mut changed = 0_usize;
        for mut notification in self.repository.list().await? {
            if notification.mark_read() {
                self.repository.update(&notification).await?;
                changed += 1;
            }
        }
        if changed > 0 {
            info!(changed, "notifications marked read");
        }
        Ok(changed)
    }
}
