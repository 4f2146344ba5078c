//! In-memory feed storage.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::notification::{
    domain::{Notification, NotificationId},
    ports::{NotificationRepository, NotificationRepositoryError, NotificationRepositoryResult},
};

/// Thread-safe in-memory feed keeping the newest entry first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationRepository {
    state: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotificationRepository {
    /// Creates an empty feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> NotificationRepositoryError {
    NotificationRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn store(&self, notification: &Notification) -> NotificationRepositoryResult<()> {
        let mut feed = self.state.write().map_err(lock_error)?;
        if feed.iter().any(|existing| existing.id() == notification.id()) {
            return Err(NotificationRepositoryError::DuplicateNotification(
                notification.id().clone(),
            ));
        }
        feed.insert(0, notification.clone());
        Ok(())
    }

    async fn update(&self, notification: &Notification) -> NotificationRepositoryResult<()> {
        let mut feed = self.state.write().map_err(lock_error)?;
        let slot = feed
            .iter_mut()
            .find(|existing| existing.id() == notification.id())
            .ok_or_else(|| NotificationRepositoryError::NotFound(notification.id().clone()))?;
        *slot = notification.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &NotificationId,
    ) -> NotificationRepositoryResult<Option<Notification>> {
        let feed = self.state.read().map_err(lock_error)?;
        Ok(feed.iter().find(|entry| entry.id() == id).cloned())
    }

    async fn list(&self) -> NotificationRepositoryResult<Vec<Notification>> {
        let feed = self.state.read().map_err(lock_error)?;
        Ok(feed.clone())
    }
}
