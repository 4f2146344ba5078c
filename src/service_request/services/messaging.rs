//! Service layer for per-request chat.

use crate::account::domain::UserRole;
use crate::service_request::{
    domain::{ChatMessage, RequestId, ServiceRequestDomainError},
    ports::{ServiceRequestRepository, ServiceRequestRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for chat operations.
#[derive(Debug, Error)]
pub enum ServiceMessagingError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ServiceRequestDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(ServiceRequestRepositoryError),
    /// No request exists with the identifier.
    #[error("service request not found: {0}")]
    NotFound(RequestId),
}

impl From<ServiceRequestRepositoryError> for ServiceMessagingError {
    fn from(err: ServiceRequestRepositoryError) -> Self {
        match err {
            ServiceRequestRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for chat service operations.
pub type ServiceMessagingResult<T> = Result<T, ServiceMessagingError>;

/// Chat orchestration service.
#[derive(Clone)]
pub struct ServiceMessagingService<R, C>
where
    R: ServiceRequestRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ServiceMessagingService<R, C>
where
    R: ServiceRequestRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new chat service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Appends a message to the request's chat.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceMessagingError::Domain`] for blank text and
    /// [`ServiceMessagingError::NotFound`] for unknown ids.
    pub async fn post_message(
        &self,
        id: &RequestId,
        role: UserRole,
        text: impl Into<String> + Send,
    ) -> ServiceMessagingResult<ChatMessage> {
        let clock = &*self.clock;
        let message = self
            .repository
            .modify(id, |request| {
                Ok::<_, ServiceMessagingError>(request.post_message(role, text, clock)?)
            })
            .await?;
        info!(request_id = %id, sender = %message.sender(), "chat message posted");
        Ok(message)
    }

    /// Returns the request's chat in posting order.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceMessagingError::NotFound`] for unknown ids.
    pub async fn messages(&self, id: &RequestId) -> ServiceMessagingResult<Vec<ChatMessage>> {
        let request = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceMessagingError::NotFound(id.clone()))?;
        Ok(request.messages().to_vec())
    }
}
