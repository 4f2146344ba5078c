//! Repository port for service request storage and lookup.

use crate::service_request::domain::{RequestId, ServiceRequest};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for service request repository operations.
pub type ServiceRequestRepositoryResult<T> = Result<T, ServiceRequestRepositoryError>;

/// Service request storage contract.
#[async_trait]
pub trait ServiceRequestRepository: Send + Sync {
    /// Stores a new request.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestRepositoryError::DuplicateRequest`] when the
    /// identifier already exists.
    async fn store(&self, request: &ServiceRequest) -> ServiceRequestRepositoryResult<()>;

    /// Applies `mutation` to the stored request as one atomic step.
    ///
    /// The mutation sees the latest stored version and no other writer can
    /// interleave with it. Its changes are kept only when it returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestRepositoryError::NotFound`] (converted into
    /// `E`) when the request does not exist, or the mutation's own error.
    async fn modify<T, E, F>(&self, id: &RequestId, mutation: F) -> Result<T, E>
    where
        T: Send,
        E: From<ServiceRequestRepositoryError> + Send,
        F: FnOnce(&mut ServiceRequest) -> Result<T, E> + Send;

    /// Finds a request by identifier.
    ///
    /// Returns `None` when the request does not exist.
    async fn find_by_id(&self, id: &RequestId)
    -> ServiceRequestRepositoryResult<Option<ServiceRequest>>;

    /// Returns every request, most recently stored first.
    async fn list(&self) -> ServiceRequestRepositoryResult<Vec<ServiceRequest>>;

    /// Returns the requests assigned to the named provider, most recently
    /// stored first.
    async fn find_by_provider(
        &self,
        provider_name: &str,
    ) -> ServiceRequestRepositoryResult<Vec<ServiceRequest>>;
}

/// Errors returned by service request repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ServiceRequestRepositoryError {
    /// A request with the same identifier already exists.
    #[error("duplicate request identifier: {0}")]
    DuplicateRequest(RequestId),

    /// The request was not found.
    #[error("request not found: {0}")]
    NotFound(RequestId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ServiceRequestRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
