//! In-memory repository for session service requests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::service_request::{
    domain::{RequestId, ServiceRequest},
    ports::{
        ServiceRequestRepository, ServiceRequestRepositoryError, ServiceRequestRepositoryResult,
    },
};

/// Thread-safe in-memory request repository.
///
/// Requests are kept newest first. Modifications run on a copy under the
/// write lock and replace the matching entry in place once they succeed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryServiceRequestRepository {
    state: Arc<RwLock<Vec<ServiceRequest>>>,
}

impl InMemoryServiceRequestRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> ServiceRequestRepositoryError {
    ServiceRequestRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ServiceRequestRepository for InMemoryServiceRequestRepository {
    async fn store(&self, request: &ServiceRequest) -> ServiceRequestRepositoryResult<()> {
        let mut requests = self.state.write().map_err(lock_error)?;
        if requests.iter().any(|existing| existing.id() == request.id()) {
            return Err(ServiceRequestRepositoryError::DuplicateRequest(
                request.id().clone(),
            ));
        }
        requests.insert(0, request.clone());
        Ok(())
    }

    async fn modify<T, E, F>(&self, id: &RequestId, mutation: F) -> Result<T, E>
    where
        T: Send,
        E: From<ServiceRequestRepositoryError> + Send,
        F: FnOnce(&mut ServiceRequest) -> Result<T, E> + Send,
    {
        let mut requests = self.state.write().map_err(lock_error)?;
        let slot = requests
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or_else(|| ServiceRequestRepositoryError::NotFound(id.clone()))?;
        let mut draft = slot.clone();
        let value = mutation(&mut draft)?;
        *slot = draft;
        Ok(value)
    }

    async fn find_by_id(
        &self,
        id: &RequestId,
    ) -> ServiceRequestRepositoryResult<Option<ServiceRequest>> {
        let requests = self.state.read().map_err(lock_error)?;
        Ok(requests.iter().find(|request| request.id() == id).cloned())
    }

    async fn list(&self) -> ServiceRequestRepositoryResult<Vec<ServiceRequest>> {
        let requests = self.state.read().map_err(lock_error)?;
        Ok(requests.clone())
    }

    async fn find_by_provider(
        &self,
        provider_name: &str,
    ) -> ServiceRequestRepositoryResult<Vec<ServiceRequest>> {
        let requests = self.state.read().map_err(lock_error)?;
        Ok(requests
            .iter()
            .filter(|request| request.provider() == Some(provider_name))
            .cloned()
            .collect())
    }
}
