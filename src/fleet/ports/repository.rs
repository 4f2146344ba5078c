//! Repository port for jet storage and lookup.

use crate::fleet::domain::{Jet, JetId, TailNumber};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for fleet repository operations.
pub type FleetRepositoryResult<T> = Result<T, FleetRepositoryError>;

/// Jet storage contract.
#[async_trait]
pub trait FleetRepository: Send + Sync {
    /// Stores a new jet.
    ///
    /// # Errors
    ///
    /// Returns [`FleetRepositoryError::DuplicateJet`] when the identifier
    /// exists or [`FleetRepositoryError::DuplicateTailNumber`] when another
    /// jet already carries the registration.
    async fn store(&self, jet: &Jet) -> FleetRepositoryResult<()>;

    /// Finds a jet by identifier.
    async fn find_by_id(&self, id: &JetId) -> FleetRepositoryResult<Option<Jet>>;

    /// Returns all jets in insertion order.
    async fn list(&self) -> FleetRepositoryResult<Vec<Jet>>;
}

/// Errors returned by fleet repository implementations.
#[derive(Debug, Clone, Error)]
pub enum FleetRepositoryError {
    /// A jet with the same identifier already exists.
    #[error("duplicate jet identifier: {0}")]
    DuplicateJet(JetId),

    /// A jet with the same tail number already exists.
    #[error("tail number already registered: {0}")]
    DuplicateTailNumber(TailNumber),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl FleetRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
