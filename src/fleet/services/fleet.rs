//! Service layer for adding and listing aircraft.

use crate::fleet::{
    domain::{FleetDomainError, Jet, JetId, NewAircraft},
    ports::{FleetRepository, FleetRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for fleet operations.
#[derive(Debug, Error)]
pub enum FleetServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] FleetDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] FleetRepositoryError),
}

/// Result type for fleet service operations.
pub type FleetServiceResult<T> = Result<T, FleetServiceError>;

/// Fleet orchestration service.
#[derive(Clone)]
pub struct FleetService<R>
where
    R: FleetRepository,
{
    repository: Arc<R>,
}

impl<R> FleetService<R>
where
    R: FleetRepository,
{
    /// Creates a new fleet service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates the form and adds the aircraft to the fleet.
    ///
    /// # Errors
    ///
    /// Returns [`FleetServiceError::Domain`] when required fields are blank
    /// and [`FleetServiceError::Repository`] when the tail number is already
    /// registered.
    pub async fn add_aircraft(&self, form: NewAircraft) -> FleetServiceResult<Jet> {
        let jet = Jet::register(form)?;
        self.repository.store(&jet).await?;
        info!(jet_id = %jet.id(), tail_number = %jet.tail_number(), "aircraft added to fleet");
        Ok(jet)
    }

    /// Stores an already constructed jet, used when seeding demo data.
    ///
    /// # Errors
    ///
    /// Returns [`FleetServiceError::Repository`] on duplicates.
    pub async fn restore(&self, jet: Jet) -> FleetServiceResult<Jet> {
        self.repository.store(&jet).await?;
        Ok(jet)
    }

    /// Finds a jet by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FleetServiceError::Repository`] when lookup fails.
    pub async fn find(&self, id: &JetId) -> FleetServiceResult<Option<Jet>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists the fleet in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`FleetServiceError::Repository`] when lookup fails.
    pub async fn list(&self) -> FleetServiceResult<Vec<Jet>> {
        Ok(self.repository.list().await?)
    }
}
