//! In-memory repository for the session fleet.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::fleet::{
    domain::{Jet, JetId},
    ports::{FleetRepository, FleetRepositoryError, FleetRepositoryResult},
};

/// Thread-safe in-memory jet repository preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFleetRepository {
    state: Arc<RwLock<Vec<Jet>>>,
}

impl InMemoryFleetRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> FleetRepositoryError {
    FleetRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl FleetRepository for InMemoryFleetRepository {
    async fn store(&self, jet: &Jet) -> FleetRepositoryResult<()> {
        let mut jets = self.state.write().map_err(lock_error)?;
        if jets.iter().any(|existing| existing.id() == jet.id()) {
            return Err(FleetRepositoryError::DuplicateJet(jet.id().clone()));
        }
        if jets
            .iter()
            .any(|existing| existing.tail_number() == jet.tail_number())
        {
            return Err(FleetRepositoryError::DuplicateTailNumber(
                jet.tail_number().clone(),
            ));
        }
        jets.push(jet.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &JetId) -> FleetRepositoryResult<Option<Jet>> {
        let jets = self.state.read().map_err(lock_error)?;
        Ok(jets.iter().find(|jet| jet.id() == id).cloned())
    }

    async fn list(&self) -> FleetRepositoryResult<Vec<Jet>> {
        let jets = self.state.read().map_err(lock_error)?;
        Ok(jets.clone())
    }
}
