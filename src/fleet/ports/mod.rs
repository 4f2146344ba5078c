//! Port contracts for the fleet.

mod repository;

pub use repository::{FleetRepository, FleetRepositoryError, FleetRepositoryResult};
