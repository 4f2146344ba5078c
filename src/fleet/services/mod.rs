//! Orchestration services for the fleet.

mod fleet;

pub use fleet::{FleetService, FleetServiceError, FleetServiceResult};
