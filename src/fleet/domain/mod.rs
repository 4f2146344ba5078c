//! Domain model for the fleet.

mod error;
mod ids;
mod jet;

pub use error::{FleetDomainError, ParseJetStatusError};
pub use ids::{JetId, TailNumber};
pub use jet::{Jet, JetStatus, NewAircraft, PersistedJetData};
