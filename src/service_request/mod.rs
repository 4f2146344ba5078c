//! Service requests for aircraft detailing.
//!
//! A request moves through the canonical status sequence
//! `REQUESTED → ASSIGNED → IN_PROGRESS → COMPLETED → APPROVED`, with
//! `CANCELLED` reachable from any non-terminal status. Completion carries a
//! photo-evidenced checklist that a quality inspector certifies in the
//! background, and every request owns an append-only chat. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
