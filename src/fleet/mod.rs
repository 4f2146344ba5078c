//! Fleet of aircraft owned by the marketplace's clients.
//!
//! Jets are static records referenced by service requests. They are only
//! mutated by add-aircraft actions. The module follows the same hexagonal
//! layout as the rest of the crate:
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
