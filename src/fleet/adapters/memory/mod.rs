//! In-memory fleet adapters.

mod fleet;

pub use fleet::InMemoryFleetRepository;
