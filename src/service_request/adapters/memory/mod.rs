//! In-memory service request adapters.

mod request;

pub use request::InMemoryServiceRequestRepository;
