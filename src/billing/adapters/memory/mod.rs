//! In-memory billing adapters.

mod invoice;

pub use invoice::InMemoryInvoiceRepository;
