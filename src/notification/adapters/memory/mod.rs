//! In-memory notification adapters.

mod notification;

pub use notification::InMemoryNotificationRepository;
