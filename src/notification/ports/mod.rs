//! Port contracts for the notification feed.

mod repository;

pub use repository::{
    NotificationRepository, NotificationRepositoryError, NotificationRepositoryResult,
};
