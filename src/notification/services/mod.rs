//! Orchestration services for the notification feed.

mod feed;

pub use feed::{NotificationFeedService, NotificationServiceError, NotificationServiceResult};
