//! Domain model for feed notifications.

mod error;
mod event;
mod ids;
mod notification;

pub use error::{NotificationDomainError, ParseNotificationKindError};
pub use event::{NotificationEvent, NotificationKind};
pub use ids::NotificationId;
pub use notification::{Notification, PersistedNotificationData};
