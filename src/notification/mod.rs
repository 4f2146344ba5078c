//! Notification feed.
//!
//! Marketplace actions emit typed [`domain::NotificationEvent`]s. Each event
//! is rendered to feed text through a `minijinja` template looked up in the
//! session language's catalog, and stored as a [`domain::Notification`] that
//! starts unread.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
