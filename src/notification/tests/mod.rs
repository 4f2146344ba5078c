//! Tests for the notification module.
