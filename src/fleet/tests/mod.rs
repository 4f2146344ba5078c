//! Tests for the fleet module.
