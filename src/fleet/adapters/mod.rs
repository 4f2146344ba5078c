//! Adapter implementations for fleet ports.

pub mod memory;
