//! Adapter implementations for service request ports.

pub mod memory;
mod simulated;

pub use simulated::SimulatedQualityInspector;
