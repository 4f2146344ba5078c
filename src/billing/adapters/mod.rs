//! Adapter implementations for billing ports.

pub mod memory;
mod simulated;

pub use simulated::SimulatedPaymentGateway;
