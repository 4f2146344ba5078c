//! Invoices and simulated payment.
//!
//! An invoice is issued once per completed, costed request and moves from
//! `Due` to `Paid` exactly once, when the payment gateway returns a receipt.
//! The module follows the same hexagonal layout as the rest of the crate:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
