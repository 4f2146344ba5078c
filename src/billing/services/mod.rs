//! Orchestration services for billing.

mod billing;

pub use billing::{BillingService, BillingServiceError, BillingServiceResult};
