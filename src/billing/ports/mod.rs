//! Port contracts for billing.

mod gateway;
mod repository;

pub use gateway::{PaymentGateway, PaymentGatewayError, PaymentGatewayResult};
pub use repository::{InvoiceRepository, InvoiceRepositoryError, InvoiceRepositoryResult};
