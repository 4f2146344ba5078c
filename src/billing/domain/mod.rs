//! Domain model for billing.

mod error;
mod invoice;

pub use error::{BillingDomainError, ParseInvoiceStatusError};
pub use invoice::{Invoice, InvoiceId, InvoiceStatus, PaymentReceipt, PersistedInvoiceData};
