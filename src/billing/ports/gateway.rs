//! Payment gateway port.

use crate::billing::domain::{Invoice, InvoiceId, PaymentReceipt};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for payment gateway operations.
pub type PaymentGatewayResult<T> = Result<T, PaymentGatewayError>;

/// External collaborator that charges invoices.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charges the invoice amount and returns the receipt.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentGatewayError`] when the charge fails.
    async fn charge(&self, invoice: &Invoice) -> PaymentGatewayResult<PaymentReceipt>;
}

/// Errors returned by payment gateway adapters.
#[derive(Debug, Clone, Error)]
pub enum PaymentGatewayError {
    /// The charge was declined.
    #[error("payment for invoice {invoice_id} declined: {reason}")]
    Declined {
        /// Invoice identifier.
        invoice_id: InvoiceId,
        /// Reason string.
        reason: String,
    },

    /// Generic runtime failure.
    #[error("payment gateway runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl PaymentGatewayError {
    /// Wraps a runtime error from the gateway adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
