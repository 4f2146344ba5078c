//! Error types for billing validation and parsing.

use super::{InvoiceId, InvoiceStatus};
use crate::fleet::domain::JetId;
use crate::service_request::domain::RequestId;
use thiserror::Error;

/// Errors returned while issuing or paying invoices.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BillingDomainError {
    /// The invoice identifier does not follow the `INV###` format.
    #[error("invalid invoice identifier '{0}', expected INV followed by digits")]
    InvalidInvoiceId(String),

    /// Invoices can only be issued for completed work.
    #[error("request {0} has not been completed")]
    RequestNotCompleted(RequestId),

    /// The request has no agreed cost to bill.
    #[error("request {0} has no cost")]
    MissingCost(RequestId),

    /// The jet does not belong to the request.
    #[error("jet {jet_id} is not the jet serviced by request {request_id}")]
    JetMismatch {
        /// Request identifier.
        request_id: RequestId,
        /// Supplied jet identifier.
        jet_id: JetId,
    },

    /// Only due invoices can be paid.
    #[error("invoice {invoice_id} is {status} and cannot be paid")]
    InvoiceNotPayable {
        /// Invoice identifier.
        invoice_id: InvoiceId,
        /// Current invoice status.
        status: InvoiceStatus,
    },
}

/// Error returned while parsing invoice statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown invoice status: {0}")]
pub struct ParseInvoiceStatusError(pub String);
