//! Repository port for invoice storage and lookup.

use crate::billing::domain::{Invoice, InvoiceId};
use crate::service_request::domain::RequestId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for invoice repository operations.
pub type InvoiceRepositoryResult<T> = Result<T, InvoiceRepositoryError>;

/// Invoice storage contract.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Stores a new invoice.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceRepositoryError::DuplicateInvoice`] when the
    /// identifier exists or [`InvoiceRepositoryError::AlreadyInvoiced`] when
    /// the request already has an invoice.
    async fn store(&self, invoice: &Invoice) -> InvoiceRepositoryResult<()>;

    /// Applies `mutation` to the stored invoice as one atomic step.
    ///
    /// The change is kept only when `mutation` returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceRepositoryError::NotFound`] (converted into `E`) when
    /// the invoice does not exist, or whatever `mutation` returns.
    async fn modify<T, E, F>(&self, id: &InvoiceId, mutation: F) -> Result<T, E>
    where
        T: Send,
        E: From<InvoiceRepositoryError> + Send,
        F: FnOnce(&mut Invoice) -> Result<T, E> + Send;

    /// Finds an invoice by identifier.
    async fn find_by_id(&self, id: &InvoiceId) -> InvoiceRepositoryResult<Option<Invoice>>;

    /// Finds the invoice issued for a request.
    async fn find_by_request(&self, request_id: &RequestId)
    -> InvoiceRepositoryResult<Option<Invoice>>;

    /// Returns all invoices in issue order.
    async fn list(&self) -> InvoiceRepositoryResult<Vec<Invoice>>;
}

/// Errors returned by invoice repository implementations.
#[derive(Debug, Clone, Error)]
pub enum InvoiceRepositoryError {
    /// An invoice with the same identifier already exists.
    #[error("duplicate invoice identifier: {0}")]
    DuplicateInvoice(InvoiceId),

    /// The request already has an invoice.
    #[error("request {0} has already been invoiced")]
    AlreadyInvoiced(RequestId),

    /// The invoice was not found.
    #[error("invoice not found: {0}")]
    NotFound(InvoiceId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl InvoiceRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
