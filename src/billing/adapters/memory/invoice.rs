//! In-memory repository for session invoices.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::billing::{
    domain::{Invoice, InvoiceId},
    ports::{InvoiceRepository, InvoiceRepositoryError, InvoiceRepositoryResult},
};
use crate::service_request::domain::RequestId;

/// Thread-safe in-memory invoice repository preserving issue order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInvoiceRepository {
    state: Arc<RwLock<Vec<Invoice>>>,
}

impl InMemoryInvoiceRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> InvoiceRepositoryError {
    InvoiceRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
    async fn store(&self, invoice: &Invoice) -> InvoiceRepositoryResult<()> {
        let mut invoices = self.state.write().map_err(lock_error)?;
        if invoices.iter().any(|existing| existing.id() == invoice.id()) {
            return Err(InvoiceRepositoryError::DuplicateInvoice(invoice.id().clone()));
        }
        if invoices
            .iter()
            .any(|existing| existing.request_id() == invoice.request_id())
        {
            return Err(InvoiceRepositoryError::AlreadyInvoiced(
                invoice.request_id().clone(),
            ));
        }
        invoices.push(invoice.clone());
        Ok(())
    }

    async fn modify<T, E, F>(&self, id: &InvoiceId, mutation: F) -> Result<T, E>
    where
        T: Send,
        E: From<InvoiceRepositoryError> + Send,
        F: FnOnce(&mut Invoice) -> Result<T, E> + Send,
    {
        let mut invoices = self.state.write().map_err(lock_error)?;
        let slot = invoices
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or_else(|| InvoiceRepositoryError::NotFound(id.clone()))?;
        let mut draft = slot.clone();
        let value = mutation(&mut draft)?;
        *slot = draft;
        Ok(value)
    }

    async fn find_by_id(&self, id: &InvoiceId) -> InvoiceRepositoryResult<Option<Invoice>> {
        let invoices = self.state.read().map_err(lock_error)?;
        Ok(invoices.iter().find(|invoice| invoice.id() == id).cloned())
    }

    async fn find_by_request(
        &self,
        request_id: &RequestId,
    ) -> InvoiceRepositoryResult<Option<Invoice>> {
        let invoices = self.state.read().map_err(lock_error)?;
        Ok(invoices
            .iter()
            .find(|invoice| invoice.request_id() == request_id)
            .cloned())
    }

    async fn list(&self) -> InvoiceRepositoryResult<Vec<Invoice>> {
        let invoices = self.state.read().map_err(lock_error)?;
        Ok(invoices.clone())
    }
}
