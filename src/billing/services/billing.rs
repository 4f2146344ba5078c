//! Service layer for issuing and paying invoices.

use crate::billing::{
    domain::{BillingDomainError, Invoice, InvoiceId},
    ports::{InvoiceRepository, InvoiceRepositoryError, PaymentGateway, PaymentGatewayError},
};
use crate::fleet::domain::Jet;
use crate::money::Money;
use crate::service_request::domain::ServiceRequest;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for billing operations.
#[derive(Debug, Error)]
pub enum BillingServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BillingDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(InvoiceRepositoryError),
    /// The payment gateway failed.
    #[error(transparent)]
    Gateway(#[from] PaymentGatewayError),
    /// No invoice exists with the identifier.
    #[error("invoice not found: {0}")]
    NotFound(InvoiceId),
    /// Summing the outstanding amounts overflowed.
    #[error("outstanding invoice total overflowed")]
    AmountOverflow,
}

impl From<InvoiceRepositoryError> for BillingServiceError {
    fn from(err: InvoiceRepositoryError) -> Self {
        match err {
            InvoiceRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for billing service operations.
pub type BillingServiceResult<T> = Result<T, BillingServiceError>;

/// Billing orchestration service.
#[derive(Clone)]
pub struct BillingService<R, G, C>
where
    R: InvoiceRepository,
    G: PaymentGateway,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    gateway: Arc<G>,
    clock: Arc<C>,
}

impl<R, G, C> BillingService<R, G, C>
where
    R: InvoiceRepository,
    G: PaymentGateway,
    C: Clock + Send + Sync,
{
    /// Creates a new billing service.
    #[must_use]
    pub const fn new(repository: Arc<R>, gateway: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            repository,
            gateway,
            clock,
        }
    }

    /// Issues a due invoice for a completed request.
    ///
    /// The identifier continues the highest stored sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BillingServiceError::Domain`] when the request cannot be
    /// billed and [`BillingServiceError::Repository`] when the request was
    /// already invoiced.
    pub async fn issue_invoice(
        &self,
        request: &ServiceRequest,
        jet: &Jet,
    ) -> BillingServiceResult<Invoice> {
        if let Some(invoiced) = self.repository.find_by_request(request.id()).await? {
            debug!(
                request_id = %request.id(),
                invoice_id = %invoiced.id(),
                "request already invoiced"
            );
            return Err(InvoiceRepositoryError::AlreadyInvoiced(request.id().clone()).into());
        }
        let existing = self.repository.list().await?;
        let next_sequence = existing
            .iter()
            .filter_map(|invoice| invoice.id().sequence())
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        let invoice = Invoice::issue(
            InvoiceId::from_sequence(next_sequence),
            request,
            jet,
            &*self.clock,
        )?;
        self.repository.store(&invoice).await?;
        info!(
            invoice_id = %invoice.id(),
            request_id = %invoice.request_id(),
            amount = %invoice.amount(),
            "invoice issued"
        );
        Ok(invoice)
    }

    /// Stores a previously issued invoice as-is.
    ///
    /// # Errors
    ///
    /// Returns [`BillingServiceError::Repository`] on duplicates.
    pub async fn restore(&self, invoice: Invoice) -> BillingServiceResult<Invoice> {
        self.repository.store(&invoice).await?;
        Ok(invoice)
    }

    /// Charges a due invoice through the gateway and records the receipt.
    ///
    /// The invoice is claimed as `Processing` before the gateway is called,
    /// so a concurrent payment of the same invoice is refused without a
    /// second charge. A failed charge makes the invoice due again.
    ///
    /// # Errors
    ///
    /// Returns [`BillingServiceError::Domain`] when the invoice is not due
    /// or already being paid, [`BillingServiceError::Gateway`] when the
    /// charge fails, and [`BillingServiceError::NotFound`] for unknown ids.
    pub async fn pay_invoice(&self, id: &InvoiceId) -> BillingServiceResult<Invoice> {
        let claimed = self
            .repository
            .modify(id, |invoice| {
                invoice.begin_payment()?;
                Ok::<_, BillingServiceError>(invoice.clone())
            })
            .await?;
        debug!(invoice_id = %id, "invoice claimed for payment");

        let receipt = match self.gateway.charge(&claimed).await {
            Ok(receipt) => receipt,
            Err(err) => {
                warn!(invoice_id = %id, error = %err, "payment failed");
                self.repository
                    .modify(id, |invoice| {
                        invoice.abandon_payment();
                        Ok::<_, BillingServiceError>(())
                    })
                    .await?;
                return Err(err.into());
            }
        };

        let clock = &*self.clock;
        let paid = self
            .repository
            .modify(id, |invoice| {
                invoice.mark_paid(receipt, clock)?;
                Ok::<_, BillingServiceError>(invoice.clone())
            })
            .await?;
        info!(invoice_id = %id, amount = %paid.amount(), "invoice paid");
        Ok(paid)
    }

    /// Finds an invoice by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BillingServiceError::Repository`] on persistence failure.
    pub async fn find(&self, id: &InvoiceId) -> BillingServiceResult<Option<Invoice>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns every invoice in issue order.
    ///
    /// # Errors
    ///
    /// Returns [`BillingServiceError::Repository`] on persistence failure.
    pub async fn list(&self) -> BillingServiceResult<Vec<Invoice>> {
        Ok(self.repository.list().await?)
    }

    /// Sums the amounts of due and overdue invoices.
    ///
    /// # Errors
    ///
    /// Returns [`BillingServiceError::AmountOverflow`] if the sum overflows.
    pub async fn outstanding_total(&self) -> BillingServiceResult<Money> {
        let invoices = self.repository.list().await?;
        invoices
            .iter()
            .filter(|invoice| invoice.status().is_outstanding())
            .try_fold(Money::ZERO, |total, invoice| {
                total.checked_add(invoice.amount())
            })
            .ok_or(BillingServiceError::AmountOverflow)
    }
}
