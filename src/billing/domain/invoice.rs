//! Invoice aggregate and related billing types.

use super::{BillingDomainError, ParseInvoiceStatusError};
use crate::fleet::domain::{Jet, TailNumber};
use crate::money::Money;
use crate::service_request::domain::{RequestId, RequestStatus, ServiceRequest};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential invoice identifier such as `INV002`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

impl InvoiceId {
    /// Formats the identifier for a sequence number, padded to three digits.
    #[must_use]
    pub fn from_sequence(sequence: u32) -> Self {
        Self(format!("INV{sequence:03}"))
    }

    /// Parses an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BillingDomainError::InvalidInvoiceId`] unless the value is
    /// `INV` followed by one or more digits.
    pub fn new(value: impl Into<String>) -> Result<Self, BillingDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_uppercase();
        let valid = normalized
            .strip_prefix("INV")
            .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));
        if !valid {
            return Err(BillingDomainError::InvalidInvoiceId(raw));
        }
        Ok(Self(normalized))
    }

    /// Returns the numeric part of the identifier.
    #[must_use]
    pub fn sequence(&self) -> Option<u32> {
        self.0.strip_prefix("INV").and_then(|digits| digits.parse().ok())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payment status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Settled.
    Paid,
    /// Awaiting payment.
    Due,
    /// Past its payment term.
    Overdue,
    /// A charge is in flight.
    Processing,
}

impl InvoiceStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Due => "Due",
            Self::Overdue => "Overdue",
            Self::Processing => "Processing",
        }
    }

    /// Returns `true` when the invoice can be paid through the gateway.
    #[must_use]
    pub const fn is_payable(self) -> bool {
        matches!(self, Self::Due)
    }

    /// Returns `true` when money is still owed.
    #[must_use]
    pub const fn is_outstanding(self) -> bool {
        matches!(self, Self::Due | Self::Overdue | Self::Processing)
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for InvoiceStatus {
    type Error = ParseInvoiceStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "paid" => Ok(Self::Paid),
            "due" => Ok(Self::Due),
            "overdue" => Ok(Self::Overdue),
            "processing" => Ok(Self::Processing),
            _ => Err(ParseInvoiceStatusError(value.to_owned())),
        }
    }
}

/// Proof of a successful charge returned by the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Masked payment method, for example `Visa **** 1234`.
    pub payment_method: String,
    /// Gateway transaction identifier.
    pub transaction_id: String,
}

/// Billing record for a completed service request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    request_id: RequestId,
    jet_name: String,
    jet_tail_number: TailNumber,
    service_type: String,
    amount: Money,
    issued_on: NaiveDate,
    status: InvoiceStatus,
    receipt: Option<PaymentReceipt>,
    paid_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a stored invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedInvoiceData {
    /// Stored identifier.
    pub id: InvoiceId,
    /// Billed request.
    pub request_id: RequestId,
    /// Jet display name at issue time.
    pub jet_name: String,
    /// Jet registration at issue time.
    pub jet_tail_number: TailNumber,
    /// Billed service type.
    pub service_type: String,
    /// Billed amount.
    pub amount: Money,
    /// Issue date.
    pub issued_on: NaiveDate,
    /// Payment status.
    pub status: InvoiceStatus,
    /// Receipt of the payment, when paid.
    pub receipt: Option<PaymentReceipt>,
    /// When the payment was recorded, if known.
    pub paid_at: Option<DateTime<Utc>>,
}

impl Invoice {
    /// Issues a due invoice for a completed request.
    ///
    /// # Errors
    ///
    /// Returns [`BillingDomainError::RequestNotCompleted`] before completion,
    /// [`BillingDomainError::MissingCost`] when no cost was agreed, and
    /// [`BillingDomainError::JetMismatch`] when `jet` is not the serviced jet.
    pub fn issue(
        id: InvoiceId,
        request: &ServiceRequest,
        jet: &Jet,
        clock: &impl Clock,
    ) -> Result<Self, BillingDomainError> {
        if !request.has_reached(RequestStatus::Completed) {
            return Err(BillingDomainError::RequestNotCompleted(request.id().clone()));
        }
        let amount = request
            .cost()
            .ok_or_else(|| BillingDomainError::MissingCost(request.id().clone()))?;
        if request.jet_id() != jet.id() {
            return Err(BillingDomainError::JetMismatch {
                request_id: request.id().clone(),
                jet_id: jet.id().clone(),
            });
        }

        Ok(Self {
            id,
            request_id: request.id().clone(),
            jet_name: jet.name().to_owned(),
            jet_tail_number: jet.tail_number().clone(),
            service_type: request.service_type().to_owned(),
            amount,
            issued_on: clock.utc().date_naive(),
            status: InvoiceStatus::Due,
            receipt: None,
            paid_at: None,
        })
    }

    /// Reconstructs an invoice from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedInvoiceData) -> Self {
        Self {
            id: data.id,
            request_id: data.request_id,
            jet_name: data.jet_name,
            jet_tail_number: data.jet_tail_number,
            service_type: data.service_type,
            amount: data.amount,
            issued_on: data.issued_on,
            status: data.status,
            receipt: data.receipt,
            paid_at: data.paid_at,
        }
    }

    /// Returns the invoice identifier.
    #[must_use]
    pub const fn id(&self) -> &InvoiceId {
        &self.id
    }

    /// Returns the billed request.
    #[must_use]
    pub const fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Returns the jet display name.
    #[must_use]
    pub fn jet_name(&self) -> &str {
        &self.jet_name
    }

    /// Returns the jet registration.
    #[must_use]
    pub const fn jet_tail_number(&self) -> &TailNumber {
        &self.jet_tail_number
    }

    /// Returns the billed service type.
    #[must_use]
    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    /// Returns the billed amount.
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the issue date.
    #[must_use]
    pub const fn issued_on(&self) -> NaiveDate {
        self.issued_on
    }

    /// Returns the payment status.
    #[must_use]
    pub const fn status(&self) -> InvoiceStatus {
        self.status
    }

    /// Returns the payment receipt, when paid.
    #[must_use]
    pub const fn receipt(&self) -> Option<&PaymentReceipt> {
        self.receipt.as_ref()
    }

    /// Returns when the payment was recorded.
    #[must_use]
    pub const fn paid_at(&self) -> Option<DateTime<Utc>> {
        self.paid_at
    }

    /// Checks that the invoice may be charged.
    ///
    /// # Errors
    ///
    /// Returns [`BillingDomainError::InvoiceNotPayable`] unless the invoice
    /// is due.
    pub fn ensure_payable(&self) -> Result<(), BillingDomainError> {
        if self.status.is_payable() {
            return Ok(());
        }
        Err(BillingDomainError::InvoiceNotPayable {
            invoice_id: self.id.clone(),
            status: self.status,
        })
    }

    /// Claims a due invoice for a charge, moving it to `Processing`.
    ///
    /// # Errors
    ///
    /// Returns [`BillingDomainError::InvoiceNotPayable`] unless the invoice
    /// is due, which includes a charge already in flight.
    pub fn begin_payment(&mut self) -> Result<(), BillingDomainError> {
        self.ensure_payable()?;
        self.status = InvoiceStatus::Processing;
        Ok(())
    }

    /// Releases a claim after a failed charge so the invoice is due again.
    pub fn abandon_payment(&mut self) {
        if self.status == InvoiceStatus::Processing {
            self.status = InvoiceStatus::Due;
        }
    }

    /// Records a successful charge, moving the invoice to `Paid`.
    ///
    /// # Errors
    ///
    /// Returns [`BillingDomainError::InvoiceNotPayable`] unless the invoice
    /// is due or claimed for payment.
    pub fn mark_paid(
        &mut self,
        receipt: PaymentReceipt,
        clock: &impl Clock,
    ) -> Result<(), BillingDomainError> {
        if !matches!(self.status, InvoiceStatus::Due | InvoiceStatus::Processing) {
            return Err(BillingDomainError::InvoiceNotPayable {
                invoice_id: self.id.clone(),
                status: self.status,
            });
        }
        self.status = InvoiceStatus::Paid;
        self.receipt = Some(receipt);
        self.paid_at = Some(clock.utc());
        Ok(())
    }
}
