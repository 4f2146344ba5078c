//! Errors surfaced by the marketplace facade.

use crate::account::domain::AccountDomainError;
use crate::billing::domain::BillingDomainError;
use crate::billing::services::BillingServiceError;
use crate::fleet::domain::{FleetDomainError, JetId};
use crate::fleet::services::FleetServiceError;
use crate::i18n::CatalogError;
use crate::notification::domain::NotificationDomainError;
use crate::notification::services::NotificationServiceError;
use crate::service_request::domain::{RequestId, ServiceRequestDomainError};
use crate::service_request::services::{
    ServiceCompletionError, ServiceMessagingError, ServiceRequestLifecycleError,
};
use thiserror::Error;

/// Errors returned by [`super::Marketplace`] operations.
#[derive(Debug, Error)]
pub enum MarketplaceError {
    /// Sign-in, sign-up or onboarding failed.
    #[error(transparent)]
    Account(#[from] AccountDomainError),
    /// A request lifecycle operation failed.
    #[error(transparent)]
    Lifecycle(#[from] ServiceRequestLifecycleError),
    /// Completion submission failed.
    #[error(transparent)]
    Completion(#[from] ServiceCompletionError),
    /// Posting or reading chat failed.
    #[error(transparent)]
    Messaging(#[from] ServiceMessagingError),
    /// A fleet operation failed.
    #[error(transparent)]
    Fleet(#[from] FleetServiceError),
    /// Issuing or paying an invoice failed.
    #[error(transparent)]
    Billing(#[from] BillingServiceError),
    /// Pushing or reading notifications failed.
    #[error(transparent)]
    Notification(#[from] NotificationServiceError),
    /// The translation catalogs could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The demo data set is inconsistent.
    #[error(transparent)]
    Seed(#[from] SeedError),
    /// The request refers to a jet that is not in the fleet.
    #[error("jet not found in fleet: {0}")]
    UnknownJet(JetId),
    /// No request exists with the identifier.
    #[error("service request not found: {0}")]
    UnknownRequest(RequestId),
}

/// Result type for marketplace operations.
pub type MarketplaceResult<T> = Result<T, MarketplaceError>;

/// Domain validation failures while building the demo data set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeedError {
    /// Invalid jet data.
    #[error("invalid demo jet: {0}")]
    Fleet(#[from] FleetDomainError),
    /// Invalid request data.
    #[error("invalid demo request: {0}")]
    Request(#[from] ServiceRequestDomainError),
    /// Invalid invoice data.
    #[error("invalid demo invoice: {0}")]
    Billing(#[from] BillingDomainError),
    /// Invalid notification data.
    #[error("invalid demo notification: {0}")]
    Notification(#[from] NotificationDomainError),
    /// A timestamp literal is not a valid date.
    #[error("invalid demo timestamp: {0}")]
    Timestamp(&'static str),
}
