//! Service layer for request creation and status transitions.

use crate::account::domain::UserRole;
use crate::fleet::domain::{FleetDomainError, JetId};
use crate::service_request::{
    domain::{
        ProviderAssignment, RequestDetails, RequestId, RequestStatus, ServiceRequest,
        ServiceRequestDomainError, TransitionOutcome, Urgency,
    },
    ports::{ServiceRequestRepository, ServiceRequestRepositoryError},
};
use chrono::NaiveDateTime;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Format of the scheduled date-time submitted by the request form.
const SCHEDULE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Request payload for submitting a new service request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateServiceRequestRequest {
    jet_id: String,
    service_type: String,
    location: String,
    scheduled_at: String,
    urgency: Urgency,
    special_instructions: Option<String>,
}

impl CreateServiceRequestRequest {
    /// Creates a request with the required form fields.
    ///
    /// `scheduled_at` uses the `YYYY-MM-DDTHH:MM` form of a date-time input.
    #[must_use]
    pub fn new(
        jet_id: impl Into<String>,
        service_type: impl Into<String>,
        location: impl Into<String>,
        scheduled_at: impl Into<String>,
    ) -> Self {
        Self {
            jet_id: jet_id.into(),
            service_type: service_type.into(),
            location: location.into(),
            scheduled_at: scheduled_at.into(),
            urgency: Urgency::Standard,
            special_instructions: None,
        }
    }

    /// Sets the urgency.
    #[must_use]
    pub const fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    /// Sets special instructions for the provider.
    #[must_use]
    pub fn with_special_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.special_instructions = Some(instructions.into());
        self
    }

    /// Returns the selected jet identifier as typed.
    #[must_use]
    pub fn jet_id(&self) -> &str {
        &self.jet_id
    }

    /// Validates the form into request details.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestLifecycleError::Domain`] listing every blank
    /// required field or reporting an unparsable schedule, and
    /// [`ServiceRequestLifecycleError::Fleet`] for a malformed jet id.
    pub fn into_details(self) -> ServiceRequestLifecycleResult<RequestDetails> {
        let missing: Vec<&'static str> = [
            ("jet_id", self.jet_id.as_str()),
            ("service_type", self.service_type.as_str()),
            ("location", self.location.as_str()),
            ("scheduled_at", self.scheduled_at.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();
        if !missing.is_empty() {
            return Err(ServiceRequestDomainError::RequiredFieldsMissing(missing).into());
        }

        let scheduled_at = NaiveDateTime::parse_from_str(self.scheduled_at.trim(), SCHEDULE_FORMAT)
            .map_err(|_| ServiceRequestDomainError::InvalidSchedule(self.scheduled_at.clone()))?;
        let special_instructions = self
            .special_instructions
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty());

        Ok(RequestDetails {
            jet_id: JetId::new(self.jet_id)?,
            service_type: self.service_type.trim().to_owned(),
            location: self.location.trim().to_owned(),
            scheduled_at,
            urgency: self.urgency,
            special_instructions,
        })
    }
}

/// Service-level errors for request lifecycle operations.
#[derive(Debug, Error)]
pub enum ServiceRequestLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ServiceRequestDomainError),
    /// The jet reference is malformed.
    #[error(transparent)]
    Fleet(#[from] FleetDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(ServiceRequestRepositoryError),
    /// No request exists with the identifier.
    #[error("service request not found: {0}")]
    NotFound(RequestId),
}

impl From<ServiceRequestRepositoryError> for ServiceRequestLifecycleError {
    fn from(err: ServiceRequestRepositoryError) -> Self {
        match err {
            ServiceRequestRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for request lifecycle service operations.
pub type ServiceRequestLifecycleResult<T> = Result<T, ServiceRequestLifecycleError>;

/// A request after a status operation, with whether the operation changed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    /// The request as stored after the operation.
    pub request: ServiceRequest,
    /// Whether the status was appended or already recorded.
    pub outcome: TransitionOutcome,
}

impl StatusUpdate {
    /// Returns `true` when the operation appended a new status.
    #[must_use]
    pub const fn applied(&self) -> bool {
        matches!(self.outcome, TransitionOutcome::Applied)
    }
}

/// Request lifecycle orchestration service.
#[derive(Clone)]
pub struct ServiceRequestLifecycleService<R, C>
where
    R: ServiceRequestRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ServiceRequestLifecycleService<R, C>
where
    R: ServiceRequestRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new request lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Submits a new request in status `REQUESTED`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestLifecycleError`] when validation fails or the
    /// repository rejects the request.
    pub async fn create(
        &self,
        request: CreateServiceRequestRequest,
    ) -> ServiceRequestLifecycleResult<ServiceRequest> {
        let details = request.into_details()?;
        let service_request = ServiceRequest::new(details, &*self.clock);
        self.repository.store(&service_request).await?;
        info!(
            request_id = %service_request.id(),
            jet_id = %service_request.jet_id(),
            "service request submitted"
        );
        Ok(service_request)
    }

    /// Stores an already constructed request, used when seeding demo data.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestLifecycleError::Repository`] on duplicates.
    pub async fn restore(
        &self,
        request: ServiceRequest,
    ) -> ServiceRequestLifecycleResult<ServiceRequest> {
        self.repository.store(&request).await?;
        Ok(request)
    }

    /// Assigns a provider to a requested service.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestLifecycleError::NotFound`] for unknown ids and
    /// [`ServiceRequestLifecycleError::Domain`] when the role or status does
    /// not allow the assignment.
    pub async fn assign_provider(
        &self,
        id: &RequestId,
        assignment: ProviderAssignment,
        role: UserRole,
    ) -> ServiceRequestLifecycleResult<ServiceRequest> {
        Ok(self.apply_assignment(id, assignment, role).await?.request)
    }

    /// Assigns a provider and reports whether the assignment was new.
    ///
    /// The status check and the write happen as one repository step, so
    /// concurrent callers see exactly one [`TransitionOutcome::Applied`].
    ///
    /// # Errors
    ///
    /// See [`Self::assign_provider`].
    pub async fn apply_assignment(
        &self,
        id: &RequestId,
        assignment: ProviderAssignment,
        role: UserRole,
    ) -> ServiceRequestLifecycleResult<StatusUpdate> {
        let clock = &*self.clock;
        let update = self
            .repository
            .modify(id, |request| {
                let outcome = request.assign_provider(assignment, role, clock)?;
                Ok::<_, ServiceRequestLifecycleError>(StatusUpdate {
                    request: request.clone(),
                    outcome,
                })
            })
            .await?;
        record(&update, RequestStatus::Assigned);
        Ok(update)
    }

    /// Marks assigned work as started.
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub async fn start_work(
        &self,
        id: &RequestId,
        role: UserRole,
    ) -> ServiceRequestLifecycleResult<ServiceRequest> {
        self.transition(id, RequestStatus::InProgress, role).await
    }

    /// Approves completed work.
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub async fn approve(
        &self,
        id: &RequestId,
        role: UserRole,
    ) -> ServiceRequestLifecycleResult<ServiceRequest> {
        self.transition(id, RequestStatus::Approved, role).await
    }

    /// Cancels a request that has not reached a terminal status.
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub async fn cancel(
        &self,
        id: &RequestId,
        role: UserRole,
    ) -> ServiceRequestLifecycleResult<ServiceRequest> {
        self.transition(id, RequestStatus::Cancelled, role).await
    }

    /// Moves a request to a payload-free status on behalf of `role`.
    ///
    /// A target already present in the history leaves the request unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestLifecycleError::NotFound`] for unknown ids and
    /// [`ServiceRequestLifecycleError::Domain`] for rejected transitions.
    pub async fn transition(
        &self,
        id: &RequestId,
        target: RequestStatus,
        role: UserRole,
    ) -> ServiceRequestLifecycleResult<ServiceRequest> {
        Ok(self.apply_transition(id, target, role).await?.request)
    }

    /// Moves a request to a payload-free status and reports whether the
    /// status was new.
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub async fn apply_transition(
        &self,
        id: &RequestId,
        target: RequestStatus,
        role: UserRole,
    ) -> ServiceRequestLifecycleResult<StatusUpdate> {
        let clock = &*self.clock;
        let update = self
            .repository
            .modify(id, |request| {
                let outcome = request.transition_to(target, role, clock)?;
                Ok::<_, ServiceRequestLifecycleError>(StatusUpdate {
                    request: request.clone(),
                    outcome,
                })
            })
            .await?;
        record(&update, target);
        Ok(update)
    }

    /// Finds a request by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestLifecycleError::Repository`] when lookup fails.
    pub async fn find(
        &self,
        id: &RequestId,
    ) -> ServiceRequestLifecycleResult<Option<ServiceRequest>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists every request, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestLifecycleError::Repository`] when lookup fails.
    pub async fn list(&self) -> ServiceRequestLifecycleResult<Vec<ServiceRequest>> {
        Ok(self.repository.list().await?)
    }

    /// Lists the requests assigned to a provider, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestLifecycleError::Repository`] when lookup fails.
    pub async fn list_for_provider(
        &self,
        provider_name: &str,
    ) -> ServiceRequestLifecycleResult<Vec<ServiceRequest>> {
        Ok(self.repository.find_by_provider(provider_name).await?)
    }
}

fn record(update: &StatusUpdate, target: RequestStatus) {
    let request_id = update.request.id();
    if update.applied() {
        info!(request_id = %request_id, status = %target, "service request status changed");
    } else {
        debug!(request_id = %request_id, status = %target, "status already recorded");
    }
}
