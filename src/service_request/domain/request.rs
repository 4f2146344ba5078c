//! Service request aggregate root and its lifecycle state machine.

use super::{
    CertificationOutcome, ChatMessage, ChecklistItem, CompletionReport, CrewMember,
    MessageSender, ProviderAssignment, RequestId, RequestStatus, ServiceRequestDomainError,
    Urgency, VeritasStatus,
};
use crate::account::domain::UserRole;
use crate::fleet::domain::JetId;
use crate::money::Money;
use chrono::{DateTime, NaiveDateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One entry of a request's status history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    status: RequestStatus,
    timestamp: DateTime<Utc>,
}

impl StatusChange {
    /// Creates a history entry.
    #[must_use]
    pub const fn new(status: RequestStatus, timestamp: DateTime<Utc>) -> Self {
        Self { status, timestamp }
    }

    /// Returns the status reached.
    #[must_use]
    pub const fn status(&self) -> RequestStatus {
        self.status
    }

    /// Returns when the status was reached.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Whether a transition changed the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The status was appended to the history.
    Applied,
    /// The status was already in the history; nothing changed.
    AlreadyRecorded,
}

/// Validated fields chosen by the client when submitting a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDetails {
    /// Jet to be serviced.
    pub jet_id: JetId,
    /// Requested service, for example "Exterior Cleaning".
    pub service_type: String,
    /// Airport where the service takes place.
    pub location: String,
    /// Local date and time of the appointment.
    pub scheduled_at: NaiveDateTime,
    /// Requested urgency.
    pub urgency: Urgency,
    /// Free-text instructions for the provider.
    pub special_instructions: Option<String>,
}

/// Service request aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    id: RequestId,
    details: RequestDetails,
    status: RequestStatus,
    provider: Option<String>,
    cost: Option<Money>,
    veritas_status: VeritasStatus,
    checklist: Vec<ChecklistItem>,
    crew: Vec<CrewMember>,
    messages: Vec<ChatMessage>,
    history: Vec<StatusChange>,
}

/// Parameter object for reconstructing a stored request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedServiceRequestData {
    /// Stored identifier.
    pub id: RequestId,
    /// Submission details.
    pub details: RequestDetails,
    /// Assigned provider name.
    pub provider: Option<String>,
    /// Agreed cost.
    pub cost: Option<Money>,
    /// Quality-certification flag.
    pub veritas_status: VeritasStatus,
    /// Checklist items.
    pub checklist: Vec<ChecklistItem>,
    /// Crew members.
    pub crew: Vec<CrewMember>,
    /// Chat messages in posting order.
    pub messages: Vec<ChatMessage>,
    /// Status history in chronological order.
    pub history: Vec<StatusChange>,
}

impl ServiceRequest {
    /// Creates a freshly submitted request.
    #[must_use]
    pub fn new(details: RequestDetails, clock: &impl Clock) -> Self {
        Self {
            id: RequestId::generate(),
            details,
            status: RequestStatus::Requested,
            provider: None,
            cost: None,
            veritas_status: VeritasStatus::Pending,
            checklist: Vec::new(),
            crew: Vec::new(),
            messages: Vec::new(),
            history: vec![StatusChange::new(RequestStatus::Requested, clock.utc())],
        }
    }

    /// Reconstructs a request from stored data.
    ///
    /// The current status is taken from the last history entry.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestDomainError::InvalidHistory`] when the history
    /// is empty, does not start at `REQUESTED`, skips or repeats a status, or
    /// goes back in time.
    pub fn from_persisted(
        data: PersistedServiceRequestData,
    ) -> Result<Self, ServiceRequestDomainError> {
        let status = validate_history(&data.id, &data.history)?;
        Ok(Self {
            id: data.id,
            details: data.details,
            status,
            provider: data.provider,
            cost: data.cost,
            veritas_status: data.veritas_status,
            checklist: data.checklist,
            crew: data.crew,
            messages: data.messages,
            history: data.history,
        })
    }

    /// Returns the request identifier.
    #[must_use]
    pub const fn id(&self) -> &RequestId {
        &self.id
    }

    /// Returns the submission details.
    #[must_use]
    pub const fn details(&self) -> &RequestDetails {
        &self.details
    }

    /// Returns the serviced jet.
    #[must_use]
    pub const fn jet_id(&self) -> &JetId {
        &self.details.jet_id
    }

    /// Returns the requested service type.
    #[must_use]
    pub fn service_type(&self) -> &str {
        &self.details.service_type
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> RequestStatus {
        self.status
    }

    /// Returns the assigned provider name.
    #[must_use]
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    /// Returns the agreed cost.
    #[must_use]
    pub const fn cost(&self) -> Option<Money> {
        self.cost
    }

    /// Returns the quality-certification flag.
    #[must_use]
    pub const fn veritas_status(&self) -> VeritasStatus {
        self.veritas_status
    }

    /// Returns the checklist.
    #[must_use]
    pub fn checklist(&self) -> &[ChecklistItem] {
        &self.checklist
    }

    /// Returns the crew.
    #[must_use]
    pub fn crew(&self) -> &[CrewMember] {
        &self.crew
    }

    /// Returns chat messages in posting order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the status history in chronological order.
    #[must_use]
    pub fn history(&self) -> &[StatusChange] {
        &self.history
    }

    /// Returns when the request was submitted.
    #[must_use]
    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.history.first().map(StatusChange::timestamp)
    }

    /// Returns when `status` was reached, if it was.
    #[must_use]
    pub fn reached_at(&self, status: RequestStatus) -> Option<DateTime<Utc>> {
        self.history
            .iter()
            .find(|change| change.status == status)
            .map(StatusChange::timestamp)
    }

    /// Returns `true` when `status` is in the history.
    #[must_use]
    pub fn has_reached(&self, status: RequestStatus) -> bool {
        self.reached_at(status).is_some()
    }

    /// Moves the request to a payload-free status.
    ///
    /// Handles `IN_PROGRESS`, `APPROVED` and `CANCELLED`. Targets already in
    /// the history are left untouched and reported as
    /// [`TransitionOutcome::AlreadyRecorded`].
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestDomainError::DedicatedOperationRequired`] for
    /// `ASSIGNED` and `COMPLETED`,
    /// [`ServiceRequestDomainError::ActionNotPermitted`] when the role may
    /// not perform the transition, and
    /// [`ServiceRequestDomainError::InvalidStatusTransition`] when the target
    /// does not follow the current status.
    pub fn transition_to(
        &mut self,
        target: RequestStatus,
        role: UserRole,
        clock: &impl Clock,
    ) -> Result<TransitionOutcome, ServiceRequestDomainError> {
        if matches!(target, RequestStatus::Assigned | RequestStatus::Completed) {
            return Err(ServiceRequestDomainError::DedicatedOperationRequired(target));
        }
        if self.guard_transition(target, role)? == TransitionOutcome::AlreadyRecorded {
            return Ok(TransitionOutcome::AlreadyRecorded);
        }
        self.record(target, clock.utc());
        Ok(TransitionOutcome::Applied)
    }

    /// Assigns a provider and moves the request to `ASSIGNED`.
    ///
    /// Sets provider name, cost and crew, and replaces the checklist with
    /// pending items for the chosen keys.
    ///
    /// # Errors
    ///
    /// Returns the same transition errors as [`Self::transition_to`] and
    /// [`ServiceRequestDomainError::EmptyProviderName`] when the provider
    /// name is blank.
    pub fn assign_provider(
        &mut self,
        assignment: ProviderAssignment,
        role: UserRole,
        clock: &impl Clock,
    ) -> Result<TransitionOutcome, ServiceRequestDomainError> {
        let outcome = self.guard_transition(RequestStatus::Assigned, role)?;
        if outcome == TransitionOutcome::AlreadyRecorded {
            return Ok(TransitionOutcome::AlreadyRecorded);
        }
        let (provider_name, cost, crew, checklist) = assignment.into_parts();
        let provider = provider_name.trim();
        if provider.is_empty() {
            return Err(ServiceRequestDomainError::EmptyProviderName);
        }

        self.provider = Some(provider.to_owned());
        self.cost = Some(cost);
        self.crew = crew;
        self.checklist = checklist.into_iter().map(ChecklistItem::pending).collect();
        self.record(RequestStatus::Assigned, clock.utc());
        Ok(TransitionOutcome::Applied)
    }

    /// Starts a completion report from the current checklist.
    #[must_use]
    pub fn begin_completion(&self) -> CompletionReport {
        CompletionReport::new(self.id.clone(), self.checklist.clone())
    }

    /// Submits the completion report and moves the request to `COMPLETED`.
    ///
    /// When the request is still `ASSIGNED`, `IN_PROGRESS` is recorded first
    /// with the same timestamp. The checklist is replaced by the report's
    /// items; the veritas status stays pending until certification.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestDomainError::ActionNotPermitted`] for
    /// non-providers, [`ServiceRequestDomainError::InvalidStatusTransition`]
    /// unless the request is `ASSIGNED` or `IN_PROGRESS`,
    /// [`ServiceRequestDomainError::ChecklistMismatch`] when the report
    /// belongs to another request or checklist, and
    /// [`ServiceRequestDomainError::MissingPhotos`] when any item lacks a
    /// photo.
    pub fn complete(
        &mut self,
        report: CompletionReport,
        role: UserRole,
        clock: &impl Clock,
    ) -> Result<TransitionOutcome, ServiceRequestDomainError> {
        if self.has_reached(RequestStatus::Completed) {
            return Ok(TransitionOutcome::AlreadyRecorded);
        }
        if !RequestStatus::Completed.is_permitted_for(role) {
            return Err(ServiceRequestDomainError::ActionNotPermitted {
                role,
                target: RequestStatus::Completed,
            });
        }
        if !matches!(
            self.status,
            RequestStatus::Assigned | RequestStatus::InProgress
        ) {
            return Err(self.invalid_transition(RequestStatus::Completed));
        }
        if report.request_id() != &self.id || !report.matches_checklist(&self.checklist) {
            return Err(ServiceRequestDomainError::ChecklistMismatch(self.id.clone()));
        }
        let missing = report.missing_photos();
        if !missing.is_empty() {
            return Err(ServiceRequestDomainError::MissingPhotos(missing));
        }

        let timestamp = clock.utc();
        self.checklist = report.into_items();
        if self.status == RequestStatus::Assigned {
            self.record(RequestStatus::InProgress, timestamp);
        }
        self.record(RequestStatus::Completed, timestamp);
        Ok(TransitionOutcome::Applied)
    }

    /// Applies a quality inspection result.
    ///
    /// Only the veritas status and checklist item statuses change; items
    /// not mentioned by the outcome keep their status.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestDomainError::NotCompleted`] when the request
    /// never reached `COMPLETED`.
    pub fn apply_certification(
        &mut self,
        outcome: &CertificationOutcome,
    ) -> Result<(), ServiceRequestDomainError> {
        if !self.has_reached(RequestStatus::Completed) {
            return Err(ServiceRequestDomainError::NotCompleted(self.id.clone()));
        }
        self.veritas_status = outcome.veritas_status();
        for item in &mut self.checklist {
            if let Some(status) = outcome.status_for(item.key()) {
                item.set_status(status);
            }
        }
        Ok(())
    }

    /// Appends a chat message posted by `role`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRequestDomainError::EmptyMessage`] when the text is
    /// blank.
    pub fn post_message(
        &mut self,
        role: UserRole,
        text: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<ChatMessage, ServiceRequestDomainError> {
        let message = ChatMessage::new(MessageSender::for_role(role), text, clock)?;
        self.messages.push(message.clone());
        Ok(message)
    }

    /// Checks idempotence, role and adjacency, in that order.
    fn guard_transition(
        &self,
        target: RequestStatus,
        role: UserRole,
    ) -> Result<TransitionOutcome, ServiceRequestDomainError> {
        if self.has_reached(target) {
            return Ok(TransitionOutcome::AlreadyRecorded);
        }
        if !target.is_permitted_for(role) {
            return Err(ServiceRequestDomainError::ActionNotPermitted { role, target });
        }
        if !self.status.can_transition_to(target) {
            return Err(self.invalid_transition(target));
        }
        Ok(TransitionOutcome::Applied)
    }

    fn invalid_transition(&self, target: RequestStatus) -> ServiceRequestDomainError {
        ServiceRequestDomainError::InvalidStatusTransition {
            request_id: self.id.clone(),
            from: self.status,
            to: target,
        }
    }

    fn record(&mut self, status: RequestStatus, timestamp: DateTime<Utc>) {
        self.history.push(StatusChange::new(status, timestamp));
        self.status = status;
    }
}

fn validate_history(
    request_id: &RequestId,
    history: &[StatusChange],
) -> Result<RequestStatus, ServiceRequestDomainError> {
    let invalid = |reason: &'static str| ServiceRequestDomainError::InvalidHistory {
        request_id: request_id.clone(),
        reason,
    };
    let Some(first) = history.first() else {
        return Err(invalid("history is empty"));
    };
    if first.status != RequestStatus::Requested {
        return Err(invalid("history must start at REQUESTED"));
    }
    for pair in history.windows(2) {
        let [previous, current] = pair else {
            continue;
        };
        if !previous.status.can_transition_to(current.status) {
            return Err(invalid("history skips or repeats a status"));
        }
        if current.timestamp < previous.timestamp {
            return Err(invalid("history goes back in time"));
        }
    }
    Ok(history.last().map_or(first.status, StatusChange::status))
}
