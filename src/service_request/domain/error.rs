//! Error types for service request validation and parsing.

use super::{ChecklistItemKey, RequestId, RequestStatus};
use crate::account::domain::UserRole;
use thiserror::Error;

/// Errors returned while constructing or mutating service requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceRequestDomainError {
    /// The request identifier is blank or contains whitespace.
    #[error("invalid request identifier '{0}'")]
    InvalidRequestId(String),

    /// The message identifier is blank or contains whitespace.
    #[error("invalid message identifier '{0}'")]
    InvalidMessageId(String),

    /// One or more required form fields were blank.
    #[error("required fields missing: {}", .0.join(", "))]
    RequiredFieldsMissing(Vec<&'static str>),

    /// The scheduled date-time is not a `YYYY-MM-DDTHH:MM` value.
    #[error("invalid scheduled date-time '{0}'")]
    InvalidSchedule(String),

    /// The acting role may not move a request to the target status.
    #[error("{role} may not move a request to {target}")]
    ActionNotPermitted {
        /// Role of the acting user.
        role: UserRole,
        /// Requested target status.
        target: RequestStatus,
    },

    /// The target status is not reachable from the current status.
    #[error("invalid status transition for request {request_id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// Request identifier.
        request_id: RequestId,
        /// Current status.
        from: RequestStatus,
        /// Requested target status.
        to: RequestStatus,
    },

    /// The target status carries a payload and has its own operation.
    #[error("status {0} must be reached through its dedicated operation")]
    DedicatedOperationRequired(RequestStatus),

    /// The assigned provider name is blank.
    #[error("provider name must not be empty")]
    EmptyProviderName,

    /// The chat message text is blank.
    #[error("message text must not be empty")]
    EmptyMessage,

    /// A photo reference is blank.
    #[error("photo reference must not be empty")]
    EmptyPhotoReference,

    /// The checklist item is not part of the request's checklist.
    #[error("checklist item {0} is not part of this request")]
    UnknownChecklistItem(ChecklistItemKey),

    /// The completion report does not match the request's checklist.
    #[error("completion report does not match the checklist of request {0}")]
    ChecklistMismatch(RequestId),

    /// Checklist items are missing a before or after photo.
    #[error("checklist items missing photos: {}", format_keys(.0))]
    MissingPhotos(Vec<ChecklistItemKey>),

    /// Certification arrived for a request that never reached completion.
    #[error("request {0} has not been completed")]
    NotCompleted(RequestId),

    /// Persisted history violates the lifecycle invariant.
    #[error("invalid history for request {request_id}: {reason}")]
    InvalidHistory {
        /// Request identifier.
        request_id: RequestId,
        /// Which rule was violated.
        reason: &'static str,
    },
}

fn format_keys(keys: &[ChecklistItemKey]) -> String {
    keys.iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error returned while parsing request statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown request status: {0}")]
pub struct ParseRequestStatusError(pub String);

/// Error returned while parsing veritas statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown veritas status: {0}")]
pub struct ParseVeritasStatusError(pub String);

/// Error returned while parsing urgency levels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown urgency: {0}")]
pub struct ParseUrgencyError(pub String);

/// Error returned while parsing checklist item keys.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown checklist item: {0}")]
pub struct ParseChecklistItemKeyError(pub String);
