//! Domain model for service requests.

mod assignment;
mod certification;
mod chat;
mod checklist;
mod completion;
mod error;
mod ids;
mod request;
mod status;

pub use assignment::{CrewMember, ProviderAssignment};
pub use certification::CertificationOutcome;
pub use chat::{ChatMessage, MessageSender};
pub use checklist::{ChecklistItem, ChecklistItemKey, ChecklistItemStatus, PhotoRef, PhotoSlot};
pub use completion::CompletionReport;
pub use error::{
    ParseChecklistItemKeyError, ParseRequestStatusError, ParseUrgencyError,
    ParseVeritasStatusError, ServiceRequestDomainError,
};
pub use ids::{MessageId, RequestId};
pub use request::{
    PersistedServiceRequestData, RequestDetails, ServiceRequest, StatusChange, TransitionOutcome,
};
pub use status::{RequestStatus, Urgency, VeritasStatus};
