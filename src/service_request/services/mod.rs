//! Orchestration services for service requests.

mod completion;
mod lifecycle;
mod messaging;

pub use completion::{
    CertificationError, CertificationHandle, CompletionSubmission, ServiceCompletionError,
    ServiceCompletionResult, ServiceCompletionService,
};
pub use lifecycle::{
    CreateServiceRequestRequest, ServiceRequestLifecycleError, ServiceRequestLifecycleResult,
    ServiceRequestLifecycleService, StatusUpdate,
};
pub use messaging::{ServiceMessagingError, ServiceMessagingResult, ServiceMessagingService};
