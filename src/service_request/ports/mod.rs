//! Port contracts for service requests.

mod inspector;
mod repository;

pub use inspector::{QualityInspectionError, QualityInspectionResult, QualityInspector};
pub use repository::{
    ServiceRequestRepository, ServiceRequestRepositoryError, ServiceRequestRepositoryResult,
};
