//! Quality inspection port for completed requests.

use crate::service_request::domain::{CertificationOutcome, RequestId, ServiceRequest};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for quality inspection.
pub type QualityInspectionResult<T> = Result<T, QualityInspectionError>;

/// External collaborator certifying completed work.
#[async_trait]
pub trait QualityInspector: Send + Sync {
    /// Inspects a completed request and reports the verdict.
    ///
    /// # Errors
    ///
    /// Returns [`QualityInspectionError`] when the inspection cannot be
    /// carried out.
    async fn inspect(
        &self,
        request: &ServiceRequest,
    ) -> QualityInspectionResult<CertificationOutcome>;
}

/// Errors returned by quality inspector adapters.
#[derive(Debug, Clone, Error)]
pub enum QualityInspectionError {
    /// The inspector refused the request.
    #[error("inspection rejected for request {request_id}: {reason}")]
    Rejected {
        /// Request identifier.
        request_id: RequestId,
        /// Reason string.
        reason: String,
    },

    /// Generic runtime failure.
    #[error("quality inspector runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl QualityInspectionError {
    /// Wraps a runtime error from the inspector adapter.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
