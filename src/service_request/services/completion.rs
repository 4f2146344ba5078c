//! Service layer for completion submission and background certification.

use crate::account::domain::UserRole;
use crate::service_request::{
    domain::{
        CompletionReport, RequestId, ServiceRequest, ServiceRequestDomainError, TransitionOutcome,
    },
    ports::{
        QualityInspectionError, QualityInspector, ServiceRequestRepository,
        ServiceRequestRepositoryError,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

/// Service-level errors for completion submission.
#[derive(Debug, Error)]
pub enum ServiceCompletionError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ServiceRequestDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(ServiceRequestRepositoryError),
    /// No request exists with the identifier.
    #[error("service request not found: {0}")]
    NotFound(RequestId),
}

impl From<ServiceRequestRepositoryError> for ServiceCompletionError {
    fn from(err: ServiceRequestRepositoryError) -> Self {
        match err {
            ServiceRequestRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for completion service operations.
pub type ServiceCompletionResult<T> = Result<T, ServiceCompletionError>;

/// Errors raised by the background certification task.
#[derive(Debug, Clone, Error)]
pub enum CertificationError {
    /// The inspector failed.
    #[error(transparent)]
    Inspection(#[from] QualityInspectionError),
    /// The outcome could not be applied.
    #[error(transparent)]
    Domain(#[from] ServiceRequestDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(ServiceRequestRepositoryError),
    /// The request disappeared before the outcome arrived.
    #[error("service request not found: {0}")]
    NotFound(RequestId),
    /// The background task panicked or was aborted by the runtime.
    #[error("certification task failed: {0}")]
    TaskFailed(Arc<JoinError>),
}

impl From<ServiceRequestRepositoryError> for CertificationError {
    fn from(err: ServiceRequestRepositoryError) -> Self {
        match err {
            ServiceRequestRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Handle to a running background certification.
///
/// Dropping the handle detaches the task; it still runs to completion.
#[derive(Debug)]
pub struct CertificationHandle {
    request_id: RequestId,
    task: JoinHandle<Result<ServiceRequest, CertificationError>>,
}

impl CertificationHandle {
    /// Returns the request being certified.
    #[must_use]
    pub const fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Returns `true` once the background task has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the certified request.
    ///
    /// # Errors
    ///
    /// Returns [`CertificationError`] when inspection or storage failed.
    pub async fn wait(self) -> Result<ServiceRequest, CertificationError> {
        self.task
            .await
            .map_err(|err| CertificationError::TaskFailed(Arc::new(err)))?
    }
}

/// Result of a completion submission.
#[derive(Debug)]
pub struct CompletionSubmission {
    /// The request as stored right after submission.
    pub request: ServiceRequest,
    /// Running certification, absent when completion was already recorded.
    pub certification: Option<CertificationHandle>,
}

/// Completion and certification orchestration service.
#[derive(Clone)]
pub struct ServiceCompletionService<R, Q, C>
where
    R: ServiceRequestRepository + 'static,
    Q: QualityInspector + 'static,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    inspector: Arc<Q>,
    clock: Arc<C>,
}

impl<R, Q, C> ServiceCompletionService<R, Q, C>
where
    R: ServiceRequestRepository + 'static,
    Q: QualityInspector + 'static,
    C: Clock + Send + Sync,
{
    /// Creates a new completion service.
    #[must_use]
    pub const fn new(repository: Arc<R>, inspector: Arc<Q>, clock: Arc<C>) -> Self {
        Self {
            repository,
            inspector,
            clock,
        }
    }

    /// Starts a completion report for the request's checklist.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceCompletionError::NotFound`] for unknown ids.
    pub async fn begin_completion(
        &self,
        id: &RequestId,
    ) -> ServiceCompletionResult<CompletionReport> {
        Ok(self.load(id).await?.begin_completion())
    }

    /// Submits the completion report and starts background certification.
    ///
    /// Must be called within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceCompletionError::Domain`] when the role, status or
    /// report is rejected, for example
    /// [`ServiceRequestDomainError::MissingPhotos`].
    pub async fn submit(
        &self,
        report: CompletionReport,
        role: UserRole,
    ) -> ServiceCompletionResult<CompletionSubmission> {
        let id = report.request_id().clone();
        let clock = &*self.clock;
        let (request, outcome) = self
            .repository
            .modify(&id, |request| {
                let outcome = request.complete(report, role, clock)?;
                Ok::<_, ServiceCompletionError>((request.clone(), outcome))
            })
            .await?;
        if outcome == TransitionOutcome::AlreadyRecorded {
            debug!(request_id = %id, "completion already recorded");
            return Ok(CompletionSubmission {
                request,
                certification: None,
            });
        }

        info!(request_id = %id, "service completed, certification scheduled");

        let task = tokio::spawn(certify(
            Arc::clone(&self.repository),
            Arc::clone(&self.inspector),
            request.clone(),
        ));
        Ok(CompletionSubmission {
            request,
            certification: Some(CertificationHandle {
                request_id: id,
                task,
            }),
        })
    }

    async fn load(&self, id: &RequestId) -> ServiceCompletionResult<ServiceRequest> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceCompletionError::NotFound(id.clone()))
    }
}

/// Runs the inspection and applies its outcome to the latest stored request.
async fn certify<R, Q>(
    repository: Arc<R>,
    inspector: Arc<Q>,
    submitted: ServiceRequest,
) -> Result<ServiceRequest, CertificationError>
where
    R: ServiceRequestRepository,
    Q: QualityInspector,
{
    let result = apply_inspection(&*repository, &*inspector, &submitted).await;
    match &result {
        Ok(request) => info!(
            request_id = %request.id(),
            veritas_status = %request.veritas_status(),
            "service request certified"
        ),
        Err(err) => warn!(request_id = %submitted.id(), error = %err, "certification failed"),
    }
    result
}

async fn apply_inspection<R, Q>(
    repository: &R,
    inspector: &Q,
    submitted: &ServiceRequest,
) -> Result<ServiceRequest, CertificationError>
where
    R: ServiceRequestRepository,
    Q: QualityInspector,
{
    let outcome = inspector.inspect(submitted).await?;
    repository
        .modify(submitted.id(), |latest| {
            latest.apply_certification(&outcome)?;
            Ok::<_, CertificationError>(latest.clone())
        })
        .await
}
