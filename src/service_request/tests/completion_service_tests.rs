//! Service orchestration tests for completion and background certification.

use std::sync::Arc;
use std::time::Duration;

use super::fixtures::{DEEP_CLEAN_ITEMS, request_at};
use crate::account::domain::UserRole;
use crate::service_request::{
    adapters::{SimulatedQualityInspector, memory::InMemoryServiceRequestRepository},
    domain::{
        CertificationOutcome, ChecklistItemKey, ChecklistItemStatus, CompletionReport, PhotoRef,
        RequestStatus, ServiceRequest, ServiceRequestDomainError, VeritasStatus,
    },
    ports::{
        QualityInspectionError, QualityInspectionResult, QualityInspector,
        ServiceRequestRepository,
    },
    services::{
        CertificationError, ServiceCompletionError, ServiceCompletionService,
        ServiceMessagingService,
    },
};
use async_trait::async_trait;
use eyre::{OptionExt, ensure};
use mockable::DefaultClock;
use mockall::mock;
use rstest::rstest;
use tokio::task::JoinSet;

mock! {
    Inspector {}

    #[async_trait]
    impl QualityInspector for Inspector {
        async fn inspect(
            &self,
            request: &ServiceRequest,
        ) -> QualityInspectionResult<CertificationOutcome>;
    }
}

fn evidenced(mut report: CompletionReport) -> eyre::Result<CompletionReport> {
    let keys: Vec<ChecklistItemKey> = report.items().iter().map(|item| item.key()).collect();
    for key in keys {
        report.attach_photos(
            key,
            PhotoRef::new(format!("before-{key}.jpg"))?,
            PhotoRef::new(format!("after-{key}.jpg"))?,
        )?;
    }
    Ok(report)
}

async fn seeded_repository() -> eyre::Result<Arc<InMemoryServiceRequestRepository>> {
    let repository = Arc::new(InMemoryServiceRequestRepository::new());
    repository
        .store(&request_at(RequestStatus::Assigned, &DEEP_CLEAN_ITEMS)?)
        .await?;
    Ok(repository)
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn assigned_deep_clean_is_completed_then_certified_after_delay() -> eyre::Result<()> {
    let repository = seeded_repository().await?;
    let service = ServiceCompletionService::new(
        Arc::clone(&repository),
        Arc::new(SimulatedQualityInspector::new(Duration::from_millis(2_500), Some(1))),
        Arc::new(DefaultClock),
    );
    let id = request_at(RequestStatus::Assigned, &[])?.id().clone();
    let started = tokio::time::Instant::now();

    let report = evidenced(service.begin_completion(&id).await?)?;
    let submission = service.submit(report, UserRole::Provider).await?;

    ensure!(submission.request.status() == RequestStatus::Completed);
    ensure!(submission.request.veritas_status() == VeritasStatus::Pending);
    let stored = repository.find_by_id(&id).await?.ok_or_eyre("request stored")?;
    ensure!(stored.veritas_status() == VeritasStatus::Pending);

    let handle = submission.certification.ok_or_eyre("certification scheduled")?;
    let certified = handle.wait().await?;

    ensure!(started.elapsed() >= Duration::from_millis(2_500));
    ensure!(certified.veritas_status() == VeritasStatus::Certified);
    let statuses: Vec<ChecklistItemStatus> =
        certified.checklist().iter().map(|item| item.status()).collect();
    ensure!(
        statuses
            == vec![
                ChecklistItemStatus::Approved,
                ChecklistItemStatus::Flagged,
                ChecklistItemStatus::Approved,
                ChecklistItemStatus::Approved,
                ChecklistItemStatus::Approved,
            ]
    );
    ensure!(repository.find_by_id(&id).await? == Some(certified));
    Ok(())
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn certification_preserves_changes_made_while_inspecting() -> eyre::Result<()> {
    let repository = seeded_repository().await?;
    let clock = Arc::new(DefaultClock);
    let service = ServiceCompletionService::new(
        Arc::clone(&repository),
        Arc::new(SimulatedQualityInspector::new(Duration::from_secs(5), Some(1))),
        Arc::clone(&clock),
    );
    let id = request_at(RequestStatus::Assigned, &[])?.id().clone();
    let report = evidenced(service.begin_completion(&id).await?)?;
    let handle = service
        .submit(report, UserRole::Provider)
        .await?
        .certification
        .ok_or_eyre("certification scheduled")?;

    repository
        .modify(&id, |approved| {
            approved.transition_to(RequestStatus::Approved, UserRole::Client, &*clock)?;
            approved.post_message(UserRole::Client, "Looks great.", &*clock)?;
            Ok::<_, eyre::Report>(())
        })
        .await?;

    let certified = handle.wait().await?;

    ensure!(certified.status() == RequestStatus::Approved);
    ensure!(certified.messages().len() == 1);
    ensure!(certified.veritas_status() == VeritasStatus::Certified);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn messages_posted_during_certification_survive() -> eyre::Result<()> {
    let repository = seeded_repository().await?;
    let clock = Arc::new(DefaultClock);
    let service = ServiceCompletionService::new(
        Arc::clone(&repository),
        Arc::new(SimulatedQualityInspector::new(Duration::from_millis(20), Some(1))),
        Arc::clone(&clock),
    );
    let messaging = Arc::new(ServiceMessagingService::new(Arc::clone(&repository), clock));
    let id = request_at(RequestStatus::Assigned, &[])?.id().clone();
    let report = evidenced(service.begin_completion(&id).await?)?;
    let handle = service
        .submit(report, UserRole::Provider)
        .await?
        .certification
        .ok_or_eyre("certification scheduled")?;

    let mut posts = JoinSet::new();
    for n in 0..20 {
        let chat = Arc::clone(&messaging);
        let request_id = id.clone();
        posts.spawn(async move {
            chat.post_message(&request_id, UserRole::Client, format!("Update {n}"))
                .await
        });
    }
    let certified = handle.wait().await?;
    while let Some(posted) = posts.join_next().await {
        posted??;
    }

    let stored = repository.find_by_id(&id).await?.ok_or_eyre("stored")?;
    ensure!(certified.veritas_status() == VeritasStatus::Certified);
    ensure!(stored.veritas_status() == VeritasStatus::Certified);
    ensure!(stored.messages().len() == 20);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_photos_block_submission() -> eyre::Result<()> {
    let repository = seeded_repository().await?;
    let service = ServiceCompletionService::new(
        Arc::clone(&repository),
        Arc::new(SimulatedQualityInspector::new(Duration::ZERO, Some(1))),
        Arc::new(DefaultClock),
    );
    let id = request_at(RequestStatus::Assigned, &[])?.id().clone();
    let report = service.begin_completion(&id).await?;

    let result = service.submit(report, UserRole::Provider).await;

    ensure!(matches!(
        result,
        Err(ServiceCompletionError::Domain(ServiceRequestDomainError::MissingPhotos(ref keys)))
            if keys.len() == DEEP_CLEAN_ITEMS.len()
    ));
    let stored = repository.find_by_id(&id).await?.ok_or_eyre("stored")?;
    ensure!(stored.status() == RequestStatus::Assigned);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inspector_failure_leaves_request_pending() -> eyre::Result<()> {
    let repository = seeded_repository().await?;
    let mut inspector = MockInspector::new();
    inspector.expect_inspect().times(1).returning(|_| {
        Err(QualityInspectionError::runtime(std::io::Error::other(
            "inspection backend offline",
        )))
    });
    let service = ServiceCompletionService::new(
        Arc::clone(&repository),
        Arc::new(inspector),
        Arc::new(DefaultClock),
    );
    let id = request_at(RequestStatus::Assigned, &[])?.id().clone();
    let report = evidenced(service.begin_completion(&id).await?)?;

    let handle = service
        .submit(report, UserRole::Provider)
        .await?
        .certification
        .ok_or_eyre("certification scheduled")?;
    let result = handle.wait().await;

    ensure!(matches!(result, Err(CertificationError::Inspection(_))));
    let stored = repository.find_by_id(&id).await?.ok_or_eyre("stored")?;
    ensure!(stored.status() == RequestStatus::Completed);
    ensure!(stored.veritas_status() == VeritasStatus::Pending);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resubmitting_a_completed_request_schedules_nothing() -> eyre::Result<()> {
    let repository = seeded_repository().await?;
    let mut inspector = MockInspector::new();
    inspector
        .expect_inspect()
        .times(1)
        .returning(|request| {
            Ok(CertificationOutcome::certified_with_flag(
                request.checklist(),
                None,
            ))
        });
    let service = ServiceCompletionService::new(
        Arc::clone(&repository),
        Arc::new(inspector),
        Arc::new(DefaultClock),
    );
    let id = request_at(RequestStatus::Assigned, &[])?.id().clone();

    let first = service
        .submit(evidenced(service.begin_completion(&id).await?)?, UserRole::Provider)
        .await?;
    if let Some(handle) = first.certification {
        handle.wait().await?;
    }
    let second = service
        .submit(evidenced(service.begin_completion(&id).await?)?, UserRole::Provider)
        .await?;

    ensure!(second.certification.is_none());
    ensure!(second.request.history().len() == 4);
    Ok(())
}
