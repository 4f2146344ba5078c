//! In-memory integration tests for the request lifecycle.

use super::helpers::{RequestServices, services};
use jetcare::{
    account::domain::UserRole,
    fleet::domain::NewAircraft,
    money::Money,
    service_request::{
        domain::{
            ChecklistItemKey, ChecklistItemStatus, PhotoRef, ProviderAssignment, RequestStatus,
            VeritasStatus,
        },
        services::{CreateServiceRequestRequest, ServiceRequestLifecycleError},
    },
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn request_walks_from_submission_to_approval(
    services: RequestServices,
) -> Result<(), eyre::Report> {
    let jet = services
        .fleet
        .add_aircraft(NewAircraft::new("Falcon", "OO-FAL", "Dassault", "Falcon 7X"))
        .await?;
    let created = services
        .lifecycle
        .create(CreateServiceRequestRequest::new(
            jet.id().as_str(),
            "Exterior Cleaning",
            "EBBR",
            "2024-09-10T08:30",
        ))
        .await?;
    let id = created.id().clone();

    let assignment = ProviderAssignment::new("CleanWings Inc.", Money::euros(2_100))
        .with_checklist([ChecklistItemKey::ExteriorWash, ChecklistItemKey::LandingGear]);
    services
        .lifecycle
        .assign_provider(&id, assignment, UserRole::Operator)
        .await?;
    services
        .lifecycle
        .start_work(&id, UserRole::Provider)
        .await?;

    let mut report = services.completion.begin_completion(&id).await?;
    for key in [ChecklistItemKey::ExteriorWash, ChecklistItemKey::LandingGear] {
        report.attach_photos(
            key,
            PhotoRef::new(format!("{key}-before.jpg"))?,
            PhotoRef::new(format!("{key}-after.jpg"))?,
        )?;
    }
    let submission = services
        .completion
        .submit(report, UserRole::Provider)
        .await?;
    let certification = submission
        .certification
        .ok_or_else(|| eyre::eyre!("certification should be scheduled"))?;
    let certified = certification.wait().await?;
    eyre::ensure!(certified.veritas_status() == VeritasStatus::Certified);
    eyre::ensure!(
        certified
            .checklist()
            .iter()
            .all(|item| item.status() == ChecklistItemStatus::Approved),
        "every item should pass without a flagged index"
    );

    let approved = services.lifecycle.approve(&id, UserRole::Client).await?;
    let statuses: Vec<RequestStatus> = approved
        .history()
        .iter()
        .map(|change| change.status())
        .collect();
    eyre::ensure!(
        statuses
            == [
                RequestStatus::Requested,
                RequestStatus::Assigned,
                RequestStatus::InProgress,
                RequestStatus::Completed,
                RequestStatus::Approved,
            ]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn provider_listing_follows_assignments(
    services: RequestServices,
) -> Result<(), eyre::Report> {
    let mut ids = Vec::new();
    for location in ["EBBR", "EBAW", "EBLG"] {
        let created = services
            .lifecycle
            .create(CreateServiceRequestRequest::new(
                "jet-1",
                "Interior Cleaning",
                location,
                "2024-09-12T10:00",
            ))
            .await?;
        ids.push(created.id().clone());
    }
    for id in ids.iter().take(2) {
        services
            .lifecycle
            .assign_provider(
                id,
                ProviderAssignment::new("AeroShine Belgium", Money::euros(900)),
                UserRole::Operator,
            )
            .await?;
    }

    let queue = services
        .lifecycle
        .list_for_provider("AeroShine Belgium")
        .await?;
    eyre::ensure!(queue.len() == 2, "expected two assigned requests");
    eyre::ensure!(
        queue
            .iter()
            .all(|request| request.provider() == Some("AeroShine Belgium"))
    );
    eyre::ensure!(services.lifecycle.list().await?.len() == 3);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_request_rejects_further_work(
    services: RequestServices,
) -> Result<(), eyre::Report> {
    let created = services
        .lifecycle
        .create(CreateServiceRequestRequest::new(
            "jet-2",
            "Deep Cleaning",
            "EBCI",
            "2024-09-15T07:00",
        ))
        .await?;
    let id = created.id().clone();

    let cancelled = services.lifecycle.cancel(&id, UserRole::Client).await?;
    eyre::ensure!(cancelled.status() == RequestStatus::Cancelled);

    let result = services.lifecycle.start_work(&id, UserRole::Provider).await;
    eyre::ensure!(
        matches!(result, Err(ServiceRequestLifecycleError::Domain(_))),
        "cancelled requests must not restart"
    );
    let stored = services
        .lifecycle
        .find(&id)
        .await?
        .ok_or_else(|| eyre::eyre!("request should still be stored"))?;
    eyre::ensure!(stored.status() == RequestStatus::Cancelled);
    Ok(())
}
