//! Then steps for service request lifecycle BDD scenarios.

use super::world::{LifecycleWorld, run_async};
use jetcare::{
    marketplace::MarketplaceError,
    service_request::{
        domain::{RequestId, RequestStatus, ServiceRequestDomainError, VeritasStatus},
        services::{ServiceCompletionError, ServiceRequestLifecycleError},
    },
};
use rstest_bdd_macros::then;

#[then(r#"request "{request_id}" has status "{status}""#)]
fn request_has_status(
    world: &LifecycleWorld,
    request_id: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = RequestStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let id = RequestId::new(request_id)?;
    let request = run_async(world.marketplace()?.request(&id))?
        .ok_or_else(|| eyre::eyre!("request {id} not found"))?;

    if request.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            request.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"request "{request_id}" has veritas status "{status}""#)]
fn request_has_veritas_status(
    world: &LifecycleWorld,
    request_id: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = VeritasStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected veritas status in scenario: {err}"))?;
    let id = RequestId::new(request_id)?;
    let request = run_async(world.marketplace()?.request(&id))?
        .ok_or_else(|| eyre::eyre!("request {id} not found"))?;

    if request.veritas_status() != expected {
        return Err(eyre::eyre!(
            "expected veritas status {expected}, found {}",
            request.veritas_status()
        ));
    }
    Ok(())
}

#[then(r#"the newest notification reads "{text}""#)]
fn newest_notification_reads(world: &LifecycleWorld, text: String) -> Result<(), eyre::Report> {
    let feed = run_async(world.marketplace()?.notifications())?;
    let newest = feed
        .first()
        .ok_or_else(|| eyre::eyre!("notification feed is empty"))?;

    if newest.text() != text {
        return Err(eyre::eyre!(
            "expected newest notification '{text}', found '{}'",
            newest.text()
        ));
    }
    Ok(())
}

#[then("the completion is rejected for missing photos")]
fn completion_rejected_for_missing_photos(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_completion_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing completion result"))?;

    if !matches!(
        result,
        Err(MarketplaceError::Completion(ServiceCompletionError::Domain(
            ServiceRequestDomainError::MissingPhotos(_)
        )))
    ) {
        return Err(eyre::eyre!("expected missing photos error, got {result:?}"));
    }
    Ok(())
}

#[then("the transition is refused for the user's role")]
fn transition_refused_for_role(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if !matches!(
        result,
        Err(MarketplaceError::Lifecycle(ServiceRequestLifecycleError::Domain(
            ServiceRequestDomainError::ActionNotPermitted { .. }
        )))
    ) {
        return Err(eyre::eyre!("expected action not permitted error, got {result:?}"));
    }
    Ok(())
}

#[then("the transition succeeds")]
fn transition_succeeds(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if let Err(err) = result {
        return Err(eyre::eyre!("expected transition to succeed, got {err}"));
    }
    Ok(())
}

#[then("the notification feed is unchanged")]
fn notification_feed_unchanged(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let feed = run_async(world.marketplace()?.notifications())?;
    let ids: Vec<&str> = feed.iter().map(|entry| entry.id().as_str()).collect();
    let before: Vec<&str> = world
        .feed_before
        .iter()
        .map(|entry| entry.id().as_str())
        .collect();

    if ids != before {
        return Err(eyre::eyre!("expected feed {before:?}, found {ids:?}"));
    }
    Ok(())
}
