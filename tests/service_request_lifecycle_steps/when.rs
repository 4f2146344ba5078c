//! When steps for service request lifecycle BDD scenarios.

use super::world::{LifecycleWorld, run_async};
use eyre::WrapErr;
use jetcare::service_request::domain::{ChecklistItemKey, PhotoRef, RequestId};
use rstest_bdd_macros::when;

#[when(r#"the provider completes request "{request_id}" with photos for every item"#)]
fn complete_with_photos(
    world: &mut LifecycleWorld,
    request_id: String,
) -> Result<(), eyre::Report> {
    let id = RequestId::new(request_id)?;
    let marketplace = world.marketplace()?;
    let mut report =
        run_async(marketplace.begin_completion(&id)).wrap_err("begin completion report")?;
    let keys: Vec<ChecklistItemKey> = report.items().iter().map(|item| item.key()).collect();
    for key in keys {
        report.attach_photos(
            key,
            PhotoRef::new(format!("{key}-before.jpg"))?,
            PhotoRef::new(format!("{key}-after.jpg"))?,
        )?;
    }
    let mut result = run_async(marketplace.submit_completion(report, world.user()?));
    if let Ok(submission) = result.as_mut() {
        world.certification = submission.certification.take();
    }
    world.last_completion_result = Some(result);
    Ok(())
}

#[when(r#"the provider completes request "{request_id}" without photos"#)]
fn complete_without_photos(
    world: &mut LifecycleWorld,
    request_id: String,
) -> Result<(), eyre::Report> {
    let id = RequestId::new(request_id)?;
    let marketplace = world.marketplace()?;
    let report =
        run_async(marketplace.begin_completion(&id)).wrap_err("begin completion report")?;
    let result = run_async(marketplace.submit_completion(report, world.user()?));
    world.last_completion_result = Some(result);
    Ok(())
}

#[when(r#"the user starts work on request "{request_id}""#)]
fn start_work(world: &mut LifecycleWorld, request_id: String) -> Result<(), eyre::Report> {
    let id = RequestId::new(request_id)?;
    let result = run_async(world.marketplace()?.start_work(&id, world.user()?));
    world.last_transition_result = Some(result);
    Ok(())
}

#[when("certification finishes")]
fn certification_finishes(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let handle = world
        .certification
        .take()
        .ok_or_else(|| eyre::eyre!("missing certification handle in scenario world"))?;
    run_async(handle.wait()).wrap_err("wait for certification")?;
    Ok(())
}
