//! Facade tests over the seeded demo marketplace.

use std::sync::Arc;
use std::time::Duration;

use crate::account::domain::{SignInRequest, User, UserRole};
use crate::billing::domain::{InvoiceId, InvoiceStatus};
use crate::config::MarketplaceConfig;
use crate::fleet::domain::NewAircraft;
use crate::i18n::Language;
use crate::marketplace::{Marketplace, MarketplaceError, StepState};
use crate::money::Money;
use crate::notification::domain::NotificationKind;
use crate::service_request::domain::{
    ChecklistItemKey, ChecklistItemStatus, PhotoRef, ProviderAssignment, RequestId,
    RequestStatus, VeritasStatus,
};
use crate::service_request::services::{CreateServiceRequestRequest, ServiceRequestLifecycleError};
use eyre::{OptionExt, ensure};
use mockable::DefaultClock;
use rstest::rstest;

async fn seeded(config: MarketplaceConfig) -> eyre::Result<Marketplace> {
    Ok(Marketplace::seeded(config, Arc::new(DefaultClock)).await?)
}

fn client() -> User {
    User::new("Belgian Wings", UserRole::Client)
}

fn operator() -> User {
    User::new("Admin Operator", UserRole::Operator)
}

fn provider() -> User {
    User::new("JetCare Specialists", UserRole::Provider)
}

async fn latest_feed_text(marketplace: &Marketplace) -> eyre::Result<String> {
    let feed = marketplace.notifications().await?;
    Ok(feed.first().ok_or_eyre("feed entry")?.text().to_owned())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_dashboard_reports_headline_figures() -> eyre::Result<()> {
    let marketplace = seeded(MarketplaceConfig::immediate()).await?;
    let summary = marketplace.dashboard_summary().await?;

    ensure!(summary.active_requests == 3);
    ensure!(summary.pending_actions == 0);
    ensure!(summary.fleet_size == 3);
    ensure!(summary.outstanding_invoices == 1);
    ensure!(summary.outstanding_total == Money::euros(3_200));
    ensure!(marketplace.unread_notifications().await? == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn provider_queue_lists_only_own_requests() -> eyre::Result<()> {
    let marketplace = seeded(MarketplaceConfig::immediate()).await?;
    let queue = marketplace.provider_queue(&provider()).await?;
    let ids: Vec<&str> = queue.iter().map(|request| request.id().as_str()).collect();
    ensure!(ids == ["req-3"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_in_resolves_demo_roles() -> eyre::Result<()> {
    let marketplace = seeded(MarketplaceConfig::immediate()).await?;
    let signed_in = marketplace.sign_in(&SignInRequest::new("provider@jetcare.com", "123544"))?;
    ensure!(signed_in.role() == UserRole::Provider);
    ensure!(
        marketplace
            .provider_queue(&signed_in)
            .await?
            .iter()
            .all(|request| request.provider() == Some(signed_in.name()))
    );

    let rejected = marketplace.sign_in(&SignInRequest::new("admin@jetcare.com", "wrong"));
    ensure!(matches!(rejected, Err(MarketplaceError::Account(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_request_for_unknown_jet_is_rejected() -> eyre::Result<()> {
    let marketplace = seeded(MarketplaceConfig::immediate()).await?;
    let form = CreateServiceRequestRequest::new(
        "jet-99",
        "Exterior Cleaning",
        "EBBR",
        "2024-09-01T10:00",
    );
    let result = marketplace.create_request(form).await;
    ensure!(matches!(result, Err(MarketplaceError::UnknownJet(_))));
    ensure!(marketplace.requests().await?.len() == 4);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn request_walks_to_approval_with_feed_entries() -> eyre::Result<()> {
    let marketplace = seeded(MarketplaceConfig::immediate()).await?;
    let created = marketplace
        .create_request(CreateServiceRequestRequest::new(
            "jet-2",
            "Interior Cleaning",
            "EBAW",
            "2024-09-01T10:00",
        ))
        .await?;
    let id = created.id().clone();
    ensure!(created.status() == RequestStatus::Requested);
    ensure!(latest_feed_text(&marketplace).await? == "New service request for OO-WIK.");

    let assignment = ProviderAssignment::new("JetCare Specialists", Money::euros(1_800))
        .with_checklist([ChecklistItemKey::CabinCleaned]);
    marketplace
        .assign_provider(&id, assignment, &operator())
        .await?;
    ensure!(
        latest_feed_text(&marketplace).await?
            == "JetCare Specialists has been assigned to OO-WIK."
    );

    marketplace.start_work(&id, &provider()).await?;
    ensure!(latest_feed_text(&marketplace).await? == "Service for OO-WIK has started.");

    let mut report = marketplace.begin_completion(&id).await?;
    report.attach_photos(
        ChecklistItemKey::CabinCleaned,
        PhotoRef::new("cabin-before.jpg")?,
        PhotoRef::new("cabin-after.jpg")?,
    )?;
    let submission = marketplace.submit_completion(report, &provider()).await?;
    ensure!(submission.request.status() == RequestStatus::Completed);
    let certification = submission.certification.ok_or_eyre("certification scheduled")?;
    certification.wait().await?;

    let approved = marketplace.approve(&id, &client()).await?;
    ensure!(approved.status() == RequestStatus::Approved);
    ensure!(approved.history().len() == 5);
    ensure!(
        latest_feed_text(&marketplace).await? == "Service for OO-WIK has been approved."
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_transition_pushes_no_second_notification() -> eyre::Result<()> {
    let marketplace = seeded(MarketplaceConfig::immediate()).await?;
    let id = RequestId::new("req-2")?;
    let before = marketplace.notifications().await?.len();

    let request = marketplace.start_work(&id, &provider()).await?;

    ensure!(request.history().len() == 3);
    ensure!(marketplace.notifications().await?.len() == before);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_starts_push_one_notification() -> eyre::Result<()> {
    let marketplace = Arc::new(seeded(MarketplaceConfig::immediate()).await?);
    let id = RequestId::new("req-3")?;
    let before = marketplace.notifications().await?.len();

    let mut starts = tokio::task::JoinSet::new();
    for _ in 0..8 {
        let shared = Arc::clone(&marketplace);
        let request_id = id.clone();
        starts.spawn(async move { shared.start_work(&request_id, &provider()).await });
    }
    while let Some(started) = starts.join_next().await {
        ensure!(started??.status() == RequestStatus::InProgress);
    }

    ensure!(marketplace.notifications().await?.len() == before + 1);
    ensure!(latest_feed_text(&marketplace).await? == "Service for OO-PRV has started.");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn role_gating_is_enforced_through_the_facade() -> eyre::Result<()> {
    let marketplace = seeded(MarketplaceConfig::immediate()).await?;
    let result = marketplace
        .start_work(&RequestId::new("req-3")?, &client())
        .await;
    ensure!(matches!(
        result,
        Err(MarketplaceError::Lifecycle(ServiceRequestLifecycleError::Domain(_)))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn deep_clean_is_certified_then_invoiced() -> eyre::Result<()> {
    let marketplace = seeded(MarketplaceConfig::default()).await?;
    let id = RequestId::new("req-3")?;

    let mut report = marketplace.begin_completion(&id).await?;
    ensure!(!report.is_submittable());
    let keys: Vec<ChecklistItemKey> = report.items().iter().map(|item| item.key()).collect();
    ensure!(keys.len() == 5);
    for key in keys {
        report.attach_photos(
            key,
            PhotoRef::new(format!("{key}-before.jpg"))?,
            PhotoRef::new(format!("{key}-after.jpg"))?,
        )?;
    }
    let started = tokio::time::Instant::now();
    let submission = marketplace.submit_completion(report, &provider()).await?;
    ensure!(submission.request.veritas_status() == VeritasStatus::Pending);
    ensure!(marketplace.dashboard_summary().await?.pending_actions == 1);

    let certified = submission
        .certification
        .ok_or_eyre("certification scheduled")?
        .wait()
        .await?;
    ensure!(started.elapsed() >= Duration::from_millis(2_500));
    ensure!(certified.veritas_status() == VeritasStatus::Certified);
    let statuses: Vec<ChecklistItemStatus> =
        certified.checklist().iter().map(|item| item.status()).collect();
    ensure!(
        statuses
            == [
                ChecklistItemStatus::Approved,
                ChecklistItemStatus::Flagged,
                ChecklistItemStatus::Approved,
                ChecklistItemStatus::Approved,
                ChecklistItemStatus::Approved,
            ]
    );

    let timeline = marketplace.timeline(&id).await?;
    let completed = timeline
        .iter()
        .find(|step| step.status == RequestStatus::Completed)
        .ok_or_eyre("completed step")?;
    ensure!(completed.state == StepState::Active);

    let invoice = marketplace.issue_invoice(&id).await?;
    ensure!(invoice.id().as_str() == "INV003");
    ensure!(invoice.amount() == Money::euros(5_500));
    ensure!(invoice.jet_tail_number().as_str() == "OO-PRV");
    let feed = marketplace.notifications().await?;
    let newest = feed.first().ok_or_eyre("feed entry")?;
    ensure!(newest.kind() == NotificationKind::Invoice);
    ensure!(newest.text() == "Invoice #INV003 for OO-PRV is available.");
    Ok(())
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn paying_inv002_settles_it_after_two_seconds() -> eyre::Result<()> {
    let marketplace = seeded(MarketplaceConfig::default()).await?;
    let id = InvoiceId::new("INV002")?;
    let started = tokio::time::Instant::now();

    let paid = marketplace.pay_invoice(&id).await?;

    ensure!(started.elapsed() >= Duration::from_secs(2));
    ensure!(started.elapsed() < Duration::from_secs(3));
    ensure!(paid.status() == InvoiceStatus::Paid);
    let receipt = paid.receipt().ok_or_eyre("receipt")?;
    ensure!(!receipt.transaction_id.is_empty());
    ensure!(marketplace.outstanding_total().await? == Money::ZERO);
    ensure!(
        latest_feed_text(&marketplace).await? == "Invoice #INV002 of €3.200 has been paid."
    );

    let again = marketplace.pay_invoice(&id).await;
    ensure!(matches!(again, Err(MarketplaceError::Billing(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn added_aircraft_can_receive_requests() -> eyre::Result<()> {
    let marketplace = seeded(MarketplaceConfig::immediate()).await?;
    let jet = marketplace
        .add_aircraft(NewAircraft::new("Citation", "oo-cit", "Cessna", "Citation"))
        .await?;
    ensure!(jet.tail_number().as_str() == "OO-CIT");
    ensure!(marketplace.jets().await?.len() == 4);

    let request = marketplace
        .create_request(CreateServiceRequestRequest::new(
            jet.id().as_str(),
            "Exterior Cleaning",
            "EBCI",
            "2024-09-02T08:00",
        ))
        .await?;
    ensure!(request.jet_id() == jet.id());
    ensure!(latest_feed_text(&marketplace).await? == "New service request for OO-CIT.");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn feed_can_be_marked_read() -> eyre::Result<()> {
    let marketplace = seeded(MarketplaceConfig::immediate()).await?;
    ensure!(marketplace.mark_all_notifications_read().await? == 2);
    ensure!(marketplace.unread_notifications().await? == 0);

    marketplace
        .post_message(&RequestId::new("req-3")?, &provider(), "Crew arriving at 17:30.")
        .await?;
    ensure!(marketplace.unread_notifications().await? == 1);
    ensure!(
        latest_feed_text(&marketplace).await? == "New message from JetCare Specialists."
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn translations_follow_the_session_language() -> eyre::Result<()> {
    let mut marketplace = seeded(MarketplaceConfig::immediate()).await?;
    ensure!(marketplace.language() == Language::En);
    marketplace.set_language(Language::Nl);
    ensure!(marketplace.translate("dashboard.welcome", &["John"]) == "Welkom terug, John!");
    ensure!(marketplace.translate("no.such.key", &[]) == "no.such.key");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn feed_entries_follow_the_session_language() -> eyre::Result<()> {
    let mut marketplace = seeded(MarketplaceConfig::immediate()).await?;
    marketplace.set_language(Language::Nl);

    marketplace
        .start_work(&RequestId::new("req-3")?, &provider())
        .await?;
    ensure!(latest_feed_text(&marketplace).await? == "Service voor OO-PRV is gestart.");

    marketplace.set_language(Language::De);
    marketplace
        .post_message(&RequestId::new("req-3")?, &client(), "Danke!")
        .await?;
    ensure!(latest_feed_text(&marketplace).await? == "Neue Nachricht von Belgian Wings.");
    Ok(())
}
