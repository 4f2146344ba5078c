//! In-memory integration tests for invoicing and payment.

use std::sync::Arc;
use std::time::Duration;

use super::helpers::{RequestServices, services};
use jetcare::{
    account::domain::UserRole,
    billing::{
        adapters::{SimulatedPaymentGateway, memory::InMemoryInvoiceRepository},
        domain::InvoiceStatus,
        services::BillingService,
    },
    fleet::domain::NewAircraft,
    money::Money,
    service_request::{
        domain::{ProviderAssignment, ServiceRequest},
        services::CreateServiceRequestRequest,
    },
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestBilling = BillingService<InMemoryInvoiceRepository, SimulatedPaymentGateway, DefaultClock>;

#[fixture]
fn billing() -> TestBilling {
    BillingService::new(
        Arc::new(InMemoryInvoiceRepository::new()),
        Arc::new(SimulatedPaymentGateway::new(Duration::ZERO, "Visa **** 4242")),
        Arc::new(DefaultClock),
    )
}

async fn completed_request(
    services: &RequestServices,
    jet_id: &str,
    cost: u64,
) -> Result<ServiceRequest, eyre::Report> {
    let created = services
        .lifecycle
        .create(CreateServiceRequestRequest::new(
            jet_id,
            "Exterior Cleaning",
            "EBBR",
            "2024-09-20T09:00",
        ))
        .await?;
    let id = created.id().clone();
    services
        .lifecycle
        .assign_provider(
            &id,
            ProviderAssignment::new("CleanWings Inc.", Money::euros(cost)),
            UserRole::Operator,
        )
        .await?;
    let report = services.completion.begin_completion(&id).await?;
    let submission = services
        .completion
        .submit(report, UserRole::Provider)
        .await?;
    Ok(submission.request)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_work_is_invoiced_and_paid(
    services: RequestServices,
    billing: TestBilling,
) -> Result<(), eyre::Report> {
    let jet = services
        .fleet
        .add_aircraft(NewAircraft::new("Globe", "oo-glb", "Bombardier", "Global 7500"))
        .await?;
    let request = completed_request(&services, jet.id().as_str(), 4_200).await?;

    let invoice = billing.issue_invoice(&request, &jet).await?;
    eyre::ensure!(invoice.id().as_str() == "INV001");
    eyre::ensure!(invoice.jet_tail_number().as_str() == "OO-GLB");
    eyre::ensure!(invoice.status() == InvoiceStatus::Due);
    eyre::ensure!(billing.outstanding_total().await? == Money::euros(4_200));

    let paid = billing.pay_invoice(invoice.id()).await?;
    eyre::ensure!(paid.status() == InvoiceStatus::Paid);
    let receipt = paid
        .receipt()
        .ok_or_else(|| eyre::eyre!("paid invoice should carry a receipt"))?;
    eyre::ensure!(receipt.payment_method == "Visa **** 4242");
    eyre::ensure!(billing.outstanding_total().await? == Money::ZERO);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invoice_numbers_follow_issue_order(
    services: RequestServices,
    billing: TestBilling,
) -> Result<(), eyre::Report> {
    let jet = services
        .fleet
        .add_aircraft(NewAircraft::new("Phenom", "OO-PHN", "Embraer", "Phenom 300"))
        .await?;
    let mut issued = Vec::new();
    for cost in [1_000, 1_500, 2_000] {
        let request = completed_request(&services, jet.id().as_str(), cost).await?;
        let invoice = billing.issue_invoice(&request, &jet).await?;
        issued.push(invoice.id().as_str().to_owned());
    }

    eyre::ensure!(issued == ["INV001", "INV002", "INV003"]);
    eyre::ensure!(billing.outstanding_total().await? == Money::euros(4_500));
    let listed: Vec<String> = billing
        .list()
        .await?
        .iter()
        .map(|invoice| invoice.id().as_str().to_owned())
        .collect();
    eyre::ensure!(listed == issued);
    Ok(())
}
