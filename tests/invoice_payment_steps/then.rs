//! Then steps for invoice payment BDD scenarios.

use super::world::{InvoiceWorld, run_async};
use jetcare::{
    billing::{
        domain::{BillingDomainError, Invoice, InvoiceId, InvoiceStatus},
        ports::InvoiceRepositoryError,
        services::BillingServiceError,
    },
    marketplace::MarketplaceError,
    money::Money,
};
use rstest_bdd_macros::then;

fn stored_invoice(world: &InvoiceWorld, invoice_id: String) -> Result<Invoice, eyre::Report> {
    let id = InvoiceId::new(invoice_id)?;
    run_async(world.marketplace()?.invoice(&id))?
        .ok_or_else(|| eyre::eyre!("invoice {id} not found"))
}

#[then("the payment succeeds")]
fn payment_succeeds(world: &InvoiceWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_payment_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing payment result"))?;

    if let Err(err) = result {
        return Err(eyre::eyre!("expected payment to succeed, got {err}"));
    }
    Ok(())
}

#[then("the payment is refused because the invoice is not payable")]
fn payment_refused(world: &InvoiceWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_payment_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing payment result"))?;

    if !matches!(
        result,
        Err(MarketplaceError::Billing(BillingServiceError::Domain(
            BillingDomainError::InvoiceNotPayable { .. }
        )))
    ) {
        return Err(eyre::eyre!("expected invoice not payable error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"invoice "{invoice_id}" has status "{status}""#)]
fn invoice_has_status(
    world: &InvoiceWorld,
    invoice_id: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = InvoiceStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected invoice status in scenario: {err}"))?;
    let invoice = stored_invoice(world, invoice_id)?;

    if invoice.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            invoice.status()
        ));
    }
    Ok(())
}

#[then(r#"invoice "{invoice_id}" carries a transaction id"#)]
fn invoice_has_transaction_id(
    world: &InvoiceWorld,
    invoice_id: String,
) -> Result<(), eyre::Report> {
    let invoice = stored_invoice(world, invoice_id)?;
    let receipt = invoice
        .receipt()
        .ok_or_else(|| eyre::eyre!("invoice {} has no receipt", invoice.id()))?;

    if !receipt.transaction_id.starts_with("ch_") {
        return Err(eyre::eyre!(
            "unexpected transaction id {}",
            receipt.transaction_id
        ));
    }
    Ok(())
}

#[then("the outstanding total is {euros:u64} euros")]
fn outstanding_total_is(world: &InvoiceWorld, euros: u64) -> Result<(), eyre::Report> {
    let total = run_async(world.marketplace()?.outstanding_total())?;

    if total != Money::euros(euros) {
        return Err(eyre::eyre!("expected outstanding total {euros}, found {total}"));
    }
    Ok(())
}

#[then("invoicing is refused because the request is not completed")]
fn invoicing_refused_not_completed(world: &InvoiceWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_issue_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing invoicing result"))?;

    if !matches!(
        result,
        Err(MarketplaceError::Billing(BillingServiceError::Domain(
            BillingDomainError::RequestNotCompleted(_)
        )))
    ) {
        return Err(eyre::eyre!("expected request not completed error, got {result:?}"));
    }
    Ok(())
}

#[then("invoicing is refused because the request was already billed")]
fn invoicing_refused_already_billed(world: &InvoiceWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_issue_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing invoicing result"))?;

    if !matches!(
        result,
        Err(MarketplaceError::Billing(BillingServiceError::Repository(
            InvoiceRepositoryError::AlreadyInvoiced(_)
        )))
    ) {
        return Err(eyre::eyre!("expected already invoiced error, got {result:?}"));
    }
    Ok(())
}

#[then("the marketplace holds {count:usize} invoices")]
fn marketplace_holds_invoices(world: &InvoiceWorld, count: usize) -> Result<(), eyre::Report> {
    let invoices = run_async(world.marketplace()?.invoices())?;

    if invoices.len() != count {
        return Err(eyre::eyre!("expected {count} invoices, found {}", invoices.len()));
    }
    Ok(())
}
