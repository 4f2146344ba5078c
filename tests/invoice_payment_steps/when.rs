//! When steps for invoice payment BDD scenarios.

use super::world::{InvoiceWorld, run_async};
use jetcare::{billing::domain::InvoiceId, service_request::domain::RequestId};
use rstest_bdd_macros::when;

#[when(r#"invoice "{invoice_id}" is paid"#)]
fn pay_invoice(world: &mut InvoiceWorld, invoice_id: String) -> Result<(), eyre::Report> {
    let id = InvoiceId::new(invoice_id)?;
    let result = run_async(world.marketplace()?.pay_invoice(&id));
    world.last_payment_result = Some(result);
    Ok(())
}

#[when(r#"request "{request_id}" is invoiced"#)]
fn invoice_request(world: &mut InvoiceWorld, request_id: String) -> Result<(), eyre::Report> {
    let id = RequestId::new(request_id)?;
    let result = run_async(world.marketplace()?.issue_invoice(&id));
    world.last_issue_result = Some(result);
    Ok(())
}
