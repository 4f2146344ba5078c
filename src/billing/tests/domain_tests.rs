//! Unit tests for invoice identifiers, statuses and payment rules.

use super::fixtures::{jet, request, stored_invoice};
use crate::billing::domain::{
    BillingDomainError, Invoice, InvoiceId, InvoiceStatus, PaymentReceipt,
};
use crate::money::Money;
use crate::service_request::domain::RequestStatus;
use eyre::{OptionExt, ensure};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[case(2, "INV002")]
#[case(17, "INV017")]
#[case(1_204, "INV1204")]
fn sequence_is_zero_padded(#[case] sequence: u32, #[case] expected: &str) {
    let id = InvoiceId::from_sequence(sequence);
    assert_eq!(id.as_str(), expected);
    assert_eq!(id.sequence(), Some(sequence));
}

#[rstest]
#[case("inv003", "INV003")]
#[case(" INV010 ", "INV010")]
fn invoice_ids_are_normalized(#[case] input: &str, #[case] expected: &str) -> eyre::Result<()> {
    ensure!(InvoiceId::new(input)?.as_str() == expected);
    Ok(())
}

#[rstest]
#[case("")]
#[case("INV")]
#[case("INV-3")]
#[case("BILL003")]
fn malformed_invoice_ids_are_rejected(#[case] input: &str) {
    assert!(matches!(
        InvoiceId::new(input),
        Err(BillingDomainError::InvalidInvoiceId(_))
    ));
}

#[rstest]
#[case(InvoiceStatus::Due, true, true)]
#[case(InvoiceStatus::Overdue, false, true)]
#[case(InvoiceStatus::Paid, false, false)]
#[case(InvoiceStatus::Processing, false, true)]
fn only_due_invoices_are_payable(
    #[case] status: InvoiceStatus,
    #[case] payable: bool,
    #[case] outstanding: bool,
) {
    assert_eq!(status.is_payable(), payable);
    assert_eq!(status.is_outstanding(), outstanding);
}

#[rstest]
fn invoice_status_parses_case_insensitively() -> eyre::Result<()> {
    ensure!(InvoiceStatus::try_from("overdue")? == InvoiceStatus::Overdue);
    ensure!(InvoiceStatus::try_from(" PAID ")? == InvoiceStatus::Paid);
    ensure!(InvoiceStatus::try_from("Processing")? == InvoiceStatus::Processing);
    ensure!(InvoiceStatus::try_from("pending").is_err());
    Ok(())
}

#[rstest]
fn completed_request_is_invoiced_for_its_cost() -> eyre::Result<()> {
    let completed = request("req-3", RequestStatus::Completed, Some(Money::euros(5_500)))?;
    let invoice = Invoice::issue(
        InvoiceId::from_sequence(4),
        &completed,
        &jet("jet-3", "OO-PHX")?,
        &DefaultClock,
    )?;

    ensure!(invoice.status() == InvoiceStatus::Due);
    ensure!(invoice.amount() == Money::euros(5_500));
    ensure!(invoice.request_id() == completed.id());
    ensure!(invoice.jet_tail_number().as_str() == "OO-PHX");
    ensure!(invoice.service_type() == "Deep Cleaning");
    ensure!(invoice.receipt().is_none());
    Ok(())
}

#[rstest]
fn approved_request_can_still_be_invoiced() -> eyre::Result<()> {
    let approved = request("req-2", RequestStatus::Approved, Some(Money::euros(1_200)))?;
    let invoice = Invoice::issue(
        InvoiceId::from_sequence(5),
        &approved,
        &jet("jet-3", "OO-PHX")?,
        &DefaultClock,
    )?;
    ensure!(invoice.amount() == Money::euros(1_200));
    Ok(())
}

#[rstest]
fn unfinished_request_cannot_be_invoiced() -> eyre::Result<()> {
    let in_progress = request("req-3", RequestStatus::InProgress, Some(Money::euros(5_500)))?;
    let result = Invoice::issue(
        InvoiceId::from_sequence(4),
        &in_progress,
        &jet("jet-3", "OO-PHX")?,
        &DefaultClock,
    );
    ensure!(matches!(result, Err(BillingDomainError::RequestNotCompleted(_))));
    Ok(())
}

#[rstest]
fn request_without_cost_cannot_be_invoiced() -> eyre::Result<()> {
    let completed = request("req-3", RequestStatus::Completed, None)?;
    let result = Invoice::issue(
        InvoiceId::from_sequence(4),
        &completed,
        &jet("jet-3", "OO-PHX")?,
        &DefaultClock,
    );
    ensure!(matches!(result, Err(BillingDomainError::MissingCost(_))));
    Ok(())
}

#[rstest]
fn invoice_requires_the_serviced_jet() -> eyre::Result<()> {
    let completed = request("req-3", RequestStatus::Completed, Some(Money::euros(5_500)))?;
    let result = Invoice::issue(
        InvoiceId::from_sequence(4),
        &completed,
        &jet("jet-1", "OO-JNS")?,
        &DefaultClock,
    );
    ensure!(matches!(result, Err(BillingDomainError::JetMismatch { .. })));
    Ok(())
}

#[rstest]
fn paying_records_receipt_once() -> eyre::Result<()> {
    let mut invoice = stored_invoice("INV002", "req-2", 3_200, InvoiceStatus::Due)?;
    let receipt = PaymentReceipt {
        payment_method: "Visa **** 1234".to_owned(),
        transaction_id: "ch_test".to_owned(),
    };
    invoice.mark_paid(receipt.clone(), &DefaultClock)?;

    ensure!(invoice.status() == InvoiceStatus::Paid);
    ensure!(invoice.receipt().ok_or_eyre("receipt stored")? == &receipt);
    ensure!(invoice.paid_at().is_some());

    let second = invoice.mark_paid(receipt, &DefaultClock);
    ensure!(matches!(
        second,
        Err(BillingDomainError::InvoiceNotPayable {
            status: InvoiceStatus::Paid,
            ..
        })
    ));
    Ok(())
}

#[rstest]
fn claimed_invoice_cannot_be_claimed_twice() -> eyre::Result<()> {
    let mut invoice = stored_invoice("INV002", "req-2", 3_200, InvoiceStatus::Due)?;
    invoice.begin_payment()?;
    ensure!(invoice.status() == InvoiceStatus::Processing);
    ensure!(invoice.status().is_outstanding());

    ensure!(matches!(
        invoice.begin_payment(),
        Err(BillingDomainError::InvoiceNotPayable {
            status: InvoiceStatus::Processing,
            ..
        })
    ));

    invoice.abandon_payment();
    ensure!(invoice.status() == InvoiceStatus::Due);
    Ok(())
}

#[rstest]
fn overdue_invoice_is_not_payable() -> eyre::Result<()> {
    let invoice = stored_invoice("INV003", "req-3", 5_500, InvoiceStatus::Overdue)?;
    ensure!(matches!(
        invoice.ensure_payable(),
        Err(BillingDomainError::InvoiceNotPayable {
            status: InvoiceStatus::Overdue,
            ..
        })
    ));
    Ok(())
}
