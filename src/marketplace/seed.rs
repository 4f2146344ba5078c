//! Demo data set loaded by [`super::Marketplace::seeded`].

use super::SeedError;
use crate::billing::domain::{
    Invoice, InvoiceId, InvoiceStatus, PaymentReceipt, PersistedInvoiceData,
};
use crate::fleet::domain::{Jet, JetId, JetStatus, PersistedJetData, TailNumber};
use crate::money::Money;
use crate::notification::domain::{
    Notification, NotificationId, NotificationKind, PersistedNotificationData,
};
use crate::service_request::domain::{
    ChatMessage, ChecklistItem, ChecklistItemKey, ChecklistItemStatus, CrewMember, MessageId,
    MessageSender, PersistedServiceRequestData, PhotoRef, RequestDetails, RequestId,
    RequestStatus, ServiceRequest, StatusChange, Urgency, VeritasStatus,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

type SeedResult<T> = Result<T, SeedError>;

fn utc(text: &'static str) -> SeedResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| SeedError::Timestamp(text))
}

fn local(text: &'static str) -> SeedResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M").map_err(|_| SeedError::Timestamp(text))
}

fn date(text: &'static str) -> SeedResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| SeedError::Timestamp(text))
}

fn history(entries: &[(RequestStatus, &'static str)]) -> SeedResult<Vec<StatusChange>> {
    entries
        .iter()
        .map(|&(status, timestamp)| Ok(StatusChange::new(status, utc(timestamp)?)))
        .collect()
}

fn photographed(
    key: ChecklistItemKey,
    status: ChecklistItemStatus,
    before: &str,
    after: &str,
) -> SeedResult<ChecklistItem> {
    Ok(ChecklistItem::pending(key)
        .with_status(status)
        .with_photos(PhotoRef::new(before)?, PhotoRef::new(after)?))
}

struct JetSeed {
    id: &'static str,
    name: &'static str,
    brand: &'static str,
    jet_type: &'static str,
    version: &'static str,
    tail_number: &'static str,
    image_url: &'static str,
    range_nm: u32,
    seats: u16,
    last_service: &'static str,
    status: JetStatus,
}

const JETS: [JetSeed; 3] = [
    JetSeed {
        id: "jet-1",
        name: "The Falcon",
        brand: "Dassault",
        jet_type: "Falcon",
        version: "7X",
        tail_number: "OO-JNS",
        image_url: "/assets/images/jet1.jpg",
        range_nm: 5_950,
        seats: 16,
        last_service: "2024-07-15",
        status: JetStatus::Ready,
    },
    JetSeed {
        id: "jet-2",
        name: "Gulfstream",
        brand: "Gulfstream",
        jet_type: "G650",
        version: "",
        tail_number: "OO-WIK",
        image_url: "/assets/images/jet2.jpg",
        range_nm: 7_500,
        seats: 19,
        last_service: "2024-05-20",
        status: JetStatus::ServiceDue,
    },
    JetSeed {
        id: "jet-3",
        name: "Global Express",
        brand: "Bombardier",
        jet_type: "Global",
        version: "6000",
        tail_number: "OO-PRV",
        image_url: "/assets/images/jet3.jpg",
        range_nm: 6_000,
        seats: 17,
        last_service: "2024-08-01",
        status: JetStatus::Ready,
    },
];

/// Fleet of the demo client.
///
/// # Errors
///
/// Returns [`SeedError`] if a literal fails validation.
pub fn demo_jets() -> SeedResult<Vec<Jet>> {
    JETS.iter()
        .map(|seed| {
            Ok(Jet::from_persisted(PersistedJetData {
                id: JetId::new(seed.id)?,
                name: seed.name.to_owned(),
                brand: seed.brand.to_owned(),
                jet_type: seed.jet_type.to_owned(),
                version: seed.version.to_owned(),
                tail_number: TailNumber::new(seed.tail_number)?,
                image_url: seed.image_url.to_owned(),
                range_nm: seed.range_nm,
                seats: seed.seats,
                last_service: Some(date(seed.last_service)?),
                status: seed.status,
            }))
        })
        .collect()
}

fn crew() -> [CrewMember; 3] {
    [
        CrewMember::new(
            "cw-1",
            "Jean-Luc Dubois",
            "Team Lead",
            "https://i.pravatar.cc/150?u=jl",
        )
        .with_certifications([
            "Advanced Detailing".to_owned(),
            "Leather Care Specialist".to_owned(),
        ]),
        CrewMember::new(
            "cw-2",
            "Sophie Leroy",
            "Detailing Technician",
            "https://i.pravatar.cc/150?u=sl",
        )
        .with_certifications([
            "Exterior Polish & Wax".to_owned(),
            "Safety Certified".to_owned(),
        ]),
        CrewMember::new(
            "as-1",
            "Tom Willems",
            "Interior Specialist",
            "https://i.pravatar.cc/150?u=tw",
        )
        .with_certifications([
            "Upholstery Master".to_owned(),
            "Wood & Veneer Care".to_owned(),
        ]),
    ]
}

fn details(
    jet_id: &str,
    service_type: &str,
    location: &str,
    scheduled_at: &'static str,
    urgency: Urgency,
) -> SeedResult<RequestDetails> {
    Ok(RequestDetails {
        jet_id: JetId::new(jet_id)?,
        service_type: service_type.to_owned(),
        location: location.to_owned(),
        scheduled_at: local(scheduled_at)?,
        urgency,
        special_instructions: None,
    })
}

fn approved_exterior_clean(crew: &[CrewMember]) -> SeedResult<ServiceRequest> {
    Ok(ServiceRequest::from_persisted(PersistedServiceRequestData {
        id: RequestId::new("req-1")?,
        details: details(
            "jet-1",
            "Exterior Cleaning",
            "EBBR",
            "2024-08-15T14:00",
            Urgency::Standard,
        )?,
        provider: Some("CleanWings Inc.".to_owned()),
        cost: Some(Money::euros(2_500)),
        veritas_status: VeritasStatus::Certified,
        checklist: vec![
            photographed(
                ChecklistItemKey::ExteriorWash,
                ChecklistItemStatus::Approved,
                "https://images.unsplash.com/photo-1621489433241-3533295844a4?q=80&w=400",
                "https://images.unsplash.com/photo-1605600652156-0557297e65b4?q=80&w=400",
            )?,
            photographed(
                ChecklistItemKey::WindowsPolished,
                ChecklistItemStatus::Flagged,
                "https://images.unsplash.com/photo-1577922251203-d52f865a5c43?q=80&w=400",
                "https://images.unsplash.com/photo-1549289297-6353265b0351?q=80&w=400",
            )?,
            photographed(
                ChecklistItemKey::LandingGear,
                ChecklistItemStatus::Approved,
                "https://images.unsplash.com/photo-1555531738-9f15041a3946?q=80&w=400",
                "https://images.unsplash.com/photo-1589552632299-1a4a45a89467?q=80&w=400",
            )?,
        ],
        crew: crew.iter().take(2).cloned().collect(),
        messages: Vec::new(),
        history: history(&[
            (RequestStatus::Requested, "2024-08-10T10:00:00Z"),
            (RequestStatus::Assigned, "2024-08-10T12:30:00Z"),
            (RequestStatus::InProgress, "2024-08-15T14:05:00Z"),
            (RequestStatus::Completed, "2024-08-15T18:00:00Z"),
            (RequestStatus::Approved, "2024-08-16T09:00:00Z"),
        ])?,
    })?)
}

fn interior_clean_in_progress(crew: &[CrewMember]) -> SeedResult<ServiceRequest> {
    Ok(ServiceRequest::from_persisted(PersistedServiceRequestData {
        id: RequestId::new("req-2")?,
        details: details(
            "jet-2",
            "Interior Cleaning",
            "EBAW",
            "2024-08-20T09:30",
            Urgency::Urgent,
        )?,
        provider: Some("AeroShine Belgium".to_owned()),
        cost: Some(Money::euros(3_200)),
        veritas_status: VeritasStatus::Pending,
        checklist: vec![
            ChecklistItem::pending(ChecklistItemKey::CabinCleaned)
                .with_status(ChecklistItemStatus::Approved),
            ChecklistItem::pending(ChecklistItemKey::CockpitDetailed),
            ChecklistItem::pending(ChecklistItemKey::LavatorySanitized),
        ],
        crew: crew.iter().skip(2).cloned().collect(),
        messages: vec![
            ChatMessage::from_persisted(
                MessageId::new("msg-1")?,
                MessageSender::Provider,
                "We have started the interior cleaning for OO-WIK.".to_owned(),
                utc("2024-08-20T09:35:00Z")?,
            ),
            ChatMessage::from_persisted(
                MessageId::new("msg-2")?,
                MessageSender::Owner,
                "Thank you for the update. Please pay special attention to the leather seats."
                    .to_owned(),
                utc("2024-08-20T09:40:00Z")?,
            ),
        ],
        history: history(&[
            (RequestStatus::Requested, "2024-08-19T11:00:00Z"),
            (RequestStatus::Assigned, "2024-08-19T11:30:00Z"),
            (RequestStatus::InProgress, "2024-08-20T09:35:00Z"),
        ])?,
    })?)
}

fn assigned_deep_clean() -> SeedResult<ServiceRequest> {
    Ok(ServiceRequest::from_persisted(PersistedServiceRequestData {
        id: RequestId::new("req-3")?,
        details: details(
            "jet-3",
            "Deep Cleaning",
            "EBLG",
            "2024-08-22T18:00",
            Urgency::Standard,
        )?,
        provider: Some("JetCare Specialists".to_owned()),
        cost: Some(Money::euros(5_500)),
        veritas_status: VeritasStatus::Pending,
        checklist: [
            ChecklistItemKey::ExteriorWash,
            ChecklistItemKey::WindowsPolished,
            ChecklistItemKey::LandingGear,
            ChecklistItemKey::CabinCleaned,
            ChecklistItemKey::CockpitDetailed,
        ]
        .into_iter()
        .map(ChecklistItem::pending)
        .collect(),
        crew: Vec::new(),
        messages: Vec::new(),
        history: history(&[
            (RequestStatus::Requested, "2024-08-21T15:00:00Z"),
            (RequestStatus::Assigned, "2024-08-21T18:00:00Z"),
        ])?,
    })?)
}

fn requested_maintenance() -> SeedResult<ServiceRequest> {
    Ok(ServiceRequest::from_persisted(PersistedServiceRequestData {
        id: RequestId::new("req-4")?,
        details: details(
            "jet-1",
            "Interior Maintenance",
            "EBBR",
            "2024-08-25T11:00",
            Urgency::Standard,
        )?,
        provider: None,
        cost: None,
        veritas_status: VeritasStatus::Pending,
        checklist: Vec::new(),
        crew: Vec::new(),
        messages: Vec::new(),
        history: history(&[(RequestStatus::Requested, "2024-08-24T09:00:00Z")])?,
    })?)
}

/// Requests `req-1` to `req-4` in submission order.
///
/// # Errors
///
/// Returns [`SeedError`] if a literal fails validation.
pub fn demo_requests() -> SeedResult<Vec<ServiceRequest>> {
    let crew = crew();
    Ok(vec![
        approved_exterior_clean(&crew)?,
        interior_clean_in_progress(&crew)?,
        assigned_deep_clean()?,
        requested_maintenance()?,
    ])
}

/// Invoices `INV001` (paid) and `INV002` (due).
///
/// # Errors
///
/// Returns [`SeedError`] if a literal fails validation.
pub fn demo_invoices() -> SeedResult<Vec<Invoice>> {
    Ok(vec![
        Invoice::from_persisted(PersistedInvoiceData {
            id: InvoiceId::new("INV001")?,
            request_id: RequestId::new("req-1")?,
            jet_name: "The Falcon".to_owned(),
            jet_tail_number: TailNumber::new("OO-JNS")?,
            service_type: "Exterior Cleaning".to_owned(),
            amount: Money::euros(2_500),
            issued_on: date("2024-08-16")?,
            status: InvoiceStatus::Paid,
            receipt: Some(PaymentReceipt {
                payment_method: "Visa **** 4242".to_owned(),
                transaction_id: "ch_3PjQ8z".to_owned(),
            }),
            paid_at: None,
        }),
        Invoice::from_persisted(PersistedInvoiceData {
            id: InvoiceId::new("INV002")?,
            request_id: RequestId::new("req-2")?,
            jet_name: "Gulfstream".to_owned(),
            jet_tail_number: TailNumber::new("OO-WIK")?,
            service_type: "Interior Cleaning".to_owned(),
            amount: Money::euros(3_200),
            issued_on: date("2024-08-21")?,
            status: InvoiceStatus::Due,
            receipt: None,
            paid_at: None,
        }),
    ])
}

/// Feed entries `n-1` to `n-3`, newest first.
///
/// # Errors
///
/// Returns [`SeedError`] if a literal fails validation.
pub fn demo_notifications() -> SeedResult<Vec<Notification>> {
    let entries = [
        (
            "n-1",
            NotificationKind::Request,
            "Service for OO-WIK has started.",
            "2024-08-20T09:35:00Z",
            false,
        ),
        (
            "n-2",
            NotificationKind::Message,
            "New message from AeroShine Belgium.",
            "2024-08-20T09:35:00Z",
            false,
        ),
        (
            "n-3",
            NotificationKind::Invoice,
            "Invoice #INV001 for OO-JNS is available.",
            "2024-08-16T10:00:00Z",
            true,
        ),
    ];
    entries
        .into_iter()
        .map(|(id, kind, text, timestamp, read)| {
            Ok(Notification::from_persisted(PersistedNotificationData {
                id: NotificationId::new(id)?,
                kind,
                text: text.to_owned(),
                timestamp: utc(timestamp)?,
                read,
            }))
        })
        .collect()
}
