//! Status badge colours.

use crate::billing::domain::InvoiceStatus;
use crate::fleet::domain::JetStatus;
use crate::service_request::domain::RequestStatus;

/// Foreground and background classes for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColourPair {
    /// Text colour class.
    pub text: &'static str,
    /// Background colour class.
    pub background: &'static str,
}

const BLUE: ColourPair = ColourPair {
    text: "text-blue-300",
    background: "bg-blue-500/20",
};
const INDIGO: ColourPair = ColourPair {
    text: "text-indigo-300",
    background: "bg-indigo-500/20",
};
const YELLOW: ColourPair = ColourPair {
    text: "text-yellow-300",
    background: "bg-yellow-500/20",
};
const SLATE: ColourPair = ColourPair {
    text: "text-slate-300",
    background: "bg-slate-500/20",
};
const GREEN: ColourPair = ColourPair {
    text: "text-green-300",
    background: "bg-green-500/20",
};
const RED: ColourPair = ColourPair {
    text: "text-red-300",
    background: "bg-red-500/20",
};

/// Badge colours for a request status.
#[must_use]
pub const fn request_status_colours(status: RequestStatus) -> ColourPair {
    match status {
        RequestStatus::Requested => BLUE,
        RequestStatus::Assigned => INDIGO,
        RequestStatus::InProgress => YELLOW,
        RequestStatus::Completed => SLATE,
        RequestStatus::Approved => GREEN,
        RequestStatus::Cancelled => RED,
    }
}

/// Badge colours for a jet status.
#[must_use]
pub const fn jet_status_colours(status: JetStatus) -> ColourPair {
    match status {
        JetStatus::Ready => GREEN,
        JetStatus::ServiceDue => YELLOW,
        JetStatus::InService => BLUE,
    }
}

/// Badge colours for an invoice status.
#[must_use]
pub const fn invoice_status_colours(status: InvoiceStatus) -> ColourPair {
    match status {
        InvoiceStatus::Paid => GREEN,
        InvoiceStatus::Due => YELLOW,
        InvoiceStatus::Overdue => RED,
        InvoiceStatus::Processing => BLUE,
    }
}
