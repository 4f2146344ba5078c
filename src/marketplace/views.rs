//! Read models derived from the marketplace collections.

use crate::money::Money;
use crate::service_request::domain::{RequestStatus, ServiceRequest};
use chrono::{DateTime, Utc};

/// Tabs of the client request list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestFilter {
    /// Waiting for a provider.
    Pending,
    /// Assigned or being worked on.
    #[default]
    Scheduled,
    /// Completed, approved or cancelled.
    Finished,
}

impl RequestFilter {
    /// Tabs in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Scheduled, Self::Finished];

    /// Returns `true` when a request in `status` belongs to this tab.
    #[must_use]
    pub const fn matches(self, status: RequestStatus) -> bool {
        match self {
            Self::Pending => matches!(status, RequestStatus::Requested),
            Self::Scheduled => {
                matches!(status, RequestStatus::Assigned | RequestStatus::InProgress)
            }
            Self::Finished => matches!(
                status,
                RequestStatus::Completed | RequestStatus::Approved | RequestStatus::Cancelled
            ),
        }
    }

    /// Returns the catalog key of the tab label.
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Pending => "requests.pending",
            Self::Scheduled => "requests.scheduled",
            Self::Finished => "requests.finished",
        }
    }

    /// Keeps the requests that belong to this tab, preserving order.
    #[must_use]
    pub fn apply(self, requests: &[ServiceRequest]) -> Vec<ServiceRequest> {
        requests
            .iter()
            .filter(|request| self.matches(request.status()))
            .cloned()
            .collect()
    }
}

/// Number of requests per tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCounts {
    /// Requests in [`RequestFilter::Pending`].
    pub pending: usize,
    /// Requests in [`RequestFilter::Scheduled`].
    pub scheduled: usize,
    /// Requests in [`RequestFilter::Finished`].
    pub finished: usize,
}

impl FilterCounts {
    /// Counts requests per tab.
    #[must_use]
    pub fn tally(requests: &[ServiceRequest]) -> Self {
        let count = |filter: RequestFilter| {
            requests
                .iter()
                .filter(|request| filter.matches(request.status()))
                .count()
        };
        Self {
            pending: count(RequestFilter::Pending),
            scheduled: count(RequestFilter::Scheduled),
            finished: count(RequestFilter::Finished),
        }
    }

    /// Returns the count for one tab.
    #[must_use]
    pub const fn get(&self, filter: RequestFilter) -> usize {
        match filter {
            RequestFilter::Pending => self.pending,
            RequestFilter::Scheduled => self.scheduled,
            RequestFilter::Finished => self.finished,
        }
    }
}

/// Headline figures of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Requests that are requested, assigned or in progress.
    pub active_requests: usize,
    /// Completed requests awaiting the client's approval.
    pub pending_actions: usize,
    /// Jets in the fleet.
    pub fleet_size: usize,
    /// Due and overdue invoices.
    pub outstanding_invoices: usize,
    /// Sum of the due and overdue amounts.
    pub outstanding_total: Money,
}

impl DashboardSummary {
    pub(super) fn active(status: RequestStatus) -> bool {
        matches!(
            status,
            RequestStatus::Requested | RequestStatus::Assigned | RequestStatus::InProgress
        )
    }
}

/// Display state of one timeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepState {
    /// Passed.
    Completed,
    /// The request's current status.
    Active,
    /// Not reached yet.
    Upcoming,
}

/// One step of the status timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineStep {
    /// Status of the step.
    pub status: RequestStatus,
    /// Display state.
    pub state: StepState,
    /// When the status was reached, if it was.
    pub reached_at: Option<DateTime<Utc>>,
}

/// Builds the timeline over the canonical order for a request.
///
/// Approved requests show every step completed. Cancelled requests show the
/// steps they reached as completed and the rest as upcoming.
#[must_use]
pub fn status_timeline(request: &ServiceRequest) -> Vec<TimelineStep> {
    let current = request.status().position();
    let approved = request.status() == RequestStatus::Approved;
    RequestStatus::CANONICAL_ORDER
        .into_iter()
        .map(|status| {
            let reached_at = request.reached_at(status);
            let state = match (current, status.position()) {
                _ if approved => StepState::Completed,
                (Some(now), Some(step)) if step < now => StepState::Completed,
                (Some(now), Some(step)) if step == now => StepState::Active,
                (None, _) if reached_at.is_some() => StepState::Completed,
                _ => StepState::Upcoming,
            };
            TimelineStep {
                status,
                state,
                reached_at,
            }
        })
        .collect()
}
