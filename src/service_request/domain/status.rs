//! Request lifecycle statuses and related enumerations.

use super::{ParseRequestStatusError, ParseUrgencyError, ParseVeritasStatusError};
use crate::account::domain::UserRole;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    /// Submitted by the client, awaiting an operator.
    Requested,
    /// A provider has been assigned.
    Assigned,
    /// The provider has started work.
    InProgress,
    /// Work finished with photo evidence.
    Completed,
    /// Accepted by the client.
    Approved,
    /// Abandoned before approval.
    Cancelled,
}

impl RequestStatus {
    /// Forward-only status sequence. `Cancelled` is not part of it.
    pub const CANONICAL_ORDER: [Self; 5] = [
        Self::Requested,
        Self::Assigned,
        Self::InProgress,
        Self::Completed,
        Self::Approved,
    ];

    /// Every status, in canonical order followed by `Cancelled`.
    pub const ALL: [Self; 6] = [
        Self::Requested,
        Self::Assigned,
        Self::InProgress,
        Self::Completed,
        Self::Approved,
        Self::Cancelled,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Requested => "REQUESTED",
            Self::Assigned => "ASSIGNED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Approved => "APPROVED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Returns the zero-based position in [`Self::CANONICAL_ORDER`].
    #[must_use]
    pub const fn position(self) -> Option<usize> {
        match self {
            Self::Requested => Some(0),
            Self::Assigned => Some(1),
            Self::InProgress => Some(2),
            Self::Completed => Some(3),
            Self::Approved => Some(4),
            Self::Cancelled => None,
        }
    }

    /// Returns the following status in canonical order.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Requested => Some(Self::Assigned),
            Self::Assigned => Some(Self::InProgress),
            Self::InProgress => Some(Self::Completed),
            Self::Completed => Some(Self::Approved),
            Self::Approved | Self::Cancelled => None,
        }
    }

    /// Returns `true` when no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Cancelled)
    }

    /// Returns `true` when `target` directly follows `self`.
    ///
    /// Only the next canonical status is reachable, plus `Cancelled` from
    /// any non-terminal status.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        target == Self::Cancelled || self.next() == Some(target)
    }

    /// Returns `true` when `role` may move a request into this status.
    #[must_use]
    pub const fn is_permitted_for(self, role: UserRole) -> bool {
        match self {
            Self::Requested => matches!(role, UserRole::Client | UserRole::Operator),
            Self::Assigned => matches!(role, UserRole::Operator),
            Self::InProgress | Self::Completed => matches!(role, UserRole::Provider),
            Self::Approved => matches!(role, UserRole::Client),
            Self::Cancelled => matches!(role, UserRole::Client | UserRole::Operator),
        }
    }

    /// Returns the translation key for this status.
    #[must_use]
    pub fn translation_key(self) -> String {
        format!("requestStatus.{}", self.as_str())
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RequestStatus {
    type Error = ParseRequestStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "REQUESTED" => Ok(Self::Requested),
            "ASSIGNED" => Ok(Self::Assigned),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "APPROVED" => Ok(Self::Approved),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(ParseRequestStatusError(value.to_owned())),
        }
    }
}

/// Quality-certification flag of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VeritasStatus {
    /// Not yet inspected.
    #[default]
    Pending,
    /// Inspection passed.
    Certified,
    /// Inspection requires a human follow-up.
    NeedsReview,
}

impl VeritasStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Certified => "CERTIFIED",
            Self::NeedsReview => "NEEDS_REVIEW",
        }
    }
}

impl fmt::Display for VeritasStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for VeritasStatus {
    type Error = ParseVeritasStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "PENDING" => Ok(Self::Pending),
            "CERTIFIED" => Ok(Self::Certified),
            "NEEDS_REVIEW" => Ok(Self::NeedsReview),
            _ => Err(ParseVeritasStatusError(value.to_owned())),
        }
    }
}

/// Urgency chosen when the request was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Urgency {
    /// Regular scheduling.
    #[default]
    Standard,
    /// Expedited handling.
    Urgent,
}

impl Urgency {
    /// Both urgency levels in form order.
    pub const ALL: [Self; 2] = [Self::Standard, Self::Urgent];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Urgent => "Urgent",
        }
    }

    /// Returns the translation key for this urgency.
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Standard => "newRequest.standard",
            Self::Urgent => "newRequest.urgent",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Urgency {
    type Error = ParseUrgencyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "standard" | "standaard" => Ok(Self::Standard),
            "urgent" | "spoed" => Ok(Self::Urgent),
            _ => Err(ParseUrgencyError(value.to_owned())),
        }
    }
}
