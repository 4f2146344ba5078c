//! Provider assignment payload.

use super::ChecklistItemKey;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A member of the provider's crew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    /// Crew member identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Job title within the crew.
    pub role: String,
    /// Portrait URL.
    pub photo_url: String,
    /// Certifications held.
    pub certifications: Vec<String>,
}

impl CrewMember {
    /// Creates a crew member without certifications.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        photo_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            photo_url: photo_url.into(),
            certifications: Vec::new(),
        }
    }

    /// Sets the certifications.
    #[must_use]
    pub fn with_certifications(mut self, certifications: impl IntoIterator<Item = String>) -> Self {
        self.certifications = certifications.into_iter().collect();
        self
    }
}

/// Everything an operator decides when assigning a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderAssignment {
    provider_name: String,
    cost: Money,
    crew: Vec<CrewMember>,
    checklist: Vec<ChecklistItemKey>,
}

impl ProviderAssignment {
    /// Creates an assignment with no crew and an empty checklist.
    #[must_use]
    pub fn new(provider_name: impl Into<String>, cost: Money) -> Self {
        Self {
            provider_name: provider_name.into(),
            cost,
            crew: Vec::new(),
            checklist: Vec::new(),
        }
    }

    /// Sets the crew.
    #[must_use]
    pub fn with_crew(mut self, crew: impl IntoIterator<Item = CrewMember>) -> Self {
        self.crew = crew.into_iter().collect();
        self
    }

    /// Sets the checklist items, dropping duplicates while keeping order.
    #[must_use]
    pub fn with_checklist(mut self, items: impl IntoIterator<Item = ChecklistItemKey>) -> Self {
        let mut checklist: Vec<ChecklistItemKey> = Vec::new();
        for key in items {
            if !checklist.contains(&key) {
                checklist.push(key);
            }
        }
        self.checklist = checklist;
        self
    }

    /// Returns the provider name.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Returns the agreed cost.
    #[must_use]
    pub const fn cost(&self) -> Money {
        self.cost
    }

    /// Returns the crew.
    #[must_use]
    pub fn crew(&self) -> &[CrewMember] {
        &self.crew
    }

    /// Returns the checklist item keys.
    #[must_use]
    pub fn checklist(&self) -> &[ChecklistItemKey] {
        &self.checklist
    }

    pub(super) fn into_parts(self) -> (String, Money, Vec<CrewMember>, Vec<ChecklistItemKey>) {
        (self.provider_name, self.cost, self.crew, self.checklist)
    }
}
