//! Session user.

use super::UserRole;
use serde::{Deserialize, Serialize};

/// The actor driving a session.
///
/// `name` is the company name for providers and the full name for
/// individuals. Providers are matched to requests by this name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    first_name: Option<String>,
    last_name: Option<String>,
    company_name: Option<String>,
    role: UserRole,
    avatar_url: String,
    onboarding_completed: bool,
}

impl User {
    /// Creates an onboarded user with only a display name.
    #[must_use]
    pub fn new(name: impl Into<String>, role: UserRole) -> Self {
        let name = name.into();
        let avatar_url = avatar_for(&name);
        Self {
            name,
            first_name: None,
            last_name: None,
            company_name: None,
            role,
            avatar_url,
            onboarding_completed: true,
        }
    }

    /// Sets first and last name.
    #[must_use]
    pub fn with_personal_name(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    /// Sets the company name.
    #[must_use]
    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    /// Marks the user as still having to complete onboarding.
    #[must_use]
    pub const fn awaiting_onboarding(mut self) -> Self {
        self.onboarding_completed = false;
        self
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first name, if known.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Returns the last name, if known.
    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Returns the company name, if known.
    #[must_use]
    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// Returns the avatar URL.
    #[must_use]
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    /// Returns `true` once onboarding has been completed.
    #[must_use]
    pub const fn onboarding_completed(&self) -> bool {
        self.onboarding_completed
    }

    /// Name used in greetings: the first name when known.
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.first_name
            .as_deref()
            .filter(|first| !first.is_empty())
            .unwrap_or(&self.name)
    }

    pub(super) const fn mark_onboarded(&mut self) {
        self.onboarding_completed = true;
    }
}

fn avatar_for(name: &str) -> String {
    format!("https://i.pravatar.cc/150?u={}", name.replace(' ', "+"))
}
