//! Post-registration onboarding flow.

use super::{AccountDomainError, User};

/// Steps of the onboarding wizard in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OnboardingStep {
    /// Account registration (handled by sign-up).
    Registration,
    /// Email address confirmation.
    EmailVerification,
    /// First aircraft added to the fleet.
    FleetOnboarding,
    /// Billing and contact details.
    ProfileCompletion,
    /// Final welcome screen.
    Welcome,
}

impl OnboardingStep {
    /// Returns the one-based step number shown in the progress bar.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Registration => 1,
            Self::EmailVerification => 2,
            Self::FleetOnboarding => 3,
            Self::ProfileCompletion => 4,
            Self::Welcome => 5,
        }
    }

    /// Returns the following step, or `None` after [`Self::Welcome`].
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Registration => Some(Self::EmailVerification),
            Self::EmailVerification => Some(Self::FleetOnboarding),
            Self::FleetOnboarding => Some(Self::ProfileCompletion),
            Self::ProfileCompletion => Some(Self::Welcome),
            Self::Welcome => None,
        }
    }
}

/// Onboarding progress for a freshly registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingFlow {
    user: User,
    step: OnboardingStep,
}

impl OnboardingFlow {
    /// Starts onboarding right after registration.
    #[must_use]
    pub const fn start(user: User) -> Self {
        Self {
            user,
            step: OnboardingStep::EmailVerification,
        }
    }

    /// Returns the current step.
    #[must_use]
    pub const fn step(&self) -> OnboardingStep {
        self.step
    }

    /// Returns the user being onboarded.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Moves to the next step.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::OnboardingFinished`] on the welcome step.
    pub fn advance(&mut self) -> Result<OnboardingStep, AccountDomainError> {
        let next = self
            .step
            .next()
            .ok_or(AccountDomainError::OnboardingFinished)?;
        self.step = next;
        Ok(next)
    }

    /// Finishes onboarding and returns the onboarded user.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::OnboardingIncomplete`] unless the flow is
    /// on the welcome step.
    pub fn complete(self) -> Result<User, AccountDomainError> {
        if self.step != OnboardingStep::Welcome {
            return Err(AccountDomainError::OnboardingIncomplete(self.step.number()));
        }
        let mut user = self.user;
        user.mark_onboarded();
        Ok(user)
    }
}
