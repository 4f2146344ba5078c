//! Error types for account validation and parsing.

use thiserror::Error;

/// Errors returned by sign-in, sign-up and onboarding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// One or more required form fields were blank.
    #[error("required fields missing: {}", .0.join(", "))]
    RequiredFieldsMissing(Vec<&'static str>),

    /// The submitted credentials do not match a demo account.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The owner sign-up form was submitted without accepting the terms.
    #[error("terms and conditions must be accepted")]
    TermsNotAccepted,

    /// The onboarding flow has already reached its final step.
    #[error("onboarding is already complete")]
    OnboardingFinished,

    /// Onboarding was completed before reaching the welcome step.
    #[error("onboarding cannot complete from step {0}")]
    OnboardingIncomplete(u8),
}

/// Error returned while parsing user roles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct ParseUserRoleError(pub String);
