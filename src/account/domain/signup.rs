//! Sign-up form validation.

use super::{AccountDomainError, User, UserRole};

/// Which audience the sign-up form was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignUpKind {
    /// Aircraft owner or operator; becomes a [`UserRole::Client`].
    Owner,
    /// Detailing company; enters provider verification.
    Provider,
}

/// Result of a successful sign-up submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// Owner account created; onboarding starts next.
    AwaitingOnboarding(User),
    /// Provider application received; verification is pending.
    AwaitingVerification {
        /// Applying company.
        company_name: String,
        /// Contact email.
        email: String,
    },
}

/// Values submitted by the sign-up form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForm {
    /// Audience the form was opened for.
    pub kind: SignUpKind,
    /// Owner first name.
    pub first_name: String,
    /// Owner last name.
    pub last_name: String,
    /// Company name, required for providers.
    pub company_name: String,
    /// Contact email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Whether the owner accepted the terms.
    pub terms_agreed: bool,
    /// Provider specialization, required for providers.
    pub specialization: String,
}

impl SignUpForm {
    /// Creates an owner sign-up form.
    #[must_use]
    pub fn owner(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            kind: SignUpKind::Owner,
            first_name: first_name.into(),
            last_name: last_name.into(),
            company_name: String::new(),
            email: email.into(),
            password: password.into(),
            terms_agreed: false,
            specialization: String::new(),
        }
    }

    /// Creates a provider sign-up form.
    #[must_use]
    pub fn provider(
        company_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        specialization: impl Into<String>,
    ) -> Self {
        Self {
            kind: SignUpKind::Provider,
            first_name: String::new(),
            last_name: String::new(),
            company_name: company_name.into(),
            email: email.into(),
            password: password.into(),
            terms_agreed: false,
            specialization: specialization.into(),
        }
    }

    /// Sets the company name.
    #[must_use]
    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    /// Records acceptance of the terms.
    #[must_use]
    pub const fn accept_terms(mut self) -> Self {
        self.terms_agreed = true;
        self
    }

    /// Validates the form and produces the sign-up outcome.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::RequiredFieldsMissing`] listing every
    /// blank required field, or [`AccountDomainError::TermsNotAccepted`] for
    /// owners who did not accept the terms.
    pub fn submit(self) -> Result<SignUpOutcome, AccountDomainError> {
        let required: Vec<(&'static str, &str)> = match self.kind {
            SignUpKind::Owner => vec![
                ("first_name", self.first_name.as_str()),
                ("last_name", self.last_name.as_str()),
                ("email", self.email.as_str()),
                ("password", self.password.as_str()),
            ],
            SignUpKind::Provider => vec![
                ("company_name", self.company_name.as_str()),
                ("email", self.email.as_str()),
                ("password", self.password.as_str()),
                ("specialization", self.specialization.as_str()),
            ],
        };
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            return Err(AccountDomainError::RequiredFieldsMissing(missing));
        }

        match self.kind {
            SignUpKind::Owner => {
                if !self.terms_agreed {
                    return Err(AccountDomainError::TermsNotAccepted);
                }
                let first_name = self.first_name.trim();
                let last_name = self.last_name.trim();
                let mut user = User::new(format!("{first_name} {last_name}"), UserRole::Client)
                    .with_personal_name(first_name, last_name)
                    .awaiting_onboarding();
                let company_name = self.company_name.trim();
                if !company_name.is_empty() {
                    user = user.with_company_name(company_name);
                }
                Ok(SignUpOutcome::AwaitingOnboarding(user))
            }
            SignUpKind::Provider => Ok(SignUpOutcome::AwaitingVerification {
                company_name: self.company_name.trim().to_owned(),
                email: self.email.trim().to_owned(),
            }),
        }
    }
}
