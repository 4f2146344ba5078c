//! Demo sign-in directory.

use super::{AccountDomainError, User, UserRole};
use serde::{Deserialize, Serialize};

/// Credentials submitted by the sign-in form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInRequest {
    /// Email address as typed.
    pub email: String,
    /// Password as typed.
    pub password: String,
}

impl SignInRequest {
    /// Creates a sign-in request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// User details handed out by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoProfile {
    /// Display name.
    pub name: String,
    /// Optional first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Optional last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Optional company name.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Session role.
    pub role: UserRole,
}

impl DemoProfile {
    fn to_user(&self) -> User {
        let mut user = User::new(self.name.clone(), self.role);
        if let (Some(first), Some(last)) = (&self.first_name, &self.last_name) {
            user = user.with_personal_name(first.clone(), last.clone());
        }
        if let Some(company) = &self.company_name {
            user = user.with_company_name(company.clone());
        }
        user
    }
}

/// A named demo account with a fixed password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoAccount {
    /// Email matched case-insensitively.
    pub email: String,
    /// Password matched exactly.
    pub password: String,
    /// Profile returned on success.
    pub profile: DemoProfile,
}

/// Directory of demo accounts used to pick the session role.
///
/// Named accounts require their password. Any other non-blank credentials
/// sign in as the guest profile when one is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoDirectory {
    /// Accounts with fixed credentials.
    pub accounts: Vec<DemoAccount>,
    /// Profile used for unrecognised email addresses.
    pub guest: Option<DemoProfile>,
}

impl Default for DemoDirectory {
    fn default() -> Self {
        Self {
            accounts: vec![
                DemoAccount {
                    email: "admin@jetcare.com".to_owned(),
                    password: "123544".to_owned(),
                    profile: DemoProfile {
                        name: "Admin Operator".to_owned(),
                        first_name: Some("Admin".to_owned()),
                        last_name: Some("Operator".to_owned()),
                        company_name: None,
                        role: UserRole::Operator,
                    },
                },
                DemoAccount {
                    email: "provider@jetcare.com".to_owned(),
                    password: "123544".to_owned(),
                    profile: DemoProfile {
                        name: "JetCare Specialists".to_owned(),
                        first_name: None,
                        last_name: None,
                        company_name: Some("JetCare Specialists".to_owned()),
                        role: UserRole::Provider,
                    },
                },
            ],
            guest: Some(DemoProfile {
                name: "Belgian Wings".to_owned(),
                first_name: Some("John".to_owned()),
                last_name: Some("Doe".to_owned()),
                company_name: Some("Belgian Wings".to_owned()),
                role: UserRole::Client,
            }),
        }
    }
}

impl DemoDirectory {
    /// Resolves the session user for the submitted credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::RequiredFieldsMissing`] when email or
    /// password is blank and [`AccountDomainError::InvalidCredentials`] when
    /// a named account's password does not match or no guest profile exists.
    pub fn sign_in(&self, request: &SignInRequest) -> Result<User, AccountDomainError> {
        let mut missing = Vec::new();
        if request.email.trim().is_empty() {
            missing.push("email");
        }
        if request.password.trim().is_empty() {
            missing.push("password");
        }
        if !missing.is_empty() {
            return Err(AccountDomainError::RequiredFieldsMissing(missing));
        }

        let email = request.email.trim();
        if let Some(account) = self
            .accounts
            .iter()
            .find(|account| account.email.eq_ignore_ascii_case(email))
        {
            if account.password != request.password {
                return Err(AccountDomainError::InvalidCredentials);
            }
            return Ok(account.profile.to_user());
        }

        self.guest
            .as_ref()
            .map(DemoProfile::to_user)
            .ok_or(AccountDomainError::InvalidCredentials)
    }
}
