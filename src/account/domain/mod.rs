//! Domain model for session users.

mod directory;
mod error;
mod onboarding;
mod role;
mod signup;
mod user;

pub use directory::{DemoAccount, DemoDirectory, DemoProfile, SignInRequest};
pub use error::{AccountDomainError, ParseUserRoleError};
pub use onboarding::{OnboardingFlow, OnboardingStep};
pub use role::UserRole;
pub use signup::{SignUpForm, SignUpKind, SignUpOutcome};
pub use user::User;
