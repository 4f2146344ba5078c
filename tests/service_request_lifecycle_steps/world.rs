//! Shared world state for service request lifecycle BDD scenarios.

use jetcare::{
    account::domain::User,
    marketplace::{Marketplace, MarketplaceResult},
    notification::domain::Notification,
    service_request::{
        domain::ServiceRequest,
        services::{CertificationHandle, CompletionSubmission},
    },
};
use rstest::fixture;

/// Scenario world for request lifecycle behaviour tests.
pub struct LifecycleWorld {
    pub marketplace: Option<Marketplace>,
    pub user: Option<User>,
    pub feed_before: Vec<Notification>,
    pub certification: Option<CertificationHandle>,
    pub last_completion_result: Option<MarketplaceResult<CompletionSubmission>>,
    pub last_transition_result: Option<MarketplaceResult<ServiceRequest>>,
}

impl LifecycleWorld {
    /// Creates a world without a marketplace.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marketplace: None,
            user: None,
            feed_before: Vec::new(),
            certification: None,
            last_completion_result: None,
            last_transition_result: None,
        }
    }

    /// Returns the scenario marketplace.
    pub fn marketplace(&self) -> Result<&Marketplace, eyre::Report> {
        self.marketplace
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing marketplace in scenario world"))
    }

    /// Returns the signed-in user.
    pub fn user(&self) -> Result<&User, eyre::Report> {
        self.user
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing signed-in user in scenario world"))
    }
}

impl Default for LifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LifecycleWorld {
    LifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
