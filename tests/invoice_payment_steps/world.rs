//! Shared world state for invoice payment BDD scenarios.

use jetcare::{
    billing::domain::Invoice,
    marketplace::{Marketplace, MarketplaceResult},
};
use rstest::fixture;

/// Scenario world for billing behaviour tests.
pub struct InvoiceWorld {
    pub marketplace: Option<Marketplace>,
    pub last_payment_result: Option<MarketplaceResult<Invoice>>,
    pub last_issue_result: Option<MarketplaceResult<Invoice>>,
}

impl InvoiceWorld {
    /// Creates a world without a marketplace.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marketplace: None,
            last_payment_result: None,
            last_issue_result: None,
        }
    }

    /// Returns the scenario marketplace.
    pub fn marketplace(&self) -> Result<&Marketplace, eyre::Report> {
        self.marketplace
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing marketplace in scenario world"))
    }
}

impl Default for InvoiceWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> InvoiceWorld {
    InvoiceWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
