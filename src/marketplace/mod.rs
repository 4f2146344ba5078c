//! Top-level container wiring every bounded context together.
//!
//! [`Marketplace`] owns the in-memory collections, the simulated quality
//! inspector and payment gateway, and the translation catalogs. It also
//! derives the read models used by dashboards: request filters, the
//! provider queue, headline figures and the status timeline.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use jetcare::config::MarketplaceConfig;
//! use jetcare::marketplace::{Marketplace, RequestFilter};
//! use mockable::DefaultClock;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), jetcare::marketplace::MarketplaceError> {
//! let marketplace =
//!     Marketplace::seeded(MarketplaceConfig::immediate(), Arc::new(DefaultClock)).await?;
//! let counts = marketplace.filter_counts().await?;
//! assert_eq!(counts.get(RequestFilter::Scheduled), 2);
//! # Ok(())
//! # }
//! ```

mod error;
mod facade;
pub mod seed;
mod views;

pub use error::{MarketplaceError, MarketplaceResult, SeedError};
pub use facade::Marketplace;
pub use views::{
    DashboardSummary, FilterCounts, RequestFilter, StepState, TimelineStep, status_timeline,
};

#[cfg(test)]
mod tests;
