//! Given steps for invoice payment BDD scenarios.

use std::sync::Arc;

use super::world::{InvoiceWorld, run_async};
use eyre::WrapErr;
use jetcare::{config::MarketplaceConfig, marketplace::Marketplace};
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given("the demo marketplace")]
fn demo_marketplace(world: &mut InvoiceWorld) -> Result<(), eyre::Report> {
    let marketplace = run_async(Marketplace::seeded(
        MarketplaceConfig::immediate(),
        Arc::new(DefaultClock),
    ))
    .wrap_err("seed demo marketplace")?;
    world.marketplace = Some(marketplace);
    Ok(())
}
