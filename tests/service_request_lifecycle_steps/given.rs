//! Given steps for service request lifecycle BDD scenarios.

use std::sync::Arc;

use super::world::{LifecycleWorld, run_async};
use eyre::WrapErr;
use jetcare::{account::domain::SignInRequest, config::MarketplaceConfig, marketplace::Marketplace};
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given("the demo marketplace")]
fn demo_marketplace(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let marketplace = run_async(Marketplace::seeded(
        MarketplaceConfig::immediate(),
        Arc::new(DefaultClock),
    ))
    .wrap_err("seed demo marketplace")?;
    world.feed_before = run_async(marketplace.notifications()).wrap_err("read seeded feed")?;
    world.marketplace = Some(marketplace);
    Ok(())
}

#[given(r#"the user "{email}" is signed in"#)]
fn user_signed_in(world: &mut LifecycleWorld, email: String) -> Result<(), eyre::Report> {
    let user = world
        .marketplace()?
        .sign_in(&SignInRequest::new(email, "123544"))
        .wrap_err("sign in demo user")?;
    world.user = Some(user);
    Ok(())
}
