//! Portfolio store inspection
//!
//! Seeds the store exactly as the server does and prints its contents:
//! record counts, the fund list, the default user's holdings and today's
//! prices.
//!
//! ```bash
//! API_RNG_SEED=42 cargo run --bin portfolio-check
//! ```

use anyhow::Context;

use core_kernel::money::{format_amount, format_percent, format_shares};
use domain_fund::PortfolioRepository;
use infra_store::sample_store;
use interface_api::config::ApiConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env().context("invalid API configuration")?;
    let seed = config.seed_config();
    let store = sample_store(&seed).context("failed to seed the portfolio store")?;

    let stats = store.stats();
    println!("=== Store ({}) ===", seed.as_of);
    println!(
        "funds: {}, holdings: {}, prices: {}, top holdings: {}, realized profits: {}",
        stats.funds, stats.holdings, stats.prices, stats.top_holdings, stats.realized_profits
    );

    println!("\n=== Funds ===");
    for fund in store.funds() {
        println!("{} {} {} ({}, {})", fund.id, fund.code, fund.name, fund.fund_type, fund.manager);
    }

    let user = config.default_user();
    println!("\n=== Holdings of {} ===", user);
    for holding in store.holdings_for_user(&user) {
        let name = store
            .fund(&holding.fund_id)
            .map(|f| f.name)
            .unwrap_or_else(|| "?".to_string());
        println!(
            "{} {}: {}份 @ {}",
            holding.id,
            name,
            format_shares(holding.shares),
            format_amount(holding.cost_price)
        );
    }

    println!("\n=== Prices on {} ===", seed.as_of);
    for fund in store.funds() {
        match store.latest_price(&fund.id).filter(|p| p.date == seed.as_of) {
            Some(price) => println!(
                "{} nav {} change {}%",
                fund.name,
                format_amount(price.nav),
                format_percent(price.change_percent)
            ),
            None => println!("{} no price", fund.name),
        }
    }

    Ok(())
}
