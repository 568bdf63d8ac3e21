use anyhow::Result;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use edgefinder::config::load_config;
use edgefinder::market_fetcher::fetch_prediction_markets;
use edgefinder::odds_fetcher::fetch_sportsbook_odds;
use edgefinder::pipeline;
use edgefinder::render::{render_csv, render_markdown};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config();
    info!(
        use_fixtures = config.use_fixtures,
        sports = ?config.sports_filter,
        lookahead_hours = config.lookahead_hours,
        "starting EdgeFinder"
    );

    let markets = fetch_prediction_markets(&config).await?;
    let odds = fetch_sportsbook_odds(&config).await?;
    info!(markets = markets.len(), quotes = odds.len(), "fetched upstream data");

    let (report, rankings) = pipeline::run(&config, &markets, &odds);

    println!("{}", render_markdown(&report));

    let csv_path = "edgefinder_report.csv";
    std::fs::write(csv_path, render_csv(&rankings))?;
    info!(path = csv_path, rows = rankings.len(), "wrote CSV export");

    Ok(())
}
