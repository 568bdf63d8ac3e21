use chrono::{TimeZone, Utc};
use edgefinder::market_fetcher::fixture_markets;
use edgefinder::odds_fetcher::fixture_odds;
use edgefinder::pipeline::{build_matched_entries, rank};
use std::time::Instant;

fn main() {
    let base = Utc.with_ymd_and_hms(2025, 10, 12, 12, 0, 0).unwrap();
    let markets = fixture_markets(base);
    let odds = fixture_odds(base);

    let start = Instant::now();
    for _ in 0..10000 {
        let entries = build_matched_entries(&markets, &odds);
        let _ = rank(entries);
    }
    let duration = start.elapsed();
    println!("Time taken: {:?}", duration);
}
