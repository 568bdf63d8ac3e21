use std::env;

use crate::shared_types::Config;

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub(crate) fn parse_sports_filter(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Load configuration from the environment. Call `dotenv().ok()` first if a
/// `.env` file should be honored.
pub fn load_config() -> Config {
    Config {
        market_api_base_url: env_or(
            "MARKET_API_BASE_URL",
            "https://api.elections.kalshi.com/trade-api/v2",
        ),
        odds_api_base_url: env_or("ODDS_API_BASE_URL", "https://api.the-odds-api.com/v4"),
        odds_api_key: env_or("ODDS_API_KEY", ""),
        timezone: env_or("EDGEFINDER_TIMEZONE", "America/Los_Angeles"),
        sports_filter: parse_sports_filter(&env_or(
            "SPORTS_FILTER",
            "baseball_mlb,americanfootball_nfl,basketball_nba,icehockey_nhl",
        )),
        lookahead_hours: env_or("LOOKAHEAD_HOURS", "48").parse().unwrap_or(48),
        min_volume: env_or("MIN_VOLUME", "100").parse().unwrap_or(100),
        top_n: env_or("TOP_N", "10").parse().unwrap_or(10),
        use_fixtures: env_or("USE_FIXTURES", "false").to_lowercase() == "true",
    }
}
