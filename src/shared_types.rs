use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A canonical sports game, built by the matcher once both team names have
/// been resolved. Team fields always hold canonical ids, never raw text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub sport: String,
    pub away_team: String,
    pub home_team: String,
    pub start_time: DateTime<Utc>,
    pub game_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketSide {
    Yes,
    No,
}

/// One prediction-market outcome quote. `last_price` is the traded
/// probability, clamped to [0.01, 0.99] at the fetch boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketQuote {
    pub id: String,
    pub title: String,
    pub event_time: DateTime<Utc>,
    pub last_price: f64,
    pub volume: u64,
    pub side: MarketSide,
    pub outcome: String,
}

/// Sportsbook odds for one (game, bookmaker) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportsbookQuote {
    pub game_id: String,
    pub sport: String,
    pub away_team: String,
    pub home_team: String,
    pub start_time: DateTime<Utc>,
    pub book_name: String,
    pub moneyline_away: Option<i32>,
    pub moneyline_home: Option<i32>,
    pub spread_away: Option<f64>,
    pub spread_home: Option<f64>,
    pub total_over: Option<f64>,
    pub total_under: Option<f64>,
}

/// A prediction-market quote joined with every sportsbook quote for the same
/// game, plus the derived probability metrics. Built once, never mutated;
/// ranking only reorders clones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedEntry {
    pub game: Game,
    pub market: MarketQuote,
    pub books: Vec<SportsbookQuote>,
    pub prediction_prob: f64,
    pub book_probs: Vec<f64>,
    pub min_book_prob: f64,
    pub avg_book_prob: f64,
    pub max_book_prob: f64,
    pub discrepancy_abs: f64,
    pub discrepancy_vs_best: f64,
    pub volume: u64,
    pub payout_ratio: f64,
    pub expected_value: f64,
}

/// A matched entry placed at a position in an ordered section. `rank` is
/// positional only and is reassigned whenever the entry enters a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub entry: MatchedEntry,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub rankings: Vec<RankingEntry>,
}

/// The complete report for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub timezone: String,
    pub sections: Vec<Section>,
    pub local_pick: Option<MatchedEntry>,
    pub total_games: usize,
    pub total_markets: usize,
    pub total_books: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub market_api_base_url: String,
    pub odds_api_base_url: String,
    pub odds_api_key: String,
    pub timezone: String,
    pub sports_filter: Vec<String>,
    pub lookahead_hours: i64,
    pub min_volume: u64,
    pub top_n: usize,
    pub use_fixtures: bool,
}
