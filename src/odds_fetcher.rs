use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use crate::aliases::{MLB, NBA, NCAAF, NFL, NHL};
use crate::shared_types::{Config, SportsbookQuote};

#[derive(Deserialize, Debug)]
struct ApiGame {
    id: String,
    sport_key: String,
    commence_time: String,
    home_team: String,
    away_team: String,
    #[serde(default)]
    bookmakers: Vec<ApiBookmaker>,
}

#[derive(Deserialize, Debug)]
struct ApiBookmaker {
    title: String,
    #[serde(default)]
    markets: Vec<ApiBookMarket>,
}

#[derive(Deserialize, Debug)]
struct ApiBookMarket {
    key: String,
    #[serde(default)]
    outcomes: Vec<ApiOutcome>,
}

#[derive(Deserialize, Debug)]
struct ApiOutcome {
    name: String,
    price: Option<f64>,
    point: Option<f64>,
}

/// One quote per (game, bookmaker) pair. Bookmakers without a moneyline are
/// dropped.
fn parse_game(game: ApiGame) -> Vec<SportsbookQuote> {
    let start_time = match DateTime::parse_from_rfc3339(&game.commence_time) {
        Ok(t) => t.with_timezone(&Utc),
        Err(e) => {
            warn!(game = %game.id, error = %e, "unparsable commence time");
            return Vec::new();
        }
    };

    let mut quotes = Vec::new();

    for bookmaker in &game.bookmakers {
        let mut moneyline_away = None;
        let mut moneyline_home = None;
        let mut spread_away = None;
        let mut spread_home = None;
        let mut total_over = None;
        let mut total_under = None;

        for market in &bookmaker.markets {
            match market.key.as_str() {
                "h2h" => {
                    for outcome in &market.outcomes {
                        let price = outcome.price.map(|p| p as i32);
                        if outcome.name == game.away_team {
                            moneyline_away = price;
                        } else if outcome.name == game.home_team {
                            moneyline_home = price;
                        }
                    }
                }
                "spreads" => {
                    for outcome in &market.outcomes {
                        if outcome.name == game.away_team {
                            spread_away = outcome.point;
                        } else if outcome.name == game.home_team {
                            spread_home = outcome.point;
                        }
                    }
                }
                "totals" => {
                    for outcome in &market.outcomes {
                        if outcome.name == "Over" {
                            total_over = outcome.point;
                        } else if outcome.name == "Under" {
                            total_under = outcome.point;
                        }
                    }
                }
                _ => {}
            }
        }

        if moneyline_away.is_none() && moneyline_home.is_none() {
            continue;
        }

        quotes.push(SportsbookQuote {
            game_id: game.id.clone(),
            sport: game.sport_key.clone(),
            away_team: game.away_team.clone(),
            home_team: game.home_team.clone(),
            start_time,
            book_name: bookmaker.title.clone(),
            moneyline_away,
            moneyline_home,
            spread_away,
            spread_home,
            total_over,
            total_under,
        });
    }

    quotes
}

async fn fetch_sport_odds(
    client: &reqwest::Client,
    config: &Config,
    sport: &str,
) -> Result<Vec<SportsbookQuote>> {
    let games: Vec<ApiGame> = client
        .get(format!("{}/sports/{}/odds", config.odds_api_base_url, sport))
        .query(&[
            ("apiKey", config.odds_api_key.as_str()),
            ("regions", "us"),
            ("markets", "h2h,spreads,totals"),
            ("oddsFormat", "american"),
            ("dateFormat", "iso"),
        ])
        .header("User-Agent", "EdgeFinder/1.0")
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let horizon = Utc::now() + Duration::hours(config.lookahead_hours);
    Ok(games
        .into_iter()
        .flat_map(parse_game)
        .filter(|q| q.start_time <= horizon)
        .collect())
}

/// Fetch odds for every configured sport. A failing sport logs and is
/// skipped; the run continues with whatever was fetched.
pub async fn fetch_sportsbook_odds(config: &Config) -> Result<Vec<SportsbookQuote>> {
    if config.use_fixtures {
        return Ok(fixture_odds(Utc::now()));
    }

    let client = reqwest::Client::new();
    let mut all_odds = Vec::new();

    for sport in &config.sports_filter {
        match fetch_sport_odds(&client, config, sport).await {
            Ok(odds) => {
                info!(sport = %sport, quotes = odds.len(), "fetched sportsbook odds");
                all_odds.extend(odds);
            }
            Err(e) => {
                warn!(sport = %sport, error = %e, "failed to fetch odds for sport");
            }
        }
    }

    Ok(all_odds)
}

/// Deterministic sample quotes matching the fixture markets.
pub fn fixture_odds(base_time: DateTime<Utc>) -> Vec<SportsbookQuote> {
    let quote = |game_id: &str,
                 sport: &str,
                 away: &str,
                 home: &str,
                 hours: i64,
                 book: &str,
                 ml_away: i32,
                 ml_home: i32| SportsbookQuote {
        game_id: game_id.to_string(),
        sport: sport.to_string(),
        away_team: away.to_string(),
        home_team: home.to_string(),
        start_time: base_time + Duration::hours(hours),
        book_name: book.to_string(),
        moneyline_away: Some(ml_away),
        moneyline_home: Some(ml_home),
        spread_away: Some(2.5),
        spread_home: Some(-2.5),
        total_over: Some(45.5),
        total_under: Some(45.5),
    };

    vec![
        quote("fixture-g1", NFL, "Seattle Seahawks", "San Francisco 49ers", 24, "DraftKings", 120, -140),
        quote("fixture-g1", NFL, "Seattle Seahawks", "San Francisco 49ers", 24, "FanDuel", 115, -135),
        quote("fixture-g2", NBA, "Los Angeles Lakers", "Golden State Warriors", 36, "DraftKings", -110, -110),
        quote("fixture-g3", MLB, "Seattle Mariners", "Houston Astros", 12, "BetMGM", 130, -150),
        quote("fixture-g4", NHL, "Seattle Kraken", "Vancouver Canucks", 30, "DraftKings", -120, 100),
        quote("fixture-g5", NCAAF, "Washington Huskies", "Oregon Ducks", 48, "FanDuel", 110, -130),
    ]
}
