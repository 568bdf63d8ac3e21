use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tracing::warn;

use crate::shared_types::{Config, MarketQuote, MarketSide};

#[derive(Deserialize, Debug)]
struct ApiMarketsResponse {
    #[serde(default)]
    markets: Vec<ApiMarket>,
}

#[derive(Deserialize, Debug)]
struct ApiMarket {
    id: String,
    title: String,
    event_time: Option<String>,
    last_price: Option<f64>,
    #[serde(default)]
    volume: u64,
    market_side: Option<String>,
    #[serde(default)]
    outcome_description: String,
}

fn parse_market(data: ApiMarket) -> Option<MarketQuote> {
    let event_time_str = data.event_time?;
    let event_time = match DateTime::parse_from_rfc3339(&event_time_str) {
        Ok(t) => t.with_timezone(&Utc),
        Err(e) => {
            warn!(market = %data.id, error = %e, "unparsable market event time");
            return None;
        }
    };

    let last_price = data.last_price?;
    if last_price <= 0.0 || last_price >= 1.0 {
        warn!(market = %data.id, last_price, "market price out of range");
        return None;
    }

    let side = match data.market_side.as_deref() {
        Some("NO") | Some("no") => MarketSide::No,
        _ => MarketSide::Yes,
    };

    Some(MarketQuote {
        id: data.id,
        title: data.title,
        event_time,
        last_price: last_price.clamp(0.01, 0.99),
        volume: data.volume,
        side,
        outcome: data.outcome_description,
    })
}

/// Fetch open prediction markets inside the configured lookahead window.
/// Malformed records are skipped with a warning, never fatal.
pub async fn fetch_prediction_markets(config: &Config) -> Result<Vec<MarketQuote>> {
    if config.use_fixtures {
        return Ok(fixture_markets(Utc::now()));
    }

    let client = reqwest::Client::new();
    let response: ApiMarketsResponse = client
        .get(format!("{}/markets", config.market_api_base_url))
        .query(&[("status", "open"), ("limit", "200")])
        .header("User-Agent", "EdgeFinder/1.0")
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let horizon = Utc::now() + Duration::hours(config.lookahead_hours);
    let markets: Vec<MarketQuote> = response
        .markets
        .into_iter()
        .filter_map(parse_market)
        .filter(|m| m.event_time <= horizon)
        .collect();

    Ok(markets)
}

/// Deterministic sample markets, anchored to `base_time` so tests are
/// reproducible.
pub fn fixture_markets(base_time: DateTime<Utc>) -> Vec<MarketQuote> {
    let fixture = |id: &str, title: &str, hours: i64, price: f64, volume: u64, outcome: &str| {
        MarketQuote {
            id: id.to_string(),
            title: title.to_string(),
            event_time: base_time + Duration::hours(hours),
            last_price: price,
            volume,
            side: MarketSide::Yes,
            outcome: outcome.to_string(),
        }
    };

    vec![
        fixture(
            "fixture-nfl-sea",
            "Seattle Seahawks vs San Francisco 49ers",
            24,
            0.45,
            1500,
            "Seahawks win",
        ),
        fixture(
            "fixture-nba-lal",
            "Los Angeles Lakers vs Golden State Warriors",
            36,
            0.62,
            2000,
            "Lakers win",
        ),
        fixture(
            "fixture-mlb-sea",
            "Seattle Mariners vs Houston Astros",
            12,
            0.30,
            800,
            "Mariners win",
        ),
        fixture(
            "fixture-nhl-sea",
            "Seattle Kraken vs Vancouver Canucks",
            30,
            0.55,
            1200,
            "Kraken win",
        ),
        fixture(
            "fixture-ncaaf-uw",
            "Washington Huskies vs Oregon Ducks",
            48,
            0.42,
            3000,
            "Huskies win",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 12, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_fixture_markets_are_deterministic() {
        let a = fixture_markets(base());
        let b = fixture_markets(base());
        assert_eq!(a.len(), 5);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.event_time, y.event_time);
        }
    }

    #[test]
    fn test_parse_market_from_wire_json() {
        let raw = r#"{
            "id": "mkt-1",
            "title": "Seahawks vs 49ers",
            "event_time": "2025-10-13T20:00:00Z",
            "last_price": 0.45,
            "volume": 1500,
            "market_side": "YES",
            "outcome_description": "Seahawks win"
        }"#;
        let api: ApiMarket = serde_json::from_str(raw).unwrap();
        let quote = parse_market(api).unwrap();
        assert_eq!(quote.id, "mkt-1");
        assert!((quote.last_price - 0.45).abs() < 1e-9);
        assert_eq!(quote.volume, 1500);
        assert_eq!(quote.side, MarketSide::Yes);
    }

    #[test]
    fn test_parse_market_skips_bad_records() {
        let bad_time: ApiMarket = serde_json::from_str(
            r#"{"id": "m", "title": "t", "event_time": "not-a-time", "last_price": 0.5}"#,
        )
        .unwrap();
        assert!(parse_market(bad_time).is_none());

        let bad_price: ApiMarket = serde_json::from_str(
            r#"{"id": "m", "title": "t", "event_time": "2025-10-13T20:00:00Z", "last_price": 1.2}"#,
        )
        .unwrap();
        assert!(parse_market(bad_price).is_none());

        let no_price: ApiMarket = serde_json::from_str(
            r#"{"id": "m", "title": "t", "event_time": "2025-10-13T20:00:00Z"}"#,
        )
        .unwrap();
        assert!(parse_market(no_price).is_none());
    }
}
