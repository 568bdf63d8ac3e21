//! Extracts team pairs from free-text market titles and matches games
//! across data sources.

use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::aliases::{self, find_team_match, UNKNOWN_SPORT};
use crate::shared_types::Game;

lazy_static! {
    // Tried in order; the first pattern whose two captures both resolve wins.
    static ref SEPARATOR_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(.+?)\s+vs\.?\s+(.+)").unwrap(),
        Regex::new(r"(?i)(.+?)\s+@\s+(.+)").unwrap(),
        Regex::new(r"(?i)(.+?)\s+at\s+(.+)").unwrap(),
        Regex::new(r"(?i)(.+?)\s+over\s+(.+)").unwrap(),
        Regex::new(r"(?i)(.+?)\s+beats?\s+(.+)").unwrap(),
        Regex::new(r"(?i)(.+?)\s+defeats?\s+(.+)").unwrap(),
        Regex::new(r"(?i)(.+?)\s+wins?\s+against\s+(.+)").unwrap(),
    ];
}

/// Sport keyword tables, checked in order against the lowercased title.
const SPORT_KEYWORDS: &[(&str, &[&str])] = &[
    (aliases::NFL, &["seahawks", "49ers", "nfl", "football"]),
    (aliases::MLB, &["mariners", "astros", "mlb", "baseball"]),
    (aliases::NBA, &["lakers", "warriors", "nba", "basketball"]),
    (aliases::NHL, &["kraken", "canucks", "nhl", "hockey"]),
    (aliases::NCAAF, &["huskies", "ducks", "ncaa", "college"]),
];

/// Infer the sport from a market title. Mis-inference cascades into a
/// resolution failure downstream, so "unknown" is a terminal answer for the
/// market, not an error.
pub fn infer_sport(title: &str) -> &'static str {
    let title_lower = title.to_lowercase();
    for (sport, keywords) in SPORT_KEYWORDS {
        if keywords.iter().any(|kw| title_lower.contains(kw)) {
            return sport;
        }
    }
    UNKNOWN_SPORT
}

/// Split a title on the first separator pattern that yields two resolvable
/// team names. A pattern that matches textually but leaves either side
/// unresolved falls through to the next pattern.
pub fn extract_two_teams(title: &str, sport: &str) -> Option<(&'static str, &'static str)> {
    for pattern in SEPARATOR_PATTERNS.iter() {
        let Some(caps) = pattern.captures(title) else {
            continue;
        };
        let first = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        let second = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");

        if let (Some(team1), Some(team2)) = (
            find_team_match(first, sport),
            find_team_match(second, sport),
        ) {
            return Some((team1, team2));
        }
    }
    None
}

/// Build a canonical Game from a market title. The second mentioned team is
/// treated as home; titles carry no venue data, so this is a positional
/// heuristic only.
pub fn create_game(title: &str, event_time: DateTime<Utc>, sport: &str) -> Option<Game> {
    let (away, home) = extract_two_teams(title, sport)?;
    Some(Game {
        sport: sport.to_string(),
        away_team: away.to_string(),
        home_team: home.to_string(),
        start_time: event_time,
        game_id: None,
    })
}

fn same_team_pair(a: &Game, b: &Game) -> bool {
    (a.away_team == b.away_team && a.home_team == b.home_team)
        || (a.away_team == b.home_team && a.home_team == b.away_team)
}

/// Pair games from two collections by sport, team pair (either order), and a
/// start-time tolerance. Greedy in input order; each B game can be claimed
/// at most once. Unmatched A games are dropped.
pub fn match_within_timeframe(
    games_a: &[Game],
    games_b: &[Game],
    tolerance: Duration,
) -> Vec<(Game, Game)> {
    let mut matches = Vec::new();
    let mut claimed = vec![false; games_b.len()];

    for a in games_a {
        for (idx, b) in games_b.iter().enumerate() {
            if claimed[idx] || a.sport != b.sport || !same_team_pair(a, b) {
                continue;
            }
            let time_diff = (a.start_time - b.start_time).abs();
            if time_diff <= tolerance {
                claimed[idx] = true;
                matches.push((a.clone(), b.clone()));
                break;
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::{MLB, NBA, NFL, NHL};
    use chrono::TimeZone;

    fn t(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 12, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_infer_sport() {
        assert_eq!(infer_sport("Seahawks vs 49ers"), NFL);
        assert_eq!(infer_sport("Lakers vs Warriors"), NBA);
        assert_eq!(infer_sport("Mariners @ Astros"), MLB);
        assert_eq!(infer_sport("Kraken at Canucks"), NHL);
        assert_eq!(infer_sport("Who wins the election?"), "unknown");
    }

    #[test]
    fn test_extract_two_teams_vs() {
        assert_eq!(
            extract_two_teams("Seattle Seahawks vs San Francisco 49ers", NFL),
            Some(("seahawks", "49ers"))
        );
        assert_eq!(
            extract_two_teams("Seahawks vs. 49ers", NFL),
            Some(("seahawks", "49ers"))
        );
    }

    #[test]
    fn test_extract_two_teams_at_sign() {
        assert_eq!(
            extract_two_teams("Lakers @ Warriors", NBA),
            Some(("lakers", "warriors"))
        );
    }

    #[test]
    fn test_extract_two_teams_question_title() {
        assert_eq!(
            extract_two_teams("Will Seattle Seahawks beat San Francisco 49ers?", NFL),
            Some(("seahawks", "49ers"))
        );
    }

    #[test]
    fn test_extract_requires_both_teams_to_resolve() {
        assert_eq!(extract_two_teams("Seahawks at Dusk", NFL), None);
        assert_eq!(extract_two_teams("Random Market Title", NFL), None);
    }

    #[test]
    fn test_create_game_positional_home_away() {
        let game = create_game("Seattle Seahawks vs San Francisco 49ers", t(20), NFL).unwrap();
        assert_eq!(game.sport, NFL);
        assert_eq!(game.away_team, "seahawks");
        assert_eq!(game.home_team, "49ers");
        assert_eq!(game.start_time, t(20));

        assert!(create_game("Random Market Title", t(20), NFL).is_none());
    }

    #[test]
    fn test_match_within_timeframe() {
        let a = vec![
            create_game("Seahawks vs 49ers", t(20), NFL).unwrap(),
            create_game("Lakers vs Warriors", t(21), NBA).unwrap(),
        ];
        let b = vec![
            // Reversed team order and a 30-minute offset still match.
            Game {
                sport: NFL.to_string(),
                away_team: "49ers".to_string(),
                home_team: "seahawks".to_string(),
                start_time: t(20) + Duration::minutes(30),
                game_id: None,
            },
            create_game("Lakers vs Warriors", t(22), NBA).unwrap(),
        ];

        let matches = match_within_timeframe(&a, &b, Duration::hours(2));
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].0.sport, NFL);
        assert_eq!(matches[1].0.sport, NBA);
    }

    #[test]
    fn test_match_rejects_outside_tolerance() {
        let a = vec![create_game("Seahawks vs 49ers", t(8), NFL).unwrap()];
        let b = vec![create_game("Seahawks vs 49ers", t(12), NFL).unwrap()];
        assert!(match_within_timeframe(&a, &b, Duration::hours(2)).is_empty());
    }

    #[test]
    fn test_matched_game_is_claimed_once() {
        let a = vec![
            create_game("Seahawks vs 49ers", t(20), NFL).unwrap(),
            create_game("Seahawks vs 49ers", t(20), NFL).unwrap(),
        ];
        let b = vec![create_game("Seahawks vs 49ers", t(20), NFL).unwrap()];

        let matches = match_within_timeframe(&a, &b, Duration::hours(2));
        assert_eq!(matches.len(), 1);
    }
}
