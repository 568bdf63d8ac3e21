//! Joins prediction markets with sportsbook odds, computes discrepancy
//! metrics, and assembles the ranked report.
//!
//! Every data-quality failure here is a per-record skip with a warning; the
//! pipeline never fails outright and zero input produces a valid empty
//! report.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::aliases::{find_team_match, is_local_team};
use crate::matcher::{create_game, infer_sport};
use crate::odds_math::{
    american_to_probability, discrepancy, edge_stats, expected_value, payout_ratio,
};
use crate::shared_types::{
    Config, Game, MarketQuote, MatchedEntry, RankingEntry, Report, Section, SportsbookQuote,
};

/// Minimum payout ratio for the high-payout section.
const PAYOUT_FLOOR: f64 = 2.0;

fn quote_matches_game(game: &Game, quote: &SportsbookQuote) -> bool {
    if quote.sport != game.sport {
        return false;
    }
    // Resolution is recomputed per comparison; book feeds spell team names
    // differently per book.
    let away = find_team_match(&quote.away_team, &game.sport);
    let home = find_team_match(&quote.home_team, &game.sport);
    match (away, home) {
        (Some(a), Some(h)) => {
            (a == game.away_team && h == game.home_team)
                || (a == game.home_team && h == game.away_team)
        }
        _ => false,
    }
}

/// Join each market quote with every sportsbook quote for the same game and
/// compute the per-entry probability metrics. Markets that yield no game, no
/// matching quotes, or no derivable book probability are skipped.
pub fn build_matched_entries(
    markets: &[MarketQuote],
    quotes: &[SportsbookQuote],
) -> Vec<MatchedEntry> {
    let mut entries = Vec::new();

    for market in markets {
        let sport = infer_sport(&market.title);
        debug!(market = %market.title, sport, "processing market");

        let Some(game) = create_game(&market.title, market.event_time, sport) else {
            warn!(market = %market.title, "could not extract a game from market title");
            continue;
        };

        let matching: Vec<SportsbookQuote> = quotes
            .iter()
            .filter(|quote| quote_matches_game(&game, quote))
            .cloned()
            .collect();

        if matching.is_empty() {
            warn!(
                away = %game.away_team,
                home = %game.home_team,
                sport = %game.sport,
                "no matching sportsbook quotes for game"
            );
            continue;
        }

        let mut book_probs = Vec::new();
        for quote in &matching {
            if let Some(ml) = quote.moneyline_away {
                book_probs.push(american_to_probability(ml));
            }
            if let Some(ml) = quote.moneyline_home {
                book_probs.push(american_to_probability(ml));
            }
        }

        if book_probs.is_empty() {
            warn!(market = %market.title, "matching quotes carry no moneylines");
            continue;
        }

        let prediction_prob = market.last_price;
        let (min_book_prob, avg_book_prob, max_book_prob) = edge_stats(&book_probs);

        entries.push(MatchedEntry {
            discrepancy_abs: discrepancy(prediction_prob, avg_book_prob),
            discrepancy_vs_best: prediction_prob - min_book_prob,
            payout_ratio: payout_ratio(prediction_prob),
            expected_value: expected_value(prediction_prob, avg_book_prob, 1.0),
            volume: market.volume,
            game,
            market: market.clone(),
            books: matching,
            prediction_prob,
            book_probs,
            min_book_prob,
            avg_book_prob,
            max_book_prob,
        });
    }

    entries
}

/// Rank entries by absolute discrepancy, descending. The sort is stable, so
/// equal scores keep their input order.
pub fn rank(entries: Vec<MatchedEntry>) -> Vec<RankingEntry> {
    let mut rankings: Vec<RankingEntry> = entries
        .into_iter()
        .map(|entry| RankingEntry {
            rank: 0,
            score: entry.discrepancy_abs,
            entry,
        })
        .collect();

    rankings.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (i, ranking) in rankings.iter_mut().enumerate() {
        ranking.rank = i + 1;
    }

    rankings
}

fn section(title: &str, description: &str, mut rankings: Vec<RankingEntry>) -> Section {
    for (i, ranking) in rankings.iter_mut().enumerate() {
        ranking.rank = i + 1;
    }
    Section {
        title: title.to_string(),
        description: description.to_string(),
        rankings,
    }
}

/// Build the three report sections as independent views over the ranked set.
/// An entry may appear in more than one section; ranks are positional within
/// each section.
pub fn build_sections(rankings: &[RankingEntry], top_n: usize) -> Vec<Section> {
    let by_discrepancy: Vec<RankingEntry> = rankings.iter().take(top_n).cloned().collect();

    let mut by_volume: Vec<RankingEntry> = rankings.to_vec();
    by_volume.sort_by(|a, b| b.entry.volume.cmp(&a.entry.volume));
    by_volume.truncate(top_n);

    let mut by_payout: Vec<RankingEntry> = rankings
        .iter()
        .filter(|r| r.entry.payout_ratio >= PAYOUT_FLOOR)
        .cloned()
        .collect();
    by_payout.sort_by(|a, b| b.entry.volume.cmp(&a.entry.volume));
    by_payout.truncate(top_n);

    vec![
        section(
            "Biggest Discrepancies",
            "Games where the prediction market differs most from the sportsbook consensus",
            by_discrepancy,
        ),
        section(
            "Most Popular Markets",
            "Games with the highest prediction-market volume",
            by_volume,
        ),
        section(
            "Highest Payout Potential",
            "Markets paying at least 2:1 at the quoted price",
            by_payout,
        ),
    ]
}

/// Pick the most relevant entry involving a home-market team: highest
/// volume-weighted discrepancy. The first maximum wins on ties.
pub fn find_local_pick<F>(entries: &[MatchedEntry], is_local: F) -> Option<MatchedEntry>
where
    F: Fn(&str, &str) -> bool,
{
    let mut best: Option<(&MatchedEntry, f64)> = None;

    for entry in entries {
        let sport = &entry.game.sport;
        if !is_local(&entry.game.away_team, sport) && !is_local(&entry.game.home_team, sport) {
            continue;
        }
        let relevance = entry.volume as f64 * entry.discrepancy_abs;
        if best.map_or(true, |(_, score)| relevance > score) {
            best = Some((entry, relevance));
        }
    }

    best.map(|(entry, _)| entry.clone())
}

/// Run the full pipeline over already-fetched collections. Returns the
/// sectioned report together with the complete ranking, which flat exports
/// consume untruncated.
pub fn run(
    config: &Config,
    markets: &[MarketQuote],
    quotes: &[SportsbookQuote],
) -> (Report, Vec<RankingEntry>) {
    let total_markets = markets.len();
    let total_books = quotes.len();

    let eligible: Vec<MarketQuote> = markets
        .iter()
        .filter(|m| m.volume >= config.min_volume)
        .cloned()
        .collect();
    if eligible.len() < total_markets {
        info!(
            dropped = total_markets - eligible.len(),
            min_volume = config.min_volume,
            "dropped low-volume markets"
        );
    }

    let entries = build_matched_entries(&eligible, quotes);
    info!(matched = entries.len(), total_markets, total_books, "matching complete");

    let local_pick = find_local_pick(&entries, is_local_team);
    let rankings = rank(entries);
    let sections = build_sections(&rankings, config.top_n);

    let report = Report {
        generated_at: Utc::now(),
        timezone: config.timezone.clone(),
        sections,
        local_pick,
        total_games: rankings.len(),
        total_markets,
        total_books,
    };

    (report, rankings)
}
