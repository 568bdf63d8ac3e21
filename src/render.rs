//! Report rendering: a markdown digest for humans and a flat CSV export.

use crate::shared_types::{MatchedEntry, RankingEntry, Report};

pub const CSV_HEADER: [&str; 16] = [
    "rank",
    "sport",
    "away_team",
    "home_team",
    "start_time",
    "prediction_prob",
    "min_book_prob",
    "avg_book_prob",
    "max_book_prob",
    "discrepancy_abs",
    "discrepancy_vs_best",
    "volume",
    "payout_ratio",
    "expected_value",
    "market_title",
    "book_names",
];

fn book_names(entry: &MatchedEntry) -> String {
    let mut names: Vec<&str> = Vec::new();
    for book in &entry.books {
        if !names.contains(&book.book_name.as_str()) {
            names.push(&book.book_name);
        }
    }
    names.join(", ")
}

fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// One row per ranked entry, in ranking order.
pub fn csv_rows(rankings: &[RankingEntry]) -> Vec<Vec<String>> {
    rankings
        .iter()
        .map(|ranking| {
            let entry = &ranking.entry;
            vec![
                ranking.rank.to_string(),
                entry.game.sport.clone(),
                entry.game.away_team.clone(),
                entry.game.home_team.clone(),
                entry.game.start_time.to_rfc3339(),
                format!("{:.4}", entry.prediction_prob),
                format!("{:.4}", entry.min_book_prob),
                format!("{:.4}", entry.avg_book_prob),
                format!("{:.4}", entry.max_book_prob),
                format!("{:.4}", entry.discrepancy_abs),
                format!("{:.4}", entry.discrepancy_vs_best),
                entry.volume.to_string(),
                format!("{:.4}", entry.payout_ratio),
                format!("{:.4}", entry.expected_value),
                entry.market.title.clone(),
                book_names(entry),
            ]
        })
        .collect()
}

pub fn render_csv(rankings: &[RankingEntry]) -> String {
    let mut lines = Vec::with_capacity(rankings.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for row in csv_rows(rankings) {
        let escaped: Vec<String> = row.iter().map(|f| escape_csv_field(f)).collect();
        lines.push(escaped.join(","));
    }
    lines.join("\n")
}

fn render_rankings_table(rankings: &[RankingEntry]) -> String {
    if rankings.is_empty() {
        return "*No data available*".to_string();
    }

    let mut lines = vec![
        "| Rank | Sport | Game | Start Time | Pred Prob | Books (min/avg/max) | Discrepancy | Volume | Payout |".to_string(),
        "|------|-------|------|------------|-----------|---------------------|-------------|--------|--------|".to_string(),
    ];

    for ranking in rankings {
        let entry = &ranking.entry;
        lines.push(format!(
            "| {} | {} | {} @ {} | {} | {:.3} | {:.3}/{:.3}/{:.3} | {:.3} | {} | {:.2}x |",
            ranking.rank,
            entry.game.sport,
            entry.game.away_team,
            entry.game.home_team,
            entry.game.start_time.format("%Y-%m-%d %H:%M UTC"),
            entry.prediction_prob,
            entry.min_book_prob,
            entry.avg_book_prob,
            entry.max_book_prob,
            entry.discrepancy_abs,
            entry.volume,
            entry.payout_ratio,
        ));
    }

    lines.join("\n")
}

pub fn render_markdown(report: &Report) -> String {
    let mut content = Vec::new();

    content.push("# EdgeFinder: Prediction Markets vs Sportsbooks".to_string());
    content.push(String::new());
    content.push(format!(
        "**Generated:** {} ({})",
        report.generated_at.format("%Y-%m-%d %H:%M UTC"),
        report.timezone
    ));
    content.push(String::new());
    content.push(format!(
        "**Summary:** {} matched games, {} prediction markets, {} sportsbook quotes",
        report.total_games, report.total_markets, report.total_books
    ));
    content.push(String::new());

    for section in &report.sections {
        content.push(format!("## {}", section.title));
        content.push(String::new());
        content.push(section.description.clone());
        content.push(String::new());
        content.push(render_rankings_table(&section.rankings));
        content.push(String::new());
    }

    if let Some(pick) = &report.local_pick {
        content.push("## Hometown Favorite".to_string());
        content.push(String::new());
        content.push(format!(
            "**{} @ {}** ({}) — prediction {:.3} vs books avg {:.3}, volume {}",
            pick.game.away_team,
            pick.game.home_team,
            pick.game.sport,
            pick.prediction_prob,
            pick.avg_book_prob,
            pick.volume,
        ));
        content.push(String::new());
    }

    content.push("---".to_string());
    content.push(String::new());
    content.push(
        "*EdgeFinder compares prediction-market prices against sportsbook odds to surface \
         the largest discrepancies. Informational only; sports betting involves risk.*"
            .to_string(),
    );

    content.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{build_matched_entries, build_sections, rank};
    use crate::shared_types::{MarketQuote, MarketSide, Report, SportsbookQuote};
    use chrono::{TimeZone, Utc};

    fn sample_rankings() -> Vec<RankingEntry> {
        let start = Utc.with_ymd_and_hms(2025, 10, 12, 20, 0, 0).unwrap();
        let markets = vec![MarketQuote {
            id: "m1".to_string(),
            title: "Seahawks vs 49ers, week 6".to_string(),
            event_time: start,
            last_price: 0.45,
            volume: 1500,
            side: MarketSide::Yes,
            outcome: "Seahawks win".to_string(),
        }];
        let quote = |book: &str, ml_away: i32, ml_home: i32| SportsbookQuote {
            game_id: "g1".to_string(),
            sport: crate::aliases::NFL.to_string(),
            away_team: "Seattle Seahawks".to_string(),
            home_team: "San Francisco 49ers".to_string(),
            start_time: start,
            book_name: book.to_string(),
            moneyline_away: Some(ml_away),
            moneyline_home: Some(ml_home),
            spread_away: None,
            spread_home: None,
            total_over: None,
            total_under: None,
        };
        let quotes = vec![quote("DraftKings", 120, -140), quote("DraftKings", 118, -138)];
        rank(build_matched_entries(&markets, &quotes))
    }

    #[test]
    fn test_csv_rows_shape() {
        let rankings = sample_rankings();
        let rows = csv_rows(&rankings);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), CSV_HEADER.len());
        assert_eq!(rows[0][0], "1");
        assert_eq!(rows[0][1], "americanfootball_nfl");
        assert_eq!(rows[0][2], "seahawks");
        assert_eq!(rows[0][3], "49ers");
        assert_eq!(rows[0][5], "0.4500");
        assert_eq!(rows[0][11], "1500");
        // Duplicate book names collapse.
        assert_eq!(rows[0][15], "DraftKings");
    }

    #[test]
    fn test_render_csv_escapes_commas() {
        let rankings = sample_rankings();
        let csv = render_csv(&rankings);
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), CSV_HEADER.join(","));
        let row = lines.next().unwrap();
        // Title contains a comma, so it must be quoted.
        assert!(row.contains("\"Seahawks vs 49ers, week 6\""));
    }

    #[test]
    fn test_escape_csv_field_quotes() {
        assert_eq!(escape_csv_field("plain"), "plain");
        assert_eq!(escape_csv_field("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_render_markdown_sections() {
        let rankings = sample_rankings();
        let report = Report {
            generated_at: Utc.with_ymd_and_hms(2025, 10, 12, 12, 0, 0).unwrap(),
            timezone: "America/Los_Angeles".to_string(),
            sections: build_sections(&rankings, 5),
            local_pick: Some(rankings[0].entry.clone()),
            total_games: 1,
            total_markets: 1,
            total_books: 2,
        };

        let md = render_markdown(&report);
        assert!(md.contains("## Biggest Discrepancies"));
        assert!(md.contains("## Most Popular Markets"));
        assert!(md.contains("## Highest Payout Potential"));
        assert!(md.contains("## Hometown Favorite"));
        assert!(md.contains("seahawks @ 49ers"));
        assert!(md.contains("1 matched games"));
    }
}
