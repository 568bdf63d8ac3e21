//! Stateless odds and probability conversions. Degenerate inputs return
//! sentinel values (0.0) rather than panicking.

/// Convert American odds to implied probability. Caller contract: odds != 0.
pub fn american_to_probability(odds: i32) -> f64 {
    debug_assert!(odds != 0, "American odds of 0 are undefined");
    if odds > 0 {
        100.0 / (odds as f64 + 100.0)
    } else {
        let abs = odds.unsigned_abs() as f64;
        abs / (abs + 100.0)
    }
}

pub fn decimal_to_probability(decimal_odds: f64) -> f64 {
    1.0 / decimal_odds
}

/// Convert implied probability to American odds, truncating toward zero.
pub fn probability_to_american(prob: f64) -> i32 {
    if prob >= 0.5 {
        (-100.0 * prob / (1.0 - prob)) as i32
    } else {
        (100.0 * (1.0 - prob) / prob) as i32
    }
}

pub fn probability_to_decimal(prob: f64) -> f64 {
    1.0 / prob
}

/// Rescale probabilities so they sum to 1.0, removing the bookmaker's
/// overround. A non-positive sum returns the input unchanged.
pub fn remove_vig(probabilities: &[f64]) -> Vec<f64> {
    let total: f64 = probabilities.iter().sum();
    if total <= 0.0 {
        return probabilities.to_vec();
    }
    probabilities.iter().map(|p| p / total).collect()
}

/// Payout multiple of stake at fair pricing, 0.0 outside the open interval.
pub fn payout_ratio(prob: f64) -> f64 {
    if prob <= 0.0 || prob >= 1.0 {
        return 0.0;
    }
    (1.0 - prob) / prob
}

pub fn discrepancy(a: f64, b: f64) -> f64 {
    (a - b).abs()
}

/// (min, avg, max) over a set of book probabilities. An empty input yields
/// (0, 0, 0), which callers must treat as "no data".
pub fn edge_stats(book_probs: &[f64]) -> (f64, f64, f64) {
    if book_probs.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let min = book_probs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = book_probs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = book_probs.iter().sum::<f64>() / book_probs.len() as f64;
    (min, avg, max)
}

/// Expected value of a bet at `book_prob` when the true win probability is
/// `true_prob`. Out-of-range book probabilities yield 0.0.
pub fn expected_value(true_prob: f64, book_prob: f64, stake: f64) -> f64 {
    if book_prob <= 0.0 || book_prob >= 1.0 {
        return 0.0;
    }
    let payout = stake * (1.0 / book_prob - 1.0);
    true_prob * payout - (1.0 - true_prob) * stake
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(150, 0.4)]
    #[case(200, 1.0 / 3.0)]
    #[case(-150, 0.6)]
    #[case(-200, 2.0 / 3.0)]
    #[case(120, 100.0 / 220.0)]
    fn test_american_to_probability(#[case] odds: i32, #[case] expected: f64) {
        assert!((american_to_probability(odds) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(0.4, 150)]
    #[case(0.6, -150)]
    #[case(0.25, 300)]
    #[case(0.75, -300)]
    fn test_probability_to_american(#[case] prob: f64, #[case] expected: i32) {
        assert_eq!(probability_to_american(prob), expected);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        // Integer truncation bounds the round-trip error away from 0.5.
        let mut p: f64 = 0.03;
        while p < 0.97 {
            if (p - 0.5).abs() > 0.01 {
                let back = american_to_probability(probability_to_american(p));
                assert!(
                    (back - p).abs() < 0.01,
                    "round trip for {} gave {}",
                    p,
                    back
                );
            }
            p += 0.01;
        }
    }

    #[test]
    fn test_decimal_conversions() {
        assert!((decimal_to_probability(2.5) - 0.4).abs() < 1e-9);
        assert!((probability_to_decimal(0.4) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_remove_vig_sums_to_one() {
        let devigged = remove_vig(&[0.55, 0.50]);
        assert!((devigged.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!((devigged[0] - 0.55 / 1.05).abs() < 1e-9);

        let fair = remove_vig(&[0.52, 0.48]);
        assert!((fair.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_remove_vig_degenerate_input_is_noop() {
        assert_eq!(remove_vig(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert_eq!(remove_vig(&[]), Vec::<f64>::new());
    }

    #[rstest]
    #[case(0.4, 1.5)]
    #[case(0.25, 3.0)]
    #[case(0.0, 0.0)]
    #[case(1.0, 0.0)]
    fn test_payout_ratio(#[case] prob: f64, #[case] expected: f64) {
        assert!((payout_ratio(prob) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_discrepancy_is_absolute() {
        assert!((discrepancy(0.6, 0.5) - 0.1).abs() < 1e-9);
        assert!((discrepancy(0.4, 0.5) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_edge_stats() {
        let (min, avg, max) = edge_stats(&[0.45, 0.50, 0.55]);
        assert!((min - 0.45).abs() < 1e-9);
        assert!((avg - 0.50).abs() < 1e-9);
        assert!((max - 0.55).abs() < 1e-9);

        assert_eq!(edge_stats(&[]), (0.0, 0.0, 0.0));
    }

    #[rstest]
    #[case(0.6, 0.5, 0.2)]
    #[case(0.4, 0.5, -0.2)]
    fn test_expected_value(#[case] true_prob: f64, #[case] book_prob: f64, #[case] expected: f64) {
        assert!((expected_value(true_prob, book_prob, 1.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_expected_value_degenerate_book_prob() {
        assert_eq!(expected_value(0.6, 0.0, 1.0), 0.0);
        assert_eq!(expected_value(0.6, 1.0, 1.0), 0.0);
    }
}
