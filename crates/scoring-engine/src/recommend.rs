use picks_core::{CategoryLabel, StockEvaluation};
use serde::{Deserialize, Serialize};

/// Default length of a recommended portfolio.
pub const DEFAULT_PORTFOLIO_LEN: usize = 5;

/// Stocks carrying `label`, sorted by final score descending (ties by
/// symbol), truncated to `max_len`.
pub fn recommended_portfolio<'a>(
    evaluations: &'a [StockEvaluation],
    label: CategoryLabel,
    max_len: usize,
) -> Vec<&'a StockEvaluation> {
    let mut picks: Vec<&StockEvaluation> = evaluations
        .iter()
        .filter(|e| e.has_label(label))
        .collect();
    picks.sort_by(|a, b| {
        b.final_score()
            .partial_cmp(&a.final_score())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
    picks.truncate(max_len);
    picks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestorProfile {
    Conservative,
    Moderate,
    Aggressive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacroScenario {
    Expansion,
    Slowdown,
    Recession,
    Recovery,
}

/// Suggested split of the equity sleeve across the four pick categories for
/// a given investor profile and macro scenario. Fractions sum to 1.
///
/// Order: Defensive, Solid, Value, TopTier.
pub fn suggested_allocation(
    profile: InvestorProfile,
    scenario: MacroScenario,
) -> [(CategoryLabel, f64); 4] {
    use InvestorProfile::*;
    use MacroScenario::*;

    let (defensive, solid, value, top_tier) = match (profile, scenario) {
        (Conservative, Expansion) => (0.60, 0.30, 0.10, 0.00),
        (Conservative, Slowdown) => (0.70, 0.20, 0.10, 0.00),
        (Conservative, Recession) => (0.80, 0.15, 0.05, 0.00),
        (Conservative, Recovery) => (0.65, 0.25, 0.10, 0.00),
        (Moderate, Expansion) => (0.30, 0.40, 0.15, 0.15),
        (Moderate, Slowdown) => (0.40, 0.35, 0.15, 0.10),
        (Moderate, Recession) => (0.50, 0.30, 0.15, 0.05),
        (Moderate, Recovery) => (0.25, 0.35, 0.20, 0.20),
        (Aggressive, Expansion) => (0.10, 0.25, 0.25, 0.40),
        (Aggressive, Slowdown) => (0.20, 0.30, 0.25, 0.25),
        (Aggressive, Recession) => (0.30, 0.30, 0.30, 0.10),
        (Aggressive, Recovery) => (0.05, 0.25, 0.30, 0.40),
    };

    [
        (CategoryLabel::Defensive, defensive),
        (CategoryLabel::Solid, solid),
        (CategoryLabel::Value, value),
        (CategoryLabel::TopTier, top_tier),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use picks_core::{FundamentalMetrics, ScoreBreakdown};

    fn evaluation(symbol: &str, score: f64, labels: Vec<CategoryLabel>) -> StockEvaluation {
        StockEvaluation {
            symbol: symbol.to_string(),
            metrics: FundamentalMetrics::default(),
            breakdown: ScoreBreakdown {
                final_score: score,
                ..Default::default()
            },
            labels,
            rationales: Vec::new(),
        }
    }

    #[test]
    fn test_recommended_portfolio_filters_sorts_truncates() {
        let evaluations = vec![
            evaluation("AAAA3.SA", 6.0, vec![CategoryLabel::Solid]),
            evaluation("BBBB3.SA", 9.0, vec![CategoryLabel::Solid, CategoryLabel::TopTier]),
            evaluation("CCCC3.SA", 7.5, vec![CategoryLabel::Solid]),
            evaluation("DDDD3.SA", 8.0, vec![CategoryLabel::Value]),
        ];

        let picks = recommended_portfolio(&evaluations, CategoryLabel::Solid, 2);
        let symbols: Vec<&str> = picks.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BBBB3.SA", "CCCC3.SA"]);
    }

    #[test]
    fn test_equal_scores_order_by_symbol() {
        let evaluations = vec![
            evaluation("ZZZZ3.SA", 7.0, vec![CategoryLabel::Value]),
            evaluation("AAAA3.SA", 7.0, vec![CategoryLabel::Value]),
        ];
        let picks =
            recommended_portfolio(&evaluations, CategoryLabel::Value, DEFAULT_PORTFOLIO_LEN);
        assert_eq!(picks[0].symbol, "AAAA3.SA");
    }

    #[test]
    fn test_allocations_sum_to_one() {
        for profile in [
            InvestorProfile::Conservative,
            InvestorProfile::Moderate,
            InvestorProfile::Aggressive,
        ] {
            for scenario in [
                MacroScenario::Expansion,
                MacroScenario::Slowdown,
                MacroScenario::Recession,
                MacroScenario::Recovery,
            ] {
                let total: f64 = suggested_allocation(profile, scenario)
                    .iter()
                    .map(|(_, w)| w)
                    .sum();
                assert!(
                    (total - 1.0).abs() < 1e-9,
                    "{profile:?}/{scenario:?} sums to {total}"
                );
            }
        }
    }

    #[test]
    fn test_conservative_never_holds_top_tier() {
        for scenario in [
            MacroScenario::Expansion,
            MacroScenario::Slowdown,
            MacroScenario::Recession,
            MacroScenario::Recovery,
        ] {
            let allocation = suggested_allocation(InvestorProfile::Conservative, scenario);
            let top_tier = allocation
                .iter()
                .find(|(label, _)| *label == CategoryLabel::TopTier)
                .map(|(_, w)| *w)
                .unwrap();
            assert_eq!(top_tier, 0.0);
        }
    }
}
