use picks_core::{Criterion, FundamentalMetrics, ScoreBreakdown};

/// Build the ranked rationale list for a scored stock: one line per scored
/// criterion, strongest sub-scores first, ties broken by rubric order.
///
/// The full list is always returned; display trimming is the caller's
/// choice. Output is fully deterministic.
pub fn ranked_rationales(metrics: &FundamentalMetrics, breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut scored: Vec<(usize, Criterion, u32)> = Criterion::ALL
        .iter()
        .enumerate()
        .filter_map(|(order, &criterion)| {
            breakdown
                .sub_score(criterion)
                .map(|sub| (order, criterion, sub))
        })
        .collect();

    scored.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));

    scored
        .into_iter()
        .filter_map(|(_, criterion, sub)| {
            metrics
                .criterion_value(criterion)
                .map(|value| describe(criterion, value, sub))
        })
        .collect()
}

fn describe(criterion: Criterion, value: f64, sub: u32) -> String {
    let grade = match sub {
        10 => "excellent",
        8 => "strong",
        6 => "good",
        4 => "fair",
        2 => "weak",
        _ => "poor",
    };
    match criterion {
        Criterion::Roe
        | Criterion::Roic
        | Criterion::NetMargin
        | Criterion::EarningsGrowth
        | Criterion::DividendYield
        | Criterion::Payout => {
            format!("{grade} {criterion} at {value:.1}%")
        }
        Criterion::DebtToEquity | Criterion::CurrentRatio => {
            format!("{grade} {criterion} at {value:.2}")
        }
        Criterion::PriceToEarnings | Criterion::PriceToBook | Criterion::EvToEbitda => {
            format!("{grade} {criterion} multiple at {value:.1}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer;
    use picks_core::CriterionWeights;

    #[test]
    fn test_strongest_first_and_deterministic() {
        let mut metrics = FundamentalMetrics {
            symbol: "TAEE11.SA".to_string(),
            ..Default::default()
        };
        metrics.roe = Some(3.0); // sub 2
        metrics.dividend_yield = Some(6.0); // sub 10
        metrics.trailing_pe = Some(12.0); // sub 8

        let breakdown = scorer::score(&metrics, &CriterionWeights::default());
        let rationales = ranked_rationales(&metrics, &breakdown);

        assert_eq!(rationales.len(), 3);
        assert_eq!(rationales[0], "excellent Dividend Yield at 6.0%");
        assert_eq!(rationales[1], "strong P/E multiple at 12.0");
        assert_eq!(rationales[2], "weak ROE at 3.0%");

        // Running it again yields the identical list
        assert_eq!(rationales, ranked_rationales(&metrics, &breakdown));
    }

    #[test]
    fn test_ties_break_in_rubric_order() {
        let mut metrics = FundamentalMetrics {
            symbol: "EGIE3.SA".to_string(),
            ..Default::default()
        };
        metrics.roe = Some(20.0); // sub 10
        metrics.roic = Some(15.0); // sub 10

        let breakdown = scorer::score(&metrics, &CriterionWeights::default());
        let rationales = ranked_rationales(&metrics, &breakdown);
        assert!(rationales[0].contains("ROE"));
        assert!(rationales[1].contains("ROIC"));
    }

    #[test]
    fn test_empty_breakdown_yields_empty_list() {
        let metrics = FundamentalMetrics::default();
        let breakdown = ScoreBreakdown::default();
        assert!(ranked_rationales(&metrics, &breakdown).is_empty());
    }
}
