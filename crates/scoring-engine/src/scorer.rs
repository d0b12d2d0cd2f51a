use picks_core::{Criterion, CriterionWeights, FundamentalMetrics, ScoreBreakdown};
use tracing::trace;

use crate::rubric;

/// Weighted-average score over every criterion with data.
///
/// Criteria without data contribute neither score nor weight; when nothing
/// at all is scorable the final score is 0.0. Deterministic: the same
/// metrics and weights always produce the same breakdown.
pub fn score(metrics: &FundamentalMetrics, weights: &CriterionWeights) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();
    let mut weighted_total = 0u32;

    for criterion in Criterion::ALL {
        let Some(value) = metrics.criterion_value(criterion) else {
            continue;
        };
        let sub = rubric::sub_score(criterion, value);
        let weight = weights.get(criterion);
        trace!(symbol = %metrics.symbol, %criterion, value, sub, weight, "scored criterion");

        breakdown.sub_scores.insert(criterion, sub);
        weighted_total += sub * weight;
        breakdown.weight_denominator += weight;
    }

    breakdown.final_score = if breakdown.weight_denominator > 0 {
        f64::from(weighted_total) / f64::from(breakdown.weight_denominator)
    } else {
        0.0
    };
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(symbol: &str) -> FundamentalMetrics {
        FundamentalMetrics {
            symbol: symbol.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_metrics_score_zero() {
        let breakdown = score(&metrics("XXXX3.SA"), &CriterionWeights::default());
        assert_eq!(breakdown.final_score, 0.0);
        assert_eq!(breakdown.weight_denominator, 0);
        assert!(breakdown.sub_scores.is_empty());
    }

    #[test]
    fn test_full_record_stays_in_range() {
        let mut m = metrics("WEGE3.SA");
        m.roe = Some(25.0);
        m.roic = Some(18.0);
        m.net_margin = Some(22.0);
        m.earnings_growth = Some(12.0);
        m.trailing_pe = Some(28.0);
        m.price_to_book = Some(6.0);
        m.ev_to_ebitda = Some(18.0);
        m.dividend_yield = Some(1.2);
        m.debt_to_equity = Some(0.2);
        m.current_ratio = Some(2.4);
        m.payout = Some(55.0);

        let breakdown = score(&m, &CriterionWeights::default());
        assert_eq!(breakdown.sub_scores.len(), 11);
        assert!(breakdown.final_score >= 0.0 && breakdown.final_score <= 10.0);
    }

    #[test]
    fn test_weighted_average_matches_hand_computation() {
        // Only ROE (sub 10, weight 6) and P/E (sub 8, weight 7) present
        let mut m = metrics("ITUB4.SA");
        m.roe = Some(20.0);
        m.trailing_pe = Some(12.0);

        let breakdown = score(&m, &CriterionWeights::default());
        let expected = (10.0 * 6.0 + 8.0 * 7.0) / 13.0;
        assert!((breakdown.final_score - expected).abs() < 1e-12);
        assert_eq!(breakdown.weight_denominator, 13);
    }

    #[test]
    fn test_zero_weight_criterion_contributes_nothing() {
        let mut weights = CriterionWeights::default();
        weights.roe = 0;

        let mut m = metrics("VALE3.SA");
        m.roe = Some(30.0);

        let breakdown = score(&m, &weights);
        // ROE was scored but carries no weight; nothing else had data
        assert_eq!(breakdown.sub_score(Criterion::Roe), Some(10));
        assert_eq!(breakdown.weight_denominator, 0);
        assert_eq!(breakdown.final_score, 0.0);
    }

    #[test]
    fn test_score_monotone_in_roe() {
        let weights = CriterionWeights::default();
        let mut prev = -1.0;
        for roe in [-5.0, 2.0, 7.0, 11.0, 13.0, 20.0] {
            let mut m = metrics("BBAS3.SA");
            m.roe = Some(roe);
            m.trailing_pe = Some(12.0); // held fixed
            let s = score(&m, &weights).final_score;
            assert!(s >= prev, "score decreased when ROE rose to {roe}");
            prev = s;
        }
    }

    #[test]
    fn test_score_antitone_in_pe() {
        let weights = CriterionWeights::default();
        let mut prev = 11.0;
        for pe in [5.0, 12.0, 18.0, 24.0, 28.0, 40.0] {
            let mut m = metrics("BBAS3.SA");
            m.roe = Some(12.0); // held fixed
            m.trailing_pe = Some(pe);
            let s = score(&m, &weights).final_score;
            assert!(s <= prev, "score increased when P/E rose to {pe}");
            prev = s;
        }
    }
}
