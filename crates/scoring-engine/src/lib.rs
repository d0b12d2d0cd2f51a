pub mod classify;
pub mod metrics;
pub mod rationale;
pub mod recommend;
pub mod rubric;
pub mod scorer;

pub use classify::classify;
pub use metrics::derive_metrics;
pub use rationale::ranked_rationales;
pub use recommend::{
    recommended_portfolio, suggested_allocation, InvestorProfile, MacroScenario,
    DEFAULT_PORTFOLIO_LEN,
};
pub use rubric::sub_score;
pub use scorer::score;

use picks_core::{CriterionWeights, FundamentalSnapshot, ScoringError, StockEvaluation};

/// Stateless scoring engine: derives ratios from a raw snapshot, applies the
/// weighted rubric, classifies, and builds the ranked rationale list.
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    /// Full evaluation of one stock. Fails only on out-of-range weights;
    /// missing data degrades to an unscored criterion, never an error.
    pub fn evaluate(
        &self,
        snapshot: &FundamentalSnapshot,
        weights: &CriterionWeights,
    ) -> Result<StockEvaluation, ScoringError> {
        weights.validate()?;

        let metrics = derive_metrics(snapshot);
        let breakdown = score(&metrics, weights);
        let labels = classify(breakdown.final_score, &metrics);
        let rationales = ranked_rationales(&metrics, &breakdown);

        Ok(StockEvaluation {
            symbol: snapshot.symbol.clone(),
            metrics,
            breakdown,
            labels,
            rationales,
        })
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
