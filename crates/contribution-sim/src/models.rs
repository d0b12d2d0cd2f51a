use std::collections::BTreeMap;

use chrono::NaiveDate;
use picks_core::{CriterionWeights, SimulationError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Configuration for a monthly-contribution backtest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Cash contributed at every rebalance date. Must be positive.
    pub contribution: Decimal,
    /// Per-asset weight cap applied before renormalization, in (0,1].
    pub max_weight_per_asset: f64,
    /// Stocks scoring strictly above this enter the portfolio.
    pub score_cutoff: f64,
    /// When nothing clears the cutoff, fall back to this many top-scored
    /// names so capital is always deployed.
    pub fallback_top_n: usize,
    /// Instrument receiving the same contributions for comparison.
    pub benchmark_symbol: String,
    pub weights: CriterionWeights,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            contribution: Decimal::new(1000, 0),
            max_weight_per_asset: 0.20,
            score_cutoff: 6.0,
            fallback_top_n: 5,
            benchmark_symbol: "BOVA11.SA".to_string(),
            weights: CriterionWeights::default(),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.contribution <= Decimal::ZERO {
            return Err(SimulationError::InvalidConfig(
                "contribution must be positive".to_string(),
            ));
        }
        if !(self.max_weight_per_asset > 0.0 && self.max_weight_per_asset <= 1.0) {
            return Err(SimulationError::InvalidConfig(
                "max_weight_per_asset must lie in (0, 1]".to_string(),
            ));
        }
        if !(0.0..=10.0).contains(&self.score_cutoff) {
            return Err(SimulationError::InvalidConfig(
                "score_cutoff must lie in [0, 10]".to_string(),
            ));
        }
        if self.fallback_top_n == 0 {
            return Err(SimulationError::InvalidConfig(
                "fallback_top_n must be at least 1".to_string(),
            ));
        }
        self.weights
            .validate()
            .map_err(|e| SimulationError::InvalidConfig(e.to_string()))
    }
}

/// Share quantities by symbol. Only the monthly buy step mutates this, and
/// only upward; the model has no sell operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Holdings {
    positions: BTreeMap<String, Decimal>,
}

impl Holdings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, symbol: &str, quantity: Decimal) {
        if quantity > Decimal::ZERO {
            *self
                .positions
                .entry(symbol.to_string())
                .or_insert(Decimal::ZERO) += quantity;
        }
    }

    pub fn quantity(&self, symbol: &str) -> Decimal {
        self.positions.get(symbol).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Decimal)> {
        self.positions.iter()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// One monthly contribution and what it bought. Append-only log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionEvent {
    pub date: NaiveDate,
    pub amount: Decimal,
    /// Shares purchased per symbol this month (integer lots).
    pub purchases: BTreeMap<String, Decimal>,
}

/// Portfolio and benchmark value on one rebalance date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationPoint {
    pub date: NaiveDate,
    pub portfolio_value: Decimal,
    pub benchmark_value: Decimal,
}

/// The applied (post-clip, post-renormalization) weights on one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightRecord {
    pub date: NaiveDate,
    pub weights: BTreeMap<String, f64>,
}

/// Summary performance metrics over the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub months: usize,
    pub years: f64,
    pub total_contributed: Decimal,
    pub final_value: Decimal,
    pub benchmark_final_value: Decimal,
    /// (final / contributed)^(1/years) - 1; `None` when the run is too short.
    pub cagr: Option<f64>,
    pub benchmark_cagr: Option<f64>,
    /// Monthly-return std dev annualized by sqrt(12).
    pub annualized_volatility: Option<f64>,
    /// Peak-to-trough decline as a positive fraction (0.15 = 15%).
    pub max_drawdown: f64,
}

/// Everything a run produces: the parallel value series, the contribution
/// log, the weight history, final holdings, and the summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub points: Vec<SimulationPoint>,
    pub events: Vec<ContributionEvent>,
    pub weight_history: Vec<WeightRecord>,
    pub holdings: Holdings,
    pub benchmark_units: Decimal,
    pub summary: SimulationSummary,
}
