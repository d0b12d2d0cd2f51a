use std::collections::BTreeMap;

use chrono::NaiveDate;
use picks_core::{FundamentalsProvider, PriceProvider, SimulationError};
use rust_decimal::prelude::*;
use scoring_engine::{derive_metrics, score};
use tracing::{debug, warn};

use crate::math;
use crate::models::*;
use crate::selection::{select_candidates, target_weights};

/// Monthly-contribution backtest engine.
///
/// Replays a fixed cash contribution at every rebalance date: scores the
/// universe, selects and weights candidates, converts the contribution into
/// integer share lots, and tracks the resulting portfolio next to a
/// benchmark receiving the same contributions.
///
/// Dates are processed strictly in order: holdings and benchmark units
/// carry forward from one month to the next.
pub struct ContributionSimulator {
    config: SimulationConfig,
}

impl ContributionSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn run(
        &self,
        dates: &[NaiveDate],
        universe: &[String],
        fundamentals: &dyn FundamentalsProvider,
        prices: &dyn PriceProvider,
    ) -> Result<SimulationResult, SimulationError> {
        self.config.validate()?;
        if dates.is_empty() {
            return Err(SimulationError::InsufficientData(
                "no rebalance dates".to_string(),
            ));
        }
        if !dates.windows(2).all(|w| w[0] < w[1]) {
            return Err(SimulationError::InvalidConfig(
                "rebalance dates must be strictly increasing".to_string(),
            ));
        }
        if universe.is_empty() {
            return Err(SimulationError::InsufficientData(
                "empty ticker universe".to_string(),
            ));
        }

        let contribution = self.config.contribution;
        let mut holdings = Holdings::new();
        let mut benchmark_units = Decimal::ZERO;
        let mut last_benchmark_price: Option<Decimal> = None;

        let mut points = Vec::with_capacity(dates.len());
        let mut events = Vec::with_capacity(dates.len());
        let mut weight_history = Vec::with_capacity(dates.len());

        for &date in dates {
            // 1. Score the universe as of this date
            let mut scores: Vec<(String, f64)> = Vec::with_capacity(universe.len());
            for symbol in universe {
                match fundamentals.fundamentals(symbol, date) {
                    Some(snapshot) => {
                        let metrics = derive_metrics(&snapshot);
                        let breakdown = score(&metrics, &self.config.weights);
                        scores.push((symbol.clone(), breakdown.final_score));
                    }
                    None => debug!(%symbol, %date, "no fundamentals snapshot, skipping"),
                }
            }

            // 2.-5. Select, weight, and buy
            let mut purchases: BTreeMap<String, Decimal> = BTreeMap::new();
            if scores.is_empty() {
                warn!(%date, "no scorable symbols, contribution not deployed this month");
            } else {
                let selected = select_candidates(
                    &scores,
                    self.config.score_cutoff,
                    self.config.fallback_top_n,
                );
                let weights = target_weights(&selected, self.config.max_weight_per_asset);
                weight_history.push(WeightRecord {
                    date,
                    weights: weights.iter().cloned().collect(),
                });

                // Symbols with no price at all drop out for the month; their
                // weight is not redistributed.
                let mut priced: Vec<(&str, f64, Decimal)> = Vec::with_capacity(weights.len());
                for (symbol, weight) in &weights {
                    match prices.price_asof(symbol, date) {
                        Some(p) if p > 0.0 => {
                            let price = Decimal::from_f64(p).unwrap_or(Decimal::ZERO);
                            if price > Decimal::ZERO {
                                priced.push((symbol, *weight, price));
                            }
                        }
                        _ => warn!(%symbol, %date, "no price available, skipping this month"),
                    }
                }

                let value_of_selected: Decimal = priced
                    .iter()
                    .map(|(symbol, _, price)| holdings.quantity(symbol) * *price)
                    .sum();
                let target_total = value_of_selected + contribution;

                for (symbol, weight, price) in priced {
                    let weight_dec = Decimal::from_f64(weight).unwrap_or(Decimal::ZERO);
                    let target_value = weight_dec * target_total;
                    let current_value = holdings.quantity(symbol) * price;
                    let required = (target_value - current_value).max(Decimal::ZERO);
                    let lots = (required / price).floor();
                    if lots > Decimal::ZERO {
                        holdings.add(symbol, lots);
                        purchases.insert(symbol.to_string(), lots);
                    }
                }
            }
            events.push(ContributionEvent {
                date,
                amount: contribution,
                purchases,
            });

            // 6. Mark the whole book to forward-filled prices
            let mut portfolio_value = Decimal::ZERO;
            for (symbol, quantity) in holdings.iter() {
                match prices.price_asof(symbol, date) {
                    Some(p) => {
                        portfolio_value +=
                            *quantity * Decimal::from_f64(p).unwrap_or(Decimal::ZERO);
                    }
                    None => debug!(%symbol, %date, "held position has no price, valued at zero"),
                }
            }

            // 7. Benchmark gets the same cash under the same lot rule
            match prices.price_asof(&self.config.benchmark_symbol, date) {
                Some(p) if p > 0.0 => {
                    let price = Decimal::from_f64(p).unwrap_or(Decimal::ZERO);
                    if price > Decimal::ZERO {
                        benchmark_units += (contribution / price).floor();
                        last_benchmark_price = Some(price);
                    }
                }
                _ => warn!(
                    benchmark = %self.config.benchmark_symbol,
                    %date,
                    "no benchmark price, skipping benchmark contribution"
                ),
            }
            let benchmark_value =
                benchmark_units * last_benchmark_price.unwrap_or(Decimal::ZERO);

            debug!(%date, %portfolio_value, %benchmark_value, "rebalance complete");
            points.push(SimulationPoint {
                date,
                portfolio_value,
                benchmark_value,
            });
        }

        let summary = self.summarize(dates, &points);
        Ok(SimulationResult {
            points,
            events,
            weight_history,
            holdings,
            benchmark_units,
            summary,
        })
    }

    fn summarize(&self, dates: &[NaiveDate], points: &[SimulationPoint]) -> SimulationSummary {
        let months = dates.len();
        let years = match (dates.first(), dates.last()) {
            (Some(first), Some(last)) => (*last - *first).num_days() as f64 / 365.25,
            _ => 0.0,
        };
        let total_contributed = self.config.contribution * Decimal::from(months as u64);

        let final_value = points
            .last()
            .map(|p| p.portfolio_value)
            .unwrap_or(Decimal::ZERO);
        let benchmark_final_value = points
            .last()
            .map(|p| p.benchmark_value)
            .unwrap_or(Decimal::ZERO);

        let values: Vec<f64> = points
            .iter()
            .map(|p| p.portfolio_value.to_f64().unwrap_or(0.0))
            .collect();
        let monthly_returns = math::periodic_returns(&values);
        let contributed_f64 = total_contributed.to_f64().unwrap_or(0.0);

        SimulationSummary {
            months,
            years,
            total_contributed,
            final_value,
            benchmark_final_value,
            cagr: math::cagr(final_value.to_f64().unwrap_or(0.0), contributed_f64, years),
            benchmark_cagr: math::cagr(
                benchmark_final_value.to_f64().unwrap_or(0.0),
                contributed_f64,
                years,
            ),
            annualized_volatility: math::annualized_volatility(&monthly_returns),
            max_drawdown: math::max_drawdown(&values),
        }
    }
}
