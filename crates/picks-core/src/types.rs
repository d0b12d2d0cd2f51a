use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Raw per-stock fundamentals snapshot as delivered by the data collaborator.
///
/// Every financial field is optional: B3 coverage is patchy and a missing
/// field must degrade to "criterion not scored", never crash the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,

    // Income statement
    pub net_income: Option<f64>,
    pub revenue: Option<f64>,
    pub ebit: Option<f64>,

    // Balance sheet
    pub total_assets: Option<f64>,
    pub current_assets: Option<f64>,
    pub current_liabilities: Option<f64>,
    pub total_debt: Option<f64>,
    pub shareholders_equity: Option<f64>,

    // Pre-computed multiples and yields
    pub trailing_pe: Option<f64>,
    pub price_to_book: Option<f64>,
    pub ev_to_ebitda: Option<f64>,
    /// Percent, e.g. 4.5 = 4.5% yield.
    pub dividend_yield_pct: Option<f64>,
    /// Percent of earnings paid out as dividends.
    pub payout_ratio_pct: Option<f64>,
    /// Trailing earnings growth, percent.
    pub earnings_growth_pct: Option<f64>,

    // Market data
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub avg_volume_3m: Option<f64>,
}

impl FundamentalSnapshot {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }
}

/// The eleven derived ratios the scoring rubric consumes, plus descriptive
/// pass-through fields. A `None` ratio means the underlying data was missing
/// or its denominator was zero; that criterion is skipped when scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundamentalMetrics {
    pub symbol: String,
    /// Return on equity, percent.
    pub roe: Option<f64>,
    /// Return on invested capital, percent (after-tax EBIT basis).
    pub roic: Option<f64>,
    /// Net income / revenue, percent.
    pub net_margin: Option<f64>,
    /// Trailing earnings growth, percent.
    pub earnings_growth: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub price_to_book: Option<f64>,
    pub ev_to_ebitda: Option<f64>,
    /// Percent; absent dividend data is reported as 0 (a non-payer).
    pub dividend_yield: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub current_ratio: Option<f64>,
    /// Percent; absent payout data is reported as 0.
    pub payout: Option<f64>,

    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
}

impl FundamentalMetrics {
    /// The raw ratio value backing a criterion, if present.
    pub fn criterion_value(&self, criterion: Criterion) -> Option<f64> {
        match criterion {
            Criterion::Roe => self.roe,
            Criterion::Roic => self.roic,
            Criterion::NetMargin => self.net_margin,
            Criterion::EarningsGrowth => self.earnings_growth,
            Criterion::PriceToEarnings => self.trailing_pe,
            Criterion::PriceToBook => self.price_to_book,
            Criterion::EvToEbitda => self.ev_to_ebitda,
            Criterion::DividendYield => self.dividend_yield,
            Criterion::DebtToEquity => self.debt_to_equity,
            Criterion::CurrentRatio => self.current_ratio,
            Criterion::Payout => self.payout,
        }
    }
}

/// The closed set of scoring criteria. `ALL` is the rubric order and the
/// tie-break order for rationale ranking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Criterion {
    Roe,
    Roic,
    NetMargin,
    EarningsGrowth,
    PriceToEarnings,
    PriceToBook,
    EvToEbitda,
    DividendYield,
    DebtToEquity,
    CurrentRatio,
    Payout,
}

impl Criterion {
    pub const ALL: [Criterion; 11] = [
        Criterion::Roe,
        Criterion::Roic,
        Criterion::NetMargin,
        Criterion::EarningsGrowth,
        Criterion::PriceToEarnings,
        Criterion::PriceToBook,
        Criterion::EvToEbitda,
        Criterion::DividendYield,
        Criterion::DebtToEquity,
        Criterion::CurrentRatio,
        Criterion::Payout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Roe => "ROE",
            Criterion::Roic => "ROIC",
            Criterion::NetMargin => "Net Margin",
            Criterion::EarningsGrowth => "Earnings Growth",
            Criterion::PriceToEarnings => "P/E",
            Criterion::PriceToBook => "P/B",
            Criterion::EvToEbitda => "EV/EBITDA",
            Criterion::DividendYield => "Dividend Yield",
            Criterion::DebtToEquity => "Debt/Equity",
            Criterion::CurrentRatio => "Current Ratio",
            Criterion::Payout => "Payout",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-adjustable integer weights in [0,10], one per criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionWeights {
    pub roe: u32,
    pub roic: u32,
    pub net_margin: u32,
    pub earnings_growth: u32,
    pub price_to_earnings: u32,
    pub price_to_book: u32,
    pub ev_to_ebitda: u32,
    pub dividend_yield: u32,
    pub debt_to_equity: u32,
    pub current_ratio: u32,
    pub payout: u32,
}

impl Default for CriterionWeights {
    /// The fixed default rubric weights of the Picks model.
    fn default() -> Self {
        Self {
            // Profitability
            roe: 6,
            roic: 6,
            net_margin: 7,
            earnings_growth: 6,
            // Valuation multiples
            price_to_earnings: 7,
            price_to_book: 5,
            ev_to_ebitda: 5,
            dividend_yield: 3,
            // Financial health and liquidity
            debt_to_equity: 7,
            current_ratio: 5,
            payout: 3,
        }
    }
}

impl CriterionWeights {
    pub fn get(&self, criterion: Criterion) -> u32 {
        match criterion {
            Criterion::Roe => self.roe,
            Criterion::Roic => self.roic,
            Criterion::NetMargin => self.net_margin,
            Criterion::EarningsGrowth => self.earnings_growth,
            Criterion::PriceToEarnings => self.price_to_earnings,
            Criterion::PriceToBook => self.price_to_book,
            Criterion::EvToEbitda => self.ev_to_ebitda,
            Criterion::DividendYield => self.dividend_yield,
            Criterion::DebtToEquity => self.debt_to_equity,
            Criterion::CurrentRatio => self.current_ratio,
            Criterion::Payout => self.payout,
        }
    }

    /// All weights must lie in [0,10].
    pub fn validate(&self) -> Result<(), ScoringError> {
        for criterion in Criterion::ALL {
            let weight = self.get(criterion);
            if weight > 10 {
                return Err(ScoringError::InvalidWeight {
                    criterion: criterion.as_str().to_string(),
                    weight,
                });
            }
        }
        Ok(())
    }
}

/// Per-criterion sub-scores plus the normalized weighted-average final score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Sub-score in [0,10] for every criterion that had data.
    pub sub_scores: BTreeMap<Criterion, u32>,
    /// Sum of the weights of the criteria actually scored. Zero when the
    /// record had no usable data at all.
    pub weight_denominator: u32,
    /// (sum of sub_score * weight) / weight_denominator, or 0.0 if the
    /// denominator is zero.
    pub final_score: f64,
}

impl ScoreBreakdown {
    pub fn sub_score(&self, criterion: Criterion) -> Option<u32> {
        self.sub_scores.get(&criterion).copied()
    }
}

/// Qualitative category labels. A stock carries a *set* of these
/// (membership, not exclusive classes).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CategoryLabel {
    TopTier,
    Solid,
    Defensive,
    Value,
    ModeratePotential,
    LowPotential,
}

impl CategoryLabel {
    pub fn to_label(&self) -> &'static str {
        match self {
            CategoryLabel::TopTier => "Top-tier",
            CategoryLabel::Solid => "Solid",
            CategoryLabel::Defensive => "Defensive",
            CategoryLabel::Value => "Value",
            CategoryLabel::ModeratePotential => "Moderate-potential",
            CategoryLabel::LowPotential => "Low-potential",
        }
    }
}

impl std::fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_label())
    }
}

/// Complete evaluation of one stock: derived ratios, score breakdown,
/// category labels, and the ranked rationale strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockEvaluation {
    pub symbol: String,
    pub metrics: FundamentalMetrics,
    pub breakdown: ScoreBreakdown,
    pub labels: Vec<CategoryLabel>,
    /// Applicable rationales, strongest first. Deterministic; callers choose
    /// how many to display.
    pub rationales: Vec<String>,
}

impl StockEvaluation {
    pub fn final_score(&self) -> f64 {
        self.breakdown.final_score
    }

    pub fn has_label(&self, label: CategoryLabel) -> bool {
        self.labels.contains(&label)
    }
}
