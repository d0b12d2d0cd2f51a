use picks_core::{CategoryLabel, FundamentalMetrics};

/// Derive the category label set from the final score and a handful of ratio
/// thresholds. All matching labels are kept, with no precedence between them.
/// A stock matching nothing falls back to ModeratePotential (score >= 5) or
/// LowPotential.
pub fn classify(final_score: f64, metrics: &FundamentalMetrics) -> Vec<CategoryLabel> {
    let mut labels = Vec::new();

    if final_score >= 7.0 {
        labels.push(CategoryLabel::TopTier);
    }

    let roe = metrics.roe.unwrap_or(0.0);
    let debt_to_equity = metrics.debt_to_equity.unwrap_or(0.0);
    if roe > 10.0 && debt_to_equity < 1.5 {
        labels.push(CategoryLabel::Solid);
    }

    let dividend_yield = metrics.dividend_yield.unwrap_or(0.0);
    let payout = metrics.payout.unwrap_or(0.0);
    if dividend_yield > 3.0 && payout < 80.0 {
        labels.push(CategoryLabel::Defensive);
    }

    let pe = metrics.trailing_pe.unwrap_or(0.0);
    let pb = metrics.price_to_book.unwrap_or(0.0);
    if (pe > 0.0 && pe < 15.0) || (pb > 0.0 && pb < 1.5) {
        labels.push(CategoryLabel::Value);
    }

    if labels.is_empty() {
        labels.push(if final_score >= 5.0 {
            CategoryLabel::ModeratePotential
        } else {
            CategoryLabel::LowPotential
        });
    }

    labels
}
