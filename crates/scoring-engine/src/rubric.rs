//! The fixed scoring rubric: per-criterion threshold tables mapping a raw
//! ratio to a sub-score. Thresholds are data, not branching code, so the
//! tables can be audited (and unit-tested) in one place.

use picks_core::Criterion;

/// Descending thresholds for higher-is-better criteria. A value strictly
/// above `thresholds[i]` scores `10 - 2*i`; at or below the last one, 0.
type HigherBetter = [f64; 5];

/// Ascending thresholds for lower-is-better criteria. A value strictly below
/// `thresholds[i]` scores `10 - 2*i`; at or above the last one, 0. Negative
/// values always score 0: a negative multiple means the underlying driver
/// (earnings, book value, EBITDA, equity) is itself negative.
type LowerBetter = [f64; 5];

const ROE: HigherBetter = [15.0, 12.0, 10.0, 5.0, 0.0];
const ROIC: HigherBetter = [12.0, 10.0, 7.0, 5.0, 0.0];
const NET_MARGIN: HigherBetter = [20.0, 15.0, 10.0, 5.0, 0.0];
const EARNINGS_GROWTH: HigherBetter = [15.0, 10.0, 5.0, 0.0, -5.0];
const DIVIDEND_YIELD: HigherBetter = [5.0, 4.0, 3.0, 2.0, 1.0];
const CURRENT_RATIO: HigherBetter = [2.0, 1.5, 1.2, 1.0, 0.8];

const PE: LowerBetter = [10.0, 15.0, 20.0, 25.0, 30.0];
const PB: LowerBetter = [1.0, 1.5, 2.0, 2.5, 3.0];
const EV_EBITDA: LowerBetter = [6.0, 8.0, 10.0, 12.0, 15.0];
const DEBT_TO_EQUITY: LowerBetter = [0.5, 1.0, 1.5, 2.0, 3.0];

/// Sub-score in {0,2,4,6,8,10} (payout also produces 6/8/10 bands) for one
/// criterion's raw value.
pub fn sub_score(criterion: Criterion, value: f64) -> u32 {
    match criterion {
        Criterion::Roe => step_above(value, &ROE),
        Criterion::Roic => step_above(value, &ROIC),
        Criterion::NetMargin => step_above(value, &NET_MARGIN),
        Criterion::EarningsGrowth => step_above(value, &EARNINGS_GROWTH),
        Criterion::DividendYield => step_above(value, &DIVIDEND_YIELD),
        Criterion::CurrentRatio => step_above(value, &CURRENT_RATIO),
        Criterion::PriceToEarnings => step_below(value, &PE),
        Criterion::PriceToBook => step_below(value, &PB),
        Criterion::EvToEbitda => step_below(value, &EV_EBITDA),
        Criterion::DebtToEquity => step_below(value, &DEBT_TO_EQUITY),
        Criterion::Payout => payout_score(value),
    }
}

fn step_above(value: f64, thresholds: &HigherBetter) -> u32 {
    for (i, &threshold) in thresholds.iter().enumerate() {
        if value > threshold {
            return 10 - 2 * i as u32;
        }
    }
    0
}

fn step_below(value: f64, thresholds: &LowerBetter) -> u32 {
    if value < 0.0 {
        return 0;
    }
    for (i, &threshold) in thresholds.iter().enumerate() {
        if value < threshold {
            return 10 - 2 * i as u32;
        }
    }
    0
}

/// Payout is the one band-shaped criterion with a sweet spot at 50-70%: low
/// payout suggests retention for growth, above 100% is unsustainable.
fn payout_score(value: f64) -> u32 {
    if value < 0.0 {
        0
    } else if value < 30.0 {
        6
    } else if value < 50.0 {
        8
    } else if value < 70.0 {
        10
    } else if value < 90.0 {
        6
    } else if value < 100.0 {
        4
    } else {
        2
    }
}
