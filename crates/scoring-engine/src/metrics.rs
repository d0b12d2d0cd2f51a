use picks_core::{FundamentalMetrics, FundamentalSnapshot};

/// Brazilian corporate tax rate applied to EBIT for the ROIC basis.
const CORPORATE_TAX_RATE: f64 = 0.34;

/// Derive the eleven rubric ratios from a raw snapshot.
///
/// Zero or absent denominators yield `None`; the criterion is simply not
/// scored. Callers that want "no dividend data" treated as a non-payer
/// should supply an explicit 0 in the snapshot.
pub fn derive_metrics(snapshot: &FundamentalSnapshot) -> FundamentalMetrics {
    FundamentalMetrics {
        symbol: snapshot.symbol.clone(),
        roe: roe(snapshot.net_income, snapshot.shareholders_equity),
        roic: roic(
            snapshot.ebit,
            snapshot.total_assets,
            snapshot.current_liabilities,
        ),
        net_margin: net_margin(snapshot.net_income, snapshot.revenue),
        earnings_growth: snapshot.earnings_growth_pct,
        trailing_pe: snapshot.trailing_pe,
        price_to_book: snapshot.price_to_book,
        ev_to_ebitda: snapshot.ev_to_ebitda,
        dividend_yield: snapshot.dividend_yield_pct,
        debt_to_equity: debt_to_equity(snapshot.total_debt, snapshot.shareholders_equity),
        current_ratio: current_ratio(snapshot.current_assets, snapshot.current_liabilities),
        payout: snapshot.payout_ratio_pct,
        sector: snapshot.sector.clone(),
        price: snapshot.current_price,
        market_cap: snapshot.market_cap,
    }
}

fn roe(net_income: Option<f64>, equity: Option<f64>) -> Option<f64> {
    match (net_income, equity) {
        (Some(ni), Some(eq)) if eq > 0.0 => Some(ni / eq * 100.0),
        _ => None,
    }
}

fn roic(
    ebit: Option<f64>,
    total_assets: Option<f64>,
    current_liabilities: Option<f64>,
) -> Option<f64> {
    let (ebit, assets, liabilities) = (ebit?, total_assets?, current_liabilities?);
    let invested_capital = assets - liabilities;
    if invested_capital == 0.0 {
        return None;
    }
    Some(ebit * (1.0 - CORPORATE_TAX_RATE) / invested_capital * 100.0)
}

fn net_margin(net_income: Option<f64>, revenue: Option<f64>) -> Option<f64> {
    match (net_income, revenue) {
        (Some(ni), Some(rev)) if rev > 0.0 => Some(ni / rev * 100.0),
        _ => None,
    }
}

fn debt_to_equity(total_debt: Option<f64>, equity: Option<f64>) -> Option<f64> {
    match (total_debt, equity) {
        (Some(debt), Some(eq)) if eq > 0.0 => Some(debt / eq),
        _ => None,
    }
}

fn current_ratio(current_assets: Option<f64>, current_liabilities: Option<f64>) -> Option<f64> {
    match (current_assets, current_liabilities) {
        (Some(assets), Some(liabilities)) if liabilities > 0.0 => Some(assets / liabilities),
        _ => None,
    }
}
