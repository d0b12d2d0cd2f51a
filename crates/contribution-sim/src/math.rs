//! Pure performance math. Stateless, no I/O.

/// Simple returns between consecutive values. Zero-valued starting points
/// are skipped (the first funded month has no meaningful prior value).
pub fn periodic_returns(values: &[f64]) -> Vec<f64> {
    if values.len() < 2 {
        return Vec::new();
    }
    values
        .windows(2)
        .filter_map(|w| {
            if w[0] != 0.0 {
                Some((w[1] - w[0]) / w[0])
            } else {
                None
            }
        })
        .collect()
}

/// Sample standard deviation of monthly returns, annualized by sqrt(12).
pub fn annualized_volatility(monthly_returns: &[f64]) -> Option<f64> {
    if monthly_returns.len() < 2 {
        return None;
    }
    let n = monthly_returns.len() as f64;
    let mean: f64 = monthly_returns.iter().sum::<f64>() / n;
    let variance: f64 = monthly_returns
        .iter()
        .map(|r| (r - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    Some(variance.sqrt() * 12.0_f64.sqrt())
}

/// Maximum peak-to-trough decline as a positive fraction (0.15 = 15%).
/// Zero for empty or monotonically rising series.
pub fn max_drawdown(values: &[f64]) -> f64 {
    let mut peak = f64::MIN;
    let mut max_dd = 0.0_f64;
    for &v in values {
        if v > peak {
            peak = v;
        }
        if peak > 0.0 {
            let dd = (peak - v) / peak;
            if dd > max_dd {
                max_dd = dd;
            }
        }
    }
    max_dd
}

/// Compound annual growth rate over total money contributed:
/// (final / contributed)^(1/years) - 1.
///
/// This measures growth against the sum of contributions, not a lump-sum
/// start: constant value with no price change yields exactly 0.
pub fn cagr(final_value: f64, total_contributed: f64, years: f64) -> Option<f64> {
    if total_contributed <= 0.0 || years <= 0.0 || final_value < 0.0 {
        return None;
    }
    Some((final_value / total_contributed).powf(1.0 / years) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodic_returns() {
        let values = vec![1000.0, 1100.0, 1045.0];
        let returns = periodic_returns(&values);
        assert_eq!(returns.len(), 2);
        assert!((returns[0] - 0.10).abs() < 1e-12);
        assert!((returns[1] + 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_periodic_returns_skips_zero_start() {
        let values = vec![0.0, 1000.0, 1100.0];
        let returns = periodic_returns(&values);
        assert_eq!(returns.len(), 1);
    }

    #[test]
    fn test_volatility_of_constant_returns_is_zero() {
        let vol = annualized_volatility(&[0.01, 0.01, 0.01, 0.01]).unwrap();
        assert!(vol.abs() < 1e-12);
        assert!(annualized_volatility(&[0.01]).is_none());
    }

    #[test]
    fn test_max_drawdown() {
        let values = vec![1000.0, 1100.0, 950.0, 1000.0, 1150.0, 1080.0];
        let dd = max_drawdown(&values);
        // Peak 1100, trough 950
        assert!((dd - 150.0 / 1100.0).abs() < 1e-12);
    }

    #[test]
    fn test_max_drawdown_monotone_series_is_zero() {
        assert_eq!(max_drawdown(&[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(max_drawdown(&[]), 0.0);
    }

    #[test]
    fn test_cagr_flat_value_is_zero() {
        // 24 contributions of 1000, no price change
        let c = cagr(24_000.0, 24_000.0, 2.0).unwrap();
        assert!(c.abs() < 1e-12);
    }

    #[test]
    fn test_cagr_doubling_over_one_year() {
        let c = cagr(2000.0, 1000.0, 1.0).unwrap();
        assert!((c - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cagr_degenerate_inputs() {
        assert!(cagr(1000.0, 0.0, 1.0).is_none());
        assert!(cagr(1000.0, 1000.0, 0.0).is_none());
        assert!(cagr(-1.0, 1000.0, 1.0).is_none());
    }
}
