//! Candidate selection and target-weight computation for one rebalance date.

/// Order scores descending, ties broken by symbol so runs are reproducible.
fn rank(scores: &[(String, f64)]) -> Vec<(String, f64)> {
    let mut ranked = scores.to_vec();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked
}

/// Stocks scoring strictly above `cutoff`; when none qualify, the top
/// `top_n` by score. The fallback guarantees every month deploys capital;
/// it is a deliberate policy, not an error path.
pub fn select_candidates(
    scores: &[(String, f64)],
    cutoff: f64,
    top_n: usize,
) -> Vec<(String, f64)> {
    let ranked = rank(scores);
    let qualifying: Vec<(String, f64)> = ranked
        .iter()
        .filter(|(_, score)| *score > cutoff)
        .cloned()
        .collect();
    if !qualifying.is_empty() {
        return qualifying;
    }
    ranked.into_iter().take(top_n).collect()
}

/// Score-proportional weights, clipped once to `cap` and renormalized to
/// sum to 1. The clip is a single pass, not iterated, so renormalization can
/// push a weight back above the cap. An all-zero score set falls back to
/// equal weighting.
pub fn target_weights(selected: &[(String, f64)], cap: f64) -> Vec<(String, f64)> {
    if selected.is_empty() {
        return Vec::new();
    }

    let score_sum: f64 = selected.iter().map(|(_, s)| s).sum();
    let n = selected.len() as f64;

    let mut weights: Vec<(String, f64)> = selected
        .iter()
        .map(|(symbol, score)| {
            let raw = if score_sum > 0.0 {
                score / score_sum
            } else {
                1.0 / n
            };
            (symbol.clone(), raw.min(cap))
        })
        .collect();

    let clipped_sum: f64 = weights.iter().map(|(_, w)| w).sum();
    if clipped_sum > 0.0 {
        for (_, w) in &mut weights {
            *w /= clipped_sum;
        }
    }
    weights
}
