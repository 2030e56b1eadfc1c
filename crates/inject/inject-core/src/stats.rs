//! Local variability statistics.

/// Sample standard deviation (N-1 denominator) of the non-NaN values.
///
/// Returns 0.0 when fewer than two valid values are present, so a
/// degenerate window contributes a zero perturbation rather than an
/// error.
pub fn sample_std(values: &[f64]) -> f64 {
    let valid = values.iter().filter(|v| !v.is_nan()).count();
    if valid < 2 {
        return 0.0;
    }
    let n = valid as f64;
    let mean = values.iter().filter(|v| !v.is_nan()).sum::<f64>() / n;
    let sum_sq = values
        .iter()
        .filter(|v| !v.is_nan())
        .map(|x| (x - mean).powi(2))
        .sum::<f64>();
    (sum_sq / (n - 1.0)).sqrt()
}

/// Sample standard deviation over the neighborhood `[center - radius, center + radius)`.
///
/// The window is clamped at the left boundary and truncated at the right
/// boundary; near the end of the series fewer rows are used.
pub fn window_std(values: &[f64], center: usize, radius: usize) -> f64 {
    let start = center.saturating_sub(radius);
    let end = (center + radius).min(values.len());
    sample_std(&values[start..end])
}
