/// The z-score of a two-sided 95% confidence interval.
pub const Z_95: f64 = 1.96;

/// The mean of the samples and the half-width of a 95% confidence interval about the mean, if there are any samples.
///
/// The half-width is `1.96 * σ / √n`, with σ the population standard deviation (dividing by n, not n - 1).
///
/// ```rust
/// # use otter_bench::aggregate::statistics::mean_ci;
/// let (mean, ci) = mean_ci(&[2.0, 2.0, 2.0]).unwrap();
/// assert_eq!(mean, 2.0);
/// assert_eq!(ci, 0.0);
///
/// assert!(mean_ci(&[]).is_none());
/// ```
pub fn mean_ci(samples: &[f64]) -> Option<(f64, f64)> {
    if samples.is_empty() {
        return None;
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let ci = Z_95 * variance.sqrt() / n.sqrt();

    Some((mean, ci))
}
