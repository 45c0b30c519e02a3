//! Transcript interpretation: precision, latency, and the merged summary.
//!
//! The analyzers consume a read-only [`crate::sweep::record::SweepResult`];
//! re-analysis under new tolerances never requires re-running the hardware.
//! This module provides:
//! 1. **Precision:** Error-in-LSB distribution, tolerance pass rates, SQNR.
//! 2. **Latency:** Mean/min/max latency, jitter, derived throughput.
//! 3. **Summary:** The ordered category/metric table merging both reports.

/// Latency analysis of a sweep transcript.
pub mod latency;
/// Precision analysis of a sweep transcript.
pub mod precision;
/// Merged summary table.
pub mod summary;

/// Arithmetic mean; `None` on an empty sample set.
pub(crate) fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        None
    } else {
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}

/// Sample standard deviation (n - 1 divisor).
///
/// `0.0` for a single sample, `None` for an empty set; the degenerate
/// cases yield defined values rather than NaN.
pub(crate) fn sample_std_dev(samples: &[f64]) -> Option<f64> {
    let center = mean(samples)?;
    if samples.len() < 2 {
        return Some(0.0);
    }
    let variance = samples
        .iter()
        .map(|sample| (sample - center).powi(2))
        .sum::<f64>()
        / (samples.len() - 1) as f64;
    Some(variance.sqrt())
}
