//! Merged summary table.
//!
//! A purely presentational join of the precision and latency reports into
//! one ordered category/metric/value/description table. Category and row
//! order are stable and documented so runs can be diffed and rendered
//! deterministically:
//! 1. **General:** Vectors attempted, completed, timeouts, sweep wall clock.
//! 2. **Precision:** Per-threshold pass rates, then mean, max, and std-dev error.
//! 3. **Signal Quality:** SQNR.
//! 4. **Timing:** Mean/min/max latency, jitter, throughput.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::latency::LatencyReport;
use crate::analysis::precision::PrecisionReport;
use crate::sweep::record::SweepResult;

/// Category grouping of summary rows, in fixed render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Sweep-level counts and wall clock.
    General,
    /// Error distribution and tolerance pass rates.
    Precision,
    /// Aggregate signal quality (SQNR).
    SignalQuality,
    /// Latency distribution and throughput.
    Timing,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General => write!(f, "General"),
            Self::Precision => write!(f, "Precision"),
            Self::SignalQuality => write!(f, "Signal Quality"),
            Self::Timing => write!(f, "Timing"),
        }
    }
}

/// One row of the summary table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Category the row belongs to.
    pub category: Category,
    /// Metric name.
    pub metric: String,
    /// Formatted value, `n/a` when the underlying metric has no data.
    pub value: String,
    /// Human-readable description of the metric.
    pub description: String,
}

/// Ordered summary of one verification run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    /// Rows grouped by category, in the documented order.
    pub rows: Vec<SummaryRow>,
}

/// Builds one summary row.
fn row(category: Category, metric: &str, value: String, description: &str) -> SummaryRow {
    SummaryRow {
        category,
        metric: metric.to_owned(),
        value,
        description: description.to_owned(),
    }
}

/// Formats an optional metric with a unit, rendering `n/a` when absent.
fn fmt_opt(value: Option<f64>, digits: usize, unit: &str) -> String {
    value.map_or_else(
        || "n/a".to_owned(),
        |v| format!("{v:.digits$} {unit}"),
    )
}

/// Merges the analyzer outputs into the ordered summary table.
///
/// No computation beyond rendering happens here; every number comes from
/// the sweep result or one of the two reports.
pub fn summarize(
    sweep: &SweepResult,
    precision: &PrecisionReport,
    latency: &LatencyReport,
) -> SummaryTable {
    let mut rows = Vec::new();

    rows.push(row(
        Category::General,
        "Total Test Vectors",
        sweep.attempted().to_string(),
        "Transactions attempted over the input sequence",
    ));
    rows.push(row(
        Category::General,
        "Completed",
        sweep.completed().to_string(),
        "Transactions with a complete response",
    ));
    rows.push(row(
        Category::General,
        "Timeouts",
        sweep.timeouts().to_string(),
        "Transactions with no complete response within the window",
    ));
    rows.push(row(
        Category::General,
        "Sweep Wall Clock",
        format!("{:.2} s", sweep.total_elapsed.as_secs_f64()),
        "Total wall time around the sweep loop",
    ));

    for threshold in &precision.thresholds {
        rows.push(row(
            Category::Precision,
            &format!("Pass Rate (<= {} LSB)", threshold.tolerance_lsb),
            fmt_opt(threshold.pass_rate, 2, "%"),
            "Share of analyzable vectors within the declared tolerance",
        ));
    }
    rows.push(row(
        Category::Precision,
        "Average Error",
        fmt_opt(precision.mean_error_lsb, 4, "LSB"),
        "Mean deviation from the exact result",
    ));
    rows.push(row(
        Category::Precision,
        "Max Error",
        fmt_opt(precision.max_error_lsb, 4, "LSB"),
        "Worst-case deviation",
    ));
    rows.push(row(
        Category::Precision,
        "Error Std Dev",
        fmt_opt(precision.std_error_lsb, 4, "LSB"),
        "Spread of the error distribution",
    ));

    rows.push(row(
        Category::SignalQuality,
        "SQNR",
        fmt_opt(precision.sqnr_db, 2, "dB"),
        "Signal-to-quantization-noise ratio over the sweep",
    ));

    rows.push(row(
        Category::Timing,
        "Average Latency",
        fmt_opt(latency.mean_s.map(|s| s * 1000.0), 3, "ms"),
        "Mean wall time per transaction",
    ));
    rows.push(row(
        Category::Timing,
        "Min Latency",
        fmt_opt(latency.min_s.map(|s| s * 1000.0), 3, "ms"),
        "Fastest transaction",
    ));
    rows.push(row(
        Category::Timing,
        "Max Latency",
        fmt_opt(latency.max_s.map(|s| s * 1000.0), 3, "ms"),
        "Slowest transaction",
    ));
    rows.push(row(
        Category::Timing,
        "Jitter",
        fmt_opt(latency.jitter_s.map(|s| s * 1000.0), 3, "ms"),
        "Standard deviation of the per-transaction latency",
    ));
    rows.push(row(
        Category::Timing,
        "System Throughput",
        format!("{:.2} ops/sec", latency.throughput_ops),
        "Transactions per second derived from the mean latency",
    ));

    SummaryTable { rows }
}
