//! Latency analysis of a sweep transcript.
//!
//! Aggregates the per-transaction elapsed times into timing metrics:
//! 1. **Distribution:** Mean, fastest, and slowest transaction in seconds.
//! 2. **Jitter:** Sample standard deviation of the latency.
//! 3. **Throughput:** Transactions per second derived from the mean.
//!
//! Timed-out transactions still have a measurable elapsed time up to the
//! timeout boundary, so both outcomes contribute here, unlike precision
//! statistics.

use serde::{Deserialize, Serialize};

use crate::analysis::{mean, sample_std_dev};
use crate::sweep::record::SweepResult;

/// Timing metrics over all attempted transactions of one sweep.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatencyReport {
    /// Number of transactions contributing to the statistics.
    pub samples: usize,

    /// Mean per-transaction latency in seconds.
    pub mean_s: Option<f64>,

    /// Fastest observed transaction in seconds.
    pub min_s: Option<f64>,

    /// Slowest observed transaction in seconds.
    pub max_s: Option<f64>,

    /// Jitter: sample standard deviation of the latency in seconds.
    pub jitter_s: Option<f64>,

    /// Derived throughput in transactions per second.
    ///
    /// Exactly `0.0` when the record set is empty or mean latency is zero;
    /// never a division by zero.
    pub throughput_ops: f64,
}

/// Computes timing metrics from a sweep transcript.
#[derive(Clone, Copy, Debug, Default)]
pub struct LatencyAnalyzer;

impl LatencyAnalyzer {
    /// Analyzes per-transaction latency and derived throughput.
    pub fn analyze(&self, sweep: &SweepResult) -> LatencyReport {
        let samples: Vec<f64> = sweep
            .records
            .iter()
            .map(|record| record.elapsed.as_secs_f64())
            .collect();

        let mean_s = mean(&samples);
        let throughput_ops = match mean_s {
            Some(mean_latency) if mean_latency > 0.0 => 1.0 / mean_latency,
            _ => 0.0,
        };

        LatencyReport {
            samples: samples.len(),
            mean_s,
            min_s: samples.iter().copied().reduce(f64::min),
            max_s: samples.iter().copied().reduce(f64::max),
            jitter_s: sample_std_dev(&samples),
            throughput_ops,
        }
    }
}
