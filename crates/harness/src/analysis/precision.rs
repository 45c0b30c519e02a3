//! Precision analysis of a sweep transcript.
//!
//! Compares each completed transaction against the exact reference value
//! and aggregates the error distribution. It computes:
//! 1. **Pass Rates:** Share of analyzable vectors within each declared tolerance, in LSB.
//! 2. **Error Distribution:** Mean, worst-case, and sample standard deviation of the error in LSB.
//! 3. **SQNR:** Aggregate signal-to-quantization-noise ratio in dB.
//!
//! Timed-out records never contribute to precision statistics, but their
//! count is a required report field so the pass-rate denominator is never
//! silently misrepresented.

use serde::{Deserialize, Serialize};

use crate::analysis::{mean, sample_std_dev};
use crate::common::fixed::Q88;
use crate::reference::ReferenceModel;
use crate::sweep::record::SweepResult;

/// SQNR sentinel reported when aggregate error power is exactly zero.
///
/// The true ratio is infinite; the sentinel marks "no measurable error"
/// with a fixed large dB figure instead of an unrepresentable value.
pub const SQNR_PERFECT_DB: f64 = 999.0;

/// Pass/fail outcome under one declared tolerance threshold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThresholdResult {
    /// Declared tolerance in LSB, echoed so the threshold a pass rate was
    /// computed against is always visible in output.
    pub tolerance_lsb: f64,

    /// Records whose error in LSB is at or below the tolerance.
    pub passed: usize,

    /// Percentage of analyzable records passing; `None` when there is no
    /// analyzable data.
    pub pass_rate: Option<f64>,
}

/// Precision metrics over the analyzable records of one sweep.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrecisionReport {
    /// Records contributing to the statistics: completed, with both a
    /// result and an expected value.
    pub analyzable: usize,

    /// Timed-out records excluded from the statistics.
    pub excluded_timeouts: usize,

    /// Per-threshold pass results, in declared threshold order.
    pub thresholds: Vec<ThresholdResult>,

    /// Mean error in LSB; `None` when nothing is analyzable.
    pub mean_error_lsb: Option<f64>,

    /// Worst-case error in LSB.
    pub max_error_lsb: Option<f64>,

    /// Sample standard deviation of the error in LSB.
    pub std_error_lsb: Option<f64>,

    /// Signal-to-quantization-noise ratio in dB; [`SQNR_PERFECT_DB`] when
    /// error power is zero, `None` when nothing is analyzable.
    pub sqnr_db: Option<f64>,
}

/// Computes precision metrics from a sweep transcript.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrecisionAnalyzer;

impl PrecisionAnalyzer {
    /// Analyzes a transcript against declared tolerance thresholds.
    ///
    /// Only completed records contribute. Records carrying an eagerly
    /// computed expected value use it; records from timing-only transcripts
    /// fall back to the reference model, so a stored transcript can be
    /// re-scored under new tolerances without re-running the hardware.
    pub fn analyze(
        &self,
        sweep: &SweepResult,
        reference: &dyn ReferenceModel,
        tolerance_lsb: &[f64],
    ) -> PrecisionReport {
        let mut expecteds = Vec::new();
        let mut abs_errors = Vec::new();
        let mut errors_lsb = Vec::new();

        for record in &sweep.records {
            let Some(result) = record.result() else {
                continue;
            };
            let expected = record
                .expected
                .unwrap_or_else(|| reference.expected(record.input));
            let abs_error = (result - expected).abs();
            expecteds.push(expected);
            abs_errors.push(abs_error);
            errors_lsb.push(abs_error / Q88::LSB);
        }

        let analyzable = errors_lsb.len();

        let thresholds = tolerance_lsb
            .iter()
            .map(|&tolerance| {
                let passed = errors_lsb.iter().filter(|&&error| error <= tolerance).count();
                let pass_rate =
                    (analyzable > 0).then(|| passed as f64 / analyzable as f64 * 100.0);
                ThresholdResult {
                    tolerance_lsb: tolerance,
                    passed,
                    pass_rate,
                }
            })
            .collect();

        let sqnr_db = (analyzable > 0).then(|| {
            let signal_power: f64 = expecteds.iter().map(|e| e * e).sum();
            let error_power: f64 = abs_errors.iter().map(|e| e * e).sum();
            if error_power == 0.0 {
                SQNR_PERFECT_DB
            } else if signal_power == 0.0 {
                // An identically-zero reference signal carries no signal
                // power; 0 dB instead of a log of zero.
                0.0
            } else {
                10.0 * (signal_power / error_power).log10()
            }
        });

        PrecisionReport {
            analyzable,
            excluded_timeouts: sweep.timeouts(),
            thresholds,
            mean_error_lsb: mean(&errors_lsb),
            max_error_lsb: errors_lsb.iter().copied().reduce(f64::max),
            std_error_lsb: sample_std_dev(&errors_lsb),
            sqnr_db,
        }
    }
}
