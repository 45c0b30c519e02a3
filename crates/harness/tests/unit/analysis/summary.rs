//! Summary table aggregation tests.
//!
//! Verifies the documented category order, per-threshold row generation,
//! and the rendering of degenerate metrics.

use std::time::Duration;

use rootcheck_core::analysis::summary::Category;
use rootcheck_core::{LatencyAnalyzer, PrecisionAnalyzer, SqrtReference, summarize};

use crate::common::builders::{record_with_error_lsb, sweep_of, timeout_record};

fn table_for(sweep: &rootcheck_core::SweepResult) -> rootcheck_core::SummaryTable {
    let precision = PrecisionAnalyzer.analyze(sweep, &SqrtReference, &[2.0, 10.0]);
    let latency = LatencyAnalyzer.analyze(sweep);
    summarize(sweep, &precision, &latency)
}

#[test]
fn categories_appear_in_the_documented_order() {
    let sweep = sweep_of(vec![record_with_error_lsb(1, 0.5)]);
    let table = table_for(&sweep);

    let mut seen = Vec::new();
    for row in &table.rows {
        if seen.last() != Some(&row.category) {
            seen.push(row.category);
        }
    }
    assert_eq!(
        seen,
        vec![
            Category::General,
            Category::Precision,
            Category::SignalQuality,
            Category::Timing,
        ]
    );
}

#[test]
fn one_pass_rate_row_per_declared_threshold() {
    let sweep = sweep_of(vec![record_with_error_lsb(1, 0.5)]);
    let table = table_for(&sweep);

    let pass_rows: Vec<&str> = table
        .rows
        .iter()
        .filter(|row| row.metric.starts_with("Pass Rate"))
        .map(|row| row.metric.as_str())
        .collect();
    assert_eq!(
        pass_rows,
        vec!["Pass Rate (<= 2 LSB)", "Pass Rate (<= 10 LSB)"]
    );
}

#[test]
fn general_counts_match_the_sweep() {
    let sweep = sweep_of(vec![
        record_with_error_lsb(1, 0.5),
        timeout_record(2, Duration::from_millis(50)),
    ]);
    let table = table_for(&sweep);

    let value_of = |metric: &str| {
        table
            .rows
            .iter()
            .find(|row| row.metric == metric)
            .map(|row| row.value.clone())
            .unwrap()
    };
    assert_eq!(value_of("Total Test Vectors"), "2");
    assert_eq!(value_of("Completed"), "1");
    assert_eq!(value_of("Timeouts"), "1");
}

#[test]
fn degenerate_metrics_render_as_no_data() {
    let sweep = sweep_of(vec![timeout_record(2, Duration::ZERO)]);
    let table = table_for(&sweep);

    let value_of = |metric: &str| {
        table
            .rows
            .iter()
            .find(|row| row.metric == metric)
            .map(|row| row.value.clone())
            .unwrap()
    };
    assert_eq!(value_of("Average Error"), "n/a");
    assert_eq!(value_of("SQNR"), "n/a");
    assert_eq!(value_of("System Throughput"), "0.00 ops/sec");
}

#[test]
fn every_row_carries_a_description() {
    let sweep = sweep_of(vec![record_with_error_lsb(1, 0.5)]);
    let table = table_for(&sweep);

    assert!(!table.rows.is_empty());
    for row in &table.rows {
        assert!(!row.description.is_empty());
    }
}

#[test]
fn category_display_names_are_stable() {
    assert_eq!(Category::General.to_string(), "General");
    assert_eq!(Category::Precision.to_string(), "Precision");
    assert_eq!(Category::SignalQuality.to_string(), "Signal Quality");
    assert_eq!(Category::Timing.to_string(), "Timing");
}
