use std::time::Duration;

use rootcheck_core::{Outcome, Q88, SweepResult, TransactionRecord};

/// Builds a completed record whose error is exactly `error_lsb` LSB.
///
/// The response is fixed at 2.0 and the expected value offset below it, so
/// dyadic `error_lsb` values produce exact errors.
pub fn record_with_error_lsb(input: u16, error_lsb: f64) -> TransactionRecord {
    let response = Q88::new(512);
    TransactionRecord {
        input,
        response: Some(response),
        expected: Some(response.to_f64() - error_lsb * Q88::LSB),
        elapsed: Duration::from_millis(2),
        outcome: Outcome::Completed,
    }
}

/// Builds a completed record from raw response and expected value.
pub fn completed_record(
    input: u16,
    raw: u16,
    expected: f64,
    elapsed: Duration,
) -> TransactionRecord {
    TransactionRecord {
        input,
        response: Some(Q88::new(raw)),
        expected: Some(expected),
        elapsed,
        outcome: Outcome::Completed,
    }
}

/// Builds a timed-out record.
pub fn timeout_record(input: u16, elapsed: Duration) -> TransactionRecord {
    TransactionRecord {
        input,
        response: None,
        expected: None,
        elapsed,
        outcome: Outcome::Timeout,
    }
}

/// Wraps records into a sweep result for analyzer tests.
pub fn sweep_of(records: Vec<TransactionRecord>) -> SweepResult {
    let total_elapsed = records.iter().map(|record| record.elapsed).sum();
    SweepResult {
        records,
        total_elapsed,
        aborted_at: None,
        cancelled: false,
    }
}
