//! Transaction records and sweep results.
//!
//! The data produced by the transaction phase, consumed read-only by the
//! analyzers:
//! 1. **Outcome:** Terminal classification of one exchange (completed or timed out).
//! 2. **Transaction Record:** One request/response exchange with its timing and eager error data.
//! 3. **Sweep Result:** The ordered transcript of a whole sweep plus sweep-level metadata.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::common::fixed::Q88;

/// Terminal classification of one transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A complete 2-byte response arrived within the timeout window.
    Completed,
    /// The response was absent or short when the timeout window closed.
    Timeout,
}

/// One request/response exchange with the unit under test.
///
/// Created once per sweep iteration by the transaction engine and immutable
/// thereafter. The fixed-point result is derived from the raw response on
/// demand rather than stored separately.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Input register value driven for this transaction.
    pub input: u16,

    /// Raw response value; `None` when the transaction timed out.
    pub response: Option<Q88>,

    /// Exact expected value, when a reference model was supplied to the
    /// engine; `None` in timing-only sweeps.
    pub expected: Option<f64>,

    /// Wall time of the whole exchange, measured on the monotonic clock.
    ///
    /// For a timed-out transaction this is the measured time until the
    /// short read returned, which on a real link sits at about the
    /// configured timeout.
    pub elapsed: Duration,

    /// Terminal classification of the exchange.
    pub outcome: Outcome,
}

impl TransactionRecord {
    /// Fixed-point result as a real value, when a response arrived.
    pub fn result(&self) -> Option<f64> {
        self.response.map(Q88::to_f64)
    }

    /// Absolute error against the expected value, when both are present.
    pub fn abs_error(&self) -> Option<f64> {
        match (self.result(), self.expected) {
            (Some(result), Some(expected)) => Some((result - expected).abs()),
            _ => None,
        }
    }

    /// Absolute error expressed in LSB of the Q8.8 format.
    pub fn error_lsb(&self) -> Option<f64> {
        self.abs_error().map(|error| error / Q88::LSB)
    }
}

/// Full transcript of one sweep plus sweep-level metadata.
///
/// Records are appended in strict input order while the sweep runs, then
/// the whole structure is handed read-only to the analyzers. A partial
/// transcript (abort or cancellation) is still a valid analysis input and
/// carries its stopping point explicitly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Transaction records in strict input order.
    pub records: Vec<TransactionRecord>,

    /// Wall time around the whole sweep loop.
    ///
    /// Always at least the sum of the per-transaction elapsed times, since
    /// it also captures inter-transaction overhead.
    pub total_elapsed: Duration,

    /// Index of the timing-out record that stopped the sweep under the
    /// abort policy; `None` for a run that was not aborted.
    pub aborted_at: Option<usize>,

    /// True when an external cancellation stopped the sweep between
    /// transactions.
    pub cancelled: bool,
}

impl SweepResult {
    /// Number of transactions attempted.
    pub fn attempted(&self) -> usize {
        self.records.len()
    }

    /// Number of transactions with a complete response.
    pub fn completed(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.outcome == Outcome::Completed)
            .count()
    }

    /// Number of transactions that timed out.
    pub fn timeouts(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.outcome == Outcome::Timeout)
            .count()
    }
}
