//! Verification harness for a Q8.8 fixed-point square-root accelerator.
//!
//! The unit under test sits behind a slow, half-duplex, fixed-baud serial
//! link and is characterized only by its observable responses. This crate
//! implements:
//! 1. **Wire Protocol:** 2-byte little-endian requests and Q8.8 responses.
//! 2. **Link Contract:** The byte channel the engine needs from a transport, plus a simulated device.
//! 3. **Sweep:** Transaction engine, ordered sweep controller, timeout policy, cancellation.
//! 4. **Analysis:** Precision (error-in-LSB, pass rates, SQNR) and latency (mean/min/max, jitter, throughput) over a captured transcript.
//! 5. **Reporting:** The merged category/metric summary table.
//!
//! Transcript capture and transcript interpretation are separate stages:
//! analyzers consume a read-only [`SweepResult`], so re-analysis under a
//! new tolerance never requires re-running the hardware.

/// Transcript interpretation (precision, latency, summary).
pub mod analysis;
/// Common types (fixed-point value, error taxonomy).
pub mod common;
/// Harness configuration (defaults, link/sweep/analysis sections).
pub mod config;
/// Link layer contract and the simulated device.
pub mod link;
/// Reference models for precision comparison.
pub mod reference;
/// Transaction engine, sweep controller, records.
pub mod sweep;
/// Wire codec for the request/response protocol.
pub mod wire;

/// Latency analyzer and its report.
pub use crate::analysis::latency::{LatencyAnalyzer, LatencyReport};
/// Precision analyzer and its report.
pub use crate::analysis::precision::{PrecisionAnalyzer, PrecisionReport, ThresholdResult};
/// Summary table aggregation.
pub use crate::analysis::summary::{Category, SummaryRow, SummaryTable, summarize};
/// Error taxonomy.
pub use crate::common::error::{ChannelError, DecodeError};
/// Q8.8 fixed-point value type.
pub use crate::common::fixed::Q88;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Link contract implemented by transports and fakes.
pub use crate::link::Channel;
/// Reference models.
pub use crate::reference::{ReferenceModel, SqrtReference};
/// Sweep controller and cancellation token.
pub use crate::sweep::{CancelToken, SweepController};
/// Transaction records and sweep results.
pub use crate::sweep::record::{Outcome, SweepResult, TransactionRecord};
