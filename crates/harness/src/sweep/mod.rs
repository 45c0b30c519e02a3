//! Sweep controller: ordered iteration, failure policy, progress.
//!
//! This module drives a whole input sequence through the transaction
//! engine. It provides:
//! 1. **Controller:** Strictly ordered iteration with sweep-level wall-clock timing.
//! 2. **Failure Policy:** Abort at the first timeout, or record it and continue.
//! 3. **Cancellation:** A cooperative token checked only between transactions.
//! 4. **Progress:** `tracing` events at a configurable cadence, observability only.
//! 5. **Domains:** The canonical exhaustive input sequences.

/// Transaction engine for single exchanges.
pub mod engine;
/// Transaction records and sweep results.
pub mod record;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::common::error::ChannelError;
use crate::config::{Config, TimeoutPolicy};
use crate::link::Channel;
use crate::reference::ReferenceModel;
use self::engine::TransactionEngine;
use self::record::{Outcome, SweepResult};

/// Cooperative cancellation flag checked between transactions.
///
/// Cancellation never interrupts a transaction in flight: it takes effect
/// only at the controller's per-iteration boundary, so a transaction either
/// completes or times out on its own terms.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation at the next iteration boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// True when cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The canonical exhaustive input domain, 0 through 65535 inclusive.
pub fn full_domain() -> Vec<u16> {
    (0..=u16::MAX).collect()
}

/// The exhaustive input domain excluding zero, 1 through 65535 inclusive.
///
/// The historical bench procedure swept this domain; the zero edge is
/// covered by [`full_domain`] now that the reference is defined there.
pub fn nonzero_domain() -> Vec<u16> {
    (1..=u16::MAX).collect()
}

/// Drives an ordered input sequence through the transaction engine.
///
/// The controller owns the sweep loop: record accumulation in strict input
/// order, timeout policy, cancellation checks, progress events, and the
/// sweep-level wall clock.
#[derive(Debug)]
pub struct SweepController {
    engine: TransactionEngine,
    on_timeout: TimeoutPolicy,
    progress_every: usize,
}

impl SweepController {
    /// Creates a controller from the harness configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            engine: TransactionEngine::new(config.link.response_timeout()),
            on_timeout: config.sweep.on_timeout,
            progress_every: config.sweep.progress_every,
        }
    }

    /// Runs one sweep over `inputs`, in order, on an exclusively owned
    /// channel.
    ///
    /// Timeouts are handled per the configured [`TimeoutPolicy`] and always
    /// recorded, never silently dropped. Progress events are emitted
    /// through `tracing` every `progress_every` records; they never affect
    /// correctness. An aborted or cancelled sweep still yields a valid
    /// partial [`SweepResult`] with its stopping point marked.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError`] when the transport itself fails; the sweep
    /// does not proceed past such a failure.
    pub fn run(
        &self,
        inputs: &[u16],
        channel: &mut dyn Channel,
        reference: Option<&dyn ReferenceModel>,
        cancel: &CancelToken,
    ) -> Result<SweepResult, ChannelError> {
        let mut result = SweepResult {
            records: Vec::with_capacity(inputs.len()),
            ..SweepResult::default()
        };

        debug!(
            inputs = inputs.len(),
            policy = ?self.on_timeout,
            timeout_ms = self.engine.timeout().as_millis() as u64,
            "sweep started"
        );
        let sweep_start = Instant::now();

        for (index, &input) in inputs.iter().enumerate() {
            if cancel.is_cancelled() {
                info!(index, "sweep cancelled");
                result.cancelled = true;
                break;
            }

            let record = self.engine.execute(input, channel, reference)?;
            let timed_out = record.outcome == Outcome::Timeout;
            result.records.push(record);

            if timed_out {
                warn!(input, index, "response timeout");
                if self.on_timeout == TimeoutPolicy::Abort {
                    result.aborted_at = Some(index);
                    break;
                }
            }

            if self.progress_every > 0 && (index + 1) % self.progress_every == 0 {
                info!(processed = index + 1, total = inputs.len(), "sweep progress");
            }
        }

        result.total_elapsed = sweep_start.elapsed();
        debug!(
            attempted = result.attempted(),
            completed = result.completed(),
            timeouts = result.timeouts(),
            elapsed_ms = result.total_elapsed.as_millis() as u64,
            "sweep finished"
        );
        Ok(result)
    }
}
