//! Transaction engine: the innermost hot loop.
//!
//! Drives one input through the channel and turns the exchange into a
//! structured record. One call performs:
//! 1. **Encode:** The 2-byte little-endian request.
//! 2. **Exchange:** Exactly one write and one bounded read, no retries.
//! 3. **Timing:** Monotonic timestamps around the exchange.
//! 4. **Classification:** Completed or timed out; a short response is a timeout.
//! 5. **Reference:** Eager expected-value computation when a model is supplied.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::common::error::{ChannelError, DecodeError};
use crate::link::Channel;
use crate::reference::ReferenceModel;
use crate::sweep::record::{Outcome, TransactionRecord};
use crate::wire;

/// Executes single request/response transactions with bounded timing.
#[derive(Clone, Copy, Debug)]
pub struct TransactionEngine {
    timeout: Duration,
}

impl TransactionEngine {
    /// Creates an engine with the given per-transaction response timeout.
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Returns the configured response timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Drives one input through the channel and records the exchange.
    ///
    /// The elapsed time is measured on the monotonic clock around the
    /// write/read pair. A timed-out transaction is terminal for its input
    /// and is never resent.
    ///
    /// # Errors
    ///
    /// Propagates [`ChannelError`] from the transport, which is fatal to
    /// the sweep. Response timeouts are not errors; they come back as
    /// records tagged [`Outcome::Timeout`].
    pub fn execute(
        &self,
        input: u16,
        channel: &mut dyn Channel,
        reference: Option<&dyn ReferenceModel>,
    ) -> Result<TransactionRecord, ChannelError> {
        let request = wire::encode(input);

        let start = Instant::now();
        channel.write_all(&request)?;
        let raw = channel.read_with_timeout(wire::RESPONSE_LEN, self.timeout)?;
        let elapsed = start.elapsed();

        let (response, outcome) = match wire::decode(&raw) {
            Ok(value) => (Some(value), Outcome::Completed),
            // A partial response is indistinguishable from a timeout on
            // this protocol; same outcome category.
            Err(DecodeError::Incomplete { .. }) => (None, Outcome::Timeout),
        };
        let expected = reference.map(|model| model.expected(input));

        trace!(
            input,
            ?outcome,
            elapsed_us = elapsed.as_micros() as u64,
            "transaction finished"
        );

        Ok(TransactionRecord {
            input,
            response,
            expected,
            elapsed,
            outcome,
        })
    }
}
