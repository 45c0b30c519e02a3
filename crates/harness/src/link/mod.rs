//! Link layer contract between the harness and the physical transport.
//!
//! This module defines the seam the transaction engine drives and the
//! in-process device used when no hardware is attached:
//! 1. **Contract:** The [`Channel`] trait, the minimal byte-level capability set the engine needs.
//! 2. **Simulation:** [`sim::SqrtDeviceSim`], a deterministic stand-in for the accelerator.
//!
//! Opening the physical device, configuring baud, and byte-level retry
//! decisions all belong to the transport implementor, never to the core.

/// Simulated square-root device.
pub mod sim;

use std::time::Duration;

use crate::common::error::ChannelError;

/// Byte-level contract the transaction engine needs from the link.
///
/// The protocol is strictly half-duplex with a single transaction in
/// flight: the engine always completes one write/read exchange before
/// issuing the next, and a channel is exclusively owned by one sweep for
/// its entire duration.
pub trait Channel {
    /// Writes the whole buffer to the link.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError`] when the transport fails. Write failures are
    /// fatal to the sweep that owns the channel.
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), ChannelError>;

    /// Reads up to `n` bytes, waiting at most `timeout`.
    ///
    /// A response that has not fully arrived when the window closes yields
    /// an `Ok` result shorter than `n` bytes, never an indefinite block.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError`] only for hard transport failures (a
    /// vanished device, an I/O error); an absent response is a short read,
    /// not an error.
    fn read_with_timeout(&mut self, n: usize, timeout: Duration) -> Result<Vec<u8>, ChannelError>;
}
