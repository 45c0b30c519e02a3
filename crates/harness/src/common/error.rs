//! Error taxonomy for the verification harness.
//!
//! This module defines the failure categories of the transaction path. It
//! provides:
//! 1. **Channel Errors:** Transport failures (open, write, hard read) that are fatal to a sweep.
//! 2. **Decode Errors:** Short wire responses, structurally equivalent to a response timeout.
//! 3. **Error Traits:** Integration with standard Rust error traits via `thiserror`.
//!
//! Per-transaction response timeouts are deliberately absent here: a timeout
//! is a recorded outcome handled by sweep policy, never an error that
//! propagates.

use std::io;

use thiserror::Error;

/// Failures of the physical link collaborator.
///
/// Any of these terminates the sweep that owns the channel with a clear
/// cause; the harness never retries at the byte level.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The link device could not be opened.
    ///
    /// Raised by transport implementors before any transaction runs.
    #[error("failed to open link device `{device}`")]
    Open {
        /// Identifier of the device that failed to open.
        device: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A request write did not complete.
    #[error("link write failed")]
    Write(#[source] io::Error),

    /// A response read failed with a hard I/O error.
    ///
    /// Not a timeout: a response that simply has not arrived within the
    /// window is a short read, which the engine records as a timeout
    /// outcome.
    #[error("link read failed")]
    Read(#[source] io::Error),
}

/// Failures when interpreting a wire response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The response held fewer bytes than the fixed response length.
    ///
    /// On this protocol a partial response cannot be distinguished from a
    /// timeout; callers treat both as the same outcome category.
    #[error("incomplete response: expected {expected} bytes, got {got}")]
    Incomplete {
        /// Number of bytes the protocol requires.
        expected: usize,
        /// Number of bytes actually available.
        got: usize,
    },
}
