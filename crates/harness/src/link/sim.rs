//! Simulated square-root device.
//!
//! An in-process stand-in for the accelerator, used by the CLI and the
//! end-to-end tests. It implements:
//! 1. **Computation:** The exact square root of each request, quantized to Q8.8.
//! 2. **Quantization Modes:** Round-to-nearest (ideal unit) or truncation (historical gateware).
//! 3. **Fault Injection:** Scripted response drops so sweep failure policy can be exercised.
//! 4. **Latency Shaping:** An optional fixed response delay so timing metrics are non-trivial.

use std::collections::VecDeque;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use crate::common::error::ChannelError;
use crate::common::fixed::Q88;
use crate::link::Channel;
use crate::wire;

/// Quantization behavior of the simulated unit.
///
/// An ideal unit rounds to the nearest representable value; the historical
/// gateware truncates, which gives it its characteristic error of several
/// LSB at large inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round to the nearest representable Q8.8 value.
    #[default]
    Nearest,
    /// Truncate toward zero, dropping remainder bits below the LSB.
    Truncate,
}

impl FromStr for RoundingMode {
    type Err = String;

    /// Parses `nearest`/`round` or `truncate`/`trunc`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" | "round" => Ok(Self::Nearest),
            "truncate" | "trunc" => Ok(Self::Truncate),
            other => Err(format!(
                "unknown rounding mode `{other}` (expected `nearest` or `truncate`)"
            )),
        }
    }
}

/// In-process simulation of the square-root accelerator.
///
/// `write_all` decodes the request, computes the exact square root,
/// quantizes it per the configured [`RoundingMode`], and queues the 2-byte
/// response; `read_with_timeout` drains the queue. Responses to scripted
/// request indices can be swallowed so the corresponding reads come back
/// short, the same observable behavior as a hardware timeout.
#[derive(Debug, Default)]
pub struct SqrtDeviceSim {
    mode: RoundingMode,
    response_latency: Duration,
    drop_responses_at: Vec<usize>,
    requests_seen: usize,
    rx: VecDeque<u8>,
}

impl SqrtDeviceSim {
    /// Creates a simulated device with the given quantization mode.
    pub fn new(mode: RoundingMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Adds a fixed artificial delay before every response read.
    #[must_use]
    pub fn with_response_latency(mut self, latency: Duration) -> Self {
        self.response_latency = latency;
        self
    }

    /// Swallows the responses to the given request indices (0-based), so
    /// the corresponding reads time out.
    #[must_use]
    pub fn with_dropped_responses(mut self, indices: &[usize]) -> Self {
        self.drop_responses_at = indices.to_vec();
        self
    }

    /// Number of requests the device has received so far.
    pub fn requests_seen(&self) -> usize {
        self.requests_seen
    }
}

impl Channel for SqrtDeviceSim {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), ChannelError> {
        let index = self.requests_seen;
        self.requests_seen += 1;

        // A short request leaves the device waiting for the rest of the
        // word, exactly like the hardware: no response is produced.
        if bytes.len() < wire::REQUEST_LEN {
            return Ok(());
        }
        if self.drop_responses_at.contains(&index) {
            return Ok(());
        }

        let input = u16::from_le_bytes([bytes[0], bytes[1]]);
        let exact = f64::from(input).sqrt();
        let result = match self.mode {
            RoundingMode::Nearest => Q88::from_f64_nearest(exact),
            RoundingMode::Truncate => Q88::from_f64_truncated(exact),
        };
        self.rx.extend(wire::encode(result.raw()));
        Ok(())
    }

    fn read_with_timeout(&mut self, n: usize, _timeout: Duration) -> Result<Vec<u8>, ChannelError> {
        if !self.response_latency.is_zero() {
            thread::sleep(self.response_latency);
        }
        let take = n.min(self.rx.len());
        Ok(self.rx.drain(..take).collect())
    }
}
