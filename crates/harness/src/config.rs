//! Configuration for the verification harness.
//!
//! This module defines the single explicit configuration structure threaded
//! through sweep and analysis calls. It provides:
//! 1. **Defaults:** Baseline link and analysis constants matching the deployed bench setup.
//! 2. **Structures:** Hierarchical config for the link, the sweep policy, and the analysis.
//! 3. **Enums:** The named timeout policy choice.
//!
//! There is no process-wide mutable state: every parameter lives in a named
//! field, deserializable from JSON or built with `Config::default()`.

use std::time::Duration;

use serde::Deserialize;

/// Default configuration constants for the harness.
///
/// These values define the bench setup when not explicitly overridden.
mod defaults {
    /// Default link device identifier, consumed by the transport
    /// collaborator that opens the physical port.
    pub const DEVICE: &str = "/dev/ttyUSB0";

    /// Default link baud rate; must match the gateware UART configuration.
    pub const BAUD: u32 = 9600;

    /// Default per-transaction response timeout in milliseconds.
    ///
    /// At 9600 baud a 2-byte response takes about 2 ms on the wire; one
    /// second is far beyond any healthy exchange.
    pub const RESPONSE_TIMEOUT_MS: u64 = 1000;

    /// Default settle delay after opening the device, in milliseconds.
    ///
    /// Boards with auto-reset on port open need time before the first
    /// request; the transport collaborator applies this delay.
    pub const SETTLE_MS: u64 = 2000;

    /// Default progress cadence: records between progress events.
    pub const PROGRESS_EVERY: usize = 1000;

    /// Strict tolerance in LSB: what an ideal round-to-nearest unit meets.
    pub const TOLERANCE_STRICT_LSB: f64 = 2.0;

    /// Relaxed tolerance in LSB: what truncation-based gateware meets.
    pub const TOLERANCE_RELAXED_LSB: f64 = 10.0;
}

/// Sweep-level response to a per-transaction timeout.
///
/// Both behaviors are legitimate bench procedures; which one a sweep uses
/// is a deliberate, named choice rather than an accident of the driver
/// script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TimeoutPolicy {
    /// Stop the sweep at the first timeout and mark the abort index.
    #[default]
    Abort,
    /// Record the timeout and move on to the next input.
    #[serde(alias = "Skip")]
    SkipAndContinue,
}

/// Root configuration structure containing all harness settings.
///
/// Build one with `Config::default()` or deserialize from JSON; missing
/// fields fall back to the bench defaults.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use rootcheck_core::config::{Config, TimeoutPolicy};
///
/// let config = Config::default();
/// assert_eq!(config.link.baud, 9600);
/// assert_eq!(config.sweep.on_timeout, TimeoutPolicy::Abort);
/// assert_eq!(config.analysis.tolerance_lsb, vec![2.0, 10.0]);
/// ```
///
/// Deserializing a partial override from JSON:
///
/// ```
/// use rootcheck_core::config::{Config, TimeoutPolicy};
///
/// let json = r#"{
///     "link": { "device": "/dev/ttyACM1", "response_timeout_ms": 250 },
///     "sweep": { "on_timeout": "SkipAndContinue" },
///     "analysis": { "tolerance_lsb": [1.0, 4.0] }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.link.device, "/dev/ttyACM1");
/// assert_eq!(config.link.baud, 9600);
/// assert_eq!(config.sweep.on_timeout, TimeoutPolicy::SkipAndContinue);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Physical link parameters for the transport collaborator.
    #[serde(default)]
    pub link: LinkConfig,
    /// Sweep iteration policy and observability cadence.
    #[serde(default)]
    pub sweep: SweepConfig,
    /// Precision analysis parameters.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Physical link parameters.
///
/// The core never opens a device itself; these fields parameterize the
/// transport collaborator that does.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    /// Device identifier of the serial port.
    #[serde(default = "LinkConfig::default_device")]
    pub device: String,

    /// Baud rate; must match the gateware UART.
    #[serde(default = "LinkConfig::default_baud")]
    pub baud: u32,

    /// Per-transaction response timeout in milliseconds.
    #[serde(default = "LinkConfig::default_response_timeout_ms")]
    pub response_timeout_ms: u64,

    /// Settle delay after opening the device, in milliseconds.
    #[serde(default = "LinkConfig::default_settle_ms")]
    pub settle_ms: u64,
}

impl LinkConfig {
    /// Returns the default device identifier.
    fn default_device() -> String {
        defaults::DEVICE.to_owned()
    }

    /// Returns the default baud rate.
    fn default_baud() -> u32 {
        defaults::BAUD
    }

    /// Returns the default response timeout in milliseconds.
    fn default_response_timeout_ms() -> u64 {
        defaults::RESPONSE_TIMEOUT_MS
    }

    /// Returns the default settle delay in milliseconds.
    fn default_settle_ms() -> u64 {
        defaults::SETTLE_MS
    }

    /// Per-transaction response timeout as a [`Duration`].
    pub const fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_ms)
    }

    /// Post-open settle delay as a [`Duration`].
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            device: defaults::DEVICE.to_owned(),
            baud: defaults::BAUD,
            response_timeout_ms: defaults::RESPONSE_TIMEOUT_MS,
            settle_ms: defaults::SETTLE_MS,
        }
    }
}

/// Sweep iteration policy and observability cadence.
#[derive(Debug, Clone, Deserialize)]
pub struct SweepConfig {
    /// What the sweep does when a transaction times out.
    #[serde(default)]
    pub on_timeout: TimeoutPolicy,

    /// Emit a progress event every this many records; 0 disables progress
    /// events entirely.
    #[serde(default = "SweepConfig::default_progress_every")]
    pub progress_every: usize,
}

impl SweepConfig {
    /// Returns the default progress cadence.
    fn default_progress_every() -> usize {
        defaults::PROGRESS_EVERY
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            on_timeout: TimeoutPolicy::default(),
            progress_every: defaults::PROGRESS_EVERY,
        }
    }
}

/// Precision analysis parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Tolerance thresholds in LSB, declared before analysis and echoed in
    /// every report.
    ///
    /// Declaring thresholds up front keeps after-the-fact threshold
    /// loosening visible in output instead of hidden in a rerun.
    #[serde(default = "AnalysisConfig::default_tolerance_lsb")]
    pub tolerance_lsb: Vec<f64>,
}

impl AnalysisConfig {
    /// Returns the default strict/relaxed tolerance pair.
    fn default_tolerance_lsb() -> Vec<f64> {
        vec![defaults::TOLERANCE_STRICT_LSB, defaults::TOLERANCE_RELAXED_LSB]
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tolerance_lsb: Self::default_tolerance_lsb(),
        }
    }
}
