//! Q8.8 fixed-point value type.
//!
//! The accelerator answers with a 16-bit unsigned raw value interpreted as
//! the real value times 256: 8 integer bits and 8 fractional bits. This
//! module provides:
//! 1. **Type Safety:** A dedicated type so raw wire values and real values cannot be mixed up.
//! 2. **Conversion:** Real-value accessors plus round-to-nearest and truncating quantizers.
//! 3. **Error Units:** The LSB constant used to express quantization error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Q8.8 unsigned fixed-point value as produced by the unit under test.
///
/// The raw 16-bit value equals the represented real value times 256. The raw
/// value space is total: all 65536 raw values are valid magnitudes in
/// `[0, 256)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Q88(pub u16);

impl Q88 {
    /// Smallest representable increment of the format (1/256).
    ///
    /// Used throughout the harness as the unit for expressing quantization
    /// and rounding error.
    pub const LSB: f64 = 1.0 / 256.0;

    /// Creates a fixed-point value from its raw 16-bit representation.
    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the raw 16-bit representation.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Converts to the real value this raw word represents (raw / 256).
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) * Self::LSB
    }

    /// Quantizes a real value with round-to-nearest, saturating at the
    /// format bounds.
    pub fn from_f64_nearest(value: f64) -> Self {
        Self(quantize(value / Self::LSB, f64::round))
    }

    /// Quantizes a real value by truncation toward zero, saturating at the
    /// format bounds.
    ///
    /// This is the behavior of the historical gateware, which drops the
    /// remainder bits instead of rounding them.
    pub fn from_f64_truncated(value: f64) -> Self {
        Self(quantize(value / Self::LSB, f64::trunc))
    }
}

impl fmt::Display for Q88 {
    /// Formats the represented real value with four fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.to_f64())
    }
}

/// Applies a rounding function to a pre-scaled value and clamps the result
/// into the raw u16 range.
fn quantize(scaled: f64, mode: fn(f64) -> f64) -> u16 {
    let q = mode(scaled);
    if q <= 0.0 {
        0
    } else if q >= f64::from(u16::MAX) {
        u16::MAX
    } else {
        q as u16
    }
}
