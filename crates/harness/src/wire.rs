//! Wire codec for the request/response protocol.
//!
//! The accelerator speaks a fixed-size little-endian protocol over a
//! half-duplex serial link:
//! 1. **Request:** 2 bytes, little-endian encoding of the 16-bit input register value.
//! 2. **Response:** 2 bytes, little-endian encoding of the raw Q8.8 result.
//!
//! Both directions are total over their value space; the only failure mode
//! is a short response, which is indistinguishable from a timeout.

use crate::common::error::DecodeError;
use crate::common::fixed::Q88;

/// Length in bytes of an encoded request.
pub const REQUEST_LEN: usize = 2;

/// Length in bytes of a complete response.
pub const RESPONSE_LEN: usize = 2;

/// Encodes an input register value as a wire request.
///
/// Little-endian serialization; total over the input domain, no failure
/// mode.
#[inline]
pub const fn encode(input: u16) -> [u8; REQUEST_LEN] {
    input.to_le_bytes()
}

/// Decodes a wire response into a fixed-point result.
///
/// Requires at least [`RESPONSE_LEN`] bytes and interprets the first two as
/// a little-endian raw Q8.8 value. No other validation exists because the
/// raw value space is total.
///
/// # Errors
///
/// Returns [`DecodeError::Incomplete`] when fewer than [`RESPONSE_LEN`]
/// bytes are available, the terminal state of a timed-out exchange.
pub fn decode(bytes: &[u8]) -> Result<Q88, DecodeError> {
    if bytes.len() < RESPONSE_LEN {
        return Err(DecodeError::Incomplete {
            expected: RESPONSE_LEN,
            got: bytes.len(),
        });
    }
    Ok(Q88::new(u16::from_le_bytes([bytes[0], bytes[1]])))
}
