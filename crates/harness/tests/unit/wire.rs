//! Wire codec unit tests.
//!
//! Verifies little-endian encoding, exact decoding, short-response
//! classification, and the round-trip identity over the whole value space.

use proptest::prelude::*;

use rootcheck_core::common::error::DecodeError;
use rootcheck_core::wire::{self, REQUEST_LEN, RESPONSE_LEN};

#[test]
fn encode_is_little_endian() {
    assert_eq!(wire::encode(0x1234), [0x34, 0x12]);
    assert_eq!(wire::encode(0x0001), [0x01, 0x00]);
    assert_eq!(wire::encode(0xFF00), [0x00, 0xFF]);
}

#[test]
fn decode_interprets_little_endian_q88() {
    let value = wire::decode(&[0x00, 0x10]).unwrap();
    assert_eq!(value.raw(), 0x1000);
    assert!((value.to_f64() - 16.0).abs() < f64::EPSILON);
}

#[test]
fn decode_rejects_short_responses() {
    assert_eq!(
        wire::decode(&[]),
        Err(DecodeError::Incomplete {
            expected: 2,
            got: 0
        })
    );
    assert_eq!(
        wire::decode(&[0xAB]),
        Err(DecodeError::Incomplete {
            expected: 2,
            got: 1
        })
    );
}

#[test]
fn lengths_match_the_protocol() {
    assert_eq!(REQUEST_LEN, 2);
    assert_eq!(RESPONSE_LEN, 2);
}

#[test]
fn round_trip_recovers_every_raw_value() {
    for raw in 0..=u16::MAX {
        let decoded = wire::decode(&wire::encode(raw)).unwrap();
        assert_eq!(decoded.raw(), raw);
        assert!((decoded.to_f64() - f64::from(raw) / 256.0).abs() < f64::EPSILON);
    }
}

proptest! {
    #[test]
    fn round_trip_is_identity(raw in any::<u16>()) {
        let decoded = wire::decode(&wire::encode(raw)).unwrap();
        prop_assert_eq!(decoded.raw(), raw);
    }
}
