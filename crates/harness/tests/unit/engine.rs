//! Transaction engine unit tests.
//!
//! Verifies outcome classification, eager error computation, fatal error
//! propagation, and the one-write-one-read exchange discipline.

use std::time::Duration;

use mockall::predicate;

use rootcheck_core::link::sim::{RoundingMode, SqrtDeviceSim};
use rootcheck_core::sweep::engine::TransactionEngine;
use rootcheck_core::{ChannelError, Outcome, SqrtReference};

use crate::common::mocks::channel::{BrokenChannel, MockLinkChannel, SilentChannel};

const TIMEOUT: Duration = Duration::from_millis(50);

#[test]
fn completed_transaction_records_response_and_error() {
    let engine = TransactionEngine::new(TIMEOUT);
    let mut device = SqrtDeviceSim::new(RoundingMode::Nearest);

    let record = engine
        .execute(16, &mut device, Some(&SqrtReference))
        .unwrap();

    assert_eq!(record.input, 16);
    assert_eq!(record.outcome, Outcome::Completed);
    assert_eq!(record.response.map(|q| q.raw()), Some(1024));
    assert_eq!(record.result(), Some(4.0));
    assert_eq!(record.expected, Some(4.0));
    assert_eq!(record.abs_error(), Some(0.0));
    assert_eq!(record.error_lsb(), Some(0.0));
}

#[test]
fn timeout_leaves_the_result_absent() {
    let engine = TransactionEngine::new(TIMEOUT);
    let mut channel = SilentChannel;

    let record = engine
        .execute(100, &mut channel, Some(&SqrtReference))
        .unwrap();

    assert_eq!(record.outcome, Outcome::Timeout);
    assert_eq!(record.response, None);
    assert_eq!(record.result(), None);
    assert_eq!(record.abs_error(), None);
    // The reference value is still computed; only the error is undefined.
    assert!(record.expected.is_some());
}

#[test]
fn timing_only_mode_skips_the_reference() {
    let engine = TransactionEngine::new(TIMEOUT);
    let mut device = SqrtDeviceSim::new(RoundingMode::Nearest);

    let record = engine.execute(9, &mut device, None).unwrap();

    assert_eq!(record.outcome, Outcome::Completed);
    assert_eq!(record.expected, None);
    assert_eq!(record.error_lsb(), None);
}

#[test]
fn write_failure_is_fatal() {
    let engine = TransactionEngine::new(TIMEOUT);
    let mut channel = BrokenChannel;

    let err = engine.execute(7, &mut channel, None).unwrap_err();
    assert!(matches!(err, ChannelError::Write(_)));
}

#[test]
fn exactly_one_write_and_one_read_per_transaction() {
    let mut mock = MockLinkChannel::new();
    let _ = mock
        .expect_write_all()
        .withf(|bytes| bytes == [0x34u8, 0x12].as_slice())
        .times(1)
        .returning(|_| Ok(()));
    let _ = mock
        .expect_read_with_timeout()
        .with(predicate::eq(2usize), predicate::eq(TIMEOUT))
        .times(1)
        .returning(|_, _| Ok(vec![0x00, 0x10]));

    let engine = TransactionEngine::new(TIMEOUT);
    let record = engine.execute(0x1234, &mut mock, None).unwrap();

    assert_eq!(record.outcome, Outcome::Completed);
    assert_eq!(record.response.map(|q| q.raw()), Some(0x1000));
}

#[test]
fn partial_response_is_classified_as_timeout() {
    let mut mock = MockLinkChannel::new();
    let _ = mock.expect_write_all().times(1).returning(|_| Ok(()));
    let _ = mock
        .expect_read_with_timeout()
        .times(1)
        .returning(|_, _| Ok(vec![0x42]));

    let engine = TransactionEngine::new(TIMEOUT);
    let record = engine.execute(1, &mut mock, None).unwrap();

    assert_eq!(record.outcome, Outcome::Timeout);
    assert_eq!(record.response, None);
}
