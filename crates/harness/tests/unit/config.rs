//! Configuration unit tests.
//!
//! Verifies the bench defaults and partial JSON deserialization.

use std::time::Duration;

use rootcheck_core::config::{Config, TimeoutPolicy};

#[test]
fn defaults_match_the_bench_setup() {
    let config = Config::default();
    assert_eq!(config.link.device, "/dev/ttyUSB0");
    assert_eq!(config.link.baud, 9600);
    assert_eq!(config.link.response_timeout_ms, 1000);
    assert_eq!(config.link.response_timeout(), Duration::from_secs(1));
    assert_eq!(config.link.settle_ms, 2000);
    assert_eq!(config.link.settle_delay(), Duration::from_secs(2));
    assert_eq!(config.sweep.on_timeout, TimeoutPolicy::Abort);
    assert_eq!(config.sweep.progress_every, 1000);
    assert_eq!(config.analysis.tolerance_lsb, vec![2.0, 10.0]);
}

#[test]
fn empty_json_is_the_default_config() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.link.baud, 9600);
    assert_eq!(config.sweep.on_timeout, TimeoutPolicy::Abort);
    assert_eq!(config.analysis.tolerance_lsb, vec![2.0, 10.0]);
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let json = r#"{
        "link": { "response_timeout_ms": 250 },
        "analysis": { "tolerance_lsb": [1.0] }
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.link.response_timeout(), Duration::from_millis(250));
    assert_eq!(config.link.device, "/dev/ttyUSB0");
    assert_eq!(config.link.baud, 9600);
    assert_eq!(config.analysis.tolerance_lsb, vec![1.0]);
}

#[test]
fn timeout_policy_accepts_the_skip_alias() {
    let json = r#"{ "sweep": { "on_timeout": "Skip" } }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.sweep.on_timeout, TimeoutPolicy::SkipAndContinue);

    let json = r#"{ "sweep": { "on_timeout": "SkipAndContinue" } }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.sweep.on_timeout, TimeoutPolicy::SkipAndContinue);
}
