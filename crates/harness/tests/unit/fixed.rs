//! Q8.8 fixed-point type unit tests.

use rstest::rstest;

use rootcheck_core::Q88;

#[test]
fn lsb_is_one_over_256() {
    assert!((Q88::LSB - 1.0 / 256.0).abs() < f64::EPSILON);
}

#[rstest]
#[case(0x0000, 0.0)]
#[case(0x0001, 0.003_906_25)]
#[case(0x0100, 1.0)]
#[case(0x1000, 16.0)]
#[case(0xFFFF, 255.996_093_75)]
fn to_f64_scales_by_256(#[case] raw: u16, #[case] value: f64) {
    assert!((Q88::new(raw).to_f64() - value).abs() < f64::EPSILON);
}

#[test]
fn nearest_rounds_half_away_from_zero() {
    assert_eq!(Q88::from_f64_nearest(100.5 * Q88::LSB).raw(), 101);
    assert_eq!(Q88::from_f64_nearest(100.4 * Q88::LSB).raw(), 100);
}

#[test]
fn truncation_drops_the_remainder() {
    assert_eq!(Q88::from_f64_truncated(100.9 * Q88::LSB).raw(), 100);
    assert_eq!(Q88::from_f64_nearest(100.9 * Q88::LSB).raw(), 101);
}

#[test]
fn modes_agree_on_exactly_representable_values() {
    assert_eq!(Q88::from_f64_nearest(4.0).raw(), 1024);
    assert_eq!(Q88::from_f64_truncated(4.0).raw(), 1024);
}

#[test]
fn quantization_saturates_at_the_format_bounds() {
    assert_eq!(Q88::from_f64_nearest(-1.0).raw(), 0);
    assert_eq!(Q88::from_f64_truncated(-0.5).raw(), 0);
    assert_eq!(Q88::from_f64_nearest(300.0).raw(), u16::MAX);
    assert_eq!(Q88::from_f64_truncated(1.0e9).raw(), u16::MAX);
}

#[test]
fn display_formats_the_real_value() {
    assert_eq!(format!("{}", Q88::new(0x1000)), "16.0000");
    assert_eq!(format!("{}", Q88::new(1)), "0.0039");
}
