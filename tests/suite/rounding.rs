//! Rounding behavior across all seven modes
//!
//! Formats values sitting on and around rounding boundaries, then checks
//! each result numerically by parsing it back rather than comparing
//! strings, so symbol choices cannot mask a rounding defect.

use decfmt_ast::RoundingMode;
use decfmt_format::DecimalFormat;

const MODES: [RoundingMode; 7] = [
    RoundingMode::Ceiling,
    RoundingMode::Floor,
    RoundingMode::Down,
    RoundingMode::Up,
    RoundingMode::HalfEven,
    RoundingMode::HalfDown,
    RoundingMode::HalfUp,
];

pub fn run() {
    fixed_fraction_rounding();
    increment_rounding();
    increment_from_pattern();
}

/// Parse `got` back and check it lands within tolerance of `expected`
fn verify(message: &str, got: &str, expected: f64) {
    let plain = DecimalFormat::new();
    let parsed = plain
        .parse(got)
        .unwrap_or_else(|e| panic!("{message}: output {got:?} did not parse: {e}"));
    assert!(
        (parsed - expected).abs() < 1e-9,
        "{message}: got {got:?} ({parsed}), expected {expected}"
    );
}

fn fixed_fraction_rounding() {
    // Expected results per mode, in MODES order
    let cases: &[(f64, [f64; 7])] = &[
        (2.125, [2.13, 2.12, 2.12, 2.13, 2.12, 2.12, 2.13]),
        (2.135, [2.14, 2.13, 2.13, 2.14, 2.14, 2.13, 2.14]),
        (-2.125, [-2.12, -2.13, -2.12, -2.13, -2.12, -2.12, -2.13]),
        (0.001, [0.01, 0.0, 0.0, 0.01, 0.0, 0.0, 0.0]),
        (-0.001, [0.0, -0.01, 0.0, -0.01, 0.0, 0.0, 0.0]),
    ];

    let mut format = DecimalFormat::from_pattern("0.00").unwrap();
    for (value, expected_by_mode) in cases {
        for (mode, expected) in MODES.iter().zip(expected_by_mode) {
            format.set_rounding_mode(*mode);
            let got = format.format(*value);
            verify(&format!("{} of {value}", mode.name()), &got, *expected);
        }
    }
}

fn increment_rounding() {
    // Expected multiples of 0.25 per mode, in MODES order
    let cases: &[(f64, [f64; 7])] = &[
        (1.125, [1.25, 1.0, 1.0, 1.25, 1.0, 1.0, 1.25]),
        (1.3, [1.5, 1.25, 1.25, 1.5, 1.25, 1.25, 1.25]),
        (-1.125, [-1.0, -1.25, -1.0, -1.25, -1.0, -1.0, -1.25]),
    ];

    let mut format = DecimalFormat::from_pattern("0.00").unwrap();
    format.set_rounding_increment(0.25);
    for (value, expected_by_mode) in cases {
        for (mode, expected) in MODES.iter().zip(expected_by_mode) {
            format.set_rounding_mode(*mode);
            let got = format.format(*value);
            verify(
                &format!("{} of {value} by 0.25", mode.name()),
                &got,
                *expected,
            );
        }
    }
}

fn increment_from_pattern() {
    // Explicit digits in the pattern double as the rounding increment
    let format = DecimalFormat::from_pattern("0.5").unwrap();
    assert_eq!(format.rounding_increment(), 0.5);
    verify("pattern increment 0.5 of 1.3", &format.format(1.3), 1.5);
    verify("pattern increment 0.5 of 1.2", &format.format(1.2), 1.0);
    verify("pattern increment 0.5 of -1.3", &format.format(-1.3), -1.5);
}

#[test]
fn test_rounding() {
    run();
}
