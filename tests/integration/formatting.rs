//! Integration tests for parser + format pipeline
//! Tests pattern-driven formatting across component boundaries

use decfmt_ast::RoundingMode;
use decfmt_format::{DecimalFormat, DecimalFormatSymbols};

#[test]
fn test_pattern_to_formatted_output() {
    let format = DecimalFormat::from_pattern("#,##0.00").unwrap();
    assert_eq!(format.format(1234567.891), "1,234,567.89");
}

#[test]
fn test_pattern_with_locale_symbols() {
    let symbols = DecimalFormatSymbols::for_locale("fr").unwrap();
    let format = DecimalFormat::from_pattern_with_symbols("#,##0.00", symbols).unwrap();
    assert_eq!(format.format(1234.5), "1\u{00a0}234,50");
}

#[test]
fn test_format_parse_round_trip() {
    let format = DecimalFormat::from_pattern("#,##0.###").unwrap();
    for value in [0.0, 1.5, -1234.567, 98765.0, -0.125] {
        let text = format.format(value);
        let parsed = format.parse(&text).unwrap();
        assert!(
            (parsed - value).abs() < 1e-9,
            "{value} formatted as {text} parsed back as {parsed}"
        );
    }
}

#[test]
fn test_locale_round_trip() {
    let symbols = DecimalFormatSymbols::for_locale("de-DE").unwrap();
    let format = DecimalFormat::from_pattern_with_symbols("#,##0.00", symbols).unwrap();
    let text = format.format(-9876.5);
    assert_eq!(text, "-9.876,50");
    assert_eq!(format.parse(&text).unwrap(), -9876.5);
}

#[test]
fn test_pattern_regeneration_preserves_behavior() {
    let original = DecimalFormat::from_pattern("¤#,##0.00;(¤#,##0.00)").unwrap();
    let regenerated = DecimalFormat::from_pattern(&original.to_pattern()).unwrap();
    assert_eq!(original.format(1234.5), regenerated.format(1234.5));
    assert_eq!(original.format(-1234.5), regenerated.format(-1234.5));
}

#[test]
fn test_rounding_mode_reaches_digit_engine() {
    let mut format = DecimalFormat::from_pattern("0.00").unwrap();
    format.set_rounding_mode(RoundingMode::Down);
    assert_eq!(format.format(2.999), "2.99");
    format.set_rounding_mode(RoundingMode::Up);
    assert_eq!(format.format(2.001), "2.01");
}

#[test]
fn test_per_mille_pipeline() {
    let format = DecimalFormat::from_pattern("#0‰").unwrap();
    assert_eq!(format.format(0.125), "125‰");
    assert_eq!(format.parse("125‰").unwrap(), 0.125);
}

#[test]
fn test_pattern_error_surfaces_through_constructor() {
    let err = DecimalFormat::from_pattern("#,##0.0.0").unwrap_err();
    assert!(format!("{err}").contains("ERR_PATTERN_SYNTAX"));
}
