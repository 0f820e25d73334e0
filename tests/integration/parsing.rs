//! Integration tests for lexer + parser pipeline
//! Tests component interactions at the pattern parsing boundary

use decfmt_ast::{AffixPart, Grouping};
use decfmt_parser::Parser;

#[test]
fn test_lexer_parser_default_pattern() {
    let parser = Parser::new("#,##0.###").unwrap();
    let parsed = parser.parse().unwrap();

    let positive = &parsed.positive;
    assert_eq!(positive.min_integer_digits, 1);
    assert_eq!(positive.min_fraction_digits, 0);
    assert_eq!(positive.max_fraction_digits, 3);
    assert_eq!(positive.grouping, Some(Grouping::uniform(3)));
    assert_eq!(positive.multiplier, 1);
    assert!(parsed.negative.is_none());
}

#[test]
fn test_lexer_parser_secondary_grouping() {
    let parsed = Parser::new("#,##,##0").unwrap().parse().unwrap();
    assert_eq!(parsed.positive.grouping, Some(Grouping::new(3, 2)));
}

#[test]
fn test_lexer_parser_percent_multiplier() {
    let parsed = Parser::new("#0%").unwrap().parse().unwrap();
    assert_eq!(parsed.positive.multiplier, 100);
    assert_eq!(parsed.positive.suffix.parts, vec![AffixPart::PercentSign]);
}

#[test]
fn test_lexer_parser_negative_subpattern() {
    let parsed = Parser::new("0.00;(0.00)").unwrap().parse().unwrap();
    let negative = parsed.negative.expect("negative subpattern");
    assert_eq!(
        negative.prefix.parts,
        vec![AffixPart::Literal("(".to_string())]
    );
    assert_eq!(
        negative.suffix.parts,
        vec![AffixPart::Literal(")".to_string())]
    );
}

#[test]
fn test_lexer_parser_quoted_affix() {
    let parsed = Parser::new("'#'0").unwrap().parse().unwrap();
    assert_eq!(
        parsed.positive.prefix.parts,
        vec![AffixPart::Literal("#".to_string())]
    );
}

#[test]
fn test_lexer_parser_rounding_increment() {
    let parsed = Parser::new("0.25").unwrap().parse().unwrap();
    assert_eq!(parsed.positive.rounding_increment, Some(0.25));
    assert_eq!(parsed.positive.max_fraction_digits, 2);
}

#[test]
fn test_lexer_parser_scientific() {
    let parsed = Parser::new("0.###E00").unwrap().parse().unwrap();
    let exponent = parsed.positive.exponent.expect("exponent");
    assert_eq!(exponent.min_digits, 2);
}

#[test]
fn test_lexer_error_propagation() {
    // An unterminated quote is caught at construction, before parsing
    let result = Parser::new("0.0'oops");
    assert!(result.is_err());
    let message = format!("{}", result.unwrap_err());
    assert!(message.contains("ERR_PATTERN_SYNTAX"));
}

#[test]
fn test_parser_error_reports_offset() {
    let err = Parser::new("0.0.0").unwrap().parse().unwrap_err();
    let message = format!("{err}");
    assert!(message.contains("decfmt:0.0.0:"));
    assert!(message.contains("ERR_PATTERN_SYNTAX"));
}

#[test]
fn test_parser_rejects_extra_separator() {
    let err = Parser::new("0;0;0").unwrap().parse().unwrap_err();
    assert!(format!("{err}").contains("ERR_PATTERN_SYNTAX"));
}
