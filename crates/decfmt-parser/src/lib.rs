//! Pattern parser for decfmt
//!
//! Turns a lexed DecimalFormat pattern into a `ParsedPattern`: affixes,
//! digit bounds, grouping sizes, multiplier, rounding increment and
//! scientific exponent for the positive form plus an optional explicit
//! negative form.

use decfmt_ast::{
    Affix, AffixPart, Exponent, FormatError, Grouping, ParsedPattern, Span, Subpattern,
};
use decfmt_lexer::{Lexer, SpannedToken, Token};

pub mod affix;

use affix::{append_literal, unquote};

#[derive(Debug)]
pub struct Parser {
    pattern: String,
    tokens: Vec<SpannedToken>,
}

impl Parser {
    /// Create a new parser for the given pattern
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if there are lexical errors in the pattern
    /// (an unterminated quoted literal)
    pub fn new(pattern: &str) -> Result<Self, FormatError> {
        let mut lexer = Lexer::new(pattern);
        let tokens = lexer.tokenize();

        for token in &tokens {
            if token.token == Token::Error {
                return Err(FormatError::pattern_syntax(
                    format!("unterminated quoted literal: {}", token.text),
                    token.span,
                    pattern,
                ));
            }
        }

        Ok(Self {
            pattern: pattern.to_string(),
            tokens,
        })
    }

    /// Parse the pattern into positive and optional negative subpatterns
    ///
    /// # Errors
    ///
    /// Returns `FormatError` for malformed patterns: multiple decimal
    /// separators, grouping after the decimal point, digit placeholders in
    /// an affix, conflicting multiplier symbols, or an exponent without
    /// digits
    pub fn parse(&self) -> Result<ParsedPattern, FormatError> {
        let tokens: Vec<&SpannedToken> = self
            .tokens
            .iter()
            .filter(|t| t.token != Token::Eof)
            .collect();

        // The empty pattern means the default shape
        if tokens.is_empty() {
            return Ok(ParsedPattern::new(Subpattern::default_shape(), None));
        }

        let separators: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.token == Token::Separator)
            .map(|(i, _)| i)
            .collect();
        if separators.len() > 1 {
            return Err(FormatError::pattern_syntax(
                "too many subpattern separators".to_string(),
                tokens[separators[1]].span,
                &self.pattern,
            ));
        }

        let (positive_tokens, negative_tokens) = match separators.first() {
            Some(&pos) => (&tokens[..pos], Some(&tokens[pos + 1..])),
            None => (&tokens[..], None),
        };

        let positive = self.parse_subpattern(positive_tokens)?;
        let negative = negative_tokens
            .map(|toks| self.parse_subpattern(toks))
            .transpose()?;

        Ok(ParsedPattern::new(positive, negative))
    }

    /// Get access to the original pattern text
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Get access to the tokens (useful for debugging)
    #[must_use]
    pub fn tokens(&self) -> &[SpannedToken] {
        &self.tokens
    }

    fn parse_subpattern(&self, tokens: &[&SpannedToken]) -> Result<Subpattern, FormatError> {
        let span_of = |tokens: &[&SpannedToken]| -> Span {
            match (tokens.first(), tokens.last()) {
                (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
                _ => Span::dummy(),
            }
        };

        let body_start = tokens
            .iter()
            .position(|t| {
                matches!(t.token, Token::Hash | Token::Digit | Token::Decimal)
            })
            .ok_or_else(|| {
                FormatError::pattern_syntax(
                    "subpattern has no digit placeholders".to_string(),
                    span_of(tokens),
                    &self.pattern,
                )
            })?;

        // The body is the maximal run of digit/separator placeholders,
        // optionally followed by an exponent marker and its digits. The
        // exponent digits belong to the exponent, not the digit body.
        let mut digits_end = body_start;
        while digits_end < tokens.len()
            && matches!(
                tokens[digits_end].token,
                Token::Hash | Token::Digit | Token::Decimal | Token::Group
            )
        {
            digits_end += 1;
        }
        let mut body_end = digits_end;
        let mut exponent = None;
        if body_end < tokens.len() && tokens[body_end].token == Token::Exponent {
            let marker = tokens[body_end];
            body_end += 1;
            let mut digits = 0;
            while body_end < tokens.len() && tokens[body_end].token == Token::Digit {
                digits += 1;
                body_end += 1;
            }
            if digits == 0 {
                return Err(FormatError::pattern_syntax(
                    "exponent requires at least one digit placeholder".to_string(),
                    marker.span,
                    &self.pattern,
                ));
            }
            exponent = Some(Exponent { min_digits: digits });
        }

        let mut multiplier = None;
        let prefix = self.collect_affix(&tokens[..body_start], &mut multiplier)?;
        let suffix = self.collect_affix(&tokens[body_end..], &mut multiplier)?;

        let mut subpattern = self.parse_body(&tokens[body_start..digits_end])?;
        subpattern.prefix = prefix;
        subpattern.suffix = suffix;
        subpattern.multiplier = multiplier.unwrap_or(1);
        subpattern.exponent = exponent;
        Ok(subpattern)
    }

    fn collect_affix(
        &self,
        tokens: &[&SpannedToken],
        multiplier: &mut Option<i32>,
    ) -> Result<Affix, FormatError> {
        let mut parts = Vec::new();

        for token in tokens {
            match token.token {
                Token::Minus => parts.push(AffixPart::MinusSign),
                Token::Currency => parts.push(AffixPart::CurrencySymbol),
                Token::Percent => {
                    self.set_multiplier(multiplier, 100, token)?;
                    parts.push(AffixPart::PercentSign);
                }
                Token::PerMille => {
                    self.set_multiplier(multiplier, 1000, token)?;
                    parts.push(AffixPart::PerMilleSign);
                }
                Token::Quoted => append_literal(&mut parts, &unquote(&token.text)),
                Token::Literal => append_literal(&mut parts, &token.text),
                // 'E' is only special directly after the digit body
                Token::Exponent => append_literal(&mut parts, &token.text),
                Token::Hash | Token::Digit | Token::Decimal | Token::Group => {
                    return Err(FormatError::pattern_syntax(
                        format!("unquoted special character '{}' in affix", token.text),
                        token.span,
                        &self.pattern,
                    ));
                }
                Token::Separator | Token::Eof | Token::Error => unreachable!(),
            }
        }

        Ok(Affix::new(parts))
    }

    fn set_multiplier(
        &self,
        multiplier: &mut Option<i32>,
        value: i32,
        token: &SpannedToken,
    ) -> Result<(), FormatError> {
        match multiplier {
            Some(existing) if *existing != value => Err(FormatError::pattern_syntax(
                "conflicting percent and per-mille symbols".to_string(),
                token.span,
                &self.pattern,
            )),
            _ => {
                *multiplier = Some(value);
                Ok(())
            }
        }
    }

    fn parse_body(&self, tokens: &[&SpannedToken]) -> Result<Subpattern, FormatError> {
        let mut in_fraction = false;
        let mut int_placeholders = 0usize;
        let mut int_digit_seen = false;
        let mut min_integer_digits = 0usize;
        let mut min_fraction_digits = 0usize;
        let mut max_fraction_digits = 0usize;
        let mut frac_hash_seen = false;
        let mut group_markers: Vec<usize> = Vec::new();
        let mut increment_int = String::new();
        let mut increment_frac = String::new();

        for token in tokens {
            match token.token {
                Token::Decimal => {
                    if in_fraction {
                        return Err(FormatError::pattern_syntax(
                            "multiple decimal separators".to_string(),
                            token.span,
                            &self.pattern,
                        ));
                    }
                    in_fraction = true;
                }
                Token::Group => {
                    if in_fraction {
                        return Err(FormatError::pattern_syntax(
                            "grouping separator after decimal point".to_string(),
                            token.span,
                            &self.pattern,
                        ));
                    }
                    group_markers.push(int_placeholders);
                }
                Token::Hash => {
                    if in_fraction {
                        frac_hash_seen = true;
                        max_fraction_digits += 1;
                    } else {
                        if int_digit_seen {
                            return Err(FormatError::pattern_syntax(
                                "'#' after explicit digit in integer part".to_string(),
                                token.span,
                                &self.pattern,
                            ));
                        }
                        int_placeholders += 1;
                    }
                }
                Token::Digit => {
                    if in_fraction {
                        if frac_hash_seen {
                            return Err(FormatError::pattern_syntax(
                                "explicit digit after '#' in fraction part".to_string(),
                                token.span,
                                &self.pattern,
                            ));
                        }
                        min_fraction_digits += 1;
                        max_fraction_digits += 1;
                        increment_frac.push_str(&token.text);
                    } else {
                        int_digit_seen = true;
                        int_placeholders += 1;
                        min_integer_digits += 1;
                        increment_int.push_str(&token.text);
                    }
                }
                _ => unreachable!(),
            }
        }

        let grouping = self.grouping_from_markers(&group_markers, int_placeholders, tokens)?;
        let rounding_increment = increment_from_digits(&increment_int, &increment_frac);

        Ok(Subpattern {
            prefix: Affix::default(),
            suffix: Affix::default(),
            min_integer_digits,
            min_fraction_digits,
            max_fraction_digits,
            grouping,
            multiplier: 1,
            rounding_increment,
            exponent: None,
        })
    }

    fn grouping_from_markers(
        &self,
        markers: &[usize],
        int_placeholders: usize,
        tokens: &[&SpannedToken],
    ) -> Result<Option<Grouping>, FormatError> {
        let Some(&last) = markers.last() else {
            return Ok(None);
        };

        let primary = int_placeholders - last;
        if primary == 0 {
            let span = tokens
                .iter()
                .rev()
                .find(|t| t.token == Token::Group)
                .map_or_else(Span::dummy, |t| t.span);
            return Err(FormatError::pattern_syntax(
                "grouping separator without following digits".to_string(),
                span,
                &self.pattern,
            ));
        }

        let secondary = if markers.len() >= 2 {
            let previous = markers[markers.len() - 2];
            let size = last - previous;
            if size == 0 {
                let span = tokens
                    .iter()
                    .find(|t| t.token == Token::Group)
                    .map_or_else(Span::dummy, |t| t.span);
                return Err(FormatError::pattern_syntax(
                    "empty group between grouping separators".to_string(),
                    span,
                    &self.pattern,
                ));
            }
            size
        } else {
            primary
        };

        Ok(Some(Grouping::new(primary, secondary)))
    }
}

/// Derive the rounding increment from explicit body digits
///
/// Non-zero digits in the body (`0.25`, `#,#50`) request rounding to
/// multiples of the number they spell out.
fn increment_from_digits(int_digits: &str, frac_digits: &str) -> Option<f64> {
    let has_nonzero = int_digits
        .chars()
        .chain(frac_digits.chars())
        .any(|c| c != '0');
    if !has_nonzero {
        return None;
    }

    let int_part = if int_digits.is_empty() {
        "0"
    } else {
        int_digits
    };
    let text = if frac_digits.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_digits}")
    };
    text.parse::<f64>().ok()
}
