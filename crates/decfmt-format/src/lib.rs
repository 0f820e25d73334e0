//! Decimal formatting engine for decfmt
//!
//! `DecimalFormat` applies a parsed pattern and a locale symbol set to
//! numeric values: digit rounding under seven rounding modes, grouping,
//! affix rendering, scientific notation, and parsing formatted text back
//! into numbers.

use decfmt_ast::{Affix, AffixPart, FormatError, RoundingMode};
use decfmt_parser::Parser;

pub mod digits;
pub mod symbols;

pub use digits::DigitList;
pub use symbols::DecimalFormatSymbols;

/// Integer digits are effectively unbounded by default; patterns cannot
/// express a maximum, only the setter can lower it.
const DEFAULT_MAX_INTEGER_DIGITS: usize = 309;

/// A locale-sensitive decimal number format
///
/// Two formats compare equal when their pattern state, symbols and
/// attributes all agree.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalFormat {
    symbols: DecimalFormatSymbols,
    positive_prefix: Affix,
    positive_suffix: Affix,
    negative_prefix: Option<Affix>,
    negative_suffix: Option<Affix>,
    positive_prefix_override: Option<String>,
    positive_suffix_override: Option<String>,
    negative_prefix_override: Option<String>,
    negative_suffix_override: Option<String>,
    min_integer_digits: usize,
    max_integer_digits: usize,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
    grouping_used: bool,
    grouping_size: usize,
    secondary_grouping_size: usize,
    multiplier: i32,
    rounding_mode: RoundingMode,
    rounding_increment: Option<f64>,
    exponent_digits: Option<usize>,
    decimal_always_shown: bool,
}

impl DecimalFormat {
    /// Default format: pattern `#,##0.###` with en-US symbols
    #[must_use]
    pub fn new() -> Self {
        Self {
            symbols: DecimalFormatSymbols::new(),
            positive_prefix: Affix::default(),
            positive_suffix: Affix::default(),
            negative_prefix: None,
            negative_suffix: None,
            positive_prefix_override: None,
            positive_suffix_override: None,
            negative_prefix_override: None,
            negative_suffix_override: None,
            min_integer_digits: 1,
            max_integer_digits: DEFAULT_MAX_INTEGER_DIGITS,
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            grouping_used: true,
            grouping_size: 3,
            secondary_grouping_size: 0,
            multiplier: 1,
            rounding_mode: RoundingMode::default(),
            rounding_increment: None,
            exponent_digits: None,
            decimal_always_shown: false,
        }
    }

    /// Create a format from a pattern with en-US symbols
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if the pattern is malformed
    pub fn from_pattern(pattern: &str) -> Result<Self, FormatError> {
        Self::from_pattern_with_symbols(pattern, DecimalFormatSymbols::new())
    }

    /// Create a format from a pattern and an explicit symbol set
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if the pattern is malformed
    pub fn from_pattern_with_symbols(
        pattern: &str,
        symbols: DecimalFormatSymbols,
    ) -> Result<Self, FormatError> {
        let mut format = Self::new();
        format.symbols = symbols;
        format.apply_pattern(pattern)?;
        Ok(format)
    }

    /// Replace the pattern state, clearing any affix overrides
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if the pattern is malformed; the format is
    /// left unchanged in that case
    pub fn apply_pattern(&mut self, pattern: &str) -> Result<(), FormatError> {
        let parsed = Parser::new(pattern)?.parse()?;
        let positive = parsed.positive;

        self.positive_prefix = positive.prefix;
        self.positive_suffix = positive.suffix;
        self.min_integer_digits = positive.min_integer_digits;
        if self.min_integer_digits > self.max_integer_digits {
            self.max_integer_digits = self.min_integer_digits;
        }
        self.min_fraction_digits = positive.min_fraction_digits;
        self.max_fraction_digits = positive.max_fraction_digits;
        match positive.grouping {
            Some(grouping) => {
                self.grouping_used = true;
                self.grouping_size = grouping.primary;
                self.secondary_grouping_size = if grouping.secondary == grouping.primary {
                    0
                } else {
                    grouping.secondary
                };
            }
            None => {
                self.grouping_used = false;
                self.grouping_size = 0;
                self.secondary_grouping_size = 0;
            }
        }
        self.multiplier = positive.multiplier;
        self.rounding_increment = positive.rounding_increment;
        self.exponent_digits = positive.exponent.map(|e| e.min_digits);

        match parsed.negative {
            Some(negative) => {
                self.negative_prefix = Some(negative.prefix);
                self.negative_suffix = Some(negative.suffix);
            }
            None => {
                self.negative_prefix = None;
                self.negative_suffix = None;
            }
        }

        self.positive_prefix_override = None;
        self.positive_suffix_override = None;
        self.negative_prefix_override = None;
        self.negative_suffix_override = None;
        Ok(())
    }

    /// Regenerate a canonical pattern from the current state
    ///
    /// Applying the result to another format yields an equal format.
    #[must_use]
    pub fn to_pattern(&self) -> String {
        let body = self.body_to_pattern();
        let mut out = format!(
            "{}{}{}",
            self.affix_to_pattern(self.positive_prefix_override.as_deref(), &self.positive_prefix),
            body,
            self.affix_to_pattern(self.positive_suffix_override.as_deref(), &self.positive_suffix),
        );

        let has_negative = self.negative_prefix.is_some()
            || self.negative_suffix.is_some()
            || self.negative_prefix_override.is_some()
            || self.negative_suffix_override.is_some();
        if has_negative {
            let empty = Affix::default();
            let prefix = self
                .negative_prefix
                .as_ref()
                .unwrap_or(&empty);
            let suffix = self
                .negative_suffix
                .as_ref()
                .unwrap_or(&empty);
            out.push(';');
            out.push_str(&self.affix_to_pattern(self.negative_prefix_override.as_deref(), prefix));
            out.push_str(&body);
            out.push_str(&self.affix_to_pattern(self.negative_suffix_override.as_deref(), suffix));
        }
        out
    }

    /// Format a floating point value
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return self.symbols.nan.clone();
        }

        let scaled = value * f64::from(self.multiplier);
        let negative = scaled.is_sign_negative();
        if scaled.is_infinite() {
            return self.with_affixes(negative, self.symbols.infinity.clone());
        }
        if let Some(min_exp_digits) = self.exponent_digits {
            return self.format_scientific(scaled, negative, min_exp_digits);
        }

        let value_to_format = match self.rounding_increment {
            Some(increment) => round_to_increment(scaled, increment, self.rounding_mode),
            None => scaled,
        };
        let mut digits = DigitList::from_f64(value_to_format);
        // Increment multiples carry binary representation dust; a
        // nearest-even pass at the fraction bound removes it without
        // re-applying the caller's mode
        let mode = if self.rounding_increment.is_some() {
            RoundingMode::HalfEven
        } else {
            self.rounding_mode
        };
        digits.round_to_fraction(self.max_fraction_digits, mode);

        let body = self.assemble(&digits);
        self.with_affixes(negative, body)
    }

    /// Format an integer without going through floating point
    ///
    /// Falls back to the `f64` path when a rounding increment or
    /// scientific notation is in effect.
    #[must_use]
    pub fn format_i64(&self, value: i64) -> String {
        if self.exponent_digits.is_some() || self.rounding_increment.is_some() {
            return self.format(value as f64);
        }

        let scaled = i128::from(value) * i128::from(self.multiplier);
        let digits = DigitList::from_i128(scaled);
        let body = self.assemble(&digits);
        self.with_affixes(scaled < 0, body)
    }

    /// Parse formatted text back into a number
    ///
    /// # Errors
    ///
    /// Returns `FormatError` when the text matches neither affix pair,
    /// contains no digits, or contains characters outside the number body
    pub fn parse(&self, text: &str) -> Result<f64, FormatError> {
        let trimmed = text.trim();
        if trimmed == self.symbols.nan {
            return Ok(f64::NAN);
        }

        let mut candidates = vec![
            (self.positive_prefix(), self.positive_suffix(), false),
            (self.negative_prefix(), self.negative_suffix(), true),
        ];
        // Longer affixes first so "-12" hits the negative form before the
        // bare positive one; ties keep the positive form first
        candidates.sort_by_key(|(p, s, _)| std::cmp::Reverse(p.len() + s.len()));

        let mut last_error = None;
        for (prefix, suffix, negative) in candidates {
            if trimmed.len() < prefix.len() + suffix.len()
                || !trimmed.starts_with(&prefix)
                || !trimmed.ends_with(&suffix)
            {
                continue;
            }
            let core = &trimmed[prefix.len()..trimmed.len() - suffix.len()];
            match self.parse_core(core, text, prefix.len()) {
                Ok(magnitude) => {
                    let signed = if negative { -magnitude } else { magnitude };
                    return Ok(if self.multiplier == 1 {
                        signed
                    } else {
                        signed / f64::from(self.multiplier)
                    });
                }
                Err(err) => last_error = Some(err),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            FormatError::parse_number(
                "text matches neither the positive nor the negative affixes".to_string(),
                text,
                0,
            )
        }))
    }

    // Attribute accessors

    #[must_use]
    pub fn symbols(&self) -> &DecimalFormatSymbols {
        &self.symbols
    }

    pub fn set_symbols(&mut self, symbols: DecimalFormatSymbols) {
        self.symbols = symbols;
    }

    #[must_use]
    pub const fn minimum_integer_digits(&self) -> usize {
        self.min_integer_digits
    }

    /// Raising the minimum above the maximum drags the maximum up
    pub fn set_minimum_integer_digits(&mut self, digits: usize) {
        self.min_integer_digits = digits;
        if digits > self.max_integer_digits {
            self.max_integer_digits = digits;
        }
    }

    #[must_use]
    pub const fn maximum_integer_digits(&self) -> usize {
        self.max_integer_digits
    }

    /// Lowering the maximum below the minimum drags the minimum down
    pub fn set_maximum_integer_digits(&mut self, digits: usize) {
        self.max_integer_digits = digits;
        if digits < self.min_integer_digits {
            self.min_integer_digits = digits;
        }
    }

    #[must_use]
    pub const fn minimum_fraction_digits(&self) -> usize {
        self.min_fraction_digits
    }

    pub fn set_minimum_fraction_digits(&mut self, digits: usize) {
        self.min_fraction_digits = digits;
        if digits > self.max_fraction_digits {
            self.max_fraction_digits = digits;
        }
    }

    #[must_use]
    pub const fn maximum_fraction_digits(&self) -> usize {
        self.max_fraction_digits
    }

    pub fn set_maximum_fraction_digits(&mut self, digits: usize) {
        self.max_fraction_digits = digits;
        if digits < self.min_fraction_digits {
            self.min_fraction_digits = digits;
        }
    }

    #[must_use]
    pub const fn grouping_used(&self) -> bool {
        self.grouping_used
    }

    pub fn set_grouping_used(&mut self, used: bool) {
        self.grouping_used = used;
    }

    #[must_use]
    pub const fn grouping_size(&self) -> usize {
        self.grouping_size
    }

    pub fn set_grouping_size(&mut self, size: usize) {
        self.grouping_size = size;
    }

    /// Secondary grouping size; 0 means same as the primary size
    #[must_use]
    pub const fn secondary_grouping_size(&self) -> usize {
        self.secondary_grouping_size
    }

    pub fn set_secondary_grouping_size(&mut self, size: usize) {
        self.secondary_grouping_size = size;
    }

    #[must_use]
    pub const fn multiplier(&self) -> i32 {
        self.multiplier
    }

    /// Zero is ignored; the multiplier must stay invertible for parsing
    pub fn set_multiplier(&mut self, multiplier: i32) {
        if multiplier != 0 {
            self.multiplier = multiplier;
        }
    }

    #[must_use]
    pub const fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    pub fn set_rounding_mode(&mut self, mode: RoundingMode) {
        self.rounding_mode = mode;
    }

    /// The rounding increment, or 0.0 when none is set
    #[must_use]
    pub fn rounding_increment(&self) -> f64 {
        self.rounding_increment.unwrap_or(0.0)
    }

    /// A non-positive increment clears increment rounding
    pub fn set_rounding_increment(&mut self, increment: f64) {
        self.rounding_increment = (increment > 0.0).then_some(increment);
    }

    /// Minimum exponent digits for scientific notation; 0 disables it
    #[must_use]
    pub fn exponent_digits(&self) -> usize {
        self.exponent_digits.unwrap_or(0)
    }

    pub fn set_exponent_digits(&mut self, digits: usize) {
        self.exponent_digits = (digits > 0).then_some(digits);
    }

    #[must_use]
    pub const fn decimal_separator_always_shown(&self) -> bool {
        self.decimal_always_shown
    }

    pub fn set_decimal_separator_always_shown(&mut self, shown: bool) {
        self.decimal_always_shown = shown;
    }

    /// The rendered positive prefix (override or pattern-derived)
    #[must_use]
    pub fn positive_prefix(&self) -> String {
        self.positive_prefix_override
            .clone()
            .unwrap_or_else(|| self.render_affix(&self.positive_prefix))
    }

    pub fn set_positive_prefix(&mut self, text: &str) {
        self.positive_prefix_override = Some(text.to_string());
    }

    #[must_use]
    pub fn positive_suffix(&self) -> String {
        self.positive_suffix_override
            .clone()
            .unwrap_or_else(|| self.render_affix(&self.positive_suffix))
    }

    pub fn set_positive_suffix(&mut self, text: &str) {
        self.positive_suffix_override = Some(text.to_string());
    }

    /// The rendered negative prefix
    ///
    /// Defaults to the minus sign plus the positive prefix when the
    /// pattern has no explicit negative form.
    #[must_use]
    pub fn negative_prefix(&self) -> String {
        if let Some(text) = &self.negative_prefix_override {
            return text.clone();
        }
        match &self.negative_prefix {
            Some(affix) => self.render_affix(affix),
            None => format!("{}{}", self.symbols.minus_sign, self.positive_prefix()),
        }
    }

    pub fn set_negative_prefix(&mut self, text: &str) {
        self.negative_prefix_override = Some(text.to_string());
    }

    #[must_use]
    pub fn negative_suffix(&self) -> String {
        if let Some(text) = &self.negative_suffix_override {
            return text.clone();
        }
        match &self.negative_suffix {
            Some(affix) => self.render_affix(affix),
            None => self.positive_suffix(),
        }
    }

    pub fn set_negative_suffix(&mut self, text: &str) {
        self.negative_suffix_override = Some(text.to_string());
    }

    // Formatting internals

    fn with_affixes(&self, negative: bool, body: String) -> String {
        if negative {
            format!("{}{}{}", self.negative_prefix(), body, self.negative_suffix())
        } else {
            format!("{}{}{}", self.positive_prefix(), body, self.positive_suffix())
        }
    }

    fn render_affix(&self, affix: &Affix) -> String {
        let mut out = String::new();
        for part in &affix.parts {
            match part {
                AffixPart::Literal(text) => out.push_str(text),
                AffixPart::MinusSign => out.push_str(&self.symbols.minus_sign),
                AffixPart::PercentSign => out.push_str(&self.symbols.percent_sign),
                AffixPart::PerMilleSign => out.push_str(&self.symbols.per_mille_sign),
                AffixPart::CurrencySymbol => out.push_str(&self.symbols.currency_symbol),
            }
        }
        out
    }

    fn assemble(&self, digits: &DigitList) -> String {
        let int_count = digits.point.max(0) as usize;
        let mut int_digits: Vec<u8> = (0..int_count as i32).map(|i| digits.digit(i)).collect();

        while int_digits.len() < self.min_integer_digits {
            int_digits.insert(0, 0);
        }
        if int_digits.len() > self.max_integer_digits {
            let excess = int_digits.len() - self.max_integer_digits;
            int_digits.drain(..excess);
        }
        if int_digits.is_empty() {
            int_digits.push(0);
        }

        let int_text = if self.grouping_used
            && self.grouping_size > 0
            && int_digits.len() > self.grouping_size
        {
            self.group_digits(&int_digits)
        } else {
            int_digits.iter().map(|&d| char::from(b'0' + d)).collect()
        };

        let mut frac_digits: Vec<u8> = (0..self.max_fraction_digits)
            .map(|j| digits.digit(digits.point + j as i32))
            .collect();
        while frac_digits.len() > self.min_fraction_digits && frac_digits.last() == Some(&0) {
            frac_digits.pop();
        }

        let mut out = int_text;
        if !frac_digits.is_empty() || self.decimal_always_shown {
            out.push_str(&self.symbols.decimal_separator);
            for d in frac_digits {
                out.push(char::from(b'0' + d));
            }
        }
        out
    }

    fn group_digits(&self, digits: &[u8]) -> String {
        let primary = self.grouping_size;
        let secondary = if self.secondary_grouping_size > 0 {
            self.secondary_grouping_size
        } else {
            primary
        };

        let mut groups_rev: Vec<String> = Vec::new();
        let mut remaining = digits;
        let mut size = primary;
        while remaining.len() > size {
            let (head, tail) = remaining.split_at(remaining.len() - size);
            groups_rev.push(tail.iter().map(|&d| char::from(b'0' + d)).collect());
            remaining = head;
            size = secondary;
        }
        groups_rev.push(remaining.iter().map(|&d| char::from(b'0' + d)).collect());
        groups_rev.reverse();
        groups_rev.join(&self.symbols.grouping_separator)
    }

    fn format_scientific(&self, scaled: f64, negative: bool, min_exp_digits: usize) -> String {
        let mut digits = DigitList::from_f64(scaled);
        let int_digits = self.min_integer_digits.max(1);
        let significant = int_digits + self.max_fraction_digits;
        digits.round_to_significant(significant, self.rounding_mode);

        let exponent = if digits.is_zero() {
            0
        } else {
            digits.point - int_digits as i32
        };

        let mut mantissa = String::new();
        for i in 0..int_digits {
            mantissa.push(char::from(b'0' + digits.digit(i as i32)));
        }
        let mut frac: Vec<u8> = (0..self.max_fraction_digits)
            .map(|j| digits.digit((int_digits + j) as i32))
            .collect();
        while frac.len() > self.min_fraction_digits && frac.last() == Some(&0) {
            frac.pop();
        }
        if !frac.is_empty() || self.decimal_always_shown {
            mantissa.push_str(&self.symbols.decimal_separator);
            for d in frac {
                mantissa.push(char::from(b'0' + d));
            }
        }

        let exp_abs = exponent.unsigned_abs().to_string();
        let mut out = mantissa;
        out.push_str(&self.symbols.exponent_separator);
        if exponent < 0 {
            out.push_str(&self.symbols.minus_sign);
        }
        for _ in exp_abs.len()..min_exp_digits {
            out.push('0');
        }
        out.push_str(&exp_abs);

        self.with_affixes(negative, out)
    }

    fn parse_core(&self, core: &str, original: &str, base_offset: usize) -> Result<f64, FormatError> {
        let sym = &self.symbols;
        if core == sym.infinity {
            return Ok(f64::INFINITY);
        }

        let mut normalized = String::new();
        let mut seen_digit = false;
        let mut seen_decimal = false;
        let mut seen_exponent = false;
        let mut rest = core;
        let mut offset = base_offset;

        while let Some(c) = rest.chars().next() {
            if c.is_ascii_digit() {
                normalized.push(c);
                seen_digit = true;
                rest = &rest[1..];
                offset += 1;
                continue;
            }
            if !seen_decimal
                && !seen_exponent
                && !sym.grouping_separator.is_empty()
                && rest.starts_with(&sym.grouping_separator)
            {
                rest = &rest[sym.grouping_separator.len()..];
                offset += sym.grouping_separator.len();
                continue;
            }
            if !seen_decimal && !seen_exponent && rest.starts_with(&sym.decimal_separator) {
                normalized.push('.');
                seen_decimal = true;
                rest = &rest[sym.decimal_separator.len()..];
                offset += sym.decimal_separator.len();
                continue;
            }
            if !seen_exponent && seen_digit && rest.starts_with(&sym.exponent_separator) {
                normalized.push('e');
                seen_exponent = true;
                rest = &rest[sym.exponent_separator.len()..];
                offset += sym.exponent_separator.len();
                if rest.starts_with(&sym.minus_sign) {
                    normalized.push('-');
                    rest = &rest[sym.minus_sign.len()..];
                    offset += sym.minus_sign.len();
                } else if rest.starts_with(&sym.plus_sign) {
                    normalized.push('+');
                    rest = &rest[sym.plus_sign.len()..];
                    offset += sym.plus_sign.len();
                }
                continue;
            }
            return Err(FormatError::parse_number(
                format!("unexpected character '{c}'"),
                original,
                offset,
            ));
        }

        if !seen_digit {
            return Err(FormatError::parse_number(
                "no digits found".to_string(),
                original,
                base_offset,
            ));
        }
        normalized.parse::<f64>().map_err(|_| {
            FormatError::parse_number("malformed number".to_string(), original, base_offset)
        })
    }

    // Pattern regeneration internals

    fn affix_to_pattern(&self, override_text: Option<&str>, affix: &Affix) -> String {
        match override_text {
            Some(text) => quote_pattern_literal(text),
            None => affix
                .parts
                .iter()
                .map(|part| match part {
                    AffixPart::Literal(text) => quote_pattern_literal(text),
                    AffixPart::MinusSign => "-".to_string(),
                    AffixPart::PercentSign => "%".to_string(),
                    AffixPart::PerMilleSign => "‰".to_string(),
                    AffixPart::CurrencySymbol => "¤".to_string(),
                })
                .collect(),
        }
    }

    fn body_to_pattern(&self) -> String {
        let primary = self.grouping_size;
        let secondary = if self.secondary_grouping_size > 0 {
            self.secondary_grouping_size
        } else {
            primary
        };
        let grouped = self.grouping_used && primary > 0;

        let mut total = if grouped {
            if secondary == primary {
                primary + 1
            } else {
                primary + secondary + 1
            }
        } else {
            1
        };
        total = total.max(self.min_integer_digits).max(1);

        let mut int_chars: Vec<char> = (0..total)
            .map(|i| if total - i <= self.min_integer_digits { '0' } else { '#' })
            .collect();

        let mut frac_chars: Vec<char> = Vec::new();
        if let Some(increment) = self.rounding_increment {
            let inc = DigitList::from_f64(increment);
            let int_inc: Vec<char> = (0..inc.point.max(0))
                .map(|i| char::from(b'0' + inc.digit(i)))
                .collect();
            while int_chars.len() < int_inc.len() {
                int_chars.insert(0, '#');
            }
            let offset = int_chars.len() - int_inc.len();
            for (k, c) in int_inc.iter().enumerate() {
                int_chars[offset + k] = *c;
            }
            let inc_frac_len = (inc.digits.len() as i32 - inc.point).max(0) as usize;
            for j in 0..self.max_fraction_digits {
                let ch = if j < inc_frac_len {
                    char::from(b'0' + inc.digit(inc.point + j as i32))
                } else if j < self.min_fraction_digits {
                    '0'
                } else {
                    '#'
                };
                frac_chars.push(ch);
            }
        } else {
            for j in 0..self.max_fraction_digits {
                frac_chars.push(if j < self.min_fraction_digits { '0' } else { '#' });
            }
        }

        let mut out = String::new();
        let n = int_chars.len();
        for (i, c) in int_chars.iter().enumerate() {
            out.push(*c);
            if grouped {
                let remaining = n - i - 1;
                if remaining >= primary && (remaining - primary) % secondary == 0 {
                    out.push(',');
                }
            }
        }
        if !frac_chars.is_empty() || self.decimal_always_shown {
            out.push('.');
            out.extend(frac_chars);
        }
        if let Some(exp_digits) = self.exponent_digits {
            out.push('E');
            for _ in 0..exp_digits {
                out.push('0');
            }
        }
        out
    }
}

impl Default for DecimalFormat {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote affix text for pattern output when it contains pattern characters
fn quote_pattern_literal(text: &str) -> String {
    const SPECIAL: &[char] = &[
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '#', '.', ',', ';', '-', '%', 'E', '\'',
        '¤', '‰',
    ];
    if text.contains(SPECIAL) {
        format!("'{}'", text.replace('\'', "''"))
    } else {
        text.to_string()
    }
}

/// Round to a multiple of `increment` under `mode`
fn round_to_increment(value: f64, increment: f64, mode: RoundingMode) -> f64 {
    let quotient = value / increment;
    let rounded = match mode {
        RoundingMode::Ceiling => quotient.ceil(),
        RoundingMode::Floor => quotient.floor(),
        RoundingMode::Down => quotient.trunc(),
        RoundingMode::Up => {
            if quotient.is_sign_negative() {
                quotient.floor()
            } else {
                quotient.ceil()
            }
        }
        RoundingMode::HalfEven => quotient.round_ties_even(),
        RoundingMode::HalfUp => {
            if quotient.is_sign_negative() {
                (quotient - 0.5).ceil()
            } else {
                (quotient + 0.5).floor()
            }
        }
        RoundingMode::HalfDown => {
            if quotient.is_sign_negative() {
                (quotient + 0.5).floor()
            } else {
                (quotient - 0.5).ceil()
            }
        }
    };
    rounded * increment
}
