//! Pattern AST definitions for decfmt
//!
//! Every pattern element preserves location information for error reporting.

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }
}

/// One element of a prefix or suffix
///
/// Symbol placeholders are resolved against `DecimalFormatSymbols` when the
/// affix is rendered, so a parsed pattern stays locale independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffixPart {
    /// Literal text (from quoted or unrecognized characters)
    Literal(String),
    /// `-` resolves to the minus sign
    MinusSign,
    /// `%` resolves to the percent sign and implies multiplier 100
    PercentSign,
    /// `‰` resolves to the per-mille sign and implies multiplier 1000
    PerMilleSign,
    /// `¤` resolves to the currency symbol
    CurrencySymbol,
}

/// A prefix or suffix: an ordered list of parts
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Affix {
    pub parts: Vec<AffixPart>,
}

impl Affix {
    #[must_use]
    pub const fn new(parts: Vec<AffixPart>) -> Self {
        Self { parts }
    }

    /// Affix consisting of a single literal
    #[must_use]
    pub fn literal(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            parts: vec![AffixPart::Literal(text.to_string())],
        }
    }

    /// Affix consisting of the minus sign placeholder
    #[must_use]
    pub fn minus() -> Self {
        Self {
            parts: vec![AffixPart::MinusSign],
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Grouping sizes taken from comma placement in the integer body
///
/// `#,##,##0` gives primary 3, secondary 2. A single comma sets both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grouping {
    pub primary: usize,
    pub secondary: usize,
}

impl Grouping {
    #[must_use]
    pub const fn new(primary: usize, secondary: usize) -> Self {
        Self { primary, secondary }
    }

    #[must_use]
    pub const fn uniform(size: usize) -> Self {
        Self {
            primary: size,
            secondary: size,
        }
    }
}

/// Scientific notation marker: `E` followed by exponent digit placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exponent {
    pub min_digits: usize,
}

/// One half of a pattern (positive or negative form)
#[derive(Debug, Clone, PartialEq)]
pub struct Subpattern {
    pub prefix: Affix,
    pub suffix: Affix,
    pub min_integer_digits: usize,
    pub min_fraction_digits: usize,
    pub max_fraction_digits: usize,
    pub grouping: Option<Grouping>,
    pub multiplier: i32,
    pub rounding_increment: Option<f64>,
    pub exponent: Option<Exponent>,
}

impl Subpattern {
    /// The shape of the default pattern `#,##0.###`
    #[must_use]
    pub fn default_shape() -> Self {
        Self {
            prefix: Affix::default(),
            suffix: Affix::default(),
            min_integer_digits: 1,
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            grouping: Some(Grouping::uniform(3)),
            multiplier: 1,
            rounding_increment: None,
            exponent: None,
        }
    }
}

/// A fully parsed pattern
///
/// When no explicit negative subpattern is given, the negative form is the
/// positive form with the minus sign prepended.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPattern {
    pub positive: Subpattern,
    pub negative: Option<Subpattern>,
}

impl ParsedPattern {
    #[must_use]
    pub const fn new(positive: Subpattern, negative: Option<Subpattern>) -> Self {
        Self { positive, negative }
    }
}

/// Rounding behavior applied when a value has more fraction digits than the
/// format allows, or when a rounding increment is set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Round toward positive infinity
    Ceiling,
    /// Round toward negative infinity
    Floor,
    /// Round toward zero
    Down,
    /// Round away from zero
    Up,
    /// Round to nearest; ties to the even neighbor
    #[default]
    HalfEven,
    /// Round to nearest; ties toward zero
    HalfDown,
    /// Round to nearest; ties away from zero
    HalfUp,
}

impl RoundingMode {
    /// Look up a mode by its CLI/config name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ceiling" => Some(Self::Ceiling),
            "floor" => Some(Self::Floor),
            "down" => Some(Self::Down),
            "up" => Some(Self::Up),
            "half-even" => Some(Self::HalfEven),
            "half-down" => Some(Self::HalfDown),
            "half-up" => Some(Self::HalfUp),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ceiling => "ceiling",
            Self::Floor => "floor",
            Self::Down => "down",
            Self::Up => "up",
            Self::HalfEven => "half-even",
            Self::HalfDown => "half-down",
            Self::HalfUp => "half-up",
        }
    }
}

/// Error types with location information
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("decfmt:{pattern}:{offset}: ERR_PATTERN_SYNTAX: {message}")]
    PatternSyntax {
        message: String,
        pattern: String,
        span: Span,
        offset: usize,
    },

    #[error("decfmt:{text}:{offset}: ERR_PARSE_NUMBER: {message}")]
    ParseNumber {
        message: String,
        text: String,
        offset: usize,
    },

    #[error("decfmt:{tag}: ERR_UNKNOWN_LOCALE: no symbol data for locale")]
    UnknownLocale { tag: String },
}

impl FormatError {
    #[must_use]
    pub fn pattern_syntax(message: String, span: Span, pattern: &str) -> Self {
        Self::PatternSyntax {
            message,
            pattern: pattern.to_string(),
            span,
            offset: span.start,
        }
    }

    #[must_use]
    pub fn parse_number(message: String, text: &str, offset: usize) -> Self {
        Self::ParseNumber {
            message,
            text: text.to_string(),
            offset,
        }
    }

    #[must_use]
    pub fn unknown_locale(tag: &str) -> Self {
        Self::UnknownLocale {
            tag: tag.to_string(),
        }
    }
}
