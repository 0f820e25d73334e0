//! Locale symbol sets
//!
//! The characters and strings a format substitutes for pattern
//! placeholders. A small embedded JSON table stands in for full CLDR data;
//! lookup normalizes BCP-47-ish tags and falls back from `de-AT` to `de`.

use decfmt_ast::FormatError;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalFormatSymbols {
    pub decimal_separator: String,
    pub grouping_separator: String,
    pub minus_sign: String,
    pub plus_sign: String,
    pub percent_sign: String,
    pub per_mille_sign: String,
    pub exponent_separator: String,
    pub infinity: String,
    pub nan: String,
    pub currency_symbol: String,
}

static LOCALE_TABLE: Lazy<HashMap<String, DecimalFormatSymbols>> = Lazy::new(|| {
    let data: Value = serde_json::from_str(include_str!("locales.json"))
        .expect("embedded locale table is valid JSON");
    let mut table = HashMap::new();
    if let Some(entries) = data.as_object() {
        for (tag, entry) in entries {
            table.insert(tag.clone(), DecimalFormatSymbols::from_value(entry));
        }
    }
    table
});

impl DecimalFormatSymbols {
    /// The en-US symbol set
    #[must_use]
    pub fn new() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            grouping_separator: ",".to_string(),
            minus_sign: "-".to_string(),
            plus_sign: "+".to_string(),
            percent_sign: "%".to_string(),
            per_mille_sign: "‰".to_string(),
            exponent_separator: "E".to_string(),
            infinity: "∞".to_string(),
            nan: "NaN".to_string(),
            currency_symbol: "$".to_string(),
        }
    }

    /// Resolve symbols for a locale tag
    ///
    /// Accepts `en`, `en-US` or `en_US` spellings; a regional tag falls
    /// back to its language.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::UnknownLocale` if neither the tag nor its
    /// language is in the table
    pub fn for_locale(tag: &str) -> Result<Self, FormatError> {
        let normalized = tag.trim().replace('_', "-").to_lowercase();

        if let Some(symbols) = LOCALE_TABLE.get(&normalized) {
            return Ok(symbols.clone());
        }
        if let Some((language, _)) = normalized.split_once('-') {
            if let Some(symbols) = LOCALE_TABLE.get(language) {
                return Ok(symbols.clone());
            }
        }
        Err(FormatError::unknown_locale(tag))
    }

    fn from_value(entry: &Value) -> Self {
        let field = |key: &str, default: &str| -> String {
            entry
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or(default)
                .to_string()
        };

        Self {
            decimal_separator: field("decimal", "."),
            grouping_separator: field("group", ","),
            minus_sign: field("minus", "-"),
            plus_sign: field("plus", "+"),
            percent_sign: field("percent", "%"),
            per_mille_sign: field("permille", "‰"),
            exponent_separator: field("exponent", "E"),
            infinity: field("infinity", "∞"),
            nan: field("nan", "NaN"),
            currency_symbol: field("currency", "$"),
        }
    }
}

impl Default for DecimalFormatSymbols {
    fn default() -> Self {
        Self::new()
    }
}
