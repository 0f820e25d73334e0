//! Affix processing utilities for the pattern parser
//!
//! Centralized handling of quote removal and affix-part accumulation shared
//! by prefix and suffix collection.

use decfmt_ast::AffixPart;

/// Remove quotes from a quoted pattern literal
///
/// `'abc'` becomes `abc`, a doubled `''` inside quotes becomes a single
/// apostrophe, and the bare escape `''` becomes `'`.
#[must_use]
pub fn unquote(text: &str) -> String {
    if text.len() < 2 {
        return text.to_string();
    }
    let inner = &text[1..text.len() - 1];
    if inner.is_empty() {
        // '' is the escaped apostrophe itself
        return "'".to_string();
    }
    inner.replace("''", "'")
}

/// Append literal text to an affix, merging with a trailing literal part
pub fn append_literal(parts: &mut Vec<AffixPart>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(AffixPart::Literal(existing)) = parts.last_mut() {
        existing.push_str(text);
    } else {
        parts.push(AffixPart::Literal(text.to_string()));
    }
}
