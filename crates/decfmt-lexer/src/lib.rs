//! Lexical analysis for decfmt patterns
//!
//! Tokenizes DecimalFormat pattern strings (`#,##0.00;(#,##0.00)`) using
//! logos. Whitespace is never skipped: spaces are literal affix text.

use decfmt_ast::Span;
use logos::Logos;

/// Pattern tokens - the DecimalFormat pattern character set
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Digit placeholder (`#`)
    #[token("#")]
    Hash,

    /// Explicit digit (`0`-`9`); zero pads, non-zero digits form a rounding increment
    #[regex(r"[0-9]")]
    Digit,

    /// Decimal separator placeholder (`.`)
    #[token(".")]
    Decimal,

    /// Grouping separator placeholder (`,`)
    #[token(",")]
    Group,

    /// Subpattern separator between positive and negative forms (`;`)
    #[token(";")]
    Separator,

    /// Minus sign placeholder (`-`)
    #[token("-")]
    Minus,

    /// Percent sign; multiplies by 100 (`%`)
    #[token("%")]
    Percent,

    /// Per-mille sign; multiplies by 1000 (`‰`)
    #[token("‰")]
    PerMille,

    /// Currency symbol placeholder (`¤`)
    #[token("¤")]
    Currency,

    /// Exponent marker for scientific notation (`E`)
    #[token("E")]
    Exponent,

    /// Quoted literal; `''` inside quotes is an escaped apostrophe
    #[regex(r"'([^']|'')*'")]
    Quoted,

    /// Any other single character is literal affix text
    #[regex(r"[^0-9#.,;%E'¤‰\-]")]
    Literal,

    /// End of input
    Eof,

    /// Lexer error (unterminated quote)
    Error,
}

/// Token with location information
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub text: String,
}

/// Lexer that produces tokens with spans
pub struct Lexer<'input> {
    lexer: logos::Lexer<'input, Token>,
    input: &'input str,
}

impl<'input> Lexer<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            lexer: Token::lexer(input),
            input,
        }
    }

    /// Get the next token with span information
    pub fn next_token(&mut self) -> SpannedToken {
        match self.lexer.next() {
            Some(Ok(token)) => {
                let span = self.lexer.span();
                let text = self.input[span.clone()].to_string();
                SpannedToken {
                    token,
                    span: Span::new(span.start, span.end),
                    text,
                }
            }
            Some(Err(())) => {
                let span = self.lexer.span();
                let text = self.input[span.clone()].to_string();
                SpannedToken {
                    token: Token::Error,
                    span: Span::new(span.start, span.end),
                    text,
                }
            }
            None => SpannedToken {
                token: Token::Eof,
                span: Span::new(self.input.len(), self.input.len()),
                text: String::new(),
            },
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
