//! Token cooking layer.
//!
//! Transforms `(RawTag, len)` pairs from the raw scanner into [`TokenKind`]
//! values with keyword resolution, payload copies and numeric parsing.
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → TokenKind
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Operators/delimiters**: direct 1:1 mapping (no data)
//! - **Identifiers**: keyword lookup, else an owned copy
//! - **Numbers**: parse value
//! - **Strings**: copy the bytes between the quotes
//! - **Trivia**: no token
//! - **Errors**: push a `LexError`, no token

use moon_lexer_core::RawTag;
use tracing::debug;

use crate::keywords::Keyword;
use crate::lex_error::LexError;
use crate::span::Span;
use crate::token::TokenKind;

/// Cooks raw tokens into `TokenKind` values.
///
/// Each `cook()` call is independent. Accumulates errors for the entire file.
pub(crate) struct TokenCooker<'src> {
    source: &'src [u8],
    errors: Vec<LexError>,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            errors: Vec::new(),
        }
    }

    /// Consume the cooker, returning accumulated errors.
    pub(crate) fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    #[cfg(test)]
    pub(crate) fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Cook a single raw token.
    ///
    /// Returns `None` for trivia and for error tags, which record a
    /// diagnostic instead of producing a token.
    pub(crate) fn cook(&mut self, tag: RawTag, span: Span) -> Option<TokenKind> {
        let kind = match tag {
            // Literals
            RawTag::Ident => self.cook_ident(span),
            RawTag::Number => self.cook_number(span),
            RawTag::String => self.cook_string(span),

            // Operators
            RawTag::Plus => TokenKind::Plus,
            RawTag::Minus => TokenKind::Minus,
            RawTag::Star => TokenKind::Star,
            RawTag::Slash => TokenKind::Slash,
            RawTag::Percent => TokenKind::Percent,
            RawTag::Caret => TokenKind::Caret,
            RawTag::Hash => TokenKind::Hash,
            RawTag::Equal => TokenKind::Eq,
            RawTag::EqualEqual => TokenKind::EqEq,
            RawTag::TildeEqual => TokenKind::NotEq,
            RawTag::Less => TokenKind::Lt,
            RawTag::LessEqual => TokenKind::LtEq,
            RawTag::Greater => TokenKind::Gt,
            RawTag::GreaterEqual => TokenKind::GtEq,
            RawTag::Dot => TokenKind::Dot,
            RawTag::DotDot => TokenKind::DotDot,
            RawTag::DotDotDot => TokenKind::DotDotDot,

            // Delimiters
            RawTag::LeftParen => TokenKind::LParen,
            RawTag::RightParen => TokenKind::RParen,
            RawTag::LeftBrace => TokenKind::LBrace,
            RawTag::RightBrace => TokenKind::RBrace,
            RawTag::LeftBracket => TokenKind::LBracket,
            RawTag::RightBracket => TokenKind::RBracket,
            RawTag::Semicolon => TokenKind::Semicolon,
            RawTag::Colon => TokenKind::Colon,
            RawTag::Comma => TokenKind::Comma,

            // Trivia
            RawTag::Whitespace
            | RawTag::LineComment
            | RawTag::LongComment
            | RawTag::LongBracket => return None,

            // Errors
            RawTag::InvalidByte => {
                let byte = self.source[span.start as usize];
                self.report(LexError::unexpected_character(span, byte));
                return None;
            }
            RawTag::Tilde => {
                self.report(LexError::unexpected_token(span, b'~'));
                return None;
            }
            RawTag::UnterminatedString => {
                self.report(LexError::unterminated_string(span));
                return None;
            }
            RawTag::UnterminatedLongBracket => {
                self.report(LexError::unterminated_long_bracket(span));
                return None;
            }

            RawTag::Eof => TokenKind::Eof,
        };
        Some(kind)
    }

    fn report(&mut self, err: LexError) {
        debug!(span = %err.span, kind = ?err.kind, "lex error");
        self.errors.push(err);
    }

    fn cook_ident(&self, span: Span) -> TokenKind {
        let text = &self.source[span.to_range()];
        match Keyword::lookup(text) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident(text.to_vec()),
        }
    }

    /// Digits with an optional fraction; always valid decimal ASCII.
    fn cook_number(&self, span: Span) -> TokenKind {
        let value = std::str::from_utf8(&self.source[span.to_range()])
            .ok()
            .and_then(|text| text.parse::<f64>().ok())
            .unwrap_or_default();
        TokenKind::Number(value)
    }

    /// Payload is the bytes strictly between the quotes, escapes untouched.
    fn cook_string(&self, span: Span) -> TokenKind {
        let start = span.start as usize + 1;
        let end = span.end as usize - 1;
        TokenKind::String(self.source[start..end].to_vec())
    }
}

#[cfg(test)]
#[allow(
    clippy::cast_possible_truncation,
    reason = "test code: source lengths always fit u32"
)]
