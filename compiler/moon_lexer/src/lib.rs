//! Lexer for the Moon language.
//!
//! Two layers:
//!
//! ```text
//! source → moon_lexer_core::RawScanner → (RawTag, len) → TokenCooker → TokenList
//! ```
//!
//! The raw scanner works on a sentinel-terminated copy of the source and
//! never allocates. The cooker resolves keywords, copies payloads, parses
//! numbers and collects diagnostics. A single call to [`lex`] reports every
//! lexical problem in the file and still produces a complete token list.

mod cooker;
mod keywords;
mod lex_error;
mod span;
mod token;

pub use keywords::Keyword;
pub use lex_error::{LexError, LexErrorKind};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};

use moon_lexer_core::{RawTag, SourceBuffer};
use tracing::debug;

use crate::cooker::TokenCooker;

/// Result of lexing one source file.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOutput {
    /// Tokens in source order, terminated by exactly one `Eof`.
    pub tokens: TokenList,
    /// Diagnostics in discovery order.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Split into the token list and the diagnostics.
    pub fn into_parts(self) -> (TokenList, Vec<LexError>) {
        (self.tokens, self.errors)
    }
}

/// Lex a complete source file.
///
/// Never fails: malformed input produces diagnostics in
/// [`LexOutput::errors`] and scanning resumes after the offending lexeme.
pub fn lex(source: &(impl AsRef<[u8]> + ?Sized)) -> LexOutput {
    let buf = SourceBuffer::new(source.as_ref());
    let _span = tracing::debug_span!("lex", source_len = buf.len()).entered();

    let mut scanner = moon_lexer_core::RawScanner::new(buf.cursor());
    let mut cooker = TokenCooker::new(buf.as_bytes());
    // Rough estimate: one token per four source bytes.
    let mut tokens = TokenList::with_capacity(buf.as_bytes().len() / 4 + 1);

    let mut offset = 0u32;
    loop {
        let raw = scanner.next_token();
        let span = if raw.tag == RawTag::Eof {
            Span::point(offset)
        } else {
            Span::new(offset, offset + raw.len)
        };
        offset = span.end;

        // Skip trivia (whitespace, comments, long brackets)
        if raw.tag.is_trivia() {
            continue;
        }
        if let Some(kind) = cooker.cook(raw.tag, span) {
            tokens.push(Token::new(kind, span));
        }
        if raw.tag == RawTag::Eof {
            break;
        }
    }

    let errors = cooker.into_errors();
    debug!(tokens = tokens.len(), errors = errors.len(), "lexed");
    LexOutput { tokens, errors }
}

#[cfg(test)]
#[allow(
    clippy::cast_possible_truncation,
    reason = "test code: source lengths always fit u32"
)]
mod tests;
