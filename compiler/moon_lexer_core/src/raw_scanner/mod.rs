//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords, copy lexemes, or parse numeric values; those are deferred to
//! the cooking layer.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) dispatches to `eof()`, which tells EOF apart from an
//! interior null.
//!
//! Every multi-byte operator is recognized by maximal munch with at most
//! two bytes of lookahead. Long brackets look ahead across their `=` run.

use crate::char_class::{is_digit, is_ident_continue, is_ident_start, is_whitespace};
use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner over one source buffer.
///
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' | b'\r' | b'\n' => self.whitespace(start),
            b if is_ident_start(b) => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' | b'\'' => self.string(start),
            b'-' => self.minus_or_comment(start),
            b'+' => self.single(start, RawTag::Plus),
            b'*' => self.single(start, RawTag::Star),
            b'/' => self.single(start, RawTag::Slash),
            b'%' => self.single(start, RawTag::Percent),
            b'^' => self.single(start, RawTag::Caret),
            b'#' => self.single(start, RawTag::Hash),
            b'=' => self.with_equal(start, RawTag::Equal, RawTag::EqualEqual),
            b'~' => self.with_equal(start, RawTag::Tilde, RawTag::TildeEqual),
            b'<' => self.with_equal(start, RawTag::Less, RawTag::LessEqual),
            b'>' => self.with_equal(start, RawTag::Greater, RawTag::GreaterEqual),
            b'.' => self.dot(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b'[' => self.left_bracket(start),
            b']' => self.single(start, RawTag::RightBracket),
            b';' => self.single(start, RawTag::Semicolon),
            b':' => self.single(start, RawTag::Colon),
            b',' => self.single(start, RawTag::Comma),
            _ => self.invalid_byte(start),
        }
    }

    #[inline]
    fn finish(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ─────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            self.finish(start, RawTag::Eof)
        } else {
            // Interior null byte.
            self.invalid_byte(start)
        }
    }

    // ─── Whitespace ──────────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(is_whitespace);
        self.finish(start, RawTag::Whitespace)
    }

    // ─── Comments & Long Brackets ────────────────────────────────

    fn minus_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first '-'
        if self.cursor.current() != b'-' {
            return self.finish(start, RawTag::Minus);
        }
        self.cursor.advance(); // consume second '-'

        if let Some(level) = self.long_bracket_level() {
            let tag = if self.skip_long_bracket(level) {
                RawTag::LongComment
            } else {
                RawTag::UnterminatedLongBracket
            };
            return self.finish(start, tag);
        }

        self.cursor.eat_until_newline_or_eof();
        self.cursor.advance(); // the newline belongs to the comment; no-op at EOF
        self.finish(start, RawTag::LineComment)
    }

    fn left_bracket(&mut self, start: u32) -> RawToken {
        match self.long_bracket_level() {
            Some(level) => {
                let tag = if self.skip_long_bracket(level) {
                    RawTag::LongBracket
                } else {
                    RawTag::UnterminatedLongBracket
                };
                self.finish(start, tag)
            }
            None => self.single(start, RawTag::LeftBracket),
        }
    }

    /// Level of the long bracket opener at the cursor, if there is one.
    ///
    /// `[[` is level 0, `[==[` is level 2. `[` followed by anything else
    /// (including `[=` without a second `[`) is not an opener.
    fn long_bracket_level(&self) -> Option<u32> {
        if self.cursor.current() != b'[' {
            return None;
        }
        let mut n = 1;
        while self.cursor.nth(n) == b'=' {
            n += 1;
        }
        (self.cursor.nth(n) == b'[').then_some(n - 1)
    }

    /// Skip a long bracket whose opener starts at the cursor.
    ///
    /// Consumes through the matching `]`, `level` × `=`, `]`. Returns
    /// `false` with the cursor at EOF if no matching close exists.
    fn skip_long_bracket(&mut self, level: u32) -> bool {
        self.cursor.advance_n(level + 2); // `[`, `=` × level, `[`
        loop {
            if !self.cursor.skip_to_close_bracket() {
                return false;
            }
            self.cursor.advance(); // consume ']'
            let mut n = 0;
            while n < level && self.cursor.nth(n) == b'=' {
                n += 1;
            }
            if n == level && self.cursor.nth(level) == b']' {
                self.cursor.advance_n(level + 1);
                return true;
            }
        }
    }

    // ─── Identifiers ─────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first byte (already validated)
        self.cursor.eat_while(is_ident_continue);
        self.finish(start, RawTag::Ident)
    }

    // ─── Operators ───────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.finish(start, tag)
    }

    /// `x` or `x=`: the lead byte alone yields `bare`, followed by `=` yields `compound`.
    fn with_equal(&mut self, start: u32, bare: RawTag, compound: RawTag) -> RawToken {
        self.cursor.advance(); // consume lead byte
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.finish(start, compound)
        } else {
            self.finish(start, bare)
        }
    }

    fn dot(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '.'
        if self.cursor.current() != b'.' {
            return self.finish(start, RawTag::Dot);
        }
        self.cursor.advance(); // consume second '.'
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            self.finish(start, RawTag::DotDotDot)
        } else {
            self.finish(start, RawTag::DotDot)
        }
    }

    // ─── Numeric Literals ────────────────────────────────────────

    #[inline]
    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(is_digit);

        // Fraction only when a digit follows the dot: `3.` and `3..` stay integers.
        if self.cursor.current() == b'.' && is_digit(self.cursor.peek()) {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(is_digit);
        }

        self.finish(start, RawTag::Number)
    }

    // ─── String Literals ─────────────────────────────────────────

    fn string(&mut self, start: u32) -> RawToken {
        let quote = self.cursor.advance(); // consume opening quote
        loop {
            let b = self.cursor.skip_to_string_delim(quote);
            if b == quote {
                self.cursor.advance(); // consume closing quote
                return self.finish(start, RawTag::String);
            }
            match b {
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if self.cursor.is_eof() {
                        return self.finish(start, RawTag::UnterminatedString);
                    }
                    self.cursor.advance(); // escaped byte, kept verbatim
                }
                // Raw newline (left for the next token) or EOF.
                _ => return self.finish(start, RawTag::UnterminatedString),
            }
        }
    }

    // ─── Error tokens ────────────────────────────────────────────

    fn invalid_byte(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.finish(start, RawTag::InvalidByte)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Convenience function: scan source bytes and collect all raw tokens.
///
/// Returns every token except the final `Eof`. For streaming access,
/// construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &[u8]) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}
