//! Line-oriented rendering of tokens and diagnostics.
//!
//! Lexemes are written as raw bytes. Nothing here assumes UTF-8.

use std::io::{self, Write};

use moon_lexer::{LexError, Token, TokenKind};

/// Write one token as a single line.
pub fn write_token(out: &mut impl Write, token: &Token) -> io::Result<()> {
    match &token.kind {
        TokenKind::Keyword(kw) => writeln!(out, "keyword: {kw}"),
        TokenKind::Number(value) => writeln!(out, "number: {}", format_number(*value)),
        TokenKind::String(bytes) => {
            out.write_all(b"string: \"")?;
            out.write_all(bytes)?;
            out.write_all(b"\"\n")
        }
        TokenKind::Ident(name) => {
            out.write_all(b"identifier: ")?;
            out.write_all(name)?;
            out.write_all(b"\n")
        }
        TokenKind::Eof => writeln!(out, "end of file"),
        other => match other.lexeme() {
            Some(symbol) => writeln!(out, "{symbol}"),
            None => writeln!(out, "{}", other.name()),
        },
    }
}

pub fn write_error(out: &mut impl Write, error: &LexError) -> io::Result<()> {
    writeln!(out, "{error}")
}

/// Shortest round-trip decimal, switching to scientific notation when the
/// decimal exponent is below -4 or at least 16.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sci = format!("{value:e}");
    let exponent = sci
        .rsplit_once('e')
        .and_then(|(_, exp)| exp.parse::<i32>().ok())
        .unwrap_or(0);
    if (-4..16).contains(&exponent) {
        value.to_string()
    } else {
        sci
    }
}
