//! Cooked tokens.
//!
//! A [`Token`] pairs a [`TokenKind`] with the [`Span`] of its lexeme. Only
//! `Number`, `String` and `Ident` carry a payload, and that payload is an
//! owned copy independent of the source buffer.

mod list;

pub use list::TokenList;

use std::fmt;

use crate::keywords::Keyword;
use crate::span::Span;

/// A token with its kind and source location.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Token kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // === Literals ===
    /// Decimal number, integers included: `42`, `3.14`.
    Number(f64),
    /// Bytes between the quotes, escapes kept verbatim.
    String(Vec<u8>),
    /// Identifier that is not a reserved word.
    Ident(Vec<u8>),
    Keyword(Keyword),

    // === Operators ===
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Hash,
    /// `==`
    EqEq,
    /// `~=`
    NotEq,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    Lt,
    Gt,
    /// `=`
    Eq,

    // === Delimiters ===
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    Comma,
    Dot,
    /// `..`
    DotDot,
    /// `...`
    DotDotDot,

    // === Special ===
    Eof,
}

impl TokenKind {
    /// Fixed source spelling for operators and punctuation.
    ///
    /// Returns `None` for literals, identifiers, keywords and `Eof`.
    pub fn lexeme(&self) -> Option<&'static str> {
        Some(match self {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Caret => "^",
            TokenKind::Hash => "#",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "~=",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::DotDotDot => "...",
            TokenKind::Number(_)
            | TokenKind::String(_)
            | TokenKind::Ident(_)
            | TokenKind::Keyword(_)
            | TokenKind::Eof => return None,
        })
    }

    /// Short category name, used in debug output.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "number",
            TokenKind::String(_) => "string",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Eof => "end of file",
            _ => "symbol",
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}
