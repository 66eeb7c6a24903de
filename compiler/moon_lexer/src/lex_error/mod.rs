//! Recoverable lexical diagnostics.
//!
//! The lexer never stops on a bad lexeme. It records a [`LexError`] and
//! resumes at the next byte, so one pass reports every problem in the file.

use std::fmt;

use thiserror::Error;

use crate::span::Span;

/// A lexical problem and where it was found.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What went wrong.
///
/// `Display` renders the diagnostic line printed by `moonc`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// Byte that starts no token: control bytes, non-ASCII, `@`, `$`, ...
    #[error("unrecognized character {}", shown(.byte))]
    UnexpectedCharacter { byte: u8 },
    /// Byte that starts a token only in combination (`~` without `=`).
    #[error("error: unexpected token '{}'", shown(.byte))]
    UnexpectedToken { byte: u8 },
    #[error("error: unterminated string")]
    UnterminatedString,
    #[error("error: unterminated long bracket")]
    UnterminatedLongBracket,
}

impl LexError {
    pub fn unexpected_character(span: Span, byte: u8) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnexpectedCharacter { byte },
        }
    }

    pub fn unexpected_token(span: Span, byte: u8) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnexpectedToken { byte },
        }
    }

    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    pub fn unterminated_long_bracket(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedLongBracket,
        }
    }
}

/// Printable ASCII as itself, anything else as an ASCII escape (`\x80`).
#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror format arguments borrow fields"
)]
fn shown(byte: &u8) -> ByteDisplay {
    ByteDisplay(*byte)
}

struct ByteDisplay(u8);

impl fmt::Display for ByteDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii_graphic() || self.0 == b' ' {
            write!(f, "{}", char::from(self.0))
        } else {
            write!(f, "{}", self.0.escape_ascii())
        }
    }
}
