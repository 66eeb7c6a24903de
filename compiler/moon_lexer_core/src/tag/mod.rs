//! Raw token tags produced by the scanner.
//!
//! Discriminants are grouped into semantic ranges so a tag can be
//! classified with a single comparison:
//!
//! | range | group |
//! |---|---|
//! | 0-15 | identifiers and literals |
//! | 32-63 | operators |
//! | 80-95 | delimiters |
//! | 112-127 | trivia |
//! | 240-254 | errors |
//! | 255 | EOF |

/// Raw token tag. One byte.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    // === Identifiers & Literals ===
    /// Identifier or keyword; the cooker tells them apart.
    Ident = 0,
    /// Decimal number: `42`, `3.14`.
    Number = 1,
    /// Quoted string including both quotes.
    String = 2,

    // === Operators ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    Caret = 37,
    Hash = 38,
    Equal = 39,
    EqualEqual = 40,
    TildeEqual = 41,
    Less = 42,
    LessEqual = 43,
    Greater = 44,
    GreaterEqual = 45,
    Dot = 46,
    DotDot = 47,
    DotDotDot = 48,

    // === Delimiters ===
    LeftParen = 80,
    RightParen = 81,
    LeftBrace = 82,
    RightBrace = 83,
    LeftBracket = 84,
    RightBracket = 85,
    Semicolon = 86,
    Colon = 87,
    Comma = 88,

    // === Trivia ===
    /// Run of spaces, tabs, carriage returns and newlines.
    Whitespace = 112,
    /// `--` through the end of the line, newline included.
    LineComment = 113,
    /// `--` followed by a complete long bracket.
    LongComment = 114,
    /// A complete long bracket block `[[ ... ]]` / `[=[ ... ]=]`.
    LongBracket = 115,

    // === Errors ===
    /// Byte that starts no token.
    InvalidByte = 240,
    /// `~` not followed by `=`.
    Tilde = 241,
    /// String missing its closing quote before a newline or EOF.
    UnterminatedString = 242,
    /// Long bracket (or long comment) missing its closing bracket.
    UnterminatedLongBracket = 243,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Whitespace and comments: consumed, never emitted as tokens.
    #[inline]
    pub fn is_trivia(self) -> bool {
        (112..=127).contains(&(self as u8))
    }
}

/// A raw token: tag plus byte length. The start offset is implied by the
/// running sum of preceding lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
