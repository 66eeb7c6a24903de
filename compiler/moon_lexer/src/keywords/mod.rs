//! Reserved keywords.
//!
//! Keywords are matched byte-for-byte and case-sensitively against the
//! whole identifier lexeme. `for` never matches as a prefix of `forever`.
//!
//! The lookup uses the lexeme length as a first-pass filter (keywords are
//! 2 to 8 bytes long), then compares against the keywords of that length.

use std::fmt;

/// One of the 21 reserved words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Keyword {
    And,
    Break,
    Do,
    Else,
    Elseif,
    End,
    False,
    For,
    Function,
    If,
    In,
    Local,
    Nil,
    Not,
    Or,
    Repeat,
    Return,
    Then,
    True,
    Until,
    While,
}

impl Keyword {
    /// Every keyword, in alphabetical order.
    pub const ALL: [Keyword; 21] = [
        Keyword::And,
        Keyword::Break,
        Keyword::Do,
        Keyword::Else,
        Keyword::Elseif,
        Keyword::End,
        Keyword::False,
        Keyword::For,
        Keyword::Function,
        Keyword::If,
        Keyword::In,
        Keyword::Local,
        Keyword::Nil,
        Keyword::Not,
        Keyword::Or,
        Keyword::Repeat,
        Keyword::Return,
        Keyword::Then,
        Keyword::True,
        Keyword::Until,
        Keyword::While,
    ];

    /// Look up a keyword by its exact spelling.
    ///
    /// Returns `None` for anything that is not a reserved word, including
    /// differently-cased spellings (`Nil`, `END`).
    #[inline]
    pub fn lookup(text: &[u8]) -> Option<Keyword> {
        let len = text.len();

        // Guard: all keywords are 2-8 bytes and start with a lowercase letter
        if !(2..=8).contains(&len) || !text[0].is_ascii_lowercase() {
            return None;
        }

        match len {
            2 => match text {
                b"do" => Some(Keyword::Do),
                b"if" => Some(Keyword::If),
                b"in" => Some(Keyword::In),
                b"or" => Some(Keyword::Or),
                _ => None,
            },
            3 => match text {
                b"and" => Some(Keyword::And),
                b"end" => Some(Keyword::End),
                b"for" => Some(Keyword::For),
                b"nil" => Some(Keyword::Nil),
                b"not" => Some(Keyword::Not),
                _ => None,
            },
            4 => match text {
                b"else" => Some(Keyword::Else),
                b"then" => Some(Keyword::Then),
                b"true" => Some(Keyword::True),
                _ => None,
            },
            5 => match text {
                b"break" => Some(Keyword::Break),
                b"false" => Some(Keyword::False),
                b"local" => Some(Keyword::Local),
                b"until" => Some(Keyword::Until),
                b"while" => Some(Keyword::While),
                _ => None,
            },
            6 => match text {
                b"elseif" => Some(Keyword::Elseif),
                b"repeat" => Some(Keyword::Repeat),
                b"return" => Some(Keyword::Return),
                _ => None,
            },
            8 => match text {
                b"function" => Some(Keyword::Function),
                _ => None,
            },
            _ => None,
        }
    }

    /// The keyword as written in source.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::And => "and",
            Keyword::Break => "break",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Elseif => "elseif",
            Keyword::End => "end",
            Keyword::False => "false",
            Keyword::For => "for",
            Keyword::Function => "function",
            Keyword::If => "if",
            Keyword::In => "in",
            Keyword::Local => "local",
            Keyword::Nil => "nil",
            Keyword::Not => "not",
            Keyword::Or => "or",
            Keyword::Repeat => "repeat",
            Keyword::Return => "return",
            Keyword::Then => "then",
            Keyword::True => "true",
            Keyword::Until => "until",
            Keyword::While => "while",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
