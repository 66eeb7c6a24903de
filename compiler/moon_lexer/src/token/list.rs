//! Token list produced by [`lex`](crate::lex).

use std::ops::Index;

use super::{Token, TokenKind};

/// Ordered tokens of one source file.
///
/// Built only by the lexer, so every list ends with exactly one
/// [`TokenKind::Eof`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, token: Token) {
        debug_assert!(
            !self.last().is_some_and(|t| t.kind.is_eof()),
            "token pushed after Eof"
        );
        self.tokens.push(token);
    }

    /// Get the number of tokens, `Eof` included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The final token. `Eof` for any list built by the lexer.
    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Iterate over token kinds, dropping spans.
    pub fn kinds(&self) -> impl Iterator<Item = &TokenKind> {
        self.tokens.iter().map(|t| &t.kind)
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
