use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).tokens.kinds().cloned().collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.as_bytes().to_vec())
}

fn string(content: &[u8]) -> TokenKind {
    TokenKind::String(content.to_vec())
}

fn error_kinds(source: &[u8]) -> Vec<LexErrorKind> {
    lex(source).errors.into_iter().map(|e| e.kind).collect()
}

// === Basics ===

#[test]
fn empty_source_is_just_eof() {
    let out = lex("");
    assert_eq!(out.tokens.len(), 1);
    assert_eq!(out.tokens[0], Token::new(TokenKind::Eof, Span::point(0)));
    assert!(!out.has_errors());
}

#[test]
fn whitespace_only() {
    assert_eq!(kinds(" \t\r\n  "), vec![TokenKind::Eof]);
}

#[test]
fn simple_expression() {
    assert_eq!(
        kinds("1 + 2"),
        vec![
            TokenKind::Number(1.0),
            TokenKind::Plus,
            TokenKind::Number(2.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn spans_cover_lexemes() {
    let out = lex("local x = 10");
    let spans: Vec<Span> = out.tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 5),
            Span::new(6, 7),
            Span::new(8, 9),
            Span::new(10, 12),
            Span::point(12),
        ]
    );
}

#[test]
fn eof_is_a_point_after_trailing_trivia() {
    let out = lex("x -- note\n  ");
    assert_eq!(out.tokens.len(), 2);
    assert_eq!(out.tokens.last().map(|t| t.span), Some(Span::point(12)));
    assert!(out.tokens.last().is_some_and(|t| t.span.is_empty()));
}

#[test]
fn source_filling_cache_line() {
    // 63 bytes leave the sentinel in the last byte of the buffer.
    let source = format!("1{}.", "0".repeat(61));
    let out = lex(&source);
    assert_eq!(
        out.tokens.kinds().cloned().collect::<Vec<_>>(),
        vec![TokenKind::Number(1e61), TokenKind::Dot, TokenKind::Eof]
    );
    assert_eq!(out.tokens.last().map(|t| t.span), Some(Span::point(63)));
}

#[test]
fn statement() {
    assert_eq!(
        kinds("local function f(a, ...) return a end"),
        vec![
            TokenKind::Keyword(Keyword::Local),
            TokenKind::Keyword(Keyword::Function),
            ident("f"),
            TokenKind::LParen,
            ident("a"),
            TokenKind::Comma,
            TokenKind::DotDotDot,
            TokenKind::RParen,
            TokenKind::Keyword(Keyword::Return),
            ident("a"),
            TokenKind::Keyword(Keyword::End),
            TokenKind::Eof,
        ]
    );
}

// === Operators ===

#[test]
fn comparison_operators() {
    assert_eq!(
        kinds("== ~= <= >= < > ="),
        vec![
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Eq,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn greater_alone_is_gt() {
    assert_eq!(kinds(">"), vec![TokenKind::Gt, TokenKind::Eof]);
    assert_eq!(kinds(">="), vec![TokenKind::GtEq, TokenKind::Eof]);
}

#[test]
fn dots_munch_maximally() {
    assert_eq!(
        kinds(". .. ... ...."),
        vec![
            TokenKind::Dot,
            TokenKind::DotDot,
            TokenKind::DotDotDot,
            TokenKind::DotDotDot,
            TokenKind::Dot,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn punctuation() {
    assert_eq!(
        kinds("#t[1]{};:^%*/"),
        vec![
            TokenKind::Hash,
            ident("t"),
            TokenKind::LBracket,
            TokenKind::Number(1.0),
            TokenKind::RBracket,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Caret,
            TokenKind::Percent,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eof,
        ]
    );
}

// === Comments ===

#[test]
fn line_comment_then_keyword() {
    assert_eq!(
        kinds("-- a comment\nreturn"),
        vec![TokenKind::Keyword(Keyword::Return), TokenKind::Eof]
    );
}

#[test]
fn comment_at_eof() {
    assert_eq!(kinds("x -- trailing"), vec![ident("x"), TokenKind::Eof]);
}

#[test]
fn single_minus_is_not_a_comment() {
    assert_eq!(
        kinds("a - b"),
        vec![ident("a"), TokenKind::Minus, ident("b"), TokenKind::Eof]
    );
}

#[test]
fn long_comment_spans_lines() {
    assert_eq!(
        kinds("--[[ one\ntwo ]] x"),
        vec![ident("x"), TokenKind::Eof]
    );
}

#[test]
fn long_comment_with_level() {
    assert_eq!(
        kinds("--[=[ ]] still ]=] y"),
        vec![ident("y"), TokenKind::Eof]
    );
}

// === Long brackets ===

#[test]
fn long_bracket_is_skipped() {
    assert_eq!(kinds("[[ x ]] y"), vec![ident("y"), TokenKind::Eof]);
}

#[test]
fn leveled_long_bracket_ignores_shorter_close() {
    assert_eq!(kinds("[==[ ]] ]==] z"), vec![ident("z"), TokenKind::Eof]);
}

#[test]
fn bracket_with_equals_but_no_second_bracket() {
    assert_eq!(
        kinds("[=x"),
        vec![TokenKind::LBracket, TokenKind::Eq, ident("x"), TokenKind::Eof]
    );
}

#[test]
fn unterminated_long_bracket() {
    let out = lex("a [[ never closed");
    assert_eq!(
        out.tokens.kinds().cloned().collect::<Vec<_>>(),
        vec![ident("a"), TokenKind::Eof]
    );
    assert_eq!(
        out.errors,
        vec![LexError::unterminated_long_bracket(Span::new(2, 17))]
    );
}

// === Strings ===

#[test]
fn both_quote_kinds() {
    assert_eq!(
        kinds(r#""it's" 'say "hi"'"#),
        vec![string(b"it's"), string(b"say \"hi\""), TokenKind::Eof]
    );
}

#[test]
fn escaped_quote_is_kept_verbatim() {
    assert_eq!(kinds(r"'a\'b'"), vec![string(br"a\'b"), TokenKind::Eof]);
}

#[test]
fn escaped_newline_continues_string() {
    assert_eq!(kinds("'a\\\nb'"), vec![string(b"a\\\nb"), TokenKind::Eof]);
}

#[test]
fn unterminated_string_resumes_at_newline() {
    let out = lex("'abc\nx");
    assert_eq!(
        out.tokens.kinds().cloned().collect::<Vec<_>>(),
        vec![ident("x"), TokenKind::Eof]
    );
    assert_eq!(
        out.errors,
        vec![LexError::unterminated_string(Span::new(0, 4))]
    );
}

#[test]
fn unterminated_string_at_eof() {
    assert_eq!(error_kinds(b"'abc"), vec![LexErrorKind::UnterminatedString]);
    assert_eq!(kinds("'abc"), vec![TokenKind::Eof]);
}

#[test]
fn trailing_backslash_is_unterminated() {
    assert_eq!(error_kinds(b"'abc\\"), vec![LexErrorKind::UnterminatedString]);
}

// === Numbers ===

#[test]
fn number_forms() {
    assert_eq!(
        kinds("0 42 2.5"),
        vec![
            TokenKind::Number(0.0),
            TokenKind::Number(42.0),
            TokenKind::Number(2.5),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn trailing_dot_is_separate() {
    assert_eq!(
        kinds("3."),
        vec![TokenKind::Number(3.0), TokenKind::Dot, TokenKind::Eof]
    );
}

#[test]
fn range_between_numbers() {
    assert_eq!(
        kinds("3..4"),
        vec![
            TokenKind::Number(3.0),
            TokenKind::DotDot,
            TokenKind::Number(4.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn number_then_identifier() {
    assert_eq!(
        kinds("3a"),
        vec![TokenKind::Number(3.0), ident("a"), TokenKind::Eof]
    );
}

// === Identifiers & keywords ===

#[test]
fn keyword_prefix_is_identifier() {
    assert_eq!(kinds("forever"), vec![ident("forever"), TokenKind::Eof]);
}

#[test]
fn every_keyword_lexes_as_keyword() {
    for kw in Keyword::ALL {
        assert_eq!(
            kinds(kw.as_str()),
            vec![TokenKind::Keyword(kw), TokenKind::Eof]
        );
    }
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(
        kinds("Nil nil"),
        vec![
            ident("Nil"),
            TokenKind::Keyword(Keyword::Nil),
            TokenKind::Eof
        ]
    );
}

#[test]
fn underscore_identifiers() {
    assert_eq!(
        kinds("_ _x x_1"),
        vec![ident("_"), ident("_x"), ident("x_1"), TokenKind::Eof]
    );
}

// === Diagnostics ===

#[test]
fn lone_tilde_is_unexpected_token() {
    let out = lex("~");
    assert_eq!(
        out.tokens.kinds().cloned().collect::<Vec<_>>(),
        vec![TokenKind::Eof]
    );
    assert_eq!(
        out.errors,
        vec![LexError::unexpected_token(Span::new(0, 1), b'~')]
    );
}

#[test]
fn unknown_character() {
    assert_eq!(
        error_kinds(b"@"),
        vec![LexErrorKind::UnexpectedCharacter { byte: b'@' }]
    );
}

#[test]
fn one_diagnostic_per_unknown_byte() {
    assert_eq!(
        error_kinds("a$!b".as_bytes()),
        vec![
            LexErrorKind::UnexpectedCharacter { byte: b'$' },
            LexErrorKind::UnexpectedCharacter { byte: b'!' },
        ]
    );
    assert_eq!(kinds("a$!b"), vec![ident("a"), ident("b"), TokenKind::Eof]);
}

#[test]
fn interior_nul_is_not_eof() {
    let out = lex(b"a\0b");
    assert_eq!(
        out.tokens.kinds().cloned().collect::<Vec<_>>(),
        vec![ident("a"), ident("b"), TokenKind::Eof]
    );
    assert_eq!(
        out.errors,
        vec![LexError::unexpected_character(Span::new(1, 2), 0)]
    );
}

#[test]
fn non_ascii_bytes_are_reported_individually() {
    // "é" is two bytes in UTF-8.
    assert_eq!(
        error_kinds("é".as_bytes()),
        vec![
            LexErrorKind::UnexpectedCharacter { byte: 0xC3 },
            LexErrorKind::UnexpectedCharacter { byte: 0xA9 },
        ]
    );
}

#[test]
fn diagnostics_in_discovery_order() {
    let out = lex("@ ~ 'x");
    let starts: Vec<u32> = out.errors.iter().map(|e| e.span.start).collect();
    assert_eq!(starts, vec![0, 2, 4]);
}

// === Output ===

#[test]
fn into_parts_splits_output() {
    let (tokens, errors) = lex("x ~").into_parts();
    assert_eq!(tokens.len(), 2);
    assert_eq!(errors.len(), 1);
}

#[test]
fn relexing_is_identical() {
    let source = "local s = 'a' .. [[b]] -- c\n return s ~= nil";
    assert_eq!(lex(source), lex(source));
}

// === Properties ===

mod proptest_lexer {
    use super::super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn exactly_one_eof_at_end(source in proptest::collection::vec(any::<u8>(), 0..256)) {
            let out = lex(&source);
            let eofs = out.tokens.kinds().filter(|k| k.is_eof()).count();
            prop_assert_eq!(eofs, 1);
            prop_assert!(out.tokens.last().is_some_and(|t| t.kind.is_eof()));
        }

        #[test]
        fn spans_stay_in_bounds(source in "[ -~\n\t]{0,128}") {
            let out = lex(&source);
            let len = source.len() as u32;
            let mut prev_end = 0;
            for tok in &out.tokens {
                prop_assert!(tok.span.start >= prev_end);
                prop_assert!(tok.span.end <= len);
                prev_end = tok.span.end;
            }
            for err in &out.errors {
                prop_assert!(err.span.end <= len);
            }
        }

        #[test]
        fn lexing_is_deterministic(source in proptest::collection::vec(any::<u8>(), 0..256)) {
            prop_assert_eq!(lex(&source), lex(&source));
        }
    }
}
