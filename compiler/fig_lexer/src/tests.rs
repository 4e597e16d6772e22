#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const LIMITS: LexerLimits = LexerLimits {
    max_identifier_length: 8,
    max_string_length: 10,
    max_int_digits: 6,
    max_float_decimals: 3,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source, LIMITS)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn error(source: &str) -> LexError {
    lex(source, LIMITS).unwrap_err()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.to_string())
}

fn pos(line: u32, column: u32) -> SourcePosition {
    SourcePosition::new(line, column)
}

#[test]
fn variable_declaration() {
    assert_eq!(
        kinds("var a = 1;"),
        vec![
            TokenKind::Var,
            ident("a"),
            TokenKind::Assign,
            TokenKind::Int(1),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_and_word_operators() {
    assert_eq!(
        kinds("def if elif else for in while break return and or not True False"),
        vec![
            TokenKind::Def,
            TokenKind::If,
            TokenKind::Elif,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::In,
            TokenKind::While,
            TokenKind::Break,
            TokenKind::Return,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::Bool(true),
            TokenKind::Bool(false),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn identifiers_may_contain_underscores_and_digits() {
    assert_eq!(kinds("a_list x2"), vec![ident("a_list"), ident("x2"), TokenKind::Eof]);
}

#[test]
fn one_and_two_character_operators() {
    assert_eq!(
        kinds("/ // * ** = == ! != < <= > >= && || % + -"),
        vec![
            TokenKind::Slash,
            TokenKind::SlashSlash,
            TokenKind::Star,
            TokenKind::StarStar,
            TokenKind::Assign,
            TokenKind::EqEq,
            TokenKind::Not,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::LtEq,
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Percent,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn adjacent_operators_split_greedily() {
    assert_eq!(
        kinds("a<=-b"),
        vec![ident("a"), TokenKind::LtEq, TokenKind::Minus, ident("b"), TokenKind::Eof]
    );
}

#[test]
fn punctuation() {
    assert_eq!(
        kinds("; , . ( ) { } [ ]"),
        vec![
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn positions_are_line_and_column() {
    let tokens = lex("var a\n  = 1;", LIMITS).unwrap();
    let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(
        positions,
        vec![pos(1, 1), pos(1, 5), pos(2, 3), pos(2, 5), pos(2, 6), pos(2, 7)]
    );
}

#[test]
fn comments_are_skipped_with_surrounding_whitespace() {
    assert_eq!(
        kinds("# first\n  # second\nvar # trailing\n a"),
        vec![TokenKind::Var, ident("a"), TokenKind::Eof]
    );
}

#[test]
fn comment_at_end_of_input() {
    assert_eq!(kinds("1; # done"), vec![TokenKind::Int(1), TokenKind::Semicolon, TokenKind::Eof]);
}

#[test]
fn integers_and_floats() {
    assert_eq!(
        kinds("0 42 3.25 999. 007"),
        vec![
            TokenKind::Int(0),
            TokenKind::Int(42),
            TokenKind::float(3.25),
            TokenKind::float(999.0),
            TokenKind::Int(7),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn float_value_is_correctly_rounded() {
    let limits = LexerLimits {
        max_float_decimals: 20,
        ..LIMITS
    };
    let tokens = lex("0.1", limits).unwrap();
    assert_eq!(tokens[0].kind.as_float(), Some(0.1));
}

#[test]
fn strings_with_either_quote() {
    assert_eq!(
        kinds(r#""abc" 'd"e'"#),
        vec![
            TokenKind::Str("abc".into()),
            TokenKind::Str("d\"e".into()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn string_escapes() {
    assert_eq!(
        kinds(r#""\n\t\\\"\'""#),
        vec![TokenKind::Str("\n\t\\\"'".into()), TokenKind::Eof]
    );
}

#[test]
fn invalid_escape_points_at_escaped_character() {
    let err = error(r#"  "ab\q""#);
    assert_eq!(err.kind, LexErrorKind::InvalidEscapeSequence { escape_char: 'q' });
    assert_eq!(err.position, pos(1, 7));
}

#[test]
fn unclosed_string_points_at_start() {
    let err = error("x = 'abc");
    assert_eq!(err.kind, LexErrorKind::UnclosedString);
    assert_eq!(err.position, pos(1, 5));
}

#[test]
fn newline_inside_string_is_unclosed() {
    assert_eq!(error("'ab\ncd'").kind, LexErrorKind::UnclosedString);
}

#[test]
fn backslash_at_end_of_input_is_unclosed() {
    assert_eq!(error("'ab\\").kind, LexErrorKind::UnclosedString);
}

#[test]
fn identifier_length_limit() {
    assert_eq!(kinds("abcdefgh"), vec![ident("abcdefgh"), TokenKind::Eof]);
    let err = error("  abcdefghi");
    assert_eq!(err.kind, LexErrorKind::IdentifierTooLong { max: 8 });
    assert_eq!(err.position, pos(1, 3));
}

#[test]
fn string_length_limit_counts_cooked_characters() {
    assert_eq!(
        kinds(r#""\n\n\n\n\n\n\n\n\n\n""#),
        vec![TokenKind::Str("\n".repeat(10)), TokenKind::Eof]
    );
    assert_eq!(
        error("'abcdefghijk'").kind,
        LexErrorKind::StringTooLong { max: 10 }
    );
}

#[test]
fn integer_digit_limit() {
    assert_eq!(kinds("999999"), vec![TokenKind::Int(999_999), TokenKind::Eof]);
    assert_eq!(error("1234567").kind, LexErrorKind::IntegerTooLong { max: 6 });
}

#[test]
fn integer_outside_i64_is_too_long() {
    let limits = LexerLimits {
        max_int_digits: 40,
        ..LIMITS
    };
    let err = lex("99999999999999999999", limits).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::IntegerTooLong { max: 40 });
}

#[test]
fn float_decimal_limit() {
    assert_eq!(kinds("1.125"), vec![TokenKind::float(1.125), TokenKind::Eof]);
    assert_eq!(
        error("1.1255").kind,
        LexErrorKind::TooManyFloatDecimals { max: 3 }
    );
}

#[test]
fn single_ampersand_is_invalid() {
    let err = error("a & b");
    assert_eq!(err.kind, LexErrorKind::InvalidCharacter);
    assert_eq!(err.position, pos(1, 3));
    assert_eq!(error("a |").kind, LexErrorKind::InvalidCharacter);
}

#[test]
fn forbidden_characters() {
    assert_eq!(error("$").kind, LexErrorKind::InvalidCharacter);
    assert_eq!(error("_a").kind, LexErrorKind::InvalidCharacter);
}

#[test]
fn eof_is_repeated() {
    let mut lexer = Lexer::new("", LIMITS);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

#[test]
fn errors_surface_lazily() {
    let mut lexer = Lexer::new("var a = $", LIMITS);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Var);
    assert_eq!(lexer.next_token().unwrap().kind, ident("a"));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Assign);
    assert!(lexer.next_token().is_err());
}

proptest! {
    #[test]
    fn lexing_is_deterministic(source in "[a-z0-9 ;=+*/(){}\\[\\].,'\"\n#<>!-]{0,80}") {
        let first = lex(&source, LIMITS);
        let second = lex(&source, LIMITS);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn token_positions_never_decrease(source in "[a-z0-9 ;=+*(){}\n]{0,80}") {
        if let Ok(tokens) = lex(&source, LIMITS) {
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].position <= pair[1].position);
            }
        }
    }
}
