//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer and string literals
//! - One- and two-character operators
//! - Lookahead behavior
//! - Error cases

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_every_token_kind() {
    let source = "4172 \"test\" + - * / % () [] ! | . , : > >= < <= = == != -> identifier";
    let tokens = tokenize(source).unwrap();

    let values = [
        "4172", "test", "+", "-", "*", "/", "%", "(", ")", "[", "]", "!", "|", ".", ",", ":",
        ">", ">=", "<", "<=", "=", "==", "!=", "->", "identifier",
    ];
    let kinds = [
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Plus,
        TokenKind::Dash,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::Bang,
        TokenKind::Pipe,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::Greater,
        TokenKind::GreaterEquals,
        TokenKind::Less,
        TokenKind::LessEquals,
        TokenKind::Assignment,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::Arrow,
        TokenKind::Identifier,
    ];

    assert_eq!(tokens.len(), values.len() + 1);
    for (i, (value, kind)) in values.iter().zip(kinds.iter()).enumerate() {
        assert_eq!(tokens[i].kind, *kind, "kind mismatch at token {}", i);
        assert_eq!(tokens[i].value, *value, "text mismatch at token {}", i);
    }
    assert_eq!(tokens[values.len()].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn match use type").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Match);
    assert_eq!(tokens[2].kind, TokenKind::Use);
    assert_eq!(tokens[3].kind, TokenKind::Type);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _underscore CamelCase fnord").unwrap();

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    // a keyword prefix does not make an identifier reserved
    assert_eq!(tokens[4].value, "fnord");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers_are_integers() {
    let tokens = tokenize("42 007 3.14").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "007");
    // no decimal point handling: "3.14" is Number Dot Number
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "3");
    assert_eq!(tokens[3].kind, TokenKind::Dot);
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[4].value, "14");
}

#[test]
fn test_tokenize_string_value_and_span() {
    let tokens = tokenize("\"hello\"").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    // the span covers the quotes, the value excludes them
    assert_eq!(tokens[0].span.start, 0);
    assert_eq!(tokens[0].span.end, 7);
}

#[test]
fn test_spans_skip_leading_whitespace() {
    let tokens = tokenize("   abc  + ").unwrap();

    assert_eq!(tokens[0].span.start, 3);
    assert_eq!(tokens[0].span.end, 6);
    assert_eq!(tokens[1].span.start, 8);
    assert_eq!(tokens[1].span.end, 9);
}

#[test]
fn test_spans_are_monotonic_and_half_open() {
    let tokens = tokenize("a+b <= c").unwrap();

    let mut last_end = 0;
    for token in &tokens {
        assert!(token.span.start >= last_end);
        assert!(token.span.start <= token.span.end);
        last_end = token.span.end;
    }
}

#[test]
fn test_two_character_operators_need_adjacency() {
    let tokens = tokenize("- > : : ! =").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Dash);
    assert_eq!(tokens[1].kind, TokenKind::Greater);
    assert_eq!(tokens[2].kind, TokenKind::Colon);
    assert_eq!(tokens[3].kind, TokenKind::Colon);
    assert_eq!(tokens[4].kind, TokenKind::Bang);
    assert_eq!(tokens[5].kind, TokenKind::Assignment);
}

#[test]
fn test_unrecognised_character_is_single_error_token() {
    let result = tokenize("$");
    assert!(result.is_err());

    let mut lexer = Lexer::new("$ +");
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Error);
    assert_eq!(token.value, "unexpected character: '$'");
    assert_eq!(token.span.start, 0);
    assert_eq!(token.span.end, 1);
    // the scan terminates: the `+` is never produced
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_unterminated_string_is_error() {
    let mut lexer = Lexer::new("\"oops");
    let token = lexer.next_token();

    assert_eq!(token.kind, TokenKind::Error);
    assert_eq!(token.value, "unterminated string literal");
}

#[test]
fn test_peek_does_not_consume() {
    let mut lexer = Lexer::new("a b");

    assert_eq!(lexer.peek_token().value, "a");
    assert_eq!(lexer.peek_token().value, "a");
    assert_eq!(lexer.next_token().value, "a");
    assert_eq!(lexer.next_token().value, "b");
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_for_line_remembers_line_number() {
    let lexer = Lexer::for_line("fn main", 7);
    assert_eq!(lexer.line(), Some(7));

    let lexer = Lexer::new("fn main");
    assert_eq!(lexer.line(), None);
}

#[test]
fn test_empty_source_yields_eof() {
    let tokens = tokenize("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);

    let tokens = tokenize("   \t ").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}
