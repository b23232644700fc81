//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - The `int` keyword and identifiers
//! - Number literals and maximal munch
//! - Operators and punctuation
//! - Token spans
//! - Unrecognised characters

use crate::errors::{
    diagnostics::{DiagnosticCollector, Severity},
    errors::ErrorImpl,
};

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

fn lex(source: &str) -> (Vec<Token>, DiagnosticCollector) {
    let mut diagnostics = DiagnosticCollector::new();
    let tokens = tokenize(source, Some("test.decl".to_string()), &mut diagnostics);
    (tokens, diagnostics)
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_declaration() {
    let (tokens, diagnostics) = lex("int x = 1 + 2 * 3;");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Star,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[1].value, "x");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_tokenize_empty_source() {
    let (tokens, diagnostics) = lex("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].value, "");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_tokenize_whitespace_only() {
    let (tokens, _) = lex(" \t\r\n\x0B\x0C ");

    assert_eq!(kinds(&tokens), vec![TokenKind::EOF]);
    assert_eq!(tokens[0].span.start.0, 7);
}

#[test]
fn test_tokenize_operators() {
    let (tokens, _) = lex("+ - * / = ;");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Assignment,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["+", "-", "*", "/", "=", ";", ""]);
}

#[test]
fn test_tokenize_operators_without_spaces() {
    let (tokens, _) = lex("a+b-2*3/c;");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Dash,
            TokenKind::Number,
            TokenKind::Star,
            TokenKind::Number,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_numbers_maximal_munch() {
    let (tokens, _) = lex("123 0 4567890+42;007");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "123");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "4567890");
    assert_eq!(tokens[3].kind, TokenKind::Plus);
    assert_eq!(tokens[4].value, "42");
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::Number);
    assert_eq!(tokens[6].value, "007");
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_number_then_identifier() {
    // A digit run stops at the first letter; the letters start a new token.
    let (tokens, _) = lex("12ab");

    assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Identifier, TokenKind::EOF]);
    assert_eq!(tokens[0].value, "12");
    assert_eq!(tokens[1].value, "ab");
}

#[test]
fn test_tokenize_keyword_exact_match() {
    let (tokens, _) = lex("int int2 xint integer INT");

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "int");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "int2");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "xint");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "integer");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let (tokens, _) = lex("foo Bar baz123 CamelCase");

    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["foo", "Bar", "baz123", "CamelCase", ""]);
    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_spans() {
    let (tokens, _) = lex("int total = 42;");

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 9);
    assert_eq!(tokens[3].span.start.0, 12);
    assert_eq!(tokens[3].span.end.0, 14);
    assert_eq!(tokens[5].span.start.0, 15);
    assert_eq!(tokens[5].span.end.0, 15);
    assert_eq!(tokens[0].span.start.1.as_str(), "test.decl");
}

#[test]
fn test_tokenize_default_file_name() {
    let mut diagnostics = DiagnosticCollector::new();
    let tokens = tokenize("x", None, &mut diagnostics);

    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_tokenize_unrecognised_characters_are_skipped() {
    let (tokens, diagnostics) = lex("int a = 5 $ 3; @");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );

    let warnings: Vec<_> = diagnostics.warnings().collect();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].severity, Severity::Warning);
    assert_eq!(
        warnings[0].error.get_kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "$".to_string()
        }
    );
    assert_eq!(warnings[0].error.get_position().0, 10);
    assert_eq!(warnings[1].error.get_position().0, 15);
    assert!(!diagnostics.has_errors());
}

#[test]
fn test_tokenize_underscore_is_unrecognised() {
    let (tokens, diagnostics) = lex("my_var");

    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["my", "var", ""]);
    assert_eq!(diagnostics.warnings().count(), 1);
}

#[test]
fn test_tokenize_multibyte_character() {
    let (tokens, diagnostics) = lex("a é b");

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EOF]
    );
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(diagnostics.warnings().count(), 1);
    assert_eq!(diagnostics.diagnostics()[0].error.get_position().0, 2);
}

#[test]
fn test_tokenize_single_eof_and_non_empty_values() {
    let sources = [
        "",
        "int a = 5 int b = 4; int sum = a + b - 2  3 / 4;",
        "%%%",
        "int\n\tx=1;",
        "= = ;;",
    ];

    for source in sources {
        let (tokens, _) = lex(source);
        let (last, rest) = tokens.split_last().expect("at least EOF");

        assert_eq!(last.kind, TokenKind::EOF);
        assert!(rest.iter().all(|t| t.kind != TokenKind::EOF));
        assert!(rest.iter().all(|t| !t.value.is_empty()));
    }
}

#[test]
fn test_token_display() {
    let (tokens, _) = lex("int x");

    assert_eq!(tokens[0].to_string(), "Int ()");
    assert_eq!(tokens[1].to_string(), "Identifier (x)");
    assert_eq!(tokens[2].to_string(), "EOF ()");
}
