//! Lexer tests: keywords, type names, operators, numeric lexemes,
//! comments, positions, and lexical errors.

use minwat_lexer::{Lexer, Token, TokenKind, ALL_KEYWORDS};
use minwat_types::{ErrorCategory, ErrorCode, MinwatError, SourceFile, Span};

#[ctor::ctor]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

fn tokens(source: &str) -> Vec<Token> {
    let sf = SourceFile::new("test.mw", source);
    Lexer::new(&sf).lex().unwrap_or_else(|e| panic!("lex failed: {e}"))
}

/// Token kinds excluding the final Eof.
fn kinds(source: &str) -> Vec<TokenKind> {
    tokens(source)
        .into_iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| t.kind)
        .collect()
}

fn lex_err(source: &str) -> MinwatError {
    let sf = SourceFile::new("test.mw", source);
    Lexer::new(&sf).lex().expect_err("expected a lexical error")
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

fn num(lexeme: &str) -> TokenKind {
    TokenKind::Number(lexeme.to_string())
}

// ─────────────────────────────────────────────────────────────────────
// Keywords and identifiers
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_keywords_get_distinct_kinds() {
    let pairs = [
        ("function", TokenKind::Function),
        ("let", TokenKind::Let),
        ("const", TokenKind::Const),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
        ("Int", TokenKind::KwInt),
        ("Double", TokenKind::KwDouble),
    ];
    assert_eq!(pairs.len(), ALL_KEYWORDS.len());
    for (src, expected) in pairs {
        assert_eq!(kinds(src), vec![expected], "keyword '{src}'");
    }
}

#[test]
fn test_keyword_prefixes_are_identifiers() {
    assert_eq!(
        kinds("functions letter Integer _if"),
        vec![ident("functions"), ident("letter"), ident("Integer"), ident("_if")]
    );
}

#[test]
fn test_identifiers_with_digits_and_underscores() {
    assert_eq!(kinds("x1 my_var _"), vec![ident("x1"), ident("my_var"), ident("_")]);
}

// ─────────────────────────────────────────────────────────────────────
// Numbers
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_numbers_keep_their_lexeme() {
    assert_eq!(
        kinds("0 42 3.14 5.0 007"),
        vec![num("0"), num("42"), num("3.14"), num("5.0"), num("007")]
    );
}

#[test]
fn test_number_followed_by_identifier() {
    assert_eq!(kinds("2x"), vec![num("2"), ident("x")]);
}

#[test]
fn test_negative_number_is_minus_then_number() {
    assert_eq!(kinds("-1.5"), vec![TokenKind::Minus, num("1.5")]);
}

// ─────────────────────────────────────────────────────────────────────
// Operators and punctuation
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_all_operators() {
    assert_eq!(
        kinds("+ - * / = == != < <= > >="),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::EqEq,
            TokenKind::BangEq,
            TokenKind::Less,
            TokenKind::LessEq,
            TokenKind::Greater,
            TokenKind::GreaterEq,
        ]
    );
}

#[test]
fn test_all_punctuation() {
    assert_eq!(
        kinds("( ) { } , : ;"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_operators_without_spaces() {
    assert_eq!(
        kinds("a==b;c=d"),
        vec![
            ident("a"),
            TokenKind::EqEq,
            ident("b"),
            TokenKind::Semicolon,
            ident("c"),
            TokenKind::Eq,
            ident("d"),
        ]
    );
}

// ─────────────────────────────────────────────────────────────────────
// Comments and whitespace
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_line_comments_are_skipped() {
    let src = "// header\nlet x = 1; // trailing\n// last line";
    assert_eq!(
        kinds(src),
        vec![
            TokenKind::Let,
            ident("x"),
            TokenKind::Eq,
            num("1"),
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_slash_alone_is_division() {
    assert_eq!(kinds("a / b"), vec![ident("a"), TokenKind::Slash, ident("b")]);
}

#[test]
fn test_stream_always_ends_with_eof() {
    for src in ["", "   \n\t", "// only a comment", "x"] {
        let toks = tokens(src);
        assert_eq!(toks.last().map(|t| &t.kind), Some(&TokenKind::Eof));
    }
}

// ─────────────────────────────────────────────────────────────────────
// Positions
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_positions_are_one_based() {
    let toks = tokens("function add(a: Double)");
    assert_eq!(toks[0].span, Span::new(1, 1, 1, 8));
    assert_eq!(toks[1].span, Span::new(1, 10, 1, 12));
    assert_eq!(toks[2].span.start_col, 13);
}

#[test]
fn test_positions_track_lines() {
    let toks = tokens("let a = 1;\n  let b = 2.5;");
    let b = toks
        .iter()
        .find(|t| t.kind == ident("b"))
        .expect("b token");
    assert_eq!(b.span.start_line, 2);
    assert_eq!(b.span.start_col, 7);
    let lit = toks.iter().find(|t| t.kind == num("2.5")).expect("literal");
    assert_eq!(lit.span, Span::new(2, 11, 2, 13));
}

// ─────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_unrecognised_character_is_lexical_error() {
    let err = lex_err("let x = 1 # 2;");
    assert_eq!(err.code, ErrorCode::UNEXPECTED_CHARACTER);
    assert_eq!(err.category, ErrorCategory::Lexical);
    assert_eq!(err.span.start_line, 1);
    assert_eq!(err.span.start_col, 11);
    assert!(err.message.contains('#'), "message: {}", err.message);
    assert_eq!(err.source_line, "let x = 1 # 2;");
}

#[test]
fn test_lone_bang_is_lexical_error() {
    let err = lex_err("!x");
    assert_eq!(err.code, ErrorCode::UNEXPECTED_CHARACTER);
    assert_eq!(err.span.start_col, 1);
}

#[test]
fn test_non_ascii_character_reported_whole() {
    let err = lex_err("\n  let é = 1;");
    assert_eq!(err.span.start_line, 2);
    assert_eq!(err.span.start_col, 7);
    assert!(err.message.contains('é'), "message: {}", err.message);
}

#[test]
fn test_first_error_aborts() {
    let err = lex_err("@ $");
    assert!(err.message.contains('@'));
}

// ─────────────────────────────────────────────────────────────────────
// Determinism
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_lexer_determinism_100_iterations() {
    let src = "function f(a: Int): Int { if (a > 0) { a; } else { -a; } }";
    let first = tokens(src);
    for i in 0..100 {
        assert_eq!(first, tokens(src), "determinism failure at iteration {i}");
    }
}
