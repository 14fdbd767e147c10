//! Core minwat lexer: converts source text to a token stream.
//!
//! - Whitespace (including newlines) and `//` line comments are skipped
//! - Numeric literals keep their lexeme; the parser derives the type from it
//! - Keywords and type names get their own token kinds
//! - The first unrecognised character aborts lexing

use minwat_types::{ErrorCode, MinwatError, Result, SourceFile, Span};

use crate::token::{Token, TokenKind};

/// The minwat lexer.
///
/// Converts source text into a vector of [`Token`]s ending with
/// [`TokenKind::Eof`].
pub struct Lexer<'src> {
    /// The full source text as bytes.
    source: &'src [u8],
    /// Source file for error reporting.
    source_file: &'src SourceFile,
    /// Current byte offset into `source`.
    pos: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    col: u32,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source file.
    pub fn new(source_file: &'src SourceFile) -> Self {
        Self {
            source: source_file.source.as_bytes(),
            source_file,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Lex the entire source file into a token stream.
    pub fn lex(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        log::trace!(
            "lexed {} tokens from {}",
            tokens.len(),
            self.source_file.name
        );
        Ok(tokens)
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.source.get(self.pos).copied()?;
        self.pos += 1;
        if ch == b'\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn span_from(&self, start_line: u32, start_col: u32) -> Span {
        Span::new(
            start_line,
            start_col,
            self.line,
            self.col.saturating_sub(1).max(1),
        )
    }

    fn lexeme_from(&self, start: usize) -> &'src str {
        // Only ASCII bytes are consumed by the scanners that call this.
        std::str::from_utf8(&self.source[start..self.pos]).unwrap_or_default()
    }

    fn error(&self, code: ErrorCode, message: impl Into<String>, span: Span) -> MinwatError {
        let source_line = self.source_file.line(span.start_line).unwrap_or("");
        MinwatError::new(&self.source_file.name, code, message, span, source_line)
    }

    // ─────────────────────────────────────────────────────────────
    // Whitespace & comments
    // ─────────────────────────────────────────────────────────────

    /// Skip whitespace and `//` comments until the next significant byte.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\r' | b'\n') => {
                    self.advance();
                }
                Some(b'/') if self.peek_at(1) == Some(b'/') => {
                    while let Some(ch) = self.peek() {
                        if ch == b'\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Token scanning
    // ─────────────────────────────────────────────────────────────

    fn scan_token(&mut self) -> Result<Token> {
        self.skip_trivia();

        let start = self.pos;
        let start_line = self.line;
        let start_col = self.col;
        let Some(ch) = self.advance() else {
            return Ok(Token::new(TokenKind::Eof, Span::point(self.line, self.col)));
        };

        let kind = match ch {
            b'0'..=b'9' => self.scan_number(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.scan_identifier(start),

            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b',' => TokenKind::Comma,
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semicolon,

            b'=' => self.with_eq(TokenKind::EqEq, TokenKind::Eq),
            b'<' => self.with_eq(TokenKind::LessEq, TokenKind::Less),
            b'>' => self.with_eq(TokenKind::GreaterEq, TokenKind::Greater),
            b'!' if self.peek() == Some(b'=') => {
                self.advance();
                TokenKind::BangEq
            }

            _ => {
                let unexpected = self.source_file.source[start..]
                    .chars()
                    .next()
                    .unwrap_or(ch as char);
                let span = Span::point(start_line, start_col);
                return Err(self.error(
                    ErrorCode::UNEXPECTED_CHARACTER,
                    format!("unexpected character '{unexpected}'"),
                    span,
                ));
            }
        };

        Ok(Token::new(kind, self.span_from(start_line, start_col)))
    }

    /// Two-character operators ending in `=`.
    fn with_eq(&mut self, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek() == Some(b'=') {
            self.advance();
            double
        } else {
            single
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Number literals
    // ─────────────────────────────────────────────────────────────

    fn scan_number(&mut self, start: usize) -> TokenKind {
        // The first digit was already consumed.
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }

        if self.peek() == Some(b'.') && matches!(self.peek_at(1), Some(b'0'..=b'9')) {
            self.advance(); // consume '.'
            while let Some(b'0'..=b'9') = self.peek() {
                self.advance();
            }
        }

        TokenKind::Number(self.lexeme_from(start).to_string())
    }

    // ─────────────────────────────────────────────────────────────
    // Identifiers & keywords
    // ─────────────────────────────────────────────────────────────

    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == b'_' {
                self.advance();
            } else {
                break;
            }
        }

        let text = self.lexeme_from(start);
        TokenKind::from_keyword(text).unwrap_or_else(|| TokenKind::Identifier(text.to_string()))
    }
}
