//! Core parser infrastructure: token cursor, error construction, public API.

use minwat_lexer::token::{Token, TokenKind};
use minwat_types::ast::{Ident, Program};
use minwat_types::{ErrorCode, MinwatError, Result, SourceFile, Span};

use crate::env::{FunctionTable, Scope};

/// Maximum nesting of expressions (parentheses, call arguments, chained
/// assignments).
pub(crate) const MAX_EXPR_DEPTH: u32 = 64;

/// Maximum nesting of `if` statements, counting `else if` links.
pub(crate) const MAX_IF_DEPTH: u32 = 64;

/// The minwat parser.
///
/// Consumes a token stream produced by the lexer and builds a typed AST,
/// checking types as it goes. The first error aborts the parse.
pub struct Parser<'src> {
    /// The token stream.
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
    /// Source file for error context.
    source_file: &'src SourceFile,
    /// Variables of the function currently being parsed.
    pub(crate) scope: Scope,
    /// Functions whose declarations have been completed.
    pub(crate) functions: FunctionTable,
    /// Current expression nesting depth (max [`MAX_EXPR_DEPTH`]).
    pub(crate) expr_depth: u32,
    /// Current `if` nesting depth (max [`MAX_IF_DEPTH`]).
    pub(crate) if_depth: u32,
}

impl<'src> Parser<'src> {
    /// Create a new parser from a token stream and source file.
    pub fn new(tokens: Vec<Token>, source_file: &'src SourceFile) -> Self {
        Self {
            tokens,
            pos: 0,
            source_file,
            scope: Scope::new(),
            functions: FunctionTable::new(),
            expr_depth: 0,
            if_depth: 0,
        }
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// Returns the current token without advancing.
    ///
    /// Past the end of the stream this keeps returning an `Eof` token.
    pub(crate) fn peek(&self) -> Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .cloned()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, Span::point(1, 1)))
    }

    /// Returns the kind of the current token.
    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Advance the cursor by one and return the consumed token.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Returns the span of the current token.
    pub(crate) fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(crate) fn at_end(&self) -> bool {
        self.check(&TokenKind::Eof)
    }

    /// Check if the current token matches the given kind exactly.
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.tokens
            .get(self.pos)
            .map_or(*kind == TokenKind::Eof, |t| t.kind == *kind)
    }

    /// If the current token matches, advance and return `true`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Look ahead by `n` tokens from the current position.
    pub(crate) fn look_ahead(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind.clone())
            .unwrap_or(TokenKind::Eof)
    }

    // ── Expect Helpers ────────────────────────────────────────────────────────

    /// Expect a specific token kind and consume it.
    pub(crate) fn expect(&mut self, expected: &TokenKind) -> Result<Token> {
        if self.check(expected) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(
                ErrorCode::UNEXPECTED_TOKEN,
                format!("expected '{}', got '{}'", expected, self.peek_kind()),
            ))
        }
    }

    /// Expect an identifier token. Returns the name and span.
    pub(crate) fn expect_identifier(&mut self) -> Result<Ident> {
        match self.peek_kind() {
            TokenKind::Identifier(name) => {
                let span = self.advance().span;
                Ok(Ident::new(name, span))
            }
            other if other.is_keyword() => Err(self.error_at_current(
                ErrorCode::UNEXPECTED_TOKEN,
                format!("expected identifier, got reserved word '{other}'"),
            )),
            other => Err(self.error_at_current(
                ErrorCode::UNEXPECTED_TOKEN,
                format!("expected identifier, got '{other}'"),
            )),
        }
    }

    // ── Error Construction ────────────────────────────────────────────────────

    /// Build an error at the current token position.
    pub(crate) fn error_at_current(
        &self,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> MinwatError {
        self.error_at(code, message, self.current_span())
    }

    /// Build an error at a specific span.
    pub(crate) fn error_at(
        &self,
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
    ) -> MinwatError {
        let source_line = self.source_file.line(span.start_line).unwrap_or("");
        MinwatError::new(&self.source_file.name, code, message, span, source_line)
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Parse the token stream into a typed [`Program`].
    pub fn parse(mut self) -> Result<Program> {
        self.parse_program()
    }
}
