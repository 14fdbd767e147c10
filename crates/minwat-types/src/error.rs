use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Lexical,
    Syntax,
    Type,
    Reference,
    Redeclaration,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "lexical"),
            Self::Syntax => write!(f, "syntax"),
            Self::Type => write!(f, "type"),
            Self::Reference => write!(f, "reference"),
            Self::Redeclaration => write!(f, "redeclaration"),
        }
    }
}

/// Numeric error code (E001–E499).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Lexical errors (E001–E099) ──
    pub const UNEXPECTED_CHARACTER: Self = Self(1);

    // ── Syntax errors (E100–E199) ──
    pub const UNEXPECTED_TOKEN: Self = Self(100);
    pub const EXPECTED_EXPRESSION: Self = Self(101);
    pub const INVALID_ASSIGNMENT_TARGET: Self = Self(102);
    pub const NESTING_TOO_DEEP: Self = Self(103);

    // ── Type errors (E200–E299) ──
    pub const TYPE_MISMATCH: Self = Self(201);
    pub const WRONG_ARG_COUNT: Self = Self(202);
    pub const ARGUMENT_TYPE_MISMATCH: Self = Self(203);
    pub const NON_INT_CONDITION: Self = Self(204);
    pub const INTEGER_OUT_OF_RANGE: Self = Self(205);

    // ── Reference errors (E300–E399) ──
    pub const UNDEFINED_VARIABLE: Self = Self(300);

    // ── Redeclaration errors (E400–E499) ──
    pub const VARIABLE_ALREADY_DECLARED: Self = Self(400);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            0..=99 => ErrorCategory::Lexical,
            100..=199 => ErrorCategory::Syntax,
            200..=299 => ErrorCategory::Type,
            300..=399 => ErrorCategory::Reference,
            _ => ErrorCategory::Redeclaration,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:03}", self.0)
    }
}

/// A structured minwat compiler error.
///
/// Every stage stops at the first error it detects, so a compilation yields
/// at most one of these.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{span}: {code} [{category}] {message}")]
pub struct MinwatError {
    /// Source file name.
    pub file: String,
    /// Error code (e.g., E201).
    pub code: ErrorCode,
    /// Error category (derived from code).
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
    /// Source location.
    #[serde(flatten)]
    pub span: Span,
    /// The exact source line for context.
    pub source_line: String,
}

impl MinwatError {
    /// Create a new error.
    pub fn new(
        file: impl Into<String>,
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            code,
            category: code.category(),
            message: message.into(),
            span,
            source_line: source_line.into(),
        }
    }
}
