//! Shared types for the minwat compiler.
//!
//! This crate defines the AST node types, source spans and the error type
//! used across all compiler stages.

mod error;
mod span;
pub mod ast;

pub use error::{ErrorCategory, ErrorCode, MinwatError};
pub use span::{SourceFile, Span};

/// Result type used throughout the minwat compiler.
pub type Result<T> = std::result::Result<T, MinwatError>;
