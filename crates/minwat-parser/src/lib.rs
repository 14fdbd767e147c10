//! minwat parser: converts a token stream into a typed AST.
//!
//! Type checking is interleaved with parsing, so every expression node
//! comes out with its resolved data type.

mod env;
mod parse_decl;
mod parse_expr;
mod parse_stmt;
mod parse_type;
mod parser;

pub use env::{FunctionSignature, FunctionTable, Scope};
pub use parser::Parser;
