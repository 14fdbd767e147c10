//! minwat WAT code generator: lowers a typed AST to WebAssembly text.
//!
//! # Output shape
//!
//! ```text
//! (module
//! (func $name (param $p t)* (result t) (local $l t)* <instructions>)
//! ...
//! (export "name" (func $name))
//! ...
//! )
//! ```
//!
//! Instructions are one per line. `if` statements are emitted in folded
//! form after their condition. Generation never fails: the parser has
//! already resolved every type, and every node kind has a lowering.

pub mod compiler;
pub mod expr;
pub mod options;
pub mod stmt;
pub mod types;

pub use compiler::{generate, generate_with_options};
pub use options::CodegenOptions;
