//! minwat compiler: orchestrates the full compilation pipeline.
//!
//! ```text
//! source → Lexer → Parser (typed AST) → WAT codegen → module text
//! ```
//!
//! Each call owns all of its state, so independent sources can be compiled
//! from several threads at once.

pub mod error;
pub mod options;
pub mod result;

pub use error::CompilerError;
pub use minwat_codegen::CodegenOptions;
pub use options::CompileOptions;
pub use result::CompileResult;

use minwat_lexer::Lexer;
use minwat_parser::Parser;
use minwat_types::ast::Program;
use minwat_types::{MinwatError, Result, SourceFile};

use crate::result::sha256_hex;

/// A successful compilation: the typed AST and the generated module.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub program: Program,
    pub wat: String,
}

// ══════════════════════════════════════════════════════════════════════════════
// Pipeline
// ══════════════════════════════════════════════════════════════════════════════

/// Lex and parse `source` into a typed AST.
pub fn parse(source: &str, filename: &str) -> Result<Program> {
    let source_file = SourceFile::new(filename, source);
    let tokens = Lexer::new(&source_file).lex()?;
    Parser::new(tokens, &source_file).parse()
}

/// Compile `source` to WAT with default options.
pub fn compile(source: &str, filename: &str) -> Result<Compilation> {
    compile_with_options(source, filename, &CompileOptions::default())
}

/// Compile `source` to WAT.
pub fn compile_with_options(
    source: &str,
    filename: &str,
    options: &CompileOptions,
) -> Result<Compilation> {
    let program = parse(source, filename).inspect_err(|e| {
        log::debug!("compilation of {filename} failed: {e}");
    })?;
    let wat = minwat_codegen::generate_with_options(&program, &options.codegen);
    log::debug!(
        "compiled {filename}: {} function(s), {} bytes of WAT",
        program.functions.len(),
        wat.len()
    );
    Ok(Compilation { program, wat })
}

/// Check `source` without generating code. Returns the first error, if any.
pub fn type_check(source: &str, filename: &str) -> Option<MinwatError> {
    parse(source, filename).err()
}

// ══════════════════════════════════════════════════════════════════════════════
// JSON Surface
// ══════════════════════════════════════════════════════════════════════════════

/// Compile with default options into a [`CompileResult`].
pub fn compile_to_result(source: &str, filename: &str) -> CompileResult {
    compile_to_result_with_options(source, filename, &CompileOptions::default())
}

/// Compile into a [`CompileResult`].
pub fn compile_to_result_with_options(
    source: &str,
    filename: &str,
    options: &CompileOptions,
) -> CompileResult {
    let source_hash = sha256_hex(source);
    match compile_with_options(source, filename, options) {
        Ok(Compilation { program, wat }) => {
            let ast = serde_json::to_value(&program)
                .inspect_err(|e| log::warn!("could not serialize AST of {filename}: {e}"))
                .ok();
            CompileResult {
                success: true,
                wat_hash: Some(sha256_hex(&wat)),
                wat: Some(wat),
                ast,
                error: None,
                source_hash,
            }
        }
        Err(e) => CompileResult {
            success: false,
            wat: None,
            ast: None,
            error: Some(e),
            source_hash,
            wat_hash: None,
        },
    }
}

/// Compile with options given as a JSON document.
pub fn compile_with_json_options(
    source: &str,
    filename: &str,
    options_json: &str,
) -> std::result::Result<Compilation, CompilerError> {
    let options = CompileOptions::from_json(options_json)?;
    Ok(compile_with_options(source, filename, &options)?)
}

/// Like [`compile_to_result_with_options`], with options given as JSON.
pub fn compile_to_result_with_json_options(
    source: &str,
    filename: &str,
    options_json: &str,
) -> std::result::Result<CompileResult, CompilerError> {
    let options = CompileOptions::from_json(options_json)?;
    Ok(compile_to_result_with_options(source, filename, &options))
}
