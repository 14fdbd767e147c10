//! minwat compiler as a WASM module for browser environments.
//!
//! This crate exposes the minwat compilation pipeline via `wasm-bindgen`,
//! suitable for running in a browser Web Worker.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { compile, type_check } from 'minwat-wasm';
//!
//! await init();
//!
//! const result = compile("function add(a: Int, b: Int): Int { a + b; }", "add.mw");
//! console.log(JSON.parse(result));
//! // { success: true, wat: "(module\n...", ast: { type: "Program", ... }, ... }
//! ```

use wasm_bindgen::prelude::*;

/// Compile a minwat source file to WAT.
///
/// Returns a JSON string containing a `CompileResult`:
/// ```json
/// {
///   "success": true,
///   "wat": "(module\n...)",
///   "ast": { "type": "Program", "body": [ ... ] },
///   "error": null,
///   "source_hash": "<sha-256 hex>",
///   "wat_hash": "<sha-256 hex>"
/// }
/// ```
///
/// On failure, `success` is `false`, `wat` and `ast` are `null`, and `error`
/// holds the structured error.
#[wasm_bindgen]
pub fn compile(source: &str, filename: &str) -> String {
    let result = minwat_compiler::compile_to_result(source, filename);
    serde_json::to_string(&result).unwrap_or_else(|e| failure(&format!("serialization error: {e}")))
}

/// Compile with code generation options given as JSON, for example
/// `{"codegen": {"drop_expression_values": true}}`.
///
/// Malformed options produce `{"success": false, "error": {"message": ...}}`.
#[wasm_bindgen]
pub fn compile_with_options(source: &str, filename: &str, options_json: &str) -> String {
    match minwat_compiler::compile_to_result_with_json_options(source, filename, options_json) {
        Ok(result) => serde_json::to_string(&result)
            .unwrap_or_else(|e| failure(&format!("serialization error: {e}"))),
        Err(e) => failure(&e.to_string()),
    }
}

/// Type-check a minwat source file without generating WAT.
///
/// Returns the error as JSON, or `null` when the source is well typed.
#[wasm_bindgen]
pub fn type_check(source: &str, filename: &str) -> String {
    let error = minwat_compiler::type_check(source, filename);
    serde_json::to_string(&error).unwrap_or_else(|e| failure(&format!("serialization error: {e}")))
}

/// Return the compiler version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn failure(message: &str) -> String {
    serde_json::json!({
        "success": false,
        "wat": null,
        "ast": null,
        "error": { "message": message },
    })
    .to_string()
}
