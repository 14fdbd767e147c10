//! Compilation options.

use minwat_codegen::CodegenOptions;
use serde::{Deserialize, Serialize};

use crate::error::CompilerError;

/// Options for a whole compilation.
///
/// Missing fields take their defaults, so `{}` selects the plain pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Code generation switches.
    pub codegen: CodegenOptions,
}

impl CompileOptions {
    /// Decode options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CompilerError> {
        Ok(serde_json::from_str(json)?)
    }
}
