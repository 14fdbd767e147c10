//! Code generation switches.

use serde::{Deserialize, Serialize};

/// Options controlling WAT emission.
///
/// The defaults produce the plain lowering: expression statements leave
/// their values on the stack, only top-level declarations become `(local)`
/// entries, and mixed `Int`/`Double` arithmetic is emitted without
/// conversions. Each switch trades that for output a strict validator
/// accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenOptions {
    /// Emit `drop` after expression statements that leave a value, except
    /// assignments and the final statement of a function body.
    pub drop_expression_values: bool,
    /// Declare locals for variables declared inside `if` branches too.
    pub hoist_nested_locals: bool,
    /// Convert `Int` operands of `Double` arithmetic with `f64.convert_i32_s`.
    pub convert_mixed_operands: bool,
}

impl CodegenOptions {
    /// All switches on.
    pub fn strict() -> Self {
        Self {
            drop_expression_values: true,
            hoist_nested_locals: true,
            convert_mixed_operands: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_false() {
        let opts: CodegenOptions = serde_json::from_str(r#"{"hoist_nested_locals":true}"#).unwrap();
        assert!(opts.hoist_nested_locals);
        assert!(!opts.drop_expression_values);
        assert!(!opts.convert_mixed_operands);
    }

    #[test]
    fn test_empty_object_is_default() {
        let opts: CodegenOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, CodegenOptions::default());
    }
}
