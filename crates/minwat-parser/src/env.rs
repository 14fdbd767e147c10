//! Name resolution tables used while parsing.
//!
//! [`Scope`] is the flat variable table of the function being parsed.
//! [`FunctionTable`] holds the signatures of the functions declared so far.
//! Both are owned by one [`crate::Parser`], so nothing is shared between
//! compilations.

use std::collections::HashMap;

use minwat_types::ast::DataType;

// ══════════════════════════════════════════════════════════════════════════════
// Scope
// ══════════════════════════════════════════════════════════════════════════════

/// Variable bindings of a single function.
///
/// There is no block nesting: a name declared inside an `if` branch stays
/// visible for the rest of the function.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: HashMap<String, DataType>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a binding.
    /// Returns `false` if the name is already defined.
    pub fn declare(&mut self, name: &str, ty: DataType) -> bool {
        if self.bindings.contains_key(name) {
            return false;
        }
        self.bindings.insert(name.to_string(), ty);
        true
    }

    /// Look up a binding by name.
    pub fn lookup(&self, name: &str) -> Option<DataType> {
        self.bindings.get(name).copied()
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Function Table
// ══════════════════════════════════════════════════════════════════════════════

/// Parameter and return types of a declared function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub params: Vec<DataType>,
    pub return_type: DataType,
}

/// Top-level functions by name.
#[derive(Debug, Default)]
pub struct FunctionTable {
    functions: HashMap<String, FunctionSignature>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a completed declaration. A later declaration with the same
    /// name replaces the earlier one.
    pub fn register(&mut self, name: &str, signature: FunctionSignature) {
        if self.functions.insert(name.to_string(), signature).is_some() {
            log::debug!("function `{name}` redeclared; later signature wins");
        }
    }

    pub fn get(&self, name: &str) -> Option<&FunctionSignature> {
        self.functions.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_rejects_duplicate() {
        let mut scope = Scope::new();
        assert!(scope.declare("x", DataType::Int));
        assert!(!scope.declare("x", DataType::Double));
        assert_eq!(scope.lookup("x"), Some(DataType::Int));
    }

    #[test]
    fn test_scope_lookup_missing() {
        let scope = Scope::new();
        assert_eq!(scope.lookup("y"), None);
    }

    #[test]
    fn test_function_table_last_registration_wins() {
        let mut table = FunctionTable::new();
        table.register(
            "f",
            FunctionSignature {
                params: vec![DataType::Int],
                return_type: DataType::Int,
            },
        );
        table.register(
            "f",
            FunctionSignature {
                params: vec![],
                return_type: DataType::Double,
            },
        );
        let sig = table.get("f").expect("registered");
        assert!(sig.params.is_empty());
        assert_eq!(sig.return_type, DataType::Double);
        assert!(table.get("g").is_none());
    }
}
