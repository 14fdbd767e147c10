//! Serializable outcome of a compilation.

use minwat_types::MinwatError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Outcome of [`compile_to_result`](crate::compile_to_result), shaped for
/// JSON consumers.
///
/// On success `wat`, `ast` and `wat_hash` are set and `error` is `None`.
/// On failure only `error` and `source_hash` are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileResult {
    pub success: bool,
    pub wat: Option<String>,
    /// The typed AST as a JSON tree.
    pub ast: Option<serde_json::Value>,
    pub error: Option<MinwatError>,
    /// Lowercase hex SHA-256 of the source text.
    pub source_hash: String,
    /// Lowercase hex SHA-256 of the WAT text.
    pub wat_hash: Option<String>,
}

/// Lowercase hex SHA-256 digest of `text`.
pub fn sha256_hex(text: &str) -> String {
    Sha256::digest(text.as_bytes())
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_digests() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
