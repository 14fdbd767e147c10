use minwat_types::MinwatError;
use thiserror::Error;

/// Failures of the JSON-facing compiler surface.
#[derive(Debug, Error)]
pub enum CompilerError {
    /// The source did not compile.
    #[error(transparent)]
    Compile(#[from] MinwatError),
    /// An options document could not be decoded.
    #[error("invalid compile options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
