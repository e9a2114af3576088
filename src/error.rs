//! Structured error types for the boundary layer.
//!
//! The layout core itself never fails — malformed numeric settings coerce
//! to safe defaults. Errors only exist where JSON enters the system:
//! project files and participant payloads.

use thiserror::Error;

/// The unified error type returned by the public parsing entry points.
#[derive(Debug, Error)]
pub enum LanyardError {
    /// JSON input failed to parse as a project or participant payload.
    #[error("Failed to parse document: {source}\n  Hint: {hint}")]
    Parse {
        source: serde_json::Error,
        hint: String,
    },

    /// The JSON was valid but is not a recognized participant payload.
    #[error("Import error: {0}")]
    Import(String),
}

impl From<serde_json::Error> for LanyardError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the project schema. Check field names and types.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input — is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => "Input could not be read to completion.".to_string(),
        };
        LanyardError::Parse { source: e, hint }
    }
}
