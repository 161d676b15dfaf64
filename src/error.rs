//! Error types for the harmony_colors library

use thiserror::Error;

/// Result type alias for harmony_colors operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for palette generation and color parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Malformed hex color string
    #[error("Invalid color format: {value:?} ({reason})")]
    InvalidFormat { value: String, reason: String },

    /// Request that cannot produce a meaningful palette
    #[error("Degenerate request: {parameter} = {value}")]
    DegenerateRequest { parameter: String, value: String },

    /// Distinctness enforcement exhausted its attempt budget
    #[error(
        "Could not reach {requested} mutually distinct colors \
         (best: {achieved}, attempts: {attempts})"
    )]
    DistinctnessUnsatisfiable {
        requested: usize,
        achieved: usize,
        attempts: usize,
    },
}

impl PaletteError {
    /// Create an invalid-format error for a hex string
    pub fn invalid_format(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a degenerate-request error for a named parameter
    pub fn degenerate(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::DegenerateRequest {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Distinctness exhaustion is recoverable: retrying with a lower count
    /// or a relaxed threshold can succeed. Format and degenerate-request
    /// errors require the caller to fix the input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PaletteError::DistinctnessUnsatisfiable { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::InvalidFormat { value, .. } => {
                format!("\"{}\" is not a valid hex color.", value)
            }
            PaletteError::DegenerateRequest { .. } => {
                "The palette request could not be satisfied. Please check the requested size."
                    .to_string()
            }
            PaletteError::DistinctnessUnsatisfiable { requested, achieved, .. } => {
                format!(
                    "Only {} of {} sufficiently distinct colors could be generated. \
                     Try a smaller palette.",
                    achieved, requested
                )
            }
        }
    }
}
