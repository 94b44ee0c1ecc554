//! Error types for numeral chunking and glyph rendering.

use thiserror::Error;

use crate::model::SystemId;

/// Errors surfaced by the numeral engine.
///
/// Chunking never fails; only direct rendering of a caller-supplied value
/// or parsing an external system tag can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// A value outside the numeral system's range was asked to be rendered.
    #[error("{system} numerals must be in 0..={max}, got {value}")]
    OutOfRange { system: SystemId, value: i64, max: u32 },

    #[error("unknown numeral system '{0}' (expected 'cistercian' or 'basingstoke')")]
    UnknownSystem(String),

    #[error("JSON serialization error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for NumeralError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

/// Result type for numeral operations.
pub type NumeralResult<T> = std::result::Result<T, NumeralError>;
