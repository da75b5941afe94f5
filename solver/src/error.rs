//! Error types for the pure puzzle layers.

use thiserror::Error;

/// Errors raised while parsing or solving a puzzle input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Input violated the expected format. `context` names the offending
    /// line, token or range.
    #[error("invalid input at {context}: {reason}")]
    InvalidInput { context: String, reason: String },

    /// No solver exists for the requested day.
    #[error("no solver for day {0}")]
    UnknownDay(u8),
}

impl PuzzleError {
    pub fn invalid(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            context: context.into(),
            reason: reason.into(),
        }
    }
}

pub type PuzzleResult<T> = Result<T, PuzzleError>;
