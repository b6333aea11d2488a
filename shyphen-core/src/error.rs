//! Core error types (deterministic only)

use thiserror::Error;

/// Pattern parsing errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The token lacks a letter or a priority digit
    #[error("deficient pattern '{0}': needs at least one letter and one digit 1-9")]
    DeficientPattern(String),

    /// The token contains a character outside letters, digits 1-9 and a
    /// single leading or trailing period
    #[error("invalid character in pattern '{0}'")]
    InvalidCharacter(String),

    /// Two priority digits are adjacent
    #[error("consecutive digits in pattern '{0}'")]
    ConsecutiveDigits(String),
}

impl PatternError {
    /// The offending pattern token
    pub fn token(&self) -> &str {
        match self {
            PatternError::DeficientPattern(token)
            | PatternError::InvalidCharacter(token)
            | PatternError::ConsecutiveDigits(token) => token,
        }
    }
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, PatternError>;
