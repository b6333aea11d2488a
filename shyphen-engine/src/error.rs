//! Layered error types
//!
//! Pattern errors from the core are wrapped as-is; everything else concerns
//! reading data sources and configuration files.

use std::path::PathBuf;

use shyphen_core::PatternError;
use thiserror::Error;

/// Engine-level errors
///
/// Every variant surfaces at construction time. A built engine never fails.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Malformed pattern in a pattern source
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// A file could not be read
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// The file that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A reader source failed
    #[error("failed to read from stream: {0}")]
    Read(#[from] std::io::Error),

    /// Source bytes are not valid UTF-8
    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Configuration values rejected by validation
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Configuration file is not valid TOML for the schema
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
