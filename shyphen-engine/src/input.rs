//! Data source abstraction
//!
//! Pattern and exception data can come from memory, a file, raw bytes or any
//! reader. Everything is read synchronously and fully into a string before
//! parsing.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, Result};

/// Where pattern or exception text comes from
pub enum Source {
    /// Owned text
    Text(String),
    /// Static text (zero-copy for string literals)
    TextRef(&'static str),
    /// File path to read from
    File(PathBuf),
    /// Bytes holding UTF-8 text
    Bytes(Vec<u8>),
    /// Reader stream
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Text(text) => f
                .debug_tuple("Text")
                .field(&format!("<{} bytes>", text.len()))
                .finish(),
            Source::TextRef(text) => f
                .debug_tuple("TextRef")
                .field(&format!("<{} bytes>", text.len()))
                .finish(),
            Source::File(path) => f.debug_tuple("File").field(path).finish(),
            Source::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Source::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Source {
    /// Create a source from text
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Source::Text(text.into())
    }

    /// Create a source from a static string
    pub fn from_text_ref(text: &'static str) -> Self {
        Source::TextRef(text)
    }

    /// Create a source from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Source::File(path.into())
    }

    /// Create a source from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Source::Bytes(bytes)
    }

    /// Create a source from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Source::Reader(Box::new(reader))
    }

    /// Read the whole source into a string
    pub fn to_text(self) -> Result<String> {
        match self {
            Source::Text(text) => Ok(text),
            Source::TextRef(text) => Ok(text.to_string()),
            Source::File(path) => read_file(&path),
            Source::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
            Source::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                Ok(String::from_utf8(buffer)?)
            }
        }
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}

impl From<&'static str> for Source {
    fn from(text: &'static str) -> Self {
        Source::TextRef(text)
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::File(path)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::File(path.to_path_buf())
    }
}

impl From<Vec<u8>> for Source {
    fn from(bytes: Vec<u8>) -> Self {
        Source::Bytes(bytes)
    }
}
