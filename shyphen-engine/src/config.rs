//! Configuration types for the engine
//!
//! `HyphenationConfig` holds the values an engine consults on every call.
//! `EngineConfig` adds the data locations and is the TOML file schema:
//!
//! ```toml
//! [hyphenation]
//! separator = "-"
//! min_length = 6
//!
//! [data]
//! patterns = "hyph-de.pat.txt"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::input::read_file;

/// U+00AD SOFT HYPHEN, invisible unless a line breaks there
pub const SOFT_HYPHEN: char = '\u{00AD}';

/// Per-call hyphenation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyphenationConfig {
    /// Character inserted at break points
    pub separator: char,
    /// Words with fewer characters are never split
    pub min_length: usize,
    /// Minimum characters before the first break
    pub min_leading: usize,
    /// Minimum characters after the last break
    pub min_trailing: usize,
}

impl Default for HyphenationConfig {
    fn default() -> Self {
        Self {
            separator: SOFT_HYPHEN,
            min_length: 5,
            min_leading: 2,
            min_trailing: 3,
        }
    }
}

impl HyphenationConfig {
    /// Soft hyphens, for text that is rendered by a line breaker
    pub fn soft() -> Self {
        Self::default()
    }

    /// Visible `-` separators, handy for inspection and tests
    pub fn visible() -> Self {
        Self {
            separator: '-',
            ..Self::default()
        }
    }

    /// Reject settings that would corrupt text or can never apply
    pub fn validate(&self) -> Result<()> {
        validate_separator(self.separator)?;
        if self.min_length == 0 {
            return Err(EngineError::Config(
                "min_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Reject a separator that would be indistinguishable from word content
pub fn validate_separator(separator: char) -> Result<()> {
    if separator.is_alphanumeric() {
        return Err(EngineError::Config(format!(
            "separator {separator:?} must not be a letter or digit"
        )));
    }
    Ok(())
}

/// Locations of pattern and exception files
///
/// A missing entry selects the built-in US English data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Pattern file
    pub patterns: Option<PathBuf>,
    /// Exception file
    pub exceptions: Option<PathBuf>,
}

/// Engine configuration, loadable from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hyphenation settings
    pub hyphenation: HyphenationConfig,
    /// Data locations
    pub data: DataConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// Relative data paths are resolved against the file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::from_toml_str(&read_file(path)?)?;

        if let Some(base) = path.parent() {
            for entry in [&mut config.data.patterns, &mut config.data.exceptions] {
                if let Some(data_path) = entry.as_mut() {
                    if data_path.is_relative() {
                        *data_path = base.join(&*data_path);
                    }
                }
            }
        }

        Ok(config)
    }

    /// Validate all sections
    pub fn validate(&self) -> Result<()> {
        self.hyphenation.validate()
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| EngineError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HyphenationConfig::default();
        assert_eq!(config.separator, SOFT_HYPHEN);
        assert_eq!(config.min_length, 5);
        assert_eq!(config.min_leading, 2);
        assert_eq!(config.min_trailing, 3);
        assert_eq!(HyphenationConfig::soft(), config);
        assert_eq!(HyphenationConfig::visible().separator, '-');
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = EngineConfig::from_toml_str(
            r#"
            [hyphenation]
            separator = "~"
            min_leading = 3

            [data]
            exceptions = "extra.hyp.txt"
            "#,
        )
        .unwrap();

        assert_eq!(config.hyphenation.separator, '~');
        assert_eq!(config.hyphenation.min_leading, 3);
        assert_eq!(config.hyphenation.min_trailing, 3);
        assert_eq!(config.data.patterns, None);
        assert_eq!(
            config.data.exceptions,
            Some(PathBuf::from("extra.hyp.txt"))
        );
    }

    #[test]
    fn test_validation() {
        let err = EngineConfig::from_toml_str("[hyphenation]\nseparator = \"x\"").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));

        let err = EngineConfig::from_toml_str("[hyphenation]\nmin_length = 0").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = EngineConfig::from_toml_str("[hyphenation]\nmin_length = \"five\"").unwrap_err();
        assert!(matches!(err, EngineError::Toml(_)));

        let err = EngineConfig::from_toml_str("[hyphenation]\nseparator = \"ab\"").unwrap_err();
        assert!(matches!(err, EngineError::Toml(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig {
            hyphenation: HyphenationConfig::visible(),
            data: DataConfig {
                patterns: Some(PathBuf::from("p.txt")),
                exceptions: None,
            },
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }
}
