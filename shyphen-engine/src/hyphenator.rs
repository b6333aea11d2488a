//! Hyphenation engine and builder
//!
//! A [`Hyphenator`] owns a pattern set, an exception set, a result cache and
//! its current [`HyphenationConfig`]. All operations take `&self`, so one
//! engine can be shared between threads behind an `Arc`.
//!
//! Configuration writes hold the config write lock while clearing the cache.
//! Readers snapshot the config and the cache generation under the read lock
//! and compute without any lock held; a result computed under a replaced
//! configuration is never stored.

use std::borrow::Cow;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shyphen_core::exception::EXCEPTION_HYPHEN;
use shyphen_core::{defaults, insert_separators, ExceptionSet, PatternSet, Tokenizer};
use tracing::{info, trace};

use crate::cache::ResultCache;
use crate::config::{validate_separator, EngineConfig, HyphenationConfig};
use crate::error::Result;
use crate::input::Source;

/// Soft hyphenation engine
pub struct Hyphenator {
    patterns: Arc<PatternSet>,
    exceptions: ExceptionSet,
    cache: ResultCache,
    config: RwLock<HyphenationConfig>,
}

impl Default for Hyphenator {
    fn default() -> Self {
        Self::new()
    }
}

impl Hyphenator {
    /// Create an engine over the built-in US English data
    pub fn new() -> Self {
        Self::from_parts(
            defaults::patterns(),
            ExceptionSet::with_default(defaults::exceptions()),
            HyphenationConfig::default(),
        )
    }

    /// Create an engine from pattern and exception text
    pub fn from_text(patterns: &str, exceptions: &str) -> Result<Self> {
        Ok(Self::from_parts(
            Arc::new(PatternSet::parse(patterns)?),
            ExceptionSet::parse(exceptions),
            HyphenationConfig::default(),
        ))
    }

    /// Create an engine from data sources.
    ///
    /// Without an exception source the default exception tier is empty.
    pub fn from_sources(patterns: Source, exceptions: Option<Source>) -> Result<Self> {
        let patterns = PatternSet::parse(&patterns.to_text()?)?;
        let exceptions = match exceptions {
            Some(source) => ExceptionSet::parse(&source.to_text()?),
            None => ExceptionSet::empty(),
        };
        Ok(Self::from_parts(
            Arc::new(patterns),
            exceptions,
            HyphenationConfig::default(),
        ))
    }

    /// Create an engine from a pattern file and an exception file
    pub fn from_files<P, E>(patterns_path: P, exceptions_path: E) -> Result<Self>
    where
        P: AsRef<Path>,
        E: AsRef<Path>,
    {
        Self::from_sources(
            Source::from(patterns_path.as_ref()),
            Some(Source::from(exceptions_path.as_ref())),
        )
    }

    /// Create an engine from a validated configuration.
    ///
    /// Data files left unset fall back to the built-in tables.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let patterns = match &config.data.patterns {
            Some(path) => Arc::new(PatternSet::parse(&Source::from(path.as_path()).to_text()?)?),
            None => defaults::patterns(),
        };
        let exceptions = match &config.data.exceptions {
            Some(path) => ExceptionSet::parse(&Source::from(path.as_path()).to_text()?),
            None => ExceptionSet::with_default(defaults::exceptions()),
        };

        Ok(Self::from_parts(patterns, exceptions, config.hyphenation))
    }

    /// Start a builder
    pub fn builder() -> HyphenatorBuilder {
        HyphenatorBuilder::new()
    }

    fn from_parts(
        patterns: Arc<PatternSet>,
        exceptions: ExceptionSet,
        config: HyphenationConfig,
    ) -> Self {
        info!(
            "Built hyphenator with {} patterns and {} exceptions",
            patterns.len(),
            exceptions.len_default()
        );
        Self {
            patterns,
            exceptions,
            cache: ResultCache::new(),
            config: RwLock::new(config),
        }
    }

    fn read_config(&self) -> RwLockReadGuard<'_, HyphenationConfig> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_config(&self) -> RwLockWriteGuard<'_, HyphenationConfig> {
        self.config.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Configuration and cache generation, read together
    fn snapshot(&self) -> (HyphenationConfig, u64) {
        let config = self.read_config();
        (*config, self.cache.generation())
    }

    /// Apply a configuration change and clear the cache under one write lock
    fn update(&self, change: impl FnOnce(&mut HyphenationConfig)) {
        let mut config = self.write_config();
        change(&mut *config);
        self.cache.clear();
    }

    /// Insert separators at every valid break point in `text`
    pub fn hyphenate(&self, text: &str) -> String {
        let (config, generation) = self.snapshot();
        let mut output = String::with_capacity(text.len() + text.len() / 4);

        for span in Tokenizer::new(text, config.separator) {
            if span.is_hyphenatable() {
                output.push_str(&self.resolve(span.text, &config, generation));
            } else {
                output.push_str(span.text);
            }
        }

        output
    }

    /// Hyphenate a single word.
    ///
    /// Thresholds, exceptions and the cache apply as in [`hyphenate`].
    /// Input that is not one plain letter run (compounds such as
    /// `super-fluous`, punctuation, several words) is returned unchanged.
    ///
    /// [`hyphenate`]: Hyphenator::hyphenate
    pub fn hyphenate_word(&self, word: &str) -> String {
        let (config, generation) = self.snapshot();
        if !is_single_word(word, config.separator) {
            return word.to_string();
        }
        self.resolve(word, &config, generation).into_owned()
    }

    fn resolve<'a>(
        &self,
        word: &'a str,
        config: &HyphenationConfig,
        generation: u64,
    ) -> Cow<'a, str> {
        if word.chars().count() < config.min_length {
            return Cow::Borrowed(word);
        }

        if let Some(rendered) = self.exceptions.lookup(word) {
            if config.separator == EXCEPTION_HYPHEN {
                return Cow::Owned(rendered);
            }
            let mut buffer = [0u8; 4];
            let separator = config.separator.encode_utf8(&mut buffer);
            return Cow::Owned(rendered.replace(EXCEPTION_HYPHEN, separator));
        }

        if let Some(cached) = self.cache.get(word, generation) {
            return Cow::Owned(cached);
        }

        trace!("Cache miss for {word:?}");
        let points = self
            .patterns
            .break_points(word, config.min_leading, config.min_trailing);
        let hyphenated = insert_separators(word, &points, config.separator);
        self.cache.insert(word, hyphenated.clone(), generation);
        Cow::Owned(hyphenated)
    }

    /// Character indices of `word` at which a separator would be inserted.
    ///
    /// Empty for input that is not one plain letter run, the same input
    /// [`hyphenate_word`] returns unchanged.
    ///
    /// [`hyphenate_word`]: Hyphenator::hyphenate_word
    pub fn break_points(&self, word: &str) -> Vec<usize> {
        let config = *self.read_config();
        let len = word.chars().count();
        if len < config.min_length || !is_single_word(word, config.separator) {
            return Vec::new();
        }

        match self.exceptions.locations(word) {
            Some(locations) => locations
                .into_iter()
                .filter(|&location| location > 0 && location < len)
                .collect(),
            None => self
                .patterns
                .break_points(word, config.min_leading, config.min_trailing),
        }
    }

    /// Remove every occurrence of the current separator
    pub fn unhyphenate(&self, text: &str) -> String {
        let separator = self.separator();
        text.chars().filter(|&ch| ch != separator).collect()
    }

    /// Add hyphenated words such as `pro-ject` as custom exceptions
    pub fn add_custom_exceptions<I>(&self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.exceptions.add_custom(words);
    }

    /// Remove custom exceptions; hyphens in `words` are ignored
    pub fn remove_custom_exceptions<I>(&self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.exceptions.remove_custom(words);
    }

    /// Remove all custom exceptions
    pub fn remove_all_custom_exceptions(&self) {
        self.exceptions.clear_custom();
    }

    /// Identifiers of the custom exceptions, sorted
    pub fn custom_exceptions(&self) -> Vec<String> {
        self.exceptions.custom_identifiers()
    }

    /// Number of words currently cached
    pub fn cached_words(&self) -> usize {
        self.cache.len()
    }

    /// Drop all cached results
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Independent engine with the same configuration and data.
    ///
    /// Pattern and default exception tables are shared, custom exceptions
    /// are copied and the cache starts empty.
    pub fn duplicate(&self) -> Self {
        Self {
            patterns: Arc::clone(&self.patterns),
            exceptions: self.exceptions.duplicate(),
            cache: ResultCache::new(),
            config: RwLock::new(self.config()),
        }
    }

    /// Current configuration
    pub fn config(&self) -> HyphenationConfig {
        *self.read_config()
    }

    /// Current separator
    pub fn separator(&self) -> char {
        self.read_config().separator
    }

    /// Current minimum word length
    pub fn min_length(&self) -> usize {
        self.read_config().min_length
    }

    /// Current minimum leading characters
    pub fn min_leading(&self) -> usize {
        self.read_config().min_leading
    }

    /// Current minimum trailing characters
    pub fn min_trailing(&self) -> usize {
        self.read_config().min_trailing
    }

    /// Replace the whole configuration. Clears the cache.
    ///
    /// Fails without changing anything if `config` does not validate.
    pub fn set_config(&self, config: HyphenationConfig) -> Result<()> {
        config.validate()?;
        self.update(|current| *current = config);
        Ok(())
    }

    /// Change the separator. Clears the cache.
    ///
    /// Letters and digits are rejected and leave the engine unchanged.
    pub fn set_separator(&self, separator: char) -> Result<()> {
        validate_separator(separator)?;
        self.update(|config| config.separator = separator);
        Ok(())
    }

    /// Change the minimum word length. Clears the cache.
    pub fn set_min_length(&self, min_length: usize) {
        self.update(|config| config.min_length = min_length);
    }

    /// Change the minimum leading characters. Clears the cache.
    pub fn set_min_leading(&self, min_leading: usize) {
        self.update(|config| config.min_leading = min_leading);
    }

    /// Change the minimum trailing characters. Clears the cache.
    pub fn set_min_trailing(&self, min_trailing: usize) {
        self.update(|config| config.min_trailing = min_trailing);
    }
}

/// Whether `text` tokenizes to exactly one hyphenatable span
fn is_single_word(text: &str, separator: char) -> bool {
    let mut spans = Tokenizer::new(text, separator);
    matches!(
        (spans.next(), spans.next()),
        (Some(span), None) if span.is_hyphenatable()
    )
}

impl Clone for Hyphenator {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl std::fmt::Debug for Hyphenator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hyphenator")
            .field("patterns", &self.patterns.len())
            .field("default_exceptions", &self.exceptions.len_default())
            .field("custom_exceptions", &self.exceptions.len_custom())
            .field("cached_words", &self.cache.len())
            .field("config", &self.config())
            .finish()
    }
}

/// Builder for [`Hyphenator`]
///
/// Provides a fluent interface for data sources and settings.
#[derive(Debug, Default)]
pub struct HyphenatorBuilder {
    patterns: Option<Source>,
    exceptions: Option<Source>,
    config: HyphenationConfig,
    custom: Vec<String>,
}

impl HyphenatorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use patterns from `source` instead of the built-in set
    pub fn patterns<S: Into<Source>>(mut self, source: S) -> Self {
        self.patterns = Some(source.into());
        self
    }

    /// Use exceptions from `source` instead of the built-in set
    pub fn exceptions<S: Into<Source>>(mut self, source: S) -> Self {
        self.exceptions = Some(source.into());
        self
    }

    /// Set all hyphenation settings at once
    pub fn config(mut self, config: HyphenationConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the separator
    pub fn separator(mut self, separator: char) -> Self {
        self.config.separator = separator;
        self
    }

    /// Set the minimum word length
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.config.min_length = min_length;
        self
    }

    /// Set the minimum leading characters
    pub fn min_leading(mut self, min_leading: usize) -> Self {
        self.config.min_leading = min_leading;
        self
    }

    /// Set the minimum trailing characters
    pub fn min_trailing(mut self, min_trailing: usize) -> Self {
        self.config.min_trailing = min_trailing;
        self
    }

    /// Use visible `-` separators
    pub fn visible(mut self) -> Self {
        self.config.separator = HyphenationConfig::visible().separator;
        self
    }

    /// Start with these custom exceptions
    pub fn custom_exceptions<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.custom
            .extend(words.into_iter().map(|word| word.as_ref().to_string()));
        self
    }

    /// Read the sources and build the engine
    pub fn build(self) -> Result<Hyphenator> {
        self.config.validate()?;

        let patterns = match self.patterns {
            Some(source) => Arc::new(PatternSet::parse(&source.to_text()?)?),
            None => defaults::patterns(),
        };
        let exceptions = match self.exceptions {
            Some(source) => ExceptionSet::parse(&source.to_text()?),
            None => ExceptionSet::with_default(defaults::exceptions()),
        };
        exceptions.add_custom(&self.custom);

        Ok(Hyphenator::from_parts(patterns, exceptions, self.config))
    }
}
