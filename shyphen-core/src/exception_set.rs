//! Two-tier exception lookup
//!
//! The default tier is loaded once and shared between engines behind an
//! `Arc`. The custom tier belongs to a single engine and may change at any
//! time, so it lives behind its own mutex. Lookups consult the custom tier
//! first.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::exception::{Exception, EXCEPTION_HYPHEN};
use crate::source;
use crate::types::fold_word;

/// Identifier to exception map
pub type ExceptionTable = HashMap<String, Exception>;

/// Parse a whitespace-delimited exception source into a table.
///
/// Never fails; later duplicates overwrite earlier ones.
pub fn parse_table(source: &str) -> ExceptionTable {
    let table: ExceptionTable = source::tokens(source)
        .map(Exception::parse)
        .map(|exception| (exception.identifier().to_string(), exception))
        .collect();

    debug!("Parsed {} exceptions", table.len());
    table
}

/// Default and custom exception tiers
#[derive(Debug, Default)]
pub struct ExceptionSet {
    default: Arc<ExceptionTable>,
    custom: Mutex<ExceptionTable>,
}

impl ExceptionSet {
    /// Build a set whose default tier is parsed from `source`
    pub fn parse(source: &str) -> Self {
        Self::with_default(Arc::new(parse_table(source)))
    }

    /// Build a set over an existing default tier
    pub fn with_default(default: Arc<ExceptionTable>) -> Self {
        Self {
            default,
            custom: Mutex::new(ExceptionTable::new()),
        }
    }

    /// A set with both tiers empty
    pub fn empty() -> Self {
        Self::default()
    }

    fn custom(&self) -> MutexGuard<'_, ExceptionTable> {
        // A panic while holding the lock cannot leave the map half-updated
        self.custom.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn find<R>(&self, word: &str, f: impl FnOnce(&Exception) -> R) -> Option<R> {
        let identifier = fold_word(word);
        let custom = self.custom();
        let found = custom
            .get(&identifier)
            .or_else(|| self.default.get(&identifier))
            .map(f);
        found
    }

    /// Render `word` with `-` at its exception locations.
    ///
    /// Case-insensitive; `None` when neither tier knows the word.
    pub fn lookup(&self, word: &str) -> Option<String> {
        self.find(word, |exception| exception.render(word, EXCEPTION_HYPHEN))
    }

    /// Split locations for `word`, if it is an exception
    pub fn locations(&self, word: &str) -> Option<Vec<usize>> {
        self.find(word, |exception| exception.locations().to_vec())
    }

    /// Add hyphenated words to the custom tier
    pub fn add_custom<I>(&self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut custom = self.custom();
        for word in words {
            let exception = Exception::parse(word.as_ref());
            custom.insert(exception.identifier().to_string(), exception);
        }
    }

    /// Remove words from the custom tier.
    ///
    /// Words may be given with or without hyphens.
    pub fn remove_custom<I>(&self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut custom = self.custom();
        for word in words {
            let exception = Exception::parse(word.as_ref());
            custom.remove(exception.identifier());
        }
    }

    /// Empty the custom tier
    pub fn clear_custom(&self) {
        self.custom().clear();
    }

    /// Identifiers in the custom tier, sorted
    pub fn custom_identifiers(&self) -> Vec<String> {
        let mut identifiers: Vec<String> = self.custom().keys().cloned().collect();
        identifiers.sort_unstable();
        identifiers
    }

    /// Number of custom exceptions
    pub fn len_custom(&self) -> usize {
        self.custom().len()
    }

    /// Number of default exceptions
    pub fn len_default(&self) -> usize {
        self.default.len()
    }

    /// Independent copy: shares the default tier, deep-copies the custom tier
    pub fn duplicate(&self) -> Self {
        Self {
            default: Arc::clone(&self.default),
            custom: Mutex::new(self.custom().clone()),
        }
    }
}

impl Clone for ExceptionSet {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        let table = parse_table("// header\nas-so-ciate ta-ble\npresent");
        assert_eq!(table.len(), 3);
        assert_eq!(table["associate"].locations(), &[2, 4]);
        assert!(table["present"].locations().is_empty());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let set = ExceptionSet::parse("ta-ble");
        assert_eq!(set.lookup("table").as_deref(), Some("ta-ble"));
        assert_eq!(set.lookup("TABLE").as_deref(), Some("TA-BLE"));
        assert_eq!(set.lookup("chair"), None);
    }

    #[test]
    fn test_custom_takes_precedence() {
        let set = ExceptionSet::parse("project");
        assert_eq!(set.lookup("project").as_deref(), Some("project"));

        set.add_custom(["pro-ject"]);
        assert_eq!(set.lookup("Project").as_deref(), Some("Pro-ject"));
        assert_eq!(set.locations("project"), Some(vec![3]));

        set.remove_custom(["pro-ject"]);
        assert_eq!(set.lookup("project").as_deref(), Some("project"));
    }

    #[test]
    fn test_custom_management() {
        let set = ExceptionSet::empty();
        set.add_custom(vec!["zeb-ra".to_string(), "al-pha".to_string()]);
        assert_eq!(set.len_custom(), 2);
        assert_eq!(set.len_default(), 0);
        assert_eq!(set.custom_identifiers(), vec!["alpha", "zebra"]);

        set.remove_custom(["ZEBRA"]);
        assert_eq!(set.custom_identifiers(), vec!["alpha"]);

        set.clear_custom();
        assert_eq!(set.len_custom(), 0);
    }

    #[test]
    fn test_duplicate_is_isolated() {
        let original = ExceptionSet::parse("ta-ble");
        original.add_custom(["al-pha"]);

        let copy = original.duplicate();
        copy.add_custom(["be-ta"]);
        original.remove_custom(["alpha"]);

        assert_eq!(original.custom_identifiers(), Vec::<String>::new());
        assert_eq!(copy.custom_identifiers(), vec!["alpha", "beta"]);
        assert_eq!(copy.len_default(), 1);
    }
}
