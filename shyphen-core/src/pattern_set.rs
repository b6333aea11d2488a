//! Pattern table and per-word priority merge

use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::pattern::{Pattern, Priorities};
use crate::source;
use crate::types::fold_case;

/// Anchor marking the start or end of a word in pattern identifiers
const ANCHOR: char = '.';

/// Identifier to priorities table built from a pattern source
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: HashMap<String, Priorities>,
    max_identifier_len: usize,
}

impl PatternSet {
    /// Parse a whitespace-delimited pattern source.
    ///
    /// The first malformed token aborts parsing. When an identifier appears
    /// twice the later pattern wins.
    pub fn parse(source: &str) -> Result<Self> {
        let mut set = Self::default();
        for token in source::tokens(source) {
            set.insert(Pattern::parse(token)?);
        }

        debug!(
            "Parsed {} patterns (max identifier length {})",
            set.patterns.len(),
            set.max_identifier_len
        );
        Ok(set)
    }

    fn insert(&mut self, pattern: Pattern) {
        let (identifier, priorities) = pattern.into_parts();
        self.max_identifier_len = self.max_identifier_len.max(identifier.chars().count());
        self.patterns.insert(identifier, priorities);
    }

    /// Priorities stored for an identifier
    pub fn get(&self, identifier: &str) -> Option<&[(usize, u8)]> {
        self.patterns.get(identifier).map(|p| p.as_slice())
    }

    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the set holds no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Longest identifier in characters, anchor included
    pub fn max_identifier_len(&self) -> usize {
        self.max_identifier_len
    }

    /// Merged priority for every gap of `word`.
    ///
    /// The returned vector has one entry per character offset `0..=len`;
    /// entry `o` is the priority of a split before character `o`. Matching
    /// is case-insensitive.
    pub fn priorities(&self, word: &str) -> Vec<u8> {
        let letters: Vec<char> = word.chars().map(fold_case).collect();
        let len = letters.len();
        let mut merged = vec![0u8; len + 1];
        if self.patterns.is_empty() {
            return merged;
        }

        let mut key = String::with_capacity(self.max_identifier_len * 4);
        for start in 0..len {
            let longest = len.min(start + self.max_identifier_len);
            for end in start + 1..=longest {
                let substring = &letters[start..end];

                key.clear();
                key.extend(substring);
                self.merge(&key, start, &mut merged);

                if start == 0 {
                    key.clear();
                    key.push(ANCHOR);
                    key.extend(substring);
                    self.merge(&key, start, &mut merged);
                }

                if end == len {
                    key.clear();
                    key.extend(substring);
                    key.push(ANCHOR);
                    self.merge(&key, start, &mut merged);
                }
            }
        }

        merged
    }

    fn merge(&self, key: &str, start: usize, merged: &mut [u8]) {
        if let Some(priorities) = self.patterns.get(key) {
            for &(offset, value) in priorities {
                if let Some(slot) = merged.get_mut(start + offset) {
                    *slot = (*slot).max(value);
                }
            }
        }
    }

    /// Character offsets at which `word` may be split.
    ///
    /// An offset `o` is accepted when its merged priority is odd,
    /// `0 < o < len`, `o >= min_leading` and `len - o >= min_trailing`.
    pub fn break_points(&self, word: &str, min_leading: usize, min_trailing: usize) -> Vec<usize> {
        let merged = self.priorities(word);
        let len = merged.len() - 1;

        merged
            .iter()
            .enumerate()
            .filter(|&(offset, &priority)| {
                priority % 2 == 1
                    && offset > 0
                    && offset < len
                    && offset >= min_leading
                    && len - offset >= min_trailing
            })
            .map(|(offset, _)| offset)
            .collect()
    }
}
