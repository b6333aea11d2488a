//! Per-engine memo of hyphenated words
//!
//! Every clear bumps a generation counter. Callers snapshot the generation
//! together with their configuration and pass it to `get` and `insert`. A
//! lookup or insert carrying an old generation misses, so a caller never
//! mixes results from two configurations and a result computed under a
//! replaced configuration never lands in the cache.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, String>,
    generation: u64,
}

/// Thread-safe word to hyphenated word map
#[derive(Debug, Default)]
pub struct ResultCache {
    inner: Mutex<Inner>,
}

impl ResultCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current generation
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Cached rendering of `word`, matched case-sensitively.
    ///
    /// Misses when the cache has moved past `generation`.
    pub fn get(&self, word: &str, generation: u64) -> Option<String> {
        let inner = self.lock();
        if inner.generation != generation {
            return None;
        }
        inner.entries.get(word).cloned()
    }

    /// Store a rendering computed at `generation`.
    ///
    /// Returns whether the entry was stored.
    pub fn insert(&self, word: &str, hyphenated: String, generation: u64) -> bool {
        let mut inner = self.lock();
        if inner.generation != generation {
            return false;
        }
        inner.entries.insert(word.to_string(), hyphenated);
        true
    }

    /// Drop every entry and start a new generation
    pub fn clear(&self) {
        let mut inner = self.lock();
        let dropped = inner.entries.len();
        inner.entries.clear();
        inner.generation = inner.generation.wrapping_add(1);
        debug!("Cleared {dropped} cached words");
    }

    /// Number of cached words
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }
}
