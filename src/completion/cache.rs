use std::collections::HashMap;

use tracing::debug;

/// Fetched suggestion data keyed by the URL it came from.
///
/// Entries live until they are invalidated; nothing expires on its own.
#[derive(Debug)]
pub struct SuggestionCache<V> {
    entries: HashMap<String, V>,
}

impl<V> SuggestionCache<V> {
    pub fn new() -> Self {
        SuggestionCache {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, url: &str) -> Option<&V> {
        self.entries.get(url)
    }

    pub fn insert(&mut self, url: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(url.into(), value)
    }

    /// Returns the cached value for `url`, calling `fetch` on a miss. A failed
    /// fetch leaves the cache untouched.
    pub fn get_or_try_insert_with<E, F>(&mut self, url: &str, fetch: F) -> Result<&V, E>
    where
        F: FnOnce(&str) -> Result<V, E>,
    {
        if !self.entries.contains_key(url) {
            let value = fetch(url)?;
            debug!(url, "cached suggestions");
            self.entries.insert(url.to_string(), value);
        }

        Ok(&self.entries[url])
    }

    pub fn invalidate(&mut self, url: &str) -> Option<V> {
        self.entries.remove(url)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for SuggestionCache<V> {
    fn default() -> Self {
        SuggestionCache::new()
    }
}
