//! Compiled query cache.
//!
//! Maps the exact raw query text (before trimming) to its compiled form. There
//! is no eviction: entries live until the next `reset`, which the owning
//! `Searcher` triggers whenever its configuration actually changes.
//!
//! Empty queries are cached too, as `None`.

use super::metrics::CacheStats;
use crate::CompiledQuery;
use std::collections::HashMap;
use tracing::{debug, trace};

#[derive(Debug, Default)]
pub(crate) struct PatternCache {
    entries: HashMap<String, Option<CompiledQuery>>,
    hits: u64,
    misses: u64,
    resets: u64,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached entry for `query`, compiling and storing it on a miss.
    ///
    /// A failed compilation is returned as is and nothing is stored.
    pub fn get_or_compile<E>(
        &mut self,
        query: &str,
        compile: impl FnOnce(&str) -> Result<Option<CompiledQuery>, E>,
    ) -> Result<Option<&CompiledQuery>, E> {
        if self.entries.contains_key(query) {
            self.hits += 1;
            trace!(query, "pattern cache hit");
        } else {
            self.misses += 1;
            let compiled = compile(query)?;
            debug!(query, compiled = ?compiled.as_ref().map(|c| c.to_string()), "compiled query");
            self.entries.insert(query.to_string(), compiled);
        }

        Ok(self.entries.get(query).and_then(Option::as_ref))
    }

    /// Drop every compiled entry.
    pub fn reset(&mut self) {
        debug!(entries = self.entries.len(), "resetting pattern cache");
        self.entries.clear();
        self.resets += 1;
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats { hits: self.hits, misses: self.misses, resets: self.resets, entries: self.entries.len() }
    }
}
