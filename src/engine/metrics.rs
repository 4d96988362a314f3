//! Pattern cache counters.
//!
//! Counters are cheap integers updated on every lookup; they are meant for
//! debugging cache behavior (for example checking that a configuration change
//! really forced recompilation).

/// Snapshot of pattern cache activity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served from the cache.
    pub hits: u64,
    /// Lookups that had to compile the query.
    pub misses: u64,
    /// Wholesale invalidations caused by configuration changes or explicit clears.
    pub resets: u64,
    /// Compiled queries currently held.
    pub entries: usize,
}
