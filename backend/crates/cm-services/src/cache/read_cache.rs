use async_trait::async_trait;

/// Key/value read cache keyed by strings such as `certificates:owner:<id>`.
///
/// Implementations must be safe to share between tasks. A `get` never returns a
/// value older than the implementation's TTL.
#[async_trait]
pub trait ReadCache<V>: Send + Sync
where
    V: Clone + Send + Sync + 'static,
{
    /// Returns the stored value if it is still fresh.
    async fn get(&self, key: &str) -> Option<V>;

    /// Stores `value`, replacing any previous entry and restarting its TTL.
    async fn put(&self, key: &str, value: V);

    /// Removes the entry for `key`. Returns whether one was present.
    async fn invalidate(&self, key: &str) -> bool;

    async fn stats(&self) -> CacheStats;
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Entries currently held, expired ones included until they are next touched.
    pub entry_count: u64,
}

impl CacheStats {
    /// Hit rate between 0.0 and 1.0.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
