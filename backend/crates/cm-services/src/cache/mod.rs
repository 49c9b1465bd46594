//! Ephemeral read cache.
//!
//! Entries expire after a fixed TTL measured from when they were stored. Writes to
//! the stores never touch the cache, so readers may observe a value up to one TTL
//! old. Only explicit invalidation (account deletion) removes entries early.

mod clock;
mod read_cache;
mod ttl_cache;

pub use clock::{Clock, ManualClock, SystemClock};
pub use read_cache::{CacheStats, ReadCache};
pub use ttl_cache::TtlCache;
