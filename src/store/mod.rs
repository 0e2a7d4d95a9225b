pub mod memory;

pub use memory::MemoryPreferenceStore;

use crate::models::{PreferencePatch, UserPreferences};
use serde::{Deserialize, Serialize};

/// Per-user preference profiles, owned by a collaborator rather than the
/// engine. Implementations must bound retention (TTL or explicit eviction);
/// unbounded growth keyed by user id is not acceptable.
///
/// Concurrent updates for the same user are last-write-wins; callers that
/// need stronger ordering must serialize their own writes.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, user_id: &str) -> Option<UserPreferences>;

    /// Merge a partial update into the stored profile, creating a default
    /// profile first if none exists.
    fn update(&self, user_id: &str, patch: PreferencePatch);

    fn evict(&self, user_id: &str);

    fn stats(&self) -> StoreStats;
}

/// Hit/miss statistics for monitoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}
