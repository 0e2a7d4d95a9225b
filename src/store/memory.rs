use crate::constants::{DEFAULT_PREFERENCE_STORE_CAPACITY, DEFAULT_PREFERENCE_TTL_SECONDS};
use crate::models::{PreferencePatch, UserPreferences};
use crate::store::{PreferenceStore, StoreStats};
use moka::sync::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// In-memory preference store backed by moka with TTL and bounded capacity.
/// All methods are `&self` — no locking needed.
pub struct MemoryPreferenceStore {
    profiles: Cache<String, Arc<UserPreferences>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryPreferenceStore {
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let profiles = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        MemoryPreferenceStore {
            profiles,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

impl Default for MemoryPreferenceStore {
    fn default() -> Self {
        Self::new(
            DEFAULT_PREFERENCE_TTL_SECONDS,
            DEFAULT_PREFERENCE_STORE_CAPACITY,
        )
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, user_id: &str) -> Option<UserPreferences> {
        match self.profiles.get(user_id) {
            Some(profile) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(user_id, "Preference store hit");
                Some((*profile).clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(user_id, "Preference store miss");
                None
            }
        }
    }

    fn update(&self, user_id: &str, patch: PreferencePatch) {
        let mut profile = self
            .profiles
            .get(user_id)
            .map(|p| (*p).clone())
            .unwrap_or_default();

        profile.apply(patch);
        self.profiles.insert(user_id.to_string(), Arc::new(profile));
        tracing::debug!(user_id, "Preference profile updated");
    }

    fn evict(&self, user_id: &str) {
        self.profiles.invalidate(user_id);
        tracing::debug!(user_id, "Preference profile evicted");
    }

    fn stats(&self) -> StoreStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let hit_rate = if hits + misses > 0 {
            (hits as f64 / (hits + misses) as f64) * 100.0
        } else {
            0.0
        };

        StoreStats {
            hits,
            misses,
            hit_rate,
        }
    }
}
