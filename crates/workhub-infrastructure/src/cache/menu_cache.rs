//! In-process resolved-menu cache
//!
//! DashMap-backed store with lazy TTL expiry. Concurrent writes to the
//! same role-set key are last-write-wins; the worst case under load is a
//! redundant recomputation, which the resolver tolerates.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::{debug, info};

use workhub_core::cache::MenuCache;
use workhub_core::domain::MenuNode;

#[derive(Clone)]
struct CacheEntry {
    tree: Vec<MenuNode>,
    inserted_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() >= ttl
    }
}

/// Thread-safe in-memory menu cache with a fixed TTL per entry.
#[derive(Clone)]
pub struct InMemoryMenuCache {
    entries: Arc<DashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl InMemoryMenuCache {
    pub fn new(ttl: Duration) -> Self {
        info!("Initializing menu cache (ttl: {:?})", ttl);
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MenuCache for InMemoryMenuCache {
    fn get(&self, key: &str) -> Option<Vec<MenuNode>> {
        let entry = self.entries.get(key)?;
        let cached = entry.value().clone();

        // Lazy deletion on expiry
        if cached.is_expired(self.ttl) {
            drop(entry);
            self.entries.remove(key);
            debug!("Menu cache entry {} expired", key);
            return None;
        }

        Some(cached.tree)
    }

    fn set(&self, key: &str, tree: Vec<MenuNode>) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                tree,
                inserted_at: Instant::now(),
            },
        );
        debug!("Menu cache entry {} stored", key);
    }

    fn invalidate(&self, key: &str) {
        self.entries.remove(key);
    }

    fn invalidate_all(&self) {
        let count = self.entries.len();
        self.entries.clear();
        if count > 0 {
            info!("Cleared {} menu cache entries", count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workhub_core::domain::MenuNode;

    fn tree() -> Vec<MenuNode> {
        vec![MenuNode::leaf("Dashboard", "dashboard", "/dashboard", None)]
    }

    #[test]
    fn test_cache_basic_operations() {
        let cache = InMemoryMenuCache::new(Duration::from_secs(60));

        cache.set("admin", tree());
        assert_eq!(cache.len(), 1);

        let cached = cache.get("admin").unwrap();
        assert_eq!(cached[0].slug, "dashboard");

        cache.invalidate("admin");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_expired_entry_removed_on_get() {
        let cache = InMemoryMenuCache::new(Duration::ZERO);

        cache.set("admin", tree());
        assert!(cache.get("admin").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalidate_all() {
        let cache = InMemoryMenuCache::new(Duration::from_secs(60));

        cache.set("admin", tree());
        cache.set("admin|employee", tree());
        assert_eq!(cache.len(), 2);

        cache.invalidate_all();
        assert!(cache.is_empty());
        assert!(cache.get("admin").is_none());
    }

    #[test]
    fn test_set_overwrites() {
        let cache = InMemoryMenuCache::new(Duration::from_secs(60));

        cache.set("admin", tree());
        cache.set("admin", Vec::new());
        assert_eq!(cache.get("admin").unwrap().len(), 0);
        assert_eq!(cache.len(), 1);
    }
}
