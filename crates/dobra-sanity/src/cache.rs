//! In-process cache of query results with a per-entry staleness window.
//!
//! Content may be served up to `revalidate` old; after that the next request
//! re-fetches. Only successful responses are stored.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Upper bound on stored entries. Product-by-slug lookups are keyed by
/// request input, so the key space is open-ended.
const MAX_ENTRIES: usize = 512;

#[derive(Debug)]
struct CacheEntry {
    expires_at: Instant,
    value: serde_json::Value,
}

#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for a query and its parameters.
    #[must_use]
    pub fn key(query: &str, params: &[(&str, serde_json::Value)]) -> String {
        let mut key = query.to_string();
        for (name, value) in params {
            key.push('\u{1f}');
            key.push_str(name);
            key.push('=');
            key.push_str(&value.to_string());
        }
        key
    }

    /// Returns the stored value if it is still fresh.
    pub async fn get(&self, key: &str) -> Option<serde_json::Value> {
        let entries = self.entries.lock().await;
        entries
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.value.clone())
    }

    /// Stores `value` for `revalidate`. A zero window disables caching.
    pub async fn insert(&self, key: String, value: serde_json::Value, revalidate: Duration) {
        if revalidate.is_zero() {
            return;
        }
        let now = Instant::now();
        let mut entries = self.entries.lock().await;

        if entries.len() >= MAX_ENTRIES && !entries.contains_key(&key) {
            entries.retain(|_, entry| entry.expires_at > now);
            if entries.len() >= MAX_ENTRIES {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.expires_at)
                    .map(|(k, _)| k.clone());
                if let Some(oldest) = oldest {
                    entries.remove(&oldest);
                }
            }
        }

        entries.insert(
            key,
            CacheEntry {
                expires_at: now + revalidate,
                value,
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn fresh_entry_is_returned() {
        let cache = ResponseCache::new();
        cache
            .insert("q".to_string(), json!([1, 2]), Duration::from_secs(60))
            .await;
        assert_eq!(cache.get("q").await, Some(json!([1, 2])));
    }

    #[tokio::test]
    async fn zero_window_is_not_stored() {
        let cache = ResponseCache::new();
        cache.insert("q".to_string(), json!(null), Duration::ZERO).await;
        assert!(cache.get("q").await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn expired_entry_is_not_returned() {
        let cache = ResponseCache::new();
        cache
            .insert("q".to_string(), json!(1), Duration::from_millis(10))
            .await;
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(cache.get("q").await.is_none());
    }

    #[tokio::test]
    async fn null_results_are_cached_like_any_other() {
        let cache = ResponseCache::new();
        cache
            .insert("q".to_string(), json!(null), Duration::from_secs(60))
            .await;
        assert_eq!(cache.get("q").await, Some(json!(null)));
    }

    #[tokio::test]
    async fn capacity_is_bounded() {
        let cache = ResponseCache::new();
        for i in 0..=MAX_ENTRIES {
            cache
                .insert(format!("q{i}"), json!(i), Duration::from_secs(60))
                .await;
        }
        assert_eq!(cache.len().await, MAX_ENTRIES);
        assert_eq!(cache.get(&format!("q{MAX_ENTRIES}")).await, Some(json!(MAX_ENTRIES)));
    }

    #[test]
    fn key_distinguishes_params() {
        let a = ResponseCache::key("q", &[("slug", json!("a"))]);
        let b = ResponseCache::key("q", &[("slug", json!("b"))]);
        assert_ne!(a, b);
        assert_eq!(a, ResponseCache::key("q", &[("slug", json!("a"))]));
    }
}
