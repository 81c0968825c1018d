//! In-memory TTL cache with a bounded entry count.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Source of the current time for expiry checks.
///
/// Production code uses [`SystemClock`]; tests inject a manual clock so
/// expiry is deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Zero-sized clock backed by `Instant::now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Cache tuning: how long an entry lives and how many entries fit.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub entry_ttl: Duration,
    pub max_entries: usize,
}

struct Entry<T> {
    value: T,
    expires_at: Instant,
}

impl<T> Entry<T> {
    fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// A small keyed cache: entries expire after a fixed TTL, and when the
/// cache is full the entry expiring earliest is evicted to make room.
///
/// All access goes through `get_or_put`-style operations; a miss computes
/// the value with the supplied async closure and stores it. The interior
/// lock is not held while the closure runs, so two concurrent misses on
/// the same key may compute the value twice (last write wins).
pub struct LocalCache<T, C = SystemClock> {
    config: CacheConfig,
    clock: C,
    entries: Mutex<HashMap<String, Entry<T>>>,
}

impl<T: Clone> LocalCache<T, SystemClock> {
    /// Panics if `config.max_entries` is zero.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<T: Clone, C: Clock> LocalCache<T, C> {
    /// Panics if `config.max_entries` is zero.
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        assert!(config.max_entries > 0, "max_entries must be greater than 0");
        Self {
            config,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key`, computing and storing it with
    /// `default` when missing or expired.
    pub async fn get_or_put<F, Fut>(&self, key: &str, default: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if let Some(value) = self.get_fresh(key).await {
            return value;
        }
        let value = default().await;
        self.put(key.to_string(), value.clone()).await;
        value
    }

    /// Fallible variant of [`LocalCache::get_or_put`]; a failed `default`
    /// is propagated and nothing is cached for `key`.
    pub async fn try_get_or_put<F, Fut, E>(&self, key: &str, default: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get_fresh(key).await {
            return Ok(value);
        }
        let value = default().await?;
        self.put(key.to_string(), value.clone()).await;
        Ok(value)
    }

    /// Multi-key lookup: returns a value for every requested key,
    /// computing the missing ones in one call.
    ///
    /// `default` receives exactly the keys that were not found fresh in
    /// the cache and returns their values; those are stored before the
    /// combined map is returned.
    pub async fn get_or_put_all<F, Fut>(&self, keys: &HashSet<String>, default: F) -> HashMap<String, T>
    where
        F: FnOnce(HashSet<String>) -> Fut,
        Fut: Future<Output = HashMap<String, T>>,
    {
        let mut found = HashMap::new();
        {
            let entries = self.entries.lock().await;
            let now = self.clock.now();
            for key in keys {
                if let Some(entry) = entries.get(key) {
                    if entry.is_fresh(now) {
                        found.insert(key.clone(), entry.value.clone());
                    }
                }
            }
        }

        let missing: HashSet<String> = keys
            .iter()
            .filter(|key| !found.contains_key(*key))
            .cloned()
            .collect();
        if !missing.is_empty() {
            for (key, value) in default(missing).await {
                self.put(key.clone(), value.clone()).await;
                found.insert(key, value);
            }
        }

        found
    }

    async fn get_fresh(&self, key: &str) -> Option<T> {
        let entries = self.entries.lock().await;
        let now = self.clock.now();
        entries
            .get(key)
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| entry.value.clone())
    }

    async fn put(&self, key: String, value: T) {
        let mut entries = self.entries.lock().await;
        while entries.len() >= self.config.max_entries {
            let earliest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.expires_at)
                .map(|(key, _)| key.clone());
            match earliest {
                Some(key) => {
                    entries.remove(&key);
                }
                None => break,
            }
        }
        entries.insert(
            key,
            Entry {
                value,
                expires_at: self.clock.now() + self.config.entry_ttl,
            },
        );
    }
}
