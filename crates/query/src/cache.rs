//! Keyed value cache with stale times.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use crate::key::QueryKey;

/// How long a cached value is served without refetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleTime {
    After(Duration),
    /// Fresh until explicitly invalidated.
    Never,
}

impl StaleTime {
    pub fn from_secs(secs: u64) -> Self {
        Self::After(Duration::from_secs(secs))
    }

    fn is_stale(self, age: Duration) -> bool {
        match self {
            Self::After(limit) => age >= limit,
            Self::Never => false,
        }
    }
}

impl From<Duration> for StaleTime {
    fn from(value: Duration) -> Self {
        Self::After(value)
    }
}

impl From<Option<u64>> for StaleTime {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Never, Self::from_secs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Fresh,
    Stale,
}

struct Entry<V> {
    value: V,
    updated_at: Instant,
    invalidated: bool,
}

pub struct QueryCache<V> {
    entries: Mutex<HashMap<QueryKey, Entry<V>>>,
    stale_time: StaleTime,
}

impl<V: Clone> QueryCache<V> {
    pub fn new(stale_time: impl Into<StaleTime>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            stale_time: stale_time.into(),
        }
    }

    pub fn stale_time(&self) -> StaleTime {
        self.stale_time
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry<V>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_of(&self, entry: &Entry<V>) -> EntryState {
        if entry.invalidated || self.stale_time.is_stale(entry.updated_at.elapsed()) {
            EntryState::Stale
        } else {
            EntryState::Fresh
        }
    }

    /// Cached value regardless of staleness.
    pub fn get(&self, key: &QueryKey) -> Option<V> {
        self.entries().get(key).map(|e| e.value.clone())
    }

    /// Cached value, only while fresh.
    pub fn get_fresh(&self, key: &QueryKey) -> Option<V> {
        let entries = self.entries();
        let entry = entries.get(key)?;
        (self.state_of(entry) == EntryState::Fresh).then(|| entry.value.clone())
    }

    /// Cached value unless it was invalidated; age is ignored.
    pub fn get_valid(&self, key: &QueryKey) -> Option<V> {
        let entries = self.entries();
        let entry = entries.get(key)?;
        (!entry.invalidated).then(|| entry.value.clone())
    }

    pub fn state(&self, key: &QueryKey) -> Option<EntryState> {
        self.entries().get(key).map(|e| self.state_of(e))
    }

    /// Store `value` under `key`; the last write wins.
    pub fn set(&self, key: QueryKey, value: V) {
        self.entries().insert(
            key,
            Entry {
                value,
                updated_at: Instant::now(),
                invalidated: false,
            },
        );
    }

    pub fn remove(&self, key: &QueryKey) -> Option<V> {
        self.entries().remove(key).map(|e| e.value)
    }

    /// Serve the fresh cached value, or run `fetcher` and cache its result.
    ///
    /// A failed fetch leaves any previous entry in place.
    pub async fn fetch<F, Fut, E>(&self, key: &QueryKey, fetcher: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get_fresh(key) {
            tracing::trace!(key = %key, "query cache hit");
            return Ok(value);
        }

        tracing::debug!(key = %key, "query cache miss");
        let value = fetcher().await?;
        self.set(key.clone(), value.clone());
        Ok(value)
    }

    /// Mark every entry under `prefix` stale. Returns how many were marked.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        let mut marked = 0;
        for (key, entry) in self.entries().iter_mut() {
            if key.starts_with(prefix) {
                entry.invalidated = true;
                marked += 1;
            }
        }
        if marked > 0 {
            tracing::debug!(prefix = %prefix, marked, "invalidated queries");
        }
        marked
    }

    /// Evict entries not written for `gc_time`. Returns how many were evicted.
    pub fn sweep(&self, gc_time: Duration) -> usize {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|_, entry| entry.updated_at.elapsed() < gc_time);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn clear(&self) {
        self.entries().clear();
    }
}
