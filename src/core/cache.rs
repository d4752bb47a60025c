//! Read-through caching for externally supplied reference data.
//!
//! Rate cards and surge rules are fetched from external stores with a
//! bounded staleness window (rate data up to 5 minutes, surge rules up to
//! 1 minute by default). The cells own their TTL; the clock is injected so
//! expiry behaviour is unit-testable without sleeping.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// Time source injected into caches instead of ambient `Instant::now()`.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Production clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-cranked clock for deterministic expiry tests.
#[derive(Debug)]
pub struct ManualClock {
    epoch: Instant,
    elapsed: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            elapsed: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut elapsed = self.elapsed.lock().expect("clock lock poisoned");
        *elapsed += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.epoch + *self.elapsed.lock().expect("clock lock poisoned")
    }
}

struct Entry<T> {
    value: T,
    fetched_at: Instant,
}

/// A single cached value with a fixed TTL.
///
/// `get_or_refresh` serves the cached value while fresh, otherwise calls
/// the supplied refresh future. If the refresh fails and a stale value is
/// still held, the stale value is served instead of the error so a flaky
/// source does not take quoting down.
pub struct TtlCell<T> {
    ttl: Duration,
    slot: RwLock<Option<Entry<T>>>,
}

impl<T: Clone + Send + Sync> TtlCell<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    pub async fn get_or_refresh<F, Fut, E>(
        &self,
        clock: &dyn Clock,
        refresh: F,
    ) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let now = clock.now();

        {
            let slot = self.slot.read().await;
            if let Some(entry) = slot.as_ref() {
                if now.duration_since(entry.fetched_at) < self.ttl {
                    return Ok(entry.value.clone());
                }
            }
        }

        match refresh().await {
            Ok(value) => {
                let mut slot = self.slot.write().await;
                *slot = Some(Entry {
                    value: value.clone(),
                    fetched_at: now,
                });
                Ok(value)
            }
            Err(err) => {
                // Stale-if-error: an expired snapshot beats no snapshot.
                let slot = self.slot.read().await;
                match slot.as_ref() {
                    Some(entry) => Ok(entry.value.clone()),
                    None => Err(err),
                }
            }
        }
    }

    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        *slot = None;
    }
}

/// Per-key TTL cache for keyed reference data (one rate card per vehicle
/// class). Same freshness semantics as [`TtlCell`], tracked per key.
pub struct TtlMap<K, V> {
    ttl: Duration,
    map: RwLock<HashMap<K, Entry<V>>>,
}

impl<K: Eq + Hash + Clone + Send + Sync, V: Clone + Send + Sync> TtlMap<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            map: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, clock: &dyn Clock, key: &K) -> Option<V> {
        let now = clock.now();
        let map = self.map.read().await;
        map.get(key).and_then(|entry| {
            if now.duration_since(entry.fetched_at) < self.ttl {
                Some(entry.value.clone())
            } else {
                None
            }
        })
    }

    pub async fn put(&self, clock: &dyn Clock, key: K, value: V) {
        let mut map = self.map.write().await;
        map.insert(
            key,
            Entry {
                value,
                fetched_at: clock.now(),
            },
        );
    }
}
