//! Route cache with creation-time TTL
//!
//! Keyed by `(tracer_type, target_id)`. Every entry stores an explicit
//! `created_at` timestamp and expiry is `now - created_at > ttl`; the age
//! check never involves the route's estimated processing duration.

use crate::model::RouteResult;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Entry count above which an insert sweeps out expired entries
const SWEEP_THRESHOLD: usize = 100;

#[derive(Debug, Clone)]
struct CacheEntry {
    result: RouteResult,
    created_at: DateTime<Utc>,
}

/// Time-bounded memo of `(tracer_type, target_id) -> RouteResult`
#[derive(Debug)]
pub struct RouteCache {
    entries: Mutex<HashMap<(String, String), CacheEntry>>,
    ttl: Duration,
}

impl RouteCache {
    /// Create a cache with the given TTL in seconds
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Fetch a fresh entry, evicting it if it has expired
    pub fn get(&self, tracer_type: &str, target_id: &str) -> Option<RouteResult> {
        let key = (tracer_type.to_string(), target_id.to_string());
        let mut entries = self.entries.lock().unwrap();

        match entries.get(&key) {
            Some(entry) if Utc::now() - entry.created_at <= self.ttl => {
                Some(entry.result.clone())
            }
            Some(_) => {
                debug!("Evicting expired cache entry: {} -> {}", tracer_type, target_id);
                entries.remove(&key);
                None
            }
            None => None,
        }
    }

    /// Store a result, stamped now. Sweeps expired entries when the map has
    /// grown past the sweep threshold.
    pub fn insert(&self, result: RouteResult) {
        let key = (result.tracer_type.clone(), result.target_id.clone());
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key,
            CacheEntry {
                result,
                created_at: Utc::now(),
            },
        );

        if entries.len() > SWEEP_THRESHOLD {
            let now = Utc::now();
            let before = entries.len();
            entries.retain(|_, entry| now - entry.created_at <= self.ttl);
            let swept = before - entries.len();
            if swept > 0 {
                debug!("Swept {} expired cache entries", swept);
            }
        }
    }

    /// Drop all entries for one target, regardless of tracer
    pub fn invalidate_target(&self, target_id: &str) {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|(_, cached_target), _| cached_target != target_id);
        let dropped = before - entries.len();
        if dropped > 0 {
            debug!("Invalidated {} cache entries for target {}", dropped, target_id);
        }
    }

    /// Number of stored entries, including any not yet swept
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// True when the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rewind an entry's creation timestamp by `seconds` (for testing TTL
    /// expiry only). Returns false when the entry does not exist.
    ///
    /// WARNING: bypasses normal timestamping and should ONLY be used in
    /// tests to verify expiry behavior.
    #[doc(hidden)]
    pub fn backdate(&self, tracer_type: &str, target_id: &str, seconds: i64) -> bool {
        let key = (tracer_type.to_string(), target_id.to_string());
        let mut entries = self.entries.lock().unwrap();
        match entries.get_mut(&key) {
            Some(entry) => {
                entry.created_at = entry.created_at - Duration::seconds(seconds);
                true
            }
            None => false,
        }
    }
}
