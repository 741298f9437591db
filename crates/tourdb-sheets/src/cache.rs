//! Bounded-staleness caching of raw sheet rows.
//!
//! Deployments choose between always-fresh reads and a time-boxed window
//! per the site's revalidation settings; the policy never changes what a
//! read returns, only whether it hits the network.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::types::{RawRow, Sheet};

/// How stale a cached read may be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessPolicy {
    /// Every read fetches from the store.
    NoStore,
    /// Rows fetched within the window are reused without a network call.
    MaxAge(Duration),
}

impl FreshnessPolicy {
    /// Maps the configured window in seconds; `0` means always fetch fresh.
    #[must_use]
    pub fn from_max_age_secs(secs: u64) -> Self {
        if secs == 0 {
            Self::NoStore
        } else {
            Self::MaxAge(Duration::from_secs(secs))
        }
    }
}

#[derive(Debug)]
struct CacheEntry {
    fetched_at: Instant,
    rows: Vec<RawRow>,
}

/// Per-sheet row cache guarded by a mutex that is never held across an
/// await. A poisoned lock degrades to a cache miss.
#[derive(Debug)]
pub(crate) struct SheetCache {
    policy: FreshnessPolicy,
    entries: Mutex<HashMap<Sheet, CacheEntry>>,
}

impl SheetCache {
    pub fn new(policy: FreshnessPolicy) -> Self {
        Self {
            policy,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, sheet: Sheet) -> Option<Vec<RawRow>> {
        let FreshnessPolicy::MaxAge(max_age) = self.policy else {
            return None;
        };
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(&sheet)?;
        (entry.fetched_at.elapsed() <= max_age).then(|| entry.rows.clone())
    }

    pub fn store(&self, sheet: Sheet, rows: &[RawRow]) {
        if self.policy == FreshnessPolicy::NoStore {
            return;
        }
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                sheet,
                CacheEntry {
                    fetched_at: Instant::now(),
                    rows: rows.to_vec(),
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_rows() -> Vec<RawRow> {
        vec![json!({ "id": "pkg-1" }).as_object().unwrap().clone()]
    }

    #[test]
    fn zero_seconds_means_no_store() {
        assert_eq!(FreshnessPolicy::from_max_age_secs(0), FreshnessPolicy::NoStore);
        assert_eq!(
            FreshnessPolicy::from_max_age_secs(60),
            FreshnessPolicy::MaxAge(Duration::from_secs(60))
        );
    }

    #[test]
    fn no_store_never_serves_from_cache() {
        let cache = SheetCache::new(FreshnessPolicy::NoStore);
        cache.store(Sheet::Packages, &sample_rows());
        assert!(cache.get(Sheet::Packages).is_none());
    }

    #[test]
    fn max_age_serves_rows_within_the_window() {
        let cache = SheetCache::new(FreshnessPolicy::MaxAge(Duration::from_secs(60)));
        cache.store(Sheet::Packages, &sample_rows());
        let rows = cache.get(Sheet::Packages).expect("entry should be fresh");
        assert_eq!(rows, sample_rows());
    }

    #[test]
    fn entries_are_keyed_per_sheet() {
        let cache = SheetCache::new(FreshnessPolicy::MaxAge(Duration::from_secs(60)));
        cache.store(Sheet::Packages, &sample_rows());
        assert!(cache.get(Sheet::Itinerary).is_none());
    }

    #[test]
    fn expired_entries_miss() {
        let cache = SheetCache::new(FreshnessPolicy::MaxAge(Duration::from_millis(1)));
        cache.store(Sheet::Packages, &sample_rows());
        std::thread::sleep(Duration::from_millis(10));
        assert!(cache.get(Sheet::Packages).is_none());
    }
}
